//! Integration test modules.

mod catalog;
mod config;
mod contact_flow;
mod search_flow;
