//! Skill lookup: normalize raw input and query the catalog.

use skillscout_types::{ResourceRecord, SkillKey};

use crate::ResourceCatalog;

/// Result of a lookup, with the normalized key and whether it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub key: SkillKey,
    pub resources: &'static [ResourceRecord],
    /// `false` when the default list was returned.
    pub matched: bool,
}

/// Resources for `raw` from the built-in catalog.
///
/// Case- and surrounding-whitespace-insensitive; unknown skills get the
/// default list.
#[must_use]
pub fn resolve(raw: &str) -> &'static [ResourceRecord] {
    resolve_in(ResourceCatalog::builtin(), raw)
}

/// Resources for `raw` from an explicit catalog.
#[must_use]
pub fn resolve_in(catalog: &ResourceCatalog, raw: &str) -> &'static [ResourceRecord] {
    catalog.lookup(&SkillKey::normalize(raw))
}

/// Like [`resolve`], but reports the key and whether the default was used.
#[must_use]
pub fn resolve_detailed(raw: &str) -> Lookup {
    let catalog = ResourceCatalog::builtin();
    let key = SkillKey::normalize(raw);
    let (resources, matched) = match catalog.get(&key) {
        Some(records) => (records, true),
        None => (catalog.default_resources(), false),
    };
    tracing::debug!(key = %key, matched, count = resources.len(), "Resolved skill");
    Lookup {
        key,
        resources,
        matched,
    }
}
