//! Public lookup and validation behavior.

use skillscout_core::{
    ResourceCatalog, resolve, resolve_detailed, validate_contact, validate_email,
    validate_submission,
};
use skillscout_types::{FieldError, MAX_MESSAGE_CHARS, SkillKey};

#[test]
fn known_skills_resolve_to_their_lists() {
    assert_eq!(resolve("data science").len(), 4);
    assert_eq!(resolve("machine learning").len(), 3);
    assert_eq!(resolve("web development").len(), 3);
}

#[test]
fn lookup_ignores_case_and_surrounding_whitespace() {
    assert_eq!(resolve("  Machine LEARNING\t"), resolve("machine learning"));
}

#[test]
fn inner_whitespace_is_significant() {
    let lookup = resolve_detailed("machine  learning");
    assert!(!lookup.matched);
    assert_eq!(lookup.resources, ResourceCatalog::builtin().default_resources());
}

#[test]
fn every_known_key_is_normalized() {
    for key in ResourceCatalog::builtin().keys() {
        assert_eq!(SkillKey::normalize(key).as_str(), key);
    }
}

#[test]
fn all_urls_are_https() {
    let catalog = ResourceCatalog::builtin();
    let lists = catalog
        .keys()
        .map(resolve)
        .chain(std::iter::once(catalog.default_resources()));
    for list in lists {
        for record in list {
            assert!(record.url.starts_with("https://"), "{}", record.url);
        }
    }
}

#[test]
fn email_rules() {
    assert!(validate_email("a@b.co"));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("a b@c.d"));
    assert!(!validate_email(""));
}

#[test]
fn contact_validation_reports_each_field() {
    let result = validate_contact("", "");
    assert_eq!(result.email_error, Some(FieldError::EmailRequired));
    assert_eq!(result.message_error, Some(FieldError::MessageEmpty));

    let long = "m".repeat(MAX_MESSAGE_CHARS + 1);
    let result = validate_contact("x@y.z", &long);
    assert_eq!(result.email_error, None);
    assert_eq!(
        result.message_error.map(|err| err.to_string()),
        Some("Message must be less than 1000 characters.".to_string())
    );
}

#[test]
fn submission_is_trimmed() {
    let submission = validate_submission(" x@y.z ", "  hi  ").expect("valid");
    assert_eq!(submission.email(), "x@y.z");
    assert_eq!(submission.message(), "hi");
}
