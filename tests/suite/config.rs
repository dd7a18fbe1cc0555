//! Config file loading and its effect on the app.

use std::fs;
use std::time::Duration;

use skillscout_config::{ConfigError, SkillScoutConfig};
use skillscout_engine::{App, AppOptions};

#[test]
fn config_file_drives_app_options() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\nascii_only = true\nhigh_contrast = true\n\n[timing]\nsearch_delay_ms = 250\n",
    )
    .expect("write config");

    let config = SkillScoutConfig::load_from(&path)
        .expect("readable")
        .expect("present");
    let app = App::new(AppOptions::from_config(Some(&config)));

    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().high_contrast);
    assert!(!app.ui_options().reduced_motion);
    assert_eq!(app.timings().search_delay, Duration::from_millis(250));
    assert_eq!(app.timings().send_delay, Duration::from_millis(2200));
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nascii_only = yes").expect("write config");

    let err = SkillScoutConfig::load_from(&path).expect_err("malformed");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn unknown_sections_are_ignored() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server]\nport = 8080\n").expect("write config");

    let config = SkillScoutConfig::load_from(&path)
        .expect("readable")
        .expect("present");
    assert_eq!(AppOptions::from_config(Some(&config)), AppOptions::default());
}
