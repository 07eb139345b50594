//! Tests for the static landing page document and its config.

use barbot_display::pages::home_markup;
use barbot_display::{Cocktail, HomeState};
use chrono::{TimeZone, Utc};
use render_page::{
    load_config, parse_config, render_document, resolve_config_path, write_document, PageConfig,
    CONFIG_ENV_VAR,
};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = load_config(None).unwrap();
    assert_eq!(config, PageConfig::default());
    assert_eq!(config.title, "BarBot");
    assert_eq!(config.lang, "en");
    assert_eq!(config.stylesheet, None);
    assert_eq!(config.output, PathBuf::from("dist/index.html"));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = parse_config(
        r#"
        stylesheet = "HomePage.css"
        output = "public/index.html"
        "#,
    )
    .unwrap();

    assert_eq!(config.title, "BarBot");
    assert_eq!(config.stylesheet.as_deref(), Some("HomePage.css"));
    assert_eq!(config.output, PathBuf::from("public/index.html"));
}

#[test]
fn test_unknown_config_key_rejected() {
    assert!(parse_config("colour = \"blue\"").is_err());
}

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.toml");
    fs::write(&path, "title = \"BarBot Kiosk\"\nlang = \"nl\"\n").unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.title, "BarBot Kiosk");
    assert_eq!(config.lang, "nl");
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

// Only test that touches the config environment variable, so no other test races it.
#[test]
fn test_config_path_resolution() {
    std::env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(resolve_config_path(None), None);

    std::env::set_var(CONFIG_ENV_VAR, "from-env.toml");
    assert_eq!(
        resolve_config_path(None),
        Some(PathBuf::from("from-env.toml"))
    );
    assert_eq!(
        resolve_config_path(Some(PathBuf::from("from-cli.toml"))),
        Some(PathBuf::from("from-cli.toml"))
    );

    std::env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(
        resolve_config_path(Some(PathBuf::from("from-cli.toml"))),
        Some(PathBuf::from("from-cli.toml"))
    );
}

#[test]
fn test_document_contains_empty_notice() {
    let config = PageConfig::default();
    let html = render_document(&config, &home_markup(&HomeState::new()), None);

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>BarBot</title>"));
    assert!(html.contains("<h1 class=\"HeaderText\">BarBot</h1>"));
    assert!(html.contains("No cocktails are available right now."));
    assert!(html.contains("Please check back later."));
    assert!(!html.contains("stylesheet"));
    assert!(!html.contains("name=\"generated\""));
}

#[test]
fn test_document_for_populated_state_has_no_notice() {
    let state = HomeState::with_cocktails(vec![Cocktail::new("vodka shot")]);
    let html = render_document(&PageConfig::default(), &home_markup(&state), None);

    assert!(html.contains("BarBot</h1>"));
    assert!(!html.contains("NotAvailable"));
}

#[test]
fn test_document_head_options() {
    let config = PageConfig {
        title: "Bar & Bot".to_string(),
        stylesheet: Some("HomePage.css".to_string()),
        ..PageConfig::default()
    };
    let generated_at = Utc.with_ymd_and_hms(2026, 10, 19, 12, 30, 0).unwrap();

    let html = render_document(&config, &home_markup(&HomeState::new()), Some(generated_at));

    assert!(html.contains("<title>Bar &amp; Bot</title>"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"HomePage.css\">"));
    assert!(html.contains("<meta name=\"generated\" content=\"2026-10-19T12:30:00Z\">"));
}

#[test]
fn test_write_document_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dist").join("kiosk").join("index.html");
    let html = render_document(&PageConfig::default(), &home_markup(&HomeState::new()), None);

    write_document(&path, &html).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), html);
}
