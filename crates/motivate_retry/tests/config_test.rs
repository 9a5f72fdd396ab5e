//! Tests for the layered configuration.

use motivate_retry::{MotivateConfig, RetryPolicy};
use std::io::Write;

fn write_config(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_bundled_defaults() -> anyhow::Result<()> {
    let config = MotivateConfig::load()?;

    assert_eq!(*config.quote.retry.max_attempts(), 3);
    assert_eq!(*config.quote.retry.backoff_ms(), 2000);
    assert!(config.image.model.starts_with("imagen"));
    assert!(config.provider.api_base.starts_with("https://"));
    Ok(())
}

#[test]
fn test_from_file_fills_missing_values_with_defaults() -> anyhow::Result<()> {
    let file = write_config(
        r#"
        [quote.retry]
        backoff_ms = 0
        "#,
    )?;

    let config = MotivateConfig::from_file(file.path())?;

    assert_eq!(config.quote.retry, RetryPolicy::new(3, 0));
    assert_eq!(config.quote.model, "gemini-2.5-flash");
    assert_eq!(config.image.model, "imagen-4.0-fast-generate-001");
    assert_eq!(config.quote.temperature, None);
    Ok(())
}

#[test]
fn test_from_file_overrides_models() -> anyhow::Result<()> {
    let file = write_config(
        r#"
        [quote]
        model = "gemini-2.0-flash"
        temperature = 0.5

        [image]
        model = "imagen-3.0-generate-002"
        aspect_ratio = "9:16"
        "#,
    )?;

    let config = MotivateConfig::from_file(file.path())?;

    assert_eq!(config.quote.model, "gemini-2.0-flash");
    assert_eq!(config.quote.temperature, Some(0.5));
    assert_eq!(config.image.aspect_ratio.as_deref(), Some("9:16"));
    Ok(())
}

#[test]
fn test_zero_attempts_is_rejected() -> anyhow::Result<()> {
    let file = write_config(
        r#"
        [quote.retry]
        max_attempts = 0
        "#,
    )?;

    let err = MotivateConfig::from_file(file.path()).unwrap_err();
    assert!(format!("{}", err).contains("max_attempts"));
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(MotivateConfig::from_file("/nonexistent/motivate.toml").is_err());
}
