use motivate_core::{ImageResult, QuoteRequest, QuoteResult, VisualizationEntry};

#[test]
fn quote_result_reads_provider_field_names() -> anyhow::Result<()> {
    let result: QuoteResult = serde_json::from_str(
        r#"{
            "quote": "Discipline is the bridge.",
            "emojis": ["🔥"],
            "mainWords": ["discipline", "bridge"]
        }"#,
    )?;

    assert_eq!(result.quote, "Discipline is the bridge.");
    assert_eq!(result.emojis, vec!["🔥"]);
    assert_eq!(result.main_words, vec!["discipline", "bridge"]);
    Ok(())
}

#[test]
fn quote_result_requires_quote_and_emojis() {
    assert!(serde_json::from_str::<QuoteResult>(r#"{"emojis": ["🔥"]}"#).is_err());
    assert!(serde_json::from_str::<QuoteResult>(r#"{"quote": "Go."}"#).is_err());
}

#[test]
fn quote_result_serializes_main_words_in_camel_case() -> anyhow::Result<()> {
    let result = QuoteResult::builder()
        .quote("Keep going.")
        .emojis(vec!["🚀".to_string()])
        .main_words(vec!["going".to_string()])
        .build()?;

    let json = serde_json::to_value(&result)?;
    assert_eq!(json["mainWords"][0], "going");
    assert!(json.get("main_words").is_none());
    Ok(())
}

#[test]
fn missing_main_words_ignores_case() -> anyhow::Result<()> {
    let result = QuoteResult::builder()
        .quote("Discipline is the Bridge.")
        .main_words(vec![
            "discipline".to_string(),
            "bridge".to_string(),
            "summit".to_string(),
        ])
        .build()?;

    assert_eq!(result.missing_main_words(), vec!["summit"]);
    Ok(())
}

#[test]
fn quote_request_fields_are_optional() -> anyhow::Result<()> {
    let request: QuoteRequest = serde_json::from_str("{}")?;
    assert_eq!(request, QuoteRequest::default());

    let request = QuoteRequest::builder().theme("focus").build()?;
    assert_eq!(request.theme.as_deref(), Some("focus"));
    assert_eq!(request.style, None);
    Ok(())
}

#[test]
fn visualization_entry_copies_image_url() {
    let image = ImageResult::new("data:image/png;base64,AAAA");
    let entry = VisualizationEntry::new("Discipline is the bridge.", &image);

    assert_eq!(entry.quote(), "Discipline is the bridge.");
    assert_eq!(entry.image_url(), image.image_url());
}
