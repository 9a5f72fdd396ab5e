// ImageGenerator behaviour against scripted providers.

mod test_utils;

use motivate_core::{ImageRequest, ImageResult};
use motivate_error::{GenerationErrorKind, ProviderErrorKind};
use motivate_flows::{ImageGenerator, NO_IMAGE_URL, image_prompt};
use motivate_interface::{ImageResponse, ProviderMedia};
use test_utils::{MockImageProvider, unavailable};

#[tokio::test]
async fn test_media_url_becomes_image_url() -> anyhow::Result<()> {
    let generator = ImageGenerator::new(MockImageProvider::new_success(
        "data:image/png;base64,AAAA",
    ));

    let result = generator
        .generate(&ImageRequest::new("Discipline is the bridge."))
        .await?;

    assert_eq!(result, ImageResult::new("data:image/png;base64,AAAA"));
    assert_eq!(
        serde_json::to_value(&result)?,
        serde_json::json!({"imageUrl": "data:image/png;base64,AAAA"})
    );
    assert_eq!(generator.provider().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_request_carries_prompt_and_overrides() -> anyhow::Result<()> {
    let generator = ImageGenerator::new(MockImageProvider::new_success("data:image/png;base64,AAAA"))
        .with_model("imagen-3.0-generate-002")
        .with_aspect_ratio("9:16");
    let request = ImageRequest::new("Discipline is the bridge.");

    generator.generate(&request).await?;

    let sent = generator.provider().requests();
    assert_eq!(sent[0].prompt(), &image_prompt(&request));
    assert_eq!(sent[0].model().as_deref(), Some("imagen-3.0-generate-002"));
    assert_eq!(sent[0].aspect_ratio().as_deref(), Some("9:16"));
    Ok(())
}

#[tokio::test]
async fn test_failure_is_not_retried() {
    let generator = ImageGenerator::new(MockImageProvider::new_error(unavailable()));

    let err = generator
        .generate(&ImageRequest::new("Keep going."))
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), GenerationErrorKind::Image);
    assert_eq!(err.attempts(), 1);
    assert!(!err.cause().is_malformed());
    assert_eq!(generator.provider().call_count(), 1);
}

#[tokio::test]
async fn test_missing_media_reports_no_valid_url() {
    let generator = ImageGenerator::new(MockImageProvider::new_response(ImageResponse {
        media: None,
    }));

    let err = generator
        .generate(&ImageRequest::new("Keep going."))
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), GenerationErrorKind::Image);
    assert!(err.cause().is_malformed());
    assert!(err.to_string().contains(NO_IMAGE_URL));
    assert_eq!(generator.provider().call_count(), 1);
}

#[tokio::test]
async fn test_blank_media_url_reports_no_valid_url() {
    let generator = ImageGenerator::new(MockImageProvider::new_response(ImageResponse {
        media: Some(ProviderMedia {
            url: "   ".to_string(),
            content_type: None,
        }),
    }));

    let err = generator
        .generate(&ImageRequest::new("Keep going."))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("valid URL"));
}

#[tokio::test]
async fn test_empty_quote_is_still_sent() -> anyhow::Result<()> {
    let generator = ImageGenerator::new(MockImageProvider::new_success("data:image/png;base64,AAAA"));

    generator.generate(&ImageRequest::new("")).await?;

    assert!(generator.provider().requests()[0].prompt().contains("Quote: \"\""));
    Ok(())
}

#[tokio::test]
async fn test_auth_failure_keeps_status() {
    let generator = ImageGenerator::new(MockImageProvider::new_error(
        ProviderErrorKind::HttpStatus {
            status_code: 403,
            message: "API key not valid".to_string(),
        },
    ));

    let err = generator
        .generate(&ImageRequest::new("Keep going."))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("HTTP 403"));
}
