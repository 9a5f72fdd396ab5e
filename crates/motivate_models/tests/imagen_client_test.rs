// ImagenClient against a one-shot local HTTP server.

use motivate_error::{ProviderErrorKind, ProviderFailure};
use motivate_interface::{ImageGenerationRequest, ImageProvider};
use motivate_models::ImagenClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const MODEL: &str = "imagen-4.0-fast-generate-001";

/// Serves a single canned response and hands back the raw request it read.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> anyhow::Result<(String, JoinHandle<anyhow::Result<String>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}/v1beta", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await?;
        let request = read_request(&mut stream).await?;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await?;
        stream.shutdown().await?;
        Ok(request)
    });

    Ok((base, handle))
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn client(base: &str) -> anyhow::Result<ImagenClient> {
    let http = reqwest::Client::builder().no_proxy().build()?;
    Ok(ImagenClient::with_api_key("test-key", MODEL)
        .with_api_base(base)
        .with_http_client(http))
}

fn request() -> ImageGenerationRequest {
    ImageGenerationRequest::new("a sunrise over mountains", None, Some("1:1".to_string()))
}

#[tokio::test]
async fn test_predictions_become_data_uri() -> anyhow::Result<()> {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"predictions":[{"bytesBase64Encoded":"iVBORw0KGgo=","mimeType":"image/png"}]}"#,
    )
    .await?;

    let response = client(&base)?.generate_image(&request()).await?;

    assert_eq!(response.url(), Some("data:image/png;base64,iVBORw0KGgo="));

    let sent = server.await??;
    assert!(sent.starts_with(&format!("POST /v1beta/models/{}:predict", MODEL)));
    assert!(sent.to_lowercase().contains("x-goog-api-key: test-key"));
    assert!(sent.contains(r#""sampleCount":1"#));
    assert!(sent.contains(r#""aspectRatio":"1:1""#));
    Ok(())
}

#[tokio::test]
async fn test_empty_predictions_have_no_media() -> anyhow::Result<()> {
    let (base, server) = serve_once("200 OK", "{}").await?;

    let response = client(&base)?.generate_image(&request()).await?;

    assert!(response.media.is_none());
    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_error_status_keeps_code_and_body() -> anyhow::Result<()> {
    let (base, server) = serve_once(
        "503 Service Unavailable",
        r#"{"error":{"message":"The model is overloaded"}}"#,
    )
    .await?;

    let err = client(&base)?
        .generate_image(&request())
        .await
        .expect_err("503 must fail");

    match &err {
        ProviderFailure::Transient(provider) => {
            assert_eq!(provider.kind.status_code(), Some(503));
            assert!(provider.kind.to_string().contains("overloaded"));
        }
        other => panic!("expected a transient failure, got {other}"),
    }
    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_unparseable_body_is_malformed() -> anyhow::Result<()> {
    let (base, server) = serve_once("200 OK", "not json").await?;

    let err = client(&base)?
        .generate_image(&request())
        .await
        .expect_err("non-JSON body must fail");

    assert!(err.is_malformed());
    server.await??;
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}/v1beta", listener.local_addr()?);
    drop(listener);

    let err = client(&base)?
        .generate_image(&request())
        .await
        .expect_err("closed port must fail");

    assert!(matches!(
        err,
        ProviderFailure::Transient(ref provider)
            if matches!(provider.kind, ProviderErrorKind::Transport(_))
    ));
    Ok(())
}
