//! Outbound HTTP client for the fetch relay.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::redirect;

use crate::relay::error::RelayError;
use crate::relay::types::{BodyMode, RelayBody, RelayOptions, UpstreamResponse};

/// Perform one outbound GET to a caller-supplied destination.
///
/// The destination goes to the HTTP client exactly as received. Presence is
/// the only input check; malformed destinations surface as transport errors
/// from the client, message intact.
pub async fn fetch(
    destination: &str,
    options: RelayOptions,
) -> Result<UpstreamResponse, RelayError> {
    if destination.is_empty() {
        return Err(RelayError::EmptyDestination);
    }

    let client = reqwest::Client::builder()
        .redirect(redirect::Policy::limited(options.max_redirects))
        .timeout(options.timeout)
        .build()
        .map_err(RelayError::from_reqwest)?;

    let response = client
        .get(destination)
        .send()
        .await
        .map_err(RelayError::from_reqwest)?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let headers = stringify_headers(response.headers());

    let bytes = response.bytes().await.map_err(RelayError::from_reqwest)?;

    let body = match options.mode {
        BodyMode::Binary => RelayBody::Binary(bytes),
        BodyMode::Text => RelayBody::Text(String::from_utf8_lossy(&bytes).into_owned()),
    };

    tracing::debug!(
        destination = %destination,
        status = status,
        final_url = %final_url,
        "Upstream response received"
    );

    Ok(UpstreamResponse {
        status,
        content_type,
        headers,
        body,
        final_url,
    })
}

/// Collect upstream headers into an ordered string map for relaying.
fn stringify_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn empty_destination_is_rejected() {
        let result = fetch("", RelayOptions::default()).await;
        assert!(matches!(result, Err(RelayError::EmptyDestination)));
    }

    #[tokio::test]
    async fn relays_text_body_and_metadata() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/greeting"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("hello")
                    .insert_header("content-type", "text/plain"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/greeting", server.uri());
        let upstream = fetch(&url, RelayOptions::default()).await.unwrap();

        assert_eq!(upstream.status, 200);
        assert_eq!(upstream.content_type.as_deref(), Some("text/plain"));
        assert_eq!(upstream.final_url, url);
        assert_eq!(upstream.body.into_text(), "hello");
    }

    #[tokio::test]
    async fn non_2xx_status_is_relayed_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let upstream = fetch(&format!("{}/missing", server.uri()), RelayOptions::default())
            .await
            .unwrap();

        assert_eq!(upstream.status, 404);
        assert_eq!(upstream.body.into_text(), "Not Found");
    }

    #[tokio::test]
    async fn binary_mode_keeps_raw_bytes() {
        let server = MockServer::start().await;
        let payload = vec![0x89, 0x50, 0x4e, 0x47];
        Mock::given(method("GET"))
            .and(path("/image.png"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(payload.clone())
                    .insert_header("content-type", "image/png"),
            )
            .mount(&server)
            .await;

        let options = RelayOptions {
            mode: BodyMode::Binary,
            ..RelayOptions::default()
        };
        let upstream = fetch(&format!("{}/image.png", server.uri()), options)
            .await
            .unwrap();

        assert_eq!(upstream.content_type.as_deref(), Some("image/png"));
        assert_eq!(&upstream.body.into_bytes()[..], &payload[..]);
    }

    #[tokio::test]
    async fn follows_redirects_and_reports_final_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("location", "/new"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("landed"))
            .mount(&server)
            .await;

        let upstream = fetch(&format!("{}/old", server.uri()), RelayOptions::default())
            .await
            .unwrap();

        assert_eq!(upstream.status, 200);
        assert_eq!(upstream.final_url, format!("{}/new", server.uri()));
        assert_eq!(upstream.body.into_text(), "landed");
    }

    #[tokio::test]
    async fn redirect_budget_is_enforced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hop1"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("location", "/hop2"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/hop2"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("location", "/hop3"),
            )
            .mount(&server)
            .await;

        let options = RelayOptions {
            max_redirects: 1,
            ..RelayOptions::default()
        };
        let result = fetch(&format!("{}/hop1", server.uri()), options).await;

        assert!(matches!(result, Err(RelayError::TooManyRedirects(_))));
    }

    #[tokio::test]
    async fn timeout_resolves_to_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let options = RelayOptions {
            timeout: Duration::from_millis(200),
            ..RelayOptions::default()
        };
        let result = fetch(&format!("{}/slow", server.uri()), options).await;

        assert!(matches!(result, Err(RelayError::Timeout(_))));
    }

    #[tokio::test]
    async fn refused_connection_surfaces_transport_detail() {
        // Bind and drop a listener so the port is free but unoccupied.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = format!("http://127.0.0.1:{port}/");
        let result = fetch(&url, RelayOptions::default()).await;

        match result {
            Err(RelayError::Connect(detail)) => assert!(!detail.is_empty()),
            other => panic!("expected connect error, got {other:?}"),
        }
    }
}
