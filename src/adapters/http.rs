use crate::domain::ports::{ProbeResponse, RedirectProbe};
use crate::utils::error::{CheckerError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Client, Url};
use std::time::Duration;

/// Issues plain GETs with redirect-following turned off, so the first
/// response is what gets classified.
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder().redirect(Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent.to_string());
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl RedirectProbe for ReqwestProbe {
    async fn probe(&self, url: &str) -> Result<ProbeResponse> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CheckerError::TransportError {
                url: url.to_string(),
                source,
            })?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .map(|value| resolve_location(response.url(), value));

        tracing::debug!("{} -> {} (location: {:?})", url, status, location);
        Ok(ProbeResponse { status, location })
    }
}

/// Joins `Location` onto the request URL. Non-UTF-8 bytes are replaced rather
/// than dropped, and an unjoinable value is returned as received.
fn resolve_location(base: &Url, value: &HeaderValue) -> String {
    let raw = String::from_utf8_lossy(value.as_bytes());
    match base.join(&raw) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            tracing::warn!("Could not resolve Location '{}' for {}: {}", raw, base, e);
            raw.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_resolve_location_keeps_non_utf8_target() {
        let base = Url::parse("http://old.example.com/a.html").unwrap();
        let value = HeaderValue::from_bytes(b"/caf\xe9.html").unwrap();

        let resolved = resolve_location(&base, &value);

        assert!(!resolved.is_empty());
        assert_eq!(resolved, "http://old.example.com/caf%EF%BF%BD.html");
    }

    #[test]
    fn test_resolve_location_relative_and_absolute() {
        let base = Url::parse("http://old.example.com/dir/a.html").unwrap();

        assert_eq!(
            resolve_location(&base, &HeaderValue::from_static("b.html")),
            "http://old.example.com/dir/b.html"
        );
        assert_eq!(
            resolve_location(&base, &HeaderValue::from_static("https://new.example.com/")),
            "https://new.example.com/"
        );
    }

    #[tokio::test]
    async fn test_probe_does_not_follow_redirects() {
        let server = MockServer::start();
        let redirect_mock = server.mock(|when, then| {
            when.method(GET).path("/old");
            then.status(301).header("Location", "/new");
        });
        let target_mock = server.mock(|when, then| {
            when.method(GET).path("/new");
            then.status(200);
        });

        let probe = ReqwestProbe::new(None, None).unwrap();
        let response = probe.probe(&server.url("/old")).await.unwrap();

        redirect_mock.assert();
        target_mock.assert_hits(0);
        assert_eq!(response.status, 301);
        assert_eq!(response.location, Some(server.url("/new")));
    }

    #[tokio::test]
    async fn test_probe_keeps_absolute_location() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/old");
            then.status(301)
                .header("Location", "https://new.example.com/landing?x=1");
        });

        let probe = ReqwestProbe::new(None, None).unwrap();
        let response = probe.probe(&server.url("/old")).await.unwrap();

        assert_eq!(
            response.location.as_deref(),
            Some("https://new.example.com/landing?x=1")
        );
    }

    #[tokio::test]
    async fn test_probe_without_location() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let probe = ReqwestProbe::new(None, None).unwrap();
        let response = probe.probe(&server.url("/missing")).await.unwrap();

        assert_eq!(response.status, 404);
        assert!(response.location.is_none());
    }

    #[tokio::test]
    async fn test_probe_sends_user_agent() {
        let server = MockServer::start();
        let ua_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/page")
                .header("user-agent", "redirect-checker-test");
            then.status(200);
        });

        let probe = ReqwestProbe::new(None, Some("redirect-checker-test")).unwrap();
        let response = probe.probe(&server.url("/page")).await.unwrap();

        ua_mock.assert();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let probe = ReqwestProbe::new(Some(Duration::from_secs(2)), None).unwrap();
        let err = probe.probe("http://127.0.0.1:1/").await.unwrap_err();

        assert!(matches!(err, CheckerError::TransportError { .. }));
    }

    #[tokio::test]
    async fn test_relative_url_is_transport_error() {
        let probe = ReqwestProbe::new(None, None).unwrap();
        let err = probe.probe("a.html").await.unwrap_err();

        assert!(matches!(err, CheckerError::TransportError { ref url, .. } if url == "a.html"));
    }
}
