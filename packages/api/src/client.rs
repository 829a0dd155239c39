//! # Backend client
//!
//! [`BankApi`] is the seam between the orchestration flows and the network:
//! the three calls the client makes, each returning the parsed
//! [`ApiResponse`] envelope. [`HttpClient`] is the real implementation over
//! `reqwest` (which uses `fetch` on wasm); tests substitute a scripted fake.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`login`](BankApi::login) | `POST user/login` with `{email, password}` |
//! | [`fetch_profile`](BankApi::fetch_profile) | `POST user/profile` with `Authorization: Bearer <token>` |
//! | [`update_profile`](BankApi::update_profile) | `PUT user/profile` with the bearer token and `{firstName, lastName}` |
//!
//! There is no retry, backoff or caching. A non-200 envelope is a normal
//! `Ok` value; only transport and decoding problems are [`ApiError`]s.

use std::future::Future;

use reqwest::header::ACCEPT;
use store::UserData;
use thiserror::Error;
use url::Url;

use crate::config::{ClientConfig, ConfigError, DEFAULT_BACKEND_URL};
use crate::models::{ApiResponse, Credentials, LoginBody, ProfileUpdate};

const LOGIN_PATH: &str = "user/login";
const PROFILE_PATH: &str = "user/profile";

/// Errors talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure, or a reply that was not the expected JSON.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    /// A success envelope without the body the endpoint promises.
    #[error("{0} reply is missing its body")]
    MissingBody(&'static str),
    /// A non-200 reply that is not an envelope (a proxy error page, say).
    #[error("unreadable reply with HTTP status {status}: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// The backend calls used by the session flows.
pub trait BankApi {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<ApiResponse<LoginBody>, ApiError>>;
    fn fetch_profile(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<ApiResponse<UserData>, ApiError>>;
    fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<ApiResponse<serde_json::Value>, ApiError>>;
}

/// `reqwest`-backed [`BankApi`].
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    /// Backend root, always ending in `/`.
    base: String,
}

impl HttpClient {
    /// Client for the configured backend. The URL is validated here.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base: config.backend_url()?.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&self.base)?.join(path)?)
    }
}

impl Default for HttpClient {
    /// Client for [`DEFAULT_BACKEND_URL`].
    fn default() -> Self {
        Self {
            http: reqwest::Client::new(),
            base: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl BankApi for HttpClient {
    async fn login(&self, credentials: &Credentials) -> Result<ApiResponse<LoginBody>, ApiError> {
        let url = self.endpoint(LOGIN_PATH)?;
        tracing::debug!(%url, email = %credentials.email, "sign-in request");

        let reply = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(credentials)
            .send()
            .await?;
        Ok(reply.json().await?)
    }

    async fn fetch_profile(&self, token: &str) -> Result<ApiResponse<UserData>, ApiError> {
        let url = self.endpoint(PROFILE_PATH)?;
        tracing::debug!(%url, "profile request");

        let reply = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .bearer_auth(token)
            .send()
            .await?;
        Ok(reply.json().await?)
    }

    async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let url = self.endpoint(PROFILE_PATH)?;
        tracing::debug!(%url, "profile update request");

        let reply = self
            .http
            .put(url)
            .header(ACCEPT, "application/json")
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;

        // Some deployments answer a successful update without an envelope.
        let status = reply.status().as_u16();
        let text = reply.text().await?;
        match serde_json::from_str(&text) {
            Ok(envelope) => Ok(envelope),
            Err(_) if status == 200 => Ok(ApiResponse::bare(status)),
            Err(source) => Err(ApiError::Decode { status, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Answer exactly one request on a local port with a canned reply.
    /// Returns a client pointed at it.
    fn serve_once(status_line: &'static str, content_type: &'static str, body: &'static str) -> HttpClient {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            // Drain the request so closing the socket does not reset it
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            let header_end = loop {
                let n = stream.read(&mut chunk).unwrap();
                request.extend_from_slice(&chunk[..n]);
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                if n == 0 {
                    return;
                }
            };
            let headers = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while request.len() < header_end + content_length {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            let reply = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).unwrap();
        });
        HttpClient::new(&ClientConfig::new(format!("http://{addr}/api/v1/"))).unwrap()
    }

    #[test]
    fn test_endpoints_join_under_backend_root() {
        let client = HttpClient::new(&ClientConfig::new("https://bank.example.com/api/v1")).unwrap();
        assert_eq!(
            client.endpoint(LOGIN_PATH).unwrap().as_str(),
            "https://bank.example.com/api/v1/user/login"
        );
        assert_eq!(
            client.endpoint(PROFILE_PATH).unwrap().as_str(),
            "https://bank.example.com/api/v1/user/profile"
        );
    }

    #[test]
    fn test_default_client_targets_default_backend() {
        let client = HttpClient::default();
        assert_eq!(client.base_url(), DEFAULT_BACKEND_URL);
        assert_eq!(
            client.endpoint(LOGIN_PATH).unwrap().as_str(),
            "http://localhost:3001/api/v1/user/login"
        );
    }

    #[test]
    fn test_bad_backend_url_fails_construction() {
        assert!(HttpClient::new(&ClientConfig::new("::")).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) on localhost is not listening in test environments.
        let client = HttpClient::new(&ClientConfig::new("http://127.0.0.1:9/")).unwrap();
        let err = client
            .login(&Credentials::new("a@b.com", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_update_error_page_is_decode_error() {
        let client = serve_once("502 Bad Gateway", "text/html", "<html><body>Bad Gateway</body></html>");
        let err = client
            .update_profile("T1", &ProfileUpdate::new("Janet", "Doe"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { status: 502, .. }));
        assert_eq!(crate::FlowError::from(err).to_string(), "Error with server");
    }

    #[tokio::test]
    async fn test_update_ok_without_envelope_is_success() {
        let client = serve_once("200 OK", "text/plain", "OK");
        let reply = client
            .update_profile("T1", &ProfileUpdate::new("Janet", "Doe"))
            .await
            .unwrap();
        assert!(reply.is_success());
        assert!(reply.message.is_none());
    }

    #[tokio::test]
    async fn test_update_refusal_envelope_keeps_message() {
        let client = serve_once(
            "400 Bad Request",
            "application/json",
            r#"{"status":400,"message":"Invalid Fields"}"#,
        );
        let reply = client
            .update_profile("T1", &ProfileUpdate::new("Janet", "Doe"))
            .await
            .unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.failure_message(), "Invalid Fields");
    }
}
