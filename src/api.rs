//! SpaceX API client for fetching launch records.
//!
//! This module provides:
//!
//! - `SpaceXClient`: HTTP client wrapper around a configurable base URL
//! - `Launch`, `Rocket` and friends: Deserialized API responses
//! - `FetchError`: the single failure type surfaced to the UI
//!
//! The launch and rocket collections are fetched in parallel and joined by
//! rocket id, so every `Launch` carries a resolved `rocket_name` when the
//! rocket is known.

use chrono::{DateTime, Datelike, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Public SpaceX API base URL
pub const DEFAULT_API_BASE: &str = "https://api.spacexdata.com/v4";

/// User agent for API requests
const USER_AGENT: &str = concat!("Mission-Explorer/", env!("CARGO_PKG_VERSION"));

/// Errors raised while loading the launch catalogue.
///
/// Non-success responses share one generic message; the resource and status
/// code are kept for the log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch data from SpaceX API")]
    Status {
        resource: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response from SpaceX API: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single launch record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub date_utc: DateTime<Utc>,
    /// `None` when the outcome is unknown (upcoming or unreported)
    pub success: Option<bool>,
    /// Rocket id
    pub rocket: String,
    /// Resolved from the rockets collection after both fetches complete
    #[serde(default)]
    pub rocket_name: Option<String>,
    #[serde(default)]
    pub links: LaunchLinks,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchLinks {
    #[serde(default)]
    pub patch: PatchLinks,
    #[serde(default)]
    pub webcast: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchLinks {
    #[serde(default)]
    pub small: Option<String>,
}

/// A rocket, used only to resolve launch rocket names
#[derive(Debug, Clone, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: String,
}

/// Launch outcome as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    Success,
    Failure,
    Unknown,
}

impl LaunchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LaunchStatus::Success => "Success",
            LaunchStatus::Failure => "Failure",
            LaunchStatus::Unknown => "Unknown",
        }
    }
}

impl Launch {
    /// Calendar year of the launch in UTC
    pub fn year(&self) -> i32 {
        self.date_utc.year()
    }

    pub fn status(&self) -> LaunchStatus {
        match self.success {
            Some(true) => LaunchStatus::Success,
            Some(false) => LaunchStatus::Failure,
            None => LaunchStatus::Unknown,
        }
    }

    /// Rocket name with the display fallback applied
    pub fn rocket_display(&self) -> &str {
        self.rocket_name.as_deref().unwrap_or("Unknown")
    }

    pub fn patch_url(&self) -> Option<&str> {
        self.links.patch.small.as_deref()
    }
}

/// Annotate every launch with the name of its rocket.
///
/// Launches whose rocket id is not in `rockets` keep `rocket_name = None`.
pub fn attach_rocket_names(launches: Vec<Launch>, rockets: &[Rocket]) -> Vec<Launch> {
    let names: HashMap<&str, &str> = rockets
        .iter()
        .map(|r| (r.id.as_str(), r.name.as_str()))
        .collect();

    launches
        .into_iter()
        .map(|mut launch| {
            launch.rocket_name = names.get(launch.rocket.as_str()).map(|n| n.to_string());
            launch
        })
        .collect()
}

/// SpaceX API client
#[derive(Clone)]
pub struct SpaceXClient {
    client: reqwest::Client,
    base_url: String,
}

impl SpaceXClient {
    /// Create a new client rooted at `base_url`
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/{resource}` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, resource: &'static str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("SpaceX API returned {} for {}", status, url);
            return Err(FetchError::Status { resource, status });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch launches and rockets in parallel and join them.
    ///
    /// Either request failing fails the whole load; nothing partial is
    /// returned.
    pub async fn fetch_launches(&self) -> Result<Vec<Launch>, FetchError> {
        let start = std::time::Instant::now();

        let (launches, rockets) = futures::future::try_join(
            self.get_json::<Vec<Launch>>("launches"),
            self.get_json::<Vec<Rocket>>("rockets"),
        )
        .await?;

        let launches = attach_rocket_names(launches, &rockets);
        tracing::info!(
            "Fetched {} launches and {} rockets in {:.1}s",
            launches.len(),
            rockets.len(),
            start.elapsed().as_secs_f32()
        );

        Ok(launches)
    }

    /// Download raw bytes (used for mission patch images)
    pub async fn fetch_bytes(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Image download failed: {} ({})", response.status(), url);
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    pub(crate) fn launch(id: &str, name: &str, date: &str, success: Option<bool>) -> Launch {
        Launch {
            id: id.to_string(),
            name: name.to_string(),
            date_utc: date.parse().unwrap(),
            success,
            rocket: "rocket1".to_string(),
            rocket_name: None,
            links: LaunchLinks::default(),
            details: None,
        }
    }

    const LAUNCHES_JSON: &str = r#"[
        {
            "id": "1",
            "name": "Mission Alpha",
            "date_utc": "2020-01-01T00:00:00.000Z",
            "success": true,
            "rocket": "rocket1",
            "links": {
                "patch": { "small": "https://images.example/alpha.png", "large": null },
                "webcast": "https://youtu.be/alpha",
                "wikipedia": null
            },
            "details": "Details of Mission Alpha",
            "flight_number": 1
        },
        {
            "id": "2",
            "name": "Mission Beta",
            "date_utc": "2021-01-01T00:00:00.000Z",
            "success": null,
            "rocket": "rocket-gone",
            "links": { "patch": { "small": null }, "webcast": null, "wikipedia": null },
            "details": null
        }
    ]"#;

    const ROCKETS_JSON: &str = r#"[{ "id": "rocket1", "name": "Falcon 9", "active": true }]"#;

    /// Serve canned responses keyed by request path until the test ends.
    async fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        let n = socket.read(&mut buf).await.unwrap();
                        if n == 0 {
                            return;
                        }
                        request.extend_from_slice(&buf[..n]);
                    }
                    let request = String::from_utf8_lossy(&request);
                    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                    let (status, body) = routes
                        .iter()
                        .find(|(route, _, _)| path.ends_with(route))
                        .map(|(_, status, body)| (*status, *body))
                        .unwrap_or((404, "[]"));

                    let response = format!(
                        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    socket.write_all(response.as_bytes()).await.unwrap();
                    socket.shutdown().await.ok();
                });
            }
        });

        format!("http://{}/v4", addr)
    }

    #[test]
    fn test_attach_rocket_names() {
        let mut known = launch("1", "A", "2020-01-01T00:00:00Z", Some(true));
        known.rocket = "r1".to_string();
        let mut unknown = launch("2", "B", "2020-01-01T00:00:00Z", Some(true));
        unknown.rocket = "r9".to_string();

        let rockets = vec![Rocket { id: "r1".to_string(), name: "Falcon 1".to_string() }];
        let joined = attach_rocket_names(vec![known, unknown], &rockets);

        assert_eq!(joined[0].rocket_name.as_deref(), Some("Falcon 1"));
        assert_eq!(joined[1].rocket_name, None);
        assert_eq!(joined[1].rocket_display(), "Unknown");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(launch("1", "A", "2020-01-01T00:00:00Z", Some(true)).status().label(), "Success");
        assert_eq!(launch("1", "A", "2020-01-01T00:00:00Z", Some(false)).status().label(), "Failure");
        assert_eq!(launch("1", "A", "2020-01-01T00:00:00Z", None).status().label(), "Unknown");
    }

    #[test]
    fn test_year_is_utc() {
        let launch = launch("1", "A", "2019-12-31T23:30:00Z", None);
        assert_eq!(launch.year(), 2019);
    }

    #[tokio::test]
    async fn test_fetch_launches_joins_rockets() {
        let base = serve(vec![
            ("/launches", 200, LAUNCHES_JSON),
            ("/rockets", 200, ROCKETS_JSON),
        ])
        .await;

        let client = SpaceXClient::new(&base).unwrap();
        let launches = client.fetch_launches().await.unwrap();

        assert_eq!(launches.len(), 2);
        assert_eq!(launches[0].name, "Mission Alpha");
        assert_eq!(launches[0].rocket_name.as_deref(), Some("Falcon 9"));
        assert_eq!(launches[0].patch_url(), Some("https://images.example/alpha.png"));
        assert_eq!(launches[0].links.webcast.as_deref(), Some("https://youtu.be/alpha"));
        assert_eq!(launches[1].success, None);
        assert_eq!(launches[1].rocket_name, None);
        assert_eq!(launches[1].details, None);
    }

    #[tokio::test]
    async fn test_fetch_fails_when_rockets_fail() {
        let base = serve(vec![
            ("/launches", 200, LAUNCHES_JSON),
            ("/rockets", 500, "{}"),
        ])
        .await;

        let client = SpaceXClient::new(&base).unwrap();
        let err = client.fetch_launches().await.unwrap_err();

        assert!(matches!(err, FetchError::Status { resource: "rockets", .. }));
        assert_eq!(err.to_string(), "Failed to fetch data from SpaceX API");
    }

    #[tokio::test]
    async fn test_fetch_rejects_malformed_body() {
        let base = serve(vec![
            ("/launches", 200, "{\"not\": \"an array\"}"),
            ("/rockets", 200, ROCKETS_JSON),
        ])
        .await;

        let client = SpaceXClient::new(&base).unwrap();
        let err = client.fetch_launches().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = SpaceXClient::new("https://api.example/v4/").unwrap();
        assert_eq!(client.base_url(), "https://api.example/v4");
    }
}
