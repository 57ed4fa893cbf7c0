//! HTTP client for the contributor analytics backend.
//!
//! The view layer never talks to the network directly; it hands this client
//! a handle or a [`SeriesKey`] and gets shaped values back. Retry on server
//! errors lives here and nowhere else.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tokio::time::sleep;

use crate::api::error::{ApiError, Result};
use crate::profile::PrTableRequest;
use crate::types::{CommitActivityPoint, CommitActivitySeries, PullRequestRow, RepoSummary, SeriesKey};

const DEFAULT_BASE_URL: &str = "https://api.contribstats.dev/v1";
const MAX_RETRIES: u32 = 3;

/// Contributor profile payload as served by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileResponse {
    pub github_avatar: Option<String>,
    #[serde(default)]
    pub lang_list: Vec<String>,
    #[serde(default)]
    pub repo_list: Vec<RepoSummary>,
    #[serde(default)]
    pub recent_contribution_count: u32,
    #[serde(default)]
    pub pr_total: u32,
    #[serde(default)]
    pub open_prs: u32,
    pub pr_merged: Option<u32>,
    #[serde(default)]
    pub pr_velocity_days: u32,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("contribstats/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut retries = 0;

        loop {
            let response = self
                .client
                .get(url)
                .header("Accept", "application/json")
                .send()
                .await?;

            match response.status() {
                StatusCode::OK => return Ok(response),
                StatusCode::NOT_FOUND => {
                    return Err(ApiError::NotFound(format!("resource not found: {}", url)));
                }
                status if status.is_server_error() && retries < MAX_RETRIES => {
                    eprintln!("Server error ({}). Retrying in 2 seconds...", status);
                    sleep(Duration::from_secs(2)).await;
                    retries += 1;
                    continue;
                }
                status => {
                    let error_text = response.text().await.unwrap_or_default();
                    return Err(ApiError::Api(format!(
                        "request failed with status {}: {}",
                        status, error_text
                    )));
                }
            }
        }
    }

    /// Fetch the profile payload for one contributor handle.
    pub async fn fetch_profile(&self, handle: &str, topic: &str) -> Result<ProfileResponse> {
        let url = profile_url(&self.base_url, handle, topic);
        let response = self.make_request(&url).await?;
        let profile: ProfileResponse = response.json().await?;
        Ok(profile)
    }

    /// Fetch the commit time-series for a [`SeriesKey`] and shape it for the
    /// line chart.
    pub async fn fetch_commit_series(&self, key: &SeriesKey) -> Result<CommitActivitySeries> {
        let url = commits_url(&self.base_url, key);
        let response = self.make_request(&url).await?;
        let points: Vec<CommitActivityPoint> = response.json().await?;
        Ok(into_series(points))
    }

    /// Fetch one page of the pull-request table.
    pub async fn fetch_pull_requests(&self, request: &PrTableRequest) -> Result<Vec<PullRequestRow>> {
        let url = prs_url(&self.base_url, request);
        let response = self.make_request(&url).await?;
        let rows: Vec<PullRequestRow> = response.json().await?;
        Ok(rows)
    }
}

fn profile_url(base: &str, handle: &str, topic: &str) -> String {
    format!("{}/contributors/{}/profile?topic={}", base, handle, topic)
}

fn commits_url(base: &str, key: &SeriesKey) -> String {
    let mut url = format!(
        "{}/contributors/{}/commits?topic={}",
        base, key.contributor, key.topic
    );
    if let Some(repos) = &key.repositories {
        let ids: Vec<String> = repos.iter().map(|id| id.to_string()).collect();
        url.push_str("&repoIds=");
        url.push_str(&ids.join(","));
    }
    url
}

fn prs_url(base: &str, request: &PrTableRequest) -> String {
    format!(
        "{}/contributors/{}/prs?topic={}&limit={}",
        base, request.contributor, request.topic, request.limit
    )
}

/// Order points chronologically; the backend does not guarantee it.
fn into_series(mut points: Vec<CommitActivityPoint>) -> CommitActivitySeries {
    points.sort_by(|a, b| a.date.cmp(&b.date));
    CommitActivitySeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_url_carries_topic() {
        assert_eq!(
            profile_url("https://api.example/v1", "bdougie", "*"),
            "https://api.example/v1/contributors/bdougie/profile?topic=*"
        );
    }

    #[test]
    fn commits_url_without_repo_filter() {
        let key = SeriesKey::all_topics("bdougie", None);
        assert_eq!(
            commits_url("https://api.example/v1", &key),
            "https://api.example/v1/contributors/bdougie/commits?topic=*"
        );
    }

    #[test]
    fn commits_url_with_repo_filter() {
        let key = SeriesKey::all_topics("bdougie", Some(vec![7, 11]));
        assert_eq!(
            commits_url("https://api.example/v1", &key),
            "https://api.example/v1/contributors/bdougie/commits?topic=*&repoIds=7,11"
        );
    }

    #[test]
    fn prs_url_uses_fixed_limit_and_wildcard() {
        let request = PrTableRequest::for_contributor("bdougie");
        assert_eq!(
            prs_url("https://api.example/v1", &request),
            "https://api.example/v1/contributors/bdougie/prs?topic=*&limit=15"
        );
    }

    #[test]
    fn series_points_are_sorted_by_date() {
        let points = vec![
            CommitActivityPoint {
                date: "2023-01-03".to_string(),
                commits: 2,
            },
            CommitActivityPoint {
                date: "2023-01-01".to_string(),
                commits: 5,
            },
        ];
        let series = into_series(points);
        assert_eq!(series.points[0].date, "2023-01-01");
        assert_eq!(series.points[1].date, "2023-01-03");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("https://api.example/v1/").unwrap();
        assert_eq!(client.base_url, "https://api.example/v1");
    }
}
