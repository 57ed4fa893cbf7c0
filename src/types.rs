//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing contributor profile data, derived display values, and the
//! commit-activity series cache keys.

use serde::{Deserialize, Serialize};

/// Sentinel topic meaning "match all topics" when no filter is active.
pub const TOPIC_ALL: &str = "*";

/// Number of repositories shown by the contributed-repo card.
pub const REPO_PREVIEW_LIMIT: usize = 7;

/// Page size used for every pull-request table request.
pub const PR_TABLE_LIMIT: usize = 15;

/// A key identifying one commit-activity series fetch.
///
/// This struct is used as a cache key for fetched series, so switching back
/// to a previously viewed contributor does not refetch.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct SeriesKey {
    /// The contributor handle the series belongs to
    pub contributor: String,
    /// Topic filter, or [`TOPIC_ALL`] for all topics
    pub topic: String,
    /// Optional repository-id filter
    pub repositories: Option<Vec<u64>>,
}

impl SeriesKey {
    /// Key for a contributor across all topics, optionally narrowed to
    /// specific repositories.
    pub fn all_topics(contributor: &str, repositories: Option<Vec<u64>>) -> Self {
        Self {
            contributor: contributor.to_string(),
            topic: TOPIC_ALL.to_string(),
            repositories,
        }
    }
}

/// Who the profile page is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorIdentity {
    /// Unique source-control handle
    pub github_name: String,
    /// Avatar image URL, if known
    pub avatar_url: Option<String>,
    /// Whether the viewing session belongs to a signed-in user
    pub is_connected: bool,
}

/// One language entry for the horizontal bar chart.
///
/// `percentage_used` is a uniform share of the list, not a usage-weighted
/// value; see [`crate::profile::language_usage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageUsage {
    /// Canonical palette key when one matches, otherwise the raw input name
    pub language_name: String,
    /// round(100 / N) for a list of N languages
    pub percentage_used: u32,
}

/// Derived pull-request counters for the insight cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionMetrics {
    /// Total PRs considered for the merged percentage
    pub pr_total: u32,
    /// PRs that were merged
    pub pr_merged: u32,
    /// Currently open PRs
    pub open_prs: u32,
    /// Average days from open to merge; 0 means no data
    pub pr_velocity_days: u32,
    /// percent(pr_total, pr_merged), always defined
    pub merged_percentage: u32,
}

/// A repository as shown in the contributed-repo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub owner: String,
}

impl RepoSummary {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// The contributed-repo card data: a recent-contribution counter plus an
/// ordered repo list, capped at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoContributionSummary {
    pub recent_contribution_count: u32,
    pub repo_list: Vec<RepoSummary>,
}

impl RepoContributionSummary {
    /// The slice actually rendered: at most [`REPO_PREVIEW_LIMIT`] entries,
    /// passed through unchanged when shorter.
    pub fn preview(&self) -> &[RepoSummary] {
        let cap = self.repo_list.len().min(REPO_PREVIEW_LIMIT);
        &self.repo_list[..cap]
    }
}

/// A single day of commit activity.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitActivityPoint {
    /// Day in YYYY-MM-DD form
    pub date: String,
    /// Commits counted on that day
    pub commits: usize,
}

/// Chart-ready commit time-series for one [`SeriesKey`].
///
/// Opaque to the view-model; only the plotting layer looks inside.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct CommitActivitySeries {
    pub points: Vec<CommitActivityPoint>,
}

impl CommitActivitySeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One row of the pull-request table, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRow {
    pub pr_name: String,
    pub pr_status: String,
    pub pr_issued_time: String,
    pub pr_merged_time: Option<String>,
    pub files_changed: u32,
    pub lines_changed: u32,
    pub repo_name: String,
    pub repo_owner: String,
    pub pr_number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repos(n: usize) -> Vec<RepoSummary> {
        (0..n)
            .map(|i| RepoSummary {
                name: format!("repo-{i}"),
                owner: "open-sauced".to_string(),
            })
            .collect()
    }

    #[test]
    fn preview_caps_long_lists_at_seven() {
        let summary = RepoContributionSummary {
            recent_contribution_count: 12,
            repo_list: repos(12),
        };
        assert_eq!(summary.preview().len(), REPO_PREVIEW_LIMIT);
        assert_eq!(summary.preview()[0].name, "repo-0");
        assert_eq!(summary.preview()[6].name, "repo-6");
    }

    #[test]
    fn preview_passes_short_lists_through() {
        let summary = RepoContributionSummary {
            recent_contribution_count: 3,
            repo_list: repos(3),
        };
        assert_eq!(summary.preview(), summary.repo_list.as_slice());
    }

    #[test]
    fn preview_of_empty_list_is_empty() {
        let summary = RepoContributionSummary::default();
        assert!(summary.preview().is_empty());
    }

    #[test]
    fn series_keys_compare_by_all_fields() {
        let key1 = SeriesKey::all_topics("bdougie", None);
        let key2 = SeriesKey::all_topics("bdougie", None);
        let key3 = SeriesKey::all_topics("bdougie", Some(vec![42]));

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
    }
}
