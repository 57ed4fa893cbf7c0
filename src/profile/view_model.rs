//! Contributor profile view-model.
//!
//! Everything here is a pure function of externally supplied inputs: the
//! fetch layer owns the `loading`/`error` flags and the raw fields, this
//! module shapes them into render-ready values and picks which of the three
//! page states to show. Derivations are idempotent and side-effect-free, so
//! recomputing them on every render is safe.

use crate::types::{
    ContributionMetrics, ContributorIdentity, LanguageUsage, RepoContributionSummary, RepoSummary,
    SeriesKey, PR_TABLE_LIMIT, TOPIC_ALL,
};
use crate::utils::{canonical_language_key, percent};

/// The signed-in user, when there is one. Only its presence matters to the
/// profile header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub login: String,
}

/// All inputs of the profile page. Each field is owned by an upstream
/// collaborator; the view-model never mutates them.
#[derive(Debug, Clone, Default)]
pub struct ProfileProps {
    pub github_name: String,
    pub github_avatar: Option<String>,
    pub lang_list: Vec<String>,
    pub repo_list: Vec<RepoSummary>,
    /// Repository-id filter forwarded to the commit-series fetch
    pub repositories: Option<Vec<u64>>,
    pub recent_contribution_count: u32,
    pub pr_total: u32,
    pub open_prs: u32,
    pub pr_merged: Option<u32>,
    /// Average merge time in days; 0 means no data and the display layer
    /// shows a placeholder instead of a relative label
    pub pr_velocity_days: u32,
    pub user: Option<SessionUser>,
    pub loading: bool,
    pub error: bool,
}

/// Parameters of the pull-request table fetch issued from the profile page.
///
/// The page size and topic are fixed: every request asks for the first 15
/// rows across all topics, and the repository filter is deliberately not
/// forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrTableRequest {
    pub contributor: String,
    pub topic: String,
    pub limit: usize,
    pub repositories: Option<Vec<u64>>,
}

impl PrTableRequest {
    pub fn for_contributor(contributor: &str) -> Self {
        Self {
            contributor: contributor.to_string(),
            topic: TOPIC_ALL.to_string(),
            limit: PR_TABLE_LIMIT,
            repositories: None,
        }
    }
}

/// Render-ready composition of all derived and pass-through profile data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileViewModel {
    pub identity: ContributorIdentity,
    pub languages: Vec<LanguageUsage>,
    pub metrics: ContributionMetrics,
    pub repos: RepoContributionSummary,
    /// Key of the commit-activity series this profile renders
    pub series_key: SeriesKey,
    pub pr_table: PrTableRequest,
}

impl ProfileViewModel {
    /// Shape raw props into the render-ready payload.
    pub fn from_props(props: &ProfileProps) -> Self {
        Self {
            identity: ContributorIdentity {
                github_name: props.github_name.clone(),
                avatar_url: props.github_avatar.clone(),
                is_connected: props.user.is_some(),
            },
            languages: language_usage(&props.lang_list),
            metrics: derive_metrics(
                props.pr_total,
                props.pr_merged,
                props.open_prs,
                props.pr_velocity_days,
            ),
            repos: RepoContributionSummary {
                recent_contribution_count: props.recent_contribution_count,
                repo_list: props.repo_list.clone(),
            },
            series_key: SeriesKey::all_topics(&props.github_name, props.repositories.clone()),
            pr_table: PrTableRequest::for_contributor(&props.github_name),
        }
    }
}

/// Which of the three page states to render.
///
/// The upstream fetch exposes two independent booleans, and nothing stops it
/// from asserting both at once; loading takes precedence, and Ready is the
/// joint negation of the two.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error,
    Ready(Box<ProfileViewModel>),
}

impl ViewState {
    pub fn resolve(props: &ProfileProps) -> Self {
        if props.loading {
            ViewState::Loading
        } else if props.error {
            ViewState::Error
        } else {
            ViewState::Ready(Box::new(ProfileViewModel::from_props(props)))
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }
}

/// Normalize a raw language list into chart entries.
///
/// Names are matched case-insensitively against the palette key set and
/// replaced by the canonical spelling when a key matches; unmatched names
/// pass through verbatim so no data is dropped. The percentage is a uniform
/// round(100 / N) share: language presence drives the chart, not volume, so
/// entries from a 3-language list each read 33 and do not sum to 100. That
/// drift is accepted, not corrected.
pub fn language_usage(lang_list: &[String]) -> Vec<LanguageUsage> {
    if lang_list.is_empty() {
        return Vec::new();
    }

    let share = (100.0 / lang_list.len() as f64).round() as u32;
    lang_list
        .iter()
        .map(|raw| LanguageUsage {
            language_name: canonical_language_key(raw)
                .map(str::to_string)
                .unwrap_or_else(|| raw.clone()),
            percentage_used: share,
        })
        .collect()
}

/// Derive the PR insight numbers. A missing merged count contributes 0 to
/// the percentage rather than being an error, and velocity is passed through
/// untouched.
pub fn derive_metrics(
    pr_total: u32,
    pr_merged: Option<u32>,
    open_prs: u32,
    pr_velocity_days: u32,
) -> ContributionMetrics {
    let merged = pr_merged.unwrap_or(0);
    ContributionMetrics {
        pr_total,
        pr_merged: merged,
        open_prs,
        pr_velocity_days,
        merged_percentage: percent(pr_total, merged),
    }
}
