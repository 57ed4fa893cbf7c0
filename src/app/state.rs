use std::sync::{Arc, Mutex};

use eframe::App as EApp;
use egui::TextureHandle;

use crate::api::{ProfileResponse, SeriesCache};
use crate::profile::{ProfileProps, SessionUser, ViewState};
use crate::types::{CommitActivitySeries, PullRequestRow, RepoSummary, SeriesKey, TOPIC_ALL};

/// Main application state
pub struct App {
    /// Handle typed into the search box
    pub handle_input: String,
    /// Handle of the currently loaded profile
    pub github_name: String,
    pub topic: String,
    /// Optional repository-id filter applied to the commit-series fetch
    pub repositories: Option<Vec<u64>>,
    pub github_avatar: Option<String>,
    pub lang_list: Vec<String>,
    pub repo_list: Vec<RepoSummary>,
    pub recent_contribution_count: u32,
    pub pr_total: u32,
    pub open_prs: u32,
    pub pr_merged: Option<u32>,
    pub pr_velocity_days: u32,
    pub session: Option<SessionUser>,
    /// Owned by the profile fetch; the view-model only reads them
    pub loading: bool,
    pub error: bool,
    /// Patched in by the decoupled commit-series fetch
    pub commit_series: Option<CommitActivitySeries>,
    /// Set when the series fetch for the current profile has been issued;
    /// a failure leaves it set so the chart stays empty instead of refetching
    pub series_requested: bool,
    pub series_loading: bool,
    pub series_cache: SeriesCache,
    pub pr_rows: Vec<PullRequestRow>,
    pub pr_rows_requested: bool,
    pub plot_path: String,
    pub plot_bytes: Option<Vec<u8>>,
    pub plot_texture: Option<TextureHandle>,
    pub update_needed: bool,
}

impl App {
    /// Replace the displayed profile with a freshly fetched one.
    ///
    /// Series, table rows, and the rendered plot belong to the previous
    /// profile and are dropped here.
    pub fn update_with_profile(&mut self, handle: &str, profile: ProfileResponse) {
        self.github_name = handle.to_string();
        self.github_avatar = profile.github_avatar;
        self.lang_list = profile.lang_list;
        self.repo_list = profile.repo_list;
        self.recent_contribution_count = profile.recent_contribution_count;
        self.pr_total = profile.pr_total;
        self.open_prs = profile.open_prs;
        self.pr_merged = profile.pr_merged;
        self.pr_velocity_days = profile.pr_velocity_days;

        self.commit_series = None;
        self.series_requested = false;
        self.pr_rows.clear();
        self.pr_rows_requested = false;
        self.plot_bytes = None;
        self.plot_texture = None;
        self.update_needed = false;
    }

    /// Store a fetched commit series and schedule a plot refresh.
    pub fn update_with_series(&mut self, key: SeriesKey, series: CommitActivitySeries) {
        self.series_cache.store(key.clone(), series.clone());
        // A stale fetch for a previously viewed profile only feeds the cache
        if key.contributor == self.github_name {
            self.commit_series = Some(series);
            self.update_needed = true;
        }
    }

    /// Whether the decoupled commit-series fetch should start: a profile is
    /// on screen and no fetch for it has been issued yet. A failed fetch
    /// stays consumed until the next profile load.
    pub fn should_fetch_series(&self) -> bool {
        !self.loading && !self.error && !self.github_name.is_empty() && !self.series_requested
    }

    /// Key of the series the current profile wants rendered.
    pub fn series_key(&self) -> SeriesKey {
        SeriesKey::all_topics(&self.github_name, self.repositories.clone())
    }

    pub fn cached_series(&self, key: &SeriesKey) -> Option<CommitActivitySeries> {
        self.series_cache.get(key).cloned()
    }

    /// Compose the external contract consumed by the view-model.
    pub fn props(&self) -> ProfileProps {
        ProfileProps {
            github_name: self.github_name.clone(),
            github_avatar: self.github_avatar.clone(),
            lang_list: self.lang_list.clone(),
            repo_list: self.repo_list.clone(),
            repositories: self.repositories.clone(),
            recent_contribution_count: self.recent_contribution_count,
            pr_total: self.pr_total,
            open_prs: self.open_prs,
            pr_merged: self.pr_merged,
            pr_velocity_days: self.pr_velocity_days,
            user: self.session.clone(),
            loading: self.loading,
            error: self.error,
        }
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::resolve(&self.props())
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            handle_input: String::new(),
            github_name: String::new(),
            topic: TOPIC_ALL.to_string(),
            repositories: None,
            github_avatar: None,
            lang_list: Vec::new(),
            repo_list: Vec::new(),
            recent_contribution_count: 0,
            pr_total: 0,
            open_prs: 0,
            pr_merged: None,
            pr_velocity_days: 0,
            session: None,
            loading: false,
            error: false,
            commit_series: None,
            series_requested: false,
            series_loading: false,
            series_cache: SeriesCache::new(),
            pr_rows: Vec::new(),
            pr_rows_requested: false,
            plot_path: "commit_activity.png".to_string(),
            plot_bytes: None,
            plot_texture: None,
            update_needed: false,
        }
    }
}

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            super::ui::draw_ui(&mut app, ctx, Arc::clone(&self.app));
        } else {
            eprintln!("Failed to acquire app lock in update");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommitActivityPoint;
    use pretty_assertions::assert_eq;

    fn fetched_profile() -> ProfileResponse {
        ProfileResponse {
            github_avatar: Some("https://avatars.example/u/1".to_string()),
            lang_list: vec!["TypeScript".to_string()],
            repo_list: vec![RepoSummary {
                name: "hot".to_string(),
                owner: "open-sauced".to_string(),
            }],
            recent_contribution_count: 2,
            pr_total: 8,
            open_prs: 1,
            pr_merged: Some(1),
            pr_velocity_days: 3,
        }
    }

    #[test]
    fn profile_update_resets_per_profile_data() {
        let mut app = App::default();
        app.pr_rows_requested = true;
        app.plot_bytes = Some(vec![1, 2, 3]);

        app.update_with_profile("bdougie", fetched_profile());

        assert_eq!(app.github_name, "bdougie");
        assert_eq!(app.pr_total, 8);
        assert!(app.pr_rows.is_empty());
        assert!(!app.pr_rows_requested);
        assert!(app.plot_bytes.is_none());
        assert!(app.commit_series.is_none());
    }

    #[test]
    fn series_for_current_profile_is_applied_and_cached() {
        let mut app = App::default();
        app.update_with_profile("bdougie", fetched_profile());

        let key = app.series_key();
        let series = CommitActivitySeries {
            points: vec![CommitActivityPoint {
                date: "2023-01-01".to_string(),
                commits: 4,
            }],
        };
        app.update_with_series(key.clone(), series.clone());

        assert_eq!(app.commit_series, Some(series.clone()));
        assert!(app.update_needed);
        assert_eq!(app.cached_series(&key), Some(series));
    }

    #[test]
    fn stale_series_only_feeds_the_cache() {
        let mut app = App::default();
        app.update_with_profile("bdougie", fetched_profile());

        let stale_key = SeriesKey::all_topics("someone-else", None);
        let series = CommitActivitySeries {
            points: vec![CommitActivityPoint {
                date: "2023-01-01".to_string(),
                commits: 9,
            }],
        };
        app.update_with_series(stale_key.clone(), series.clone());

        assert!(app.commit_series.is_none());
        assert!(!app.update_needed);
        assert_eq!(app.cached_series(&stale_key), Some(series));
    }

    #[test]
    fn failed_series_fetch_is_not_reissued() {
        let mut app = App::default();
        // Nothing to fetch before a profile is loaded
        assert!(!app.should_fetch_series());

        app.update_with_profile("bdougie", fetched_profile());
        assert!(app.should_fetch_series());

        // The fetch is issued once; a failure leaves no series behind
        app.series_requested = true;
        app.series_loading = false;
        assert!(app.commit_series.is_none());
        assert!(!app.should_fetch_series());

        // Loading a profile re-arms the fetch
        app.update_with_profile("bdougie", fetched_profile());
        assert!(app.should_fetch_series());
    }

    #[test]
    fn view_state_follows_the_flag_pair() {
        let mut app = App::default();
        app.update_with_profile("bdougie", fetched_profile());

        app.loading = true;
        assert_eq!(app.view_state(), ViewState::Loading);

        app.loading = false;
        app.error = true;
        assert_eq!(app.view_state(), ViewState::Error);

        app.error = false;
        assert!(app.view_state().is_ready());
    }
}
