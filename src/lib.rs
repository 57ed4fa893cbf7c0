//! # Contributor Analytics Viewer Library
//!
//! `contribstats` is a library for fetching and visualizing open-source
//! contributor analytics. It shapes profile data served by a backend API
//! into render-ready view-models and draws contributor dashboards with
//! language, pull-request, and commit-activity insights.
//!
//! ## Features
//!
//! - Fetch contributor profiles and commit time-series over HTTP
//! - Normalize language lists against a fixed color palette
//! - Derive PR metrics (merged percentage, velocity labels)
//! - Tri-state page lifecycle: loading, error, ready
//! - Commit-activity line charts with render caching
//! - Caching of fetched series per contributor/topic/repository filter
//!
//! ## Example
//!
//! ```no_run
//! use contribstats::ContribStatsApp;
//! use std::sync::{Arc, Mutex};
//! use eframe::NativeOptions;
//!
//! // Create a new application instance
//! let app = Arc::new(Mutex::new(ContribStatsApp::default()));
//! let app_wrapper = contribstats::app::AppWrapper { app };
//!
//! // Run the application with eframe
//! eframe::run_native(
//!     "Contributor Insights",
//!     NativeOptions::default(),
//!     Box::new(|_cc| Ok(Box::new(app_wrapper))),
//! ).unwrap();
//! ```

pub mod api;
pub mod app;
pub mod plotting;
pub mod profile;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::App as ContribStatsApp;
pub use profile::{ProfileProps, ProfileViewModel, ViewState};
pub use types::{CommitActivitySeries, SeriesKey};
