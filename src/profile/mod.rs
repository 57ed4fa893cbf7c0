mod view_model;

pub use view_model::{
    derive_metrics, language_usage, PrTableRequest, ProfileProps, ProfileViewModel, SessionUser,
    ViewState,
};
