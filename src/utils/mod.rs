pub mod aggregation;
pub mod dates;
pub mod palette;
pub mod percent;

pub use aggregation::aggregate_series;
pub use dates::{current_date_label, relative_days};
pub use palette::{canonical_language_key, language_color};
pub use percent::percent;
