mod chart;
mod styles;


pub use chart::{generate_series_plot_async, render_series_plot, PlotError};
pub use styles::{ChartStyle, ChartTheme};
