use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use once_cell::sync::Lazy;
use tokio::sync::Mutex as TokioMutex;

use super::styles::{ChartStyle, ChartTheme};
use crate::types::CommitActivitySeries;
use crate::utils::aggregate_series;

pub type PlotError = Box<dyn Error + Send + Sync>;

const PLOT_WIDTH: u32 = 640;
const PLOT_HEIGHT: u32 = 256;
const TARGET_POINTS: usize = 120;
const CACHE_TTL: Duration = Duration::from_secs(300);

// Global plot cache keyed by the series content hash
static PLOT_CACHE: Lazy<Arc<TokioMutex<LruCache<u64, (Vec<u8>, Instant)>>>> = Lazy::new(|| {
    Arc::new(TokioMutex::new(LruCache::new(
        NonZeroUsize::new(10).expect("cache capacity is non-zero"),
    )))
});

fn series_hash(series: &CommitActivitySeries) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    series.hash(&mut hasher);
    hasher.finish()
}

/// Render the commit-activity line chart to a PNG buffer, reusing a cached
/// render when the same series was plotted recently.
pub async fn generate_series_plot_async(
    series: CommitActivitySeries,
    plot_path: String,
) -> Result<Vec<u8>, PlotError> {
    let cache_key = series_hash(&series);

    if let Some((plot_data, timestamp)) = PLOT_CACHE.lock().await.get(&cache_key) {
        if timestamp.elapsed() < CACHE_TTL {
            return Ok(plot_data.clone());
        }
    }

    // Render in a blocking task since plotters rasterization is CPU-bound
    let plot_data = tokio::task::spawn_blocking(move || {
        let buffer;
        {
            let root =
                BitMapBackend::new(&plot_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
            render_series_plot(&series, &root)?;
            root.present()?;

            buffer = std::fs::read(&plot_path)?;
            let _ = std::fs::remove_file(&plot_path);
        }
        Ok::<_, PlotError>(buffer)
    })
    .await??;

    PLOT_CACHE
        .lock()
        .await
        .put(cache_key, (plot_data.clone(), Instant::now()));

    Ok(plot_data)
}

/// Draw one commit-activity series onto a drawing area.
pub fn render_series_plot(
    series: &CommitActivitySeries,
    root_area: &DrawingArea<BitMapBackend, Shift>,
) -> Result<(), PlotError> {
    let theme = ChartTheme::default();
    let style = ChartStyle::default();

    root_area.fill(&theme.background_color)?;

    let plot_data = aggregate_series(&series.points, TARGET_POINTS);

    let commit_values: Vec<f64> = plot_data.iter().map(|p| p.commits as f64).collect();
    let (min_val, max_val) = calculate_adaptive_range(&commit_values);
    let x_max = (plot_data.len() as f64).max(1.0);

    let dates: Vec<String> = plot_data.iter().map(|p| p.date.clone()).collect();

    let mut chart_builder = ChartBuilder::on(root_area)
        .caption(
            "Commit Activity",
            ("sans-serif", 22).into_font().color(&theme.text_color),
        )
        .margin(style.margin)
        .set_all_label_area_size(style.label_area_size)
        .build_cartesian_2d(0f64..x_max, min_val..max_val)?;

    // Show only first, last, and quarter-point date labels to avoid overlap
    let dates_clone = dates.clone();
    let x_label_formatter = move |x: &f64| {
        let idx = *x as usize;
        if idx < dates_clone.len() {
            if idx == 0
                || idx == dates_clone.len() - 1
                || (idx % (dates_clone.len() / 4).max(1) == 0
                    && idx > 0
                    && idx < dates_clone.len() - 1)
            {
                dates_clone[idx].clone()
            } else {
                String::new()
            }
        } else {
            String::new()
        }
    };

    chart_builder
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color)
        .axis_style(theme.axis_color)
        .y_desc("Commits")
        .label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .x_label_formatter(&x_label_formatter)
        .x_label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color)
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        )
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    if plot_data.is_empty() {
        return Ok(());
    }

    let smoothed = moving_average(&commit_values, 5);

    // Subtle glow under the main line
    chart_builder.draw_series(LineSeries::new(
        smoothed.clone(),
        theme.glow_color.mix(0.3).stroke_width(style.line_width * 2),
    ))?;

    let line_color = theme.line_color;
    chart_builder
        .draw_series(LineSeries::new(
            smoothed,
            line_color.stroke_width(style.line_width),
        ))?
        .label("Commits")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

    Ok(())
}

fn moving_average(values: &[f64], window_size: usize) -> Vec<(f64, f64)> {
    let mut smoothed = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        let start = i.saturating_sub(window_size / 2);
        let end = (i + window_size / 2 + 1).min(values.len());
        let count = end - start;

        let avg = values[start..end].iter().sum::<f64>() / count as f64;
        smoothed.push((i as f64, avg));
    }

    smoothed
}

pub(super) fn calculate_adaptive_range(values: &[f64]) -> (f64, f64) {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    if sorted.is_empty() {
        return (0.0, 1.0);
    }

    // Scale to the 95th percentile so a single spike does not flatten the rest
    let p95_idx = ((sorted.len() as f64 * 0.95) as usize)
        .max(1)
        .min(sorted.len() - 1);
    let normal_max = sorted[p95_idx];
    let absolute_max = sorted[sorted.len() - 1];

    let display_max = if absolute_max > normal_max * 2.0 {
        normal_max * 1.2
    } else {
        (absolute_max * 1.1).max(1.0)
    };

    (0.0, display_max)
}
