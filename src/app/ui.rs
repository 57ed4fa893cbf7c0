use egui::{Color32, Context, RichText};
use std::sync::{Arc, Mutex};

use super::App;
use crate::api::ApiClient;
use crate::plotting::generate_series_plot_async;
use crate::profile::{PrTableRequest, ProfileViewModel, ViewState};
use crate::types::LanguageUsage;
use crate::utils::{current_date_label, language_color, relative_days};

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context, app_arc: Arc<Mutex<App>>) {
    egui::TopBottomPanel::top("search_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Contributor Insights");
            ui.label(RichText::new(current_date_label()).weak());
        });
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Contributor handle:");
            ui.text_edit_singleline(&mut app.handle_input);

            if ui.button("View profile").clicked() && !app.loading {
                start_profile_fetch(app, app_arc.clone());
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| match app.view_state() {
        ViewState::Loading => {
            ui.label("Loading...");
            ui.spinner();
        }
        ViewState::Error => {
            ui.label("An error has occurred...");
        }
        ViewState::Ready(view_model) => {
            if !view_model.identity.github_name.is_empty() {
                draw_profile(app, ui, &view_model, app_arc.clone());
            } else {
                ui.label("Enter a contributor handle to view their profile.");
            }
        }
    });

    // Kick off the decoupled commit-series fetch once per loaded profile
    if app.should_fetch_series() {
        start_series_fetch(app, app_arc.clone());
    }

    // Re-render the plot when a new series arrived
    if app.update_needed {
        if let Some(series) = app.commit_series.clone() {
            let plot_path = app.plot_path.clone();
            let app_clone = app_arc.clone();
            tokio::spawn(async move {
                match generate_series_plot_async(series, plot_path).await {
                    Ok(bytes) => {
                        let mut app = app_clone.lock().unwrap();
                        app.plot_bytes = Some(bytes);
                        app.plot_texture = None;
                    }
                    Err(e) => {
                        eprintln!("Plotting error: {}", e);
                    }
                }
            });
        }
        app.update_needed = false;
    }

    load_plot_texture(app, ctx);
}

/// The Ready branch: identity header plus the insight panels.
fn draw_profile(
    app: &mut App,
    ui: &mut egui::Ui,
    view_model: &ProfileViewModel,
    app_arc: Arc<Mutex<App>>,
) {
    ui.horizontal(|ui| {
        ui.heading(&view_model.identity.github_name);
        ui.label(RichText::new(format!("@{}", view_model.identity.github_name)).weak());
        if view_model.identity.is_connected {
            pill(ui, "Connected", Color32::from_rgb(0x2d, 0xa4, 0x4e));
        }
    });
    if let Some(avatar) = &view_model.identity.avatar_url {
        ui.label(RichText::new(avatar.as_str()).small().weak());
    }
    ui.separator();

    ui.columns(2, |columns| {
        columns[0].label(RichText::new("Languages").strong());
        draw_language_bars(&mut columns[0], &view_model.languages);

        columns[1].label(RichText::new("Contribution Insights").strong());
        draw_insight_cards(&mut columns[1], view_model);
    });

    ui.separator();
    if let Some(texture) = &app.plot_texture {
        ui.image(texture);
    } else if app.series_loading {
        ui.label("Loading commit activity...");
    }

    ui.separator();
    draw_repo_list(ui, view_model);

    ui.separator();
    draw_pr_table(app, ui, &view_model.pr_table, app_arc);

    ui.add_space(8.0);
    ui.label(
        RichText::new(
            "The data for these contributions is from publicly available open source projects on GitHub.",
        )
        .small()
        .weak(),
    );
}

fn draw_language_bars(ui: &mut egui::Ui, languages: &[LanguageUsage]) {
    for entry in languages {
        let color = hex_color(language_color(&entry.language_name));
        ui.horizontal(|ui| {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.label(format!(
                "{} {}%",
                entry.language_name, entry.percentage_used
            ));
        });
        let bar_width = entry.percentage_used as f32 * 1.5;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(bar_width, 6.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 3.0, color);
    }
}

fn draw_insight_cards(ui: &mut egui::Ui, view_model: &ProfileViewModel) {
    let metrics = &view_model.metrics;

    ui.label(RichText::new("PRs opened").small().weak());
    if metrics.open_prs > 0 {
        ui.label(format!("{} PRs", metrics.open_prs));
    } else {
        ui.label("-");
    }

    ui.label(RichText::new("Avg PRs velocity").small().weak());
    if metrics.pr_velocity_days > 0 {
        ui.horizontal(|ui| {
            ui.label(relative_days(metrics.pr_velocity_days));
            pill(
                ui,
                &format!("{}%", metrics.merged_percentage),
                Color32::from_rgb(0x8b, 0x5c, 0xf6),
            );
        });
    } else {
        ui.label("-");
    }

    ui.label(RichText::new("Contributed Repos").small().weak());
    let count = view_model.repos.recent_contribution_count;
    if count > 0 {
        ui.label(format!("{} Repo{}", count, if count > 1 { "s" } else { "" }));
    } else {
        ui.label("-");
    }
}

fn draw_repo_list(ui: &mut egui::Ui, view_model: &ProfileViewModel) {
    ui.label(RichText::new("Repositories").strong());
    for repo in view_model.repos.preview() {
        ui.label(repo.full_name());
    }
}

fn draw_pr_table(
    app: &mut App,
    ui: &mut egui::Ui,
    request: &PrTableRequest,
    app_arc: Arc<Mutex<App>>,
) {
    ui.label(RichText::new("Latest PRs").strong());

    if !app.pr_rows_requested {
        app.pr_rows_requested = true;
        start_pr_fetch(request.clone(), app_arc);
    }

    if app.pr_rows.is_empty() {
        ui.label(RichText::new("No pull requests to show.").weak());
        return;
    }

    egui::Grid::new("pr_table").striped(true).show(ui, |ui| {
        ui.label(RichText::new("PR").strong());
        ui.label(RichText::new("Status").strong());
        ui.label(RichText::new("Repository").strong());
        ui.label(RichText::new("Changes").strong());
        ui.end_row();

        for row in &app.pr_rows {
            ui.label(format!("#{} {}", row.pr_number, row.pr_name));
            ui.label(&row.pr_status);
            ui.label(format!("{}/{}", row.repo_owner, row.repo_name));
            ui.label(format!(
                "{} files, {} lines",
                row.files_changed, row.lines_changed
            ));
            ui.end_row();
        }
    });
}

fn start_profile_fetch(app: &mut App, app_arc: Arc<Mutex<App>>) {
    let handle = app.handle_input.trim().to_string();
    if handle.is_empty() {
        return;
    }
    let topic = app.topic.clone();
    app.loading = true;
    app.error = false;

    tokio::spawn(async move {
        let result = async {
            let client = ApiClient::new()?;
            client.fetch_profile(&handle, &topic).await
        }
        .await;

        let mut app = app_arc.lock().unwrap();
        match result {
            Ok(profile) => {
                app.update_with_profile(&handle, profile);
            }
            Err(e) => {
                eprintln!("Profile fetch error: {}", e);
                app.error = true;
            }
        }
        app.loading = false;
    });
}

fn start_series_fetch(app: &mut App, app_arc: Arc<Mutex<App>>) {
    let key = app.series_key();
    app.series_requested = true;

    if let Some(series) = app.cached_series(&key) {
        // Use cached series
        app.commit_series = Some(series);
        app.update_needed = true;
        return;
    }

    app.series_loading = true;
    tokio::spawn(async move {
        let result = async {
            let client = ApiClient::new()?;
            client.fetch_commit_series(&key).await
        }
        .await;

        let mut app = app_arc.lock().unwrap();
        match result {
            Ok(series) => {
                app.update_with_series(key, series);
            }
            Err(e) => {
                // The series fetch is decoupled from the profile's error flag
                eprintln!("Commit series fetch error: {}", e);
            }
        }
        app.series_loading = false;
    });
}

fn start_pr_fetch(request: PrTableRequest, app_arc: Arc<Mutex<App>>) {
    tokio::spawn(async move {
        let result = async {
            let client = ApiClient::new()?;
            client.fetch_pull_requests(&request).await
        }
        .await;

        let mut app = app_arc.lock().unwrap();
        match result {
            Ok(rows) => {
                app.pr_rows = rows;
            }
            Err(e) => {
                eprintln!("PR table fetch error: {}", e);
            }
        }
    });
}

fn load_plot_texture(app: &mut App, ctx: &Context) {
    if app.plot_texture.is_some() {
        return;
    }
    let Some(bytes) = &app.plot_bytes else {
        return;
    };

    if let Ok(image) = image::load_from_memory(bytes) {
        let size = [image.width() as usize, image.height() as usize];
        let pixels = image.to_rgba8();
        let pixels = pixels.as_flat_samples();
        let texture = ctx.load_texture(
            "commit_activity_plot",
            egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
            egui::TextureOptions::LINEAR,
        );
        app.plot_texture = Some(texture);
    } else {
        eprintln!("Failed to decode plot image");
    }
}

fn pill(ui: &mut egui::Ui, text: &str, color: Color32) {
    ui.label(
        RichText::new(text)
            .small()
            .color(Color32::WHITE)
            .background_color(color),
    );
}

fn hex_color(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color32::GRAY;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0x8b);
    Color32::from_rgb(channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(hex_color("#f1e05a"), Color32::from_rgb(0xf1, 0xe0, 0x5a));
        assert_eq!(hex_color("#dea584"), Color32::from_rgb(0xde, 0xa5, 0x84));
    }

    #[test]
    fn malformed_hex_falls_back_to_gray() {
        assert_eq!(hex_color("oops"), Color32::GRAY);
        assert_eq!(hex_color("#ff"), Color32::GRAY);
    }
}
