//! Contributor Analytics Viewer
//!
//! A GUI application for browsing open-source contributor profiles and
//! contribution statistics.

use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;

use contribstats::app::{App, AppWrapper};

fn main() -> anyhow::Result<()> {
    // Initialize the Tokio runtime
    let rt = Runtime::new()?;
    rt.block_on(async {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 800.0])
                .with_min_inner_size([800.0, 600.0])
                .with_title("Contributor Insights"),
            ..Default::default()
        };

        if let Err(e) = eframe::run_native(
            "Contributor Insights",
            options,
            Box::new(|cc| {
                let fonts = egui::FontDefinitions::default();
                cc.egui_ctx.set_fonts(fonts);

                let app: Arc<Mutex<App>> = Arc::new(Mutex::new(App::default()));
                Ok(Box::new(AppWrapper { app }) as Box<dyn eframe::App>)
            }),
        ) {
            eprintln!("Error running application: {}", e);
        }
    });
    Ok(())
}
