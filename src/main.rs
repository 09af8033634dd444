// Performance Dashboard - Main Entry Point
// Native Rust GUI for monitoring and editing agent performance scores

mod metrics;
mod state;
mod ui;

use eframe::egui;
use state::DashboardState;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::render_dashboard;

fn main() -> eframe::Result<()> {
    // Log to stderr; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("performance_dashboard=info")),
        )
        .init();

    info!("starting performance dashboard");

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Performance Dashboard")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 540.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Performance Dashboard",
        options,
        Box::new(|_cc| Box::new(DashboardApp::new())),
    )
}

/// Main application struct
/// Owns the dashboard state and drives UI rendering
struct DashboardApp {
    /// Application state (agent roster and score edit buffers)
    state: DashboardState,
}

impl DashboardApp {
    /// Create a new application instance seeded with the fixed roster
    fn new() -> Self {
        Self {
            state: DashboardState::new(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Edits made during a frame are observed on the next paint
        render_dashboard(ctx, &mut self.state);
    }
}
