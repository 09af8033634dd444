// Main dashboard layout
// Header, team summary, per-agent rows, and the performance legend

use eframe::egui;

use crate::metrics::{average_percentage, Category, CategoryCounts};
use crate::state::{Agent, DashboardState};
use crate::ui::components::*;

/// Render the whole dashboard screen
pub fn render_dashboard(ctx: &egui::Context, state: &mut DashboardState) {
    render_header(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(8.0);
                render_summary(ui, state.store().agents());
                ui.add_space(12.0);
                render_agent_rows(ui, state);
                ui.add_space(12.0);
                render_legend(ui);
                ui.add_space(8.0);
            });
    });
}

/// Render the title bar at the top of the window
fn render_header(ctx: &egui::Context) {
    egui::TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(egui::RichText::new("Performance Dashboard").size(24.0));
            ui.label(
                egui::RichText::new("Monitor and track agent performance metrics").weak(),
            );
            ui.add_space(8.0);
        });
    });
}

/// Render the team overview card: average badge plus per-tier counts
fn render_summary(ui: &mut egui::Ui, agents: &[Agent]) {
    let average = average_percentage(agents);
    let counts = CategoryCounts::tally(agents);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Team Overview").heading());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(format!("Avg: {average}%")).strong().size(16.0));
            });
        });
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.columns(4, |columns| {
            for (column, category) in columns.iter_mut().zip(Category::ALL) {
                column.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(counts.count(category).to_string())
                            .color(category_color(category))
                            .strong()
                            .size(22.0),
                    );
                    ui.label(egui::RichText::new(category.label()).weak().size(12.0));
                });
            }
        });
        ui.add_space(8.0);
    });
}

/// Render one row per agent: name, badge, editable score, and bar
fn render_agent_rows(ui: &mut egui::Ui, state: &mut DashboardState) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Agent Performance").heading());
        });
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        // Collect id/name pairs first to avoid borrowing the store while
        // the edit buffers are in use
        let roster: Vec<(String, String)> = state
            .store()
            .agents()
            .iter()
            .map(|a| (a.id.clone(), a.name.clone()))
            .collect();

        for (id, name) in roster {
            let percentage = state
                .store()
                .agent(&id)
                .map(|a| a.percentage)
                .unwrap_or_default();
            let category = Category::for_percentage(percentage);

            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&name).strong());
                ui.add_space(8.0);
                category_badge(ui, category);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    ui.label("%");
                    if score_input(ui, state.score_input_mut(&id)).changed() {
                        state.submit_score(&id);
                    }
                });
            });

            // Re-read so the bar reflects an edit made this frame
            let percentage = state
                .store()
                .agent(&id)
                .map(|a| a.percentage)
                .unwrap_or_default();

            ui.horizontal(|ui| {
                ui.add_space(8.0);
                percentage_bar(ui, percentage, ui.available_width() - 56.0);
                ui.label(egui::RichText::new(format!("{percentage}%")).strong().size(12.0));
            });
            ui.add_space(10.0);
        }
    });
}

/// Render the static performance scale legend
fn render_legend(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("Performance Scale").heading());
        });
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.columns(4, |columns| {
            for (column, category) in columns.iter_mut().zip(Category::ALL) {
                legend_entry(column, category);
            }
        });
        ui.add_space(8.0);
    });
}
