// Reusable UI components
// Widgets shared by the dashboard layout

use eframe::egui;

use crate::metrics::Category;

/// Accent color for a performance tier
/// Excellent (green), Good (blue), Average (yellow), Needs Improvement (red)
pub fn category_color(category: Category) -> egui::Color32 {
    match category {
        Category::Excellent => egui::Color32::from_rgb(34, 197, 94),
        Category::Good => egui::Color32::from_rgb(59, 130, 246),
        Category::Average => egui::Color32::from_rgb(234, 179, 8),
        Category::NeedsImprovement => egui::Color32::from_rgb(239, 68, 68),
    }
}

/// Render a colored label badge for a performance tier
pub fn category_badge(ui: &mut egui::Ui, category: Category) {
    ui.colored_label(category_color(category), category.label());
}

/// Render the numeric score field bound to an edit buffer
/// The caller commits the buffer when the response reports a change
pub fn score_input(ui: &mut egui::Ui, buffer: &mut String) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(buffer)
            .desired_width(48.0)
            .horizontal_align(egui::Align::Center),
    )
}

/// Render a progress bar filled proportionally to a 0-100 score
pub fn percentage_bar(ui: &mut egui::Ui, percentage: u8, width: f32) {
    ui.add(
        egui::ProgressBar::new(f32::from(percentage) / 100.0)
            .fill(category_color(Category::for_percentage(percentage)))
            .desired_width(width)
            .desired_height(10.0),
    );
}

/// Render one legend entry: a color swatch plus the tier's range and label
pub fn legend_entry(ui: &mut egui::Ui, category: Category) {
    ui.horizontal(|ui| {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(2.0), category_color(category));
        ui.label(format!("{} {}", category.range_label(), category.label()));
    });
}
