use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use super::format_cost;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Average cost per university (bar chart)
// ---------------------------------------------------------------------------

/// One bar per university, highest mean on the left.
pub fn average_cost_chart(ui: &mut Ui, state: &AppState) {
    let averages = &state.view.averages;
    if averages.is_empty() {
        ui.label("No data: no selected program has a numeric cost.");
        return;
    }

    let bars: Vec<Bar> = averages
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let color = state
                .color_map
                .as_ref()
                .map(|cm| cm.color_for(&g.university))
                .unwrap_or(Color32::LIGHT_BLUE);
            Bar::new(i as f64, g.mean_cost)
                .name(format!(
                    "{}\n{} ({} programs)",
                    g.university,
                    format_cost(g.mean_cost),
                    g.count
                ))
                .fill(color)
                .width(0.7)
        })
        .collect();

    let labels: Vec<String> = averages.iter().map(|g| g.university.clone()).collect();

    Plot::new("average_cost_chart")
        .height(280.0)
        .y_axis_label("Mean cost")
        .x_axis_formatter(move |mark: GridMark, _range| axis_label(&labels, mark.value))
        .allow_scroll(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Average cost"));
        });
}

/// Label for a grid mark: the university whose bar sits on it.
fn axis_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > f64::EPSILON || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}
