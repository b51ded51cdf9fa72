use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use super::format_cost;
use crate::data::aggregate::CostSummary;
use crate::data::model::ProgramRecord;

const ROW_HEIGHT: f32 = 20.0;

fn text(cell: &Option<String>) -> &str {
    cell.as_deref().unwrap_or("–")
}

/// Compact list for the cheapest / most expensive programs.
pub fn ranked_list(ui: &mut Ui, id: &str, rows: &[ProgramRecord]) {
    if rows.is_empty() {
        ui.label("No data");
        return;
    }

    egui::Grid::new(id)
        .striped(true)
        .num_columns(3)
        .show(ui, |ui| {
            for rec in rows {
                ui.label(&rec.program_name);
                ui.label(text(&rec.university));
                ui.label(rec.cost_numeric().map(format_cost).unwrap_or_default());
                ui.end_row();
            }
        });
}

/// Full table of the filtered programs.
pub fn program_table(ui: &mut Ui, rows: &[ProgramRecord]) {
    if rows.is_empty() {
        ui.label("No data: no program matches the current filters.");
        return;
    }

    ui.push_id("program_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(200.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder().at_least(100.0))
            .header(ROW_HEIGHT, |mut header| {
                for title in ["University", "Faculty", "Program", "Type", "Cost"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let rec = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(text(&rec.university));
                    });
                    row.col(|ui| {
                        ui.label(text(&rec.faculty));
                    });
                    row.col(|ui| {
                        ui.label(&rec.program_name);
                    });
                    row.col(|ui| {
                        ui.label(text(&rec.program_type));
                    });
                    row.col(|ui| {
                        ui.label(text(&rec.cost));
                    });
                });
            });
    });
}

/// Count line under the table.
pub fn summary_line(ui: &mut Ui, summary: &CostSummary) {
    let mut line = format!(
        "Programs shown: {}  ({} with a numeric cost)",
        summary.shown, summary.with_cost
    );
    if let (Some(mean), Some(min), Some(max)) = (summary.mean, summary.min, summary.max) {
        line.push_str(&format!(
            "  ·  mean {}  ·  min {}  ·  max {}",
            format_cost(mean),
            format_cost(min),
            format_cost(max)
        ));
    }
    ui.label(line);
}
