use eframe::egui;

use crate::state::AppState;
use crate::ui::{chart, panels, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CostDashboardApp {
    pub state: AppState,
}

impl CostDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CostDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart, rankings, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a dataset to compare program costs  (File → Open…)");
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Average cost per university");
                    chart::average_cost_chart(ui, &self.state);
                    ui.separator();

                    ui.columns(2, |cols| {
                        cols[0].strong(format!("Cheapest {}", self.state.config.top_k));
                        tables::ranked_list(&mut cols[0], "cheapest", &self.state.view.cheapest);
                        cols[1].strong(format!("Most expensive {}", self.state.config.top_k));
                        tables::ranked_list(
                            &mut cols[1],
                            "most_expensive",
                            &self.state.view.most_expensive,
                        );
                    });
                    ui.separator();

                    ui.heading("Program details");
                    tables::program_table(ui, &self.state.view.rows);
                    tables::summary_line(ui, &self.state.view.summary);
                });
        });
    }
}
