//! One full recomputation of everything the dashboard shows.

use super::aggregate::{aggregate_mean, summarize, top_k, CostSummary, GroupMean, RankOrder};
use super::filter::{filter_records, FilterCriteria};
use super::model::{ProgramDataset, ProgramRecord};

/// Derived outputs for one set of criteria. Owns copies of the rows so the
/// UI can keep it between frames; the dataset itself is never touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub rows: Vec<ProgramRecord>,
    pub averages: Vec<GroupMean>,
    pub cheapest: Vec<ProgramRecord>,
    pub most_expensive: Vec<ProgramRecord>,
    pub summary: CostSummary,
}

impl DashboardView {
    /// filter → aggregate → rank → summarise, from the full dataset.
    pub fn compute(dataset: &ProgramDataset, criteria: &FilterCriteria, k: usize) -> Self {
        let rows = filter_records(dataset.records(), criteria);

        let view = DashboardView {
            averages: aggregate_mean(rows.iter().copied()),
            cheapest: top_k(rows.iter().copied(), k, RankOrder::Ascending)
                .into_iter()
                .cloned()
                .collect(),
            most_expensive: top_k(rows.iter().copied(), k, RankOrder::Descending)
                .into_iter()
                .cloned()
                .collect(),
            summary: summarize(rows.iter().copied()),
            rows: rows.into_iter().cloned().collect(),
        };

        log::debug!(
            "View recomputed: {} rows, {} university averages",
            view.rows.len(),
            view.averages.len()
        );
        view
    }
}
