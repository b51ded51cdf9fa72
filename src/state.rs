use std::path::Path;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::error::DataSourceError;
use crate::data::filter::FilterCriteria;
use crate::data::loader::load_file;
use crate::data::model::{Dimension, ProgramDataset};
use crate::data::view::DashboardView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset (None until a file loads). Shared read-only for the session.
    pub dataset: Option<Arc<ProgramDataset>>,

    /// Current user selections.
    pub criteria: FilterCriteria,

    /// Outputs for `criteria`, recomputed on every change.
    pub view: DashboardView,

    /// Bar colours per university.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            dataset: None,
            criteria: FilterCriteria::default(),
            view: DashboardView::default(),
            color_map: None,
            status_message: None,
        }
    }

    /// Load the configured dataset. A missing default file is not an error;
    /// the user can still open one from the menu.
    pub fn load_initial(&mut self) {
        let path = self.config.data_path.clone();
        if !self.config.data_path_explicit && !path.exists() {
            log::info!("No dataset at {}, waiting for File → Open…", path.display());
            return;
        }
        if let Err(e) = self.load_path(&path) {
            log::error!("Failed to load {}: {e}", path.display());
        }
    }

    /// Load a dataset from disk, replacing the current one on success.
    /// On failure the previous dataset stays and the error is shown.
    pub fn load_path(&mut self, path: &Path) -> Result<(), DataSourceError> {
        match load_file(path, &self.config.load) {
            Ok(dataset) => {
                self.set_dataset(dataset);
                Ok(())
            }
            Err(e) => {
                self.status_message = Some(format!("Error loading {}: {e}", path.display()));
                Err(e)
            }
        }
    }

    /// Ingest a newly loaded dataset, select everything and build colours.
    pub fn set_dataset(&mut self, dataset: ProgramDataset) {
        self.criteria = FilterCriteria::select_all(&dataset);
        self.color_map = Some(ColorMap::new(
            dataset.unique_values(Dimension::University),
        ));
        self.dataset = Some(Arc::new(dataset));
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the view after a criteria change.
    pub fn refilter(&mut self) {
        self.view = match &self.dataset {
            Some(ds) => DashboardView::compute(ds, &self.criteria, self.config.top_k),
            None => DashboardView::default(),
        };
    }

    /// Toggle a single value in a dimension's selection.
    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &str) {
        let selected = self.criteria.selection_mut(dim);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select all values in a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            *self.criteria.selection_mut(dim) = ds.unique_values(dim).clone();
            self.refilter();
        }
    }

    /// Deselect all values in a dimension.
    pub fn select_none(&mut self, dim: Dimension) {
        self.criteria.selection_mut(dim).clear();
        self.refilter();
    }

    pub fn set_keyword(&mut self, keyword: String) {
        self.criteria.keyword = keyword;
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn state() -> AppState {
        let mut state = AppState::new(DashboardConfig::default());
        state.set_dataset(ProgramDataset::from_records(vec![
            record("A", "Eng", "Computer", "Thai", "10,000"),
            record("A", "Sci", "Physics", "Inter", "20,000"),
            record("B", "Eng", "Civil", "Thai", "N/A"),
        ]));
        state
    }

    #[test]
    fn new_dataset_shows_everything() {
        let state = state();
        assert_eq!(state.view.rows.len(), 3);
        assert_eq!(state.criteria.university.len(), 2);
        assert!(state.color_map.is_some());
    }

    #[test]
    fn toggling_and_bulk_selection() {
        let mut state = state();
        state.toggle_filter_value(Dimension::University, "B");
        assert_eq!(state.view.rows.len(), 2);
        state.toggle_filter_value(Dimension::University, "B");
        assert_eq!(state.view.rows.len(), 3);

        state.select_none(Dimension::Faculty);
        assert!(state.view.rows.is_empty());
        assert!(state.view.averages.is_empty());

        state.select_all(Dimension::Faculty);
        assert_eq!(state.view.rows.len(), 3);
    }

    #[test]
    fn keyword_updates_view() {
        let mut state = state();
        state.set_keyword("PHYS".into());
        assert_eq!(state.view.rows.len(), 1);
        assert_eq!(state.view.rows[0].program_name, "Physics");
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let mut state = state();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, "university,cost\nA,1\n").unwrap();

        assert!(state.load_path(&path).is_err());
        assert!(state.status_message.is_some());
        assert_eq!(state.view.rows.len(), 3);
    }

    #[test]
    fn missing_default_file_is_silent() {
        let config = DashboardConfig {
            data_path: "definitely/not/here.csv".into(),
            ..DashboardConfig::default()
        };
        let mut state = AppState::new(config);
        state.load_initial();
        assert!(state.dataset.is_none());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig {
            data_path: dir.path().join("programs_info.csv"),
            data_path_explicit: true,
            ..DashboardConfig::default()
        };
        let mut state = AppState::new(config);
        state.load_initial();
        assert!(state.dataset.is_none());
        let msg = state.status_message.expect("load failure is shown");
        assert!(msg.contains("programs_info.csv"), "{msg}");
    }
}
