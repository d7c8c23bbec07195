use crate::color::{ColorMap, PASTEL, SET2};
use crate::data::aggregate::{DashboardSummary, summarize};
use crate::data::filter::{FilterColumn, Selection};
use crate::data::model::HrDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (read-only once set).
    pub dataset: Option<HrDataset>,

    /// Department / county filter selections.
    pub selection: Selection,

    /// Chart tables for the current selection (cached).
    pub summary: DashboardSummary,

    /// Colours for department bars.
    pub department_colors: ColorMap,

    /// Colours for the gender series in the scatter plot.
    pub gender_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: HrDataset, selection: Selection) -> Self {
        let mut state = Self {
            selection,
            ..Self::default()
        };
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset, rebuild colours and the summary.
    ///
    /// Selected values the new dataset doesn't contain are dropped, since the
    /// filter panel only lists values present in the dataset.
    pub fn set_dataset(&mut self, dataset: HrDataset) {
        if self.selection.retain_known(&dataset) {
            log::info!("selection narrowed to values in new dataset: {:?}", self.selection);
        }
        self.department_colors = ColorMap::new(&dataset.departments, &SET2);
        self.gender_colors = ColorMap::new(&dataset.genders, &PASTEL);
        self.summary = summarize(&dataset, &self.selection);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute the summary after a selection change.
    pub fn refresh(&mut self) {
        if let Some(ds) = &self.dataset {
            self.summary = summarize(ds, &self.selection);
            log::debug!(
                "selection {:?} → {} of {} employees",
                self.selection,
                self.summary.record_count(),
                ds.len()
            );
        }
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: FilterColumn, value: &str) {
        self.selection.toggle(column, value);
        self.refresh();
    }

    /// Remove the column's filter so every value shows.
    pub fn select_all(&mut self, column: FilterColumn) {
        self.selection.clear(column);
        self.refresh();
    }

    /// Remove both filters.
    pub fn reset_filters(&mut self) {
        self.selection = Selection::default();
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn state() -> AppState {
        let ds = HrDataset::from_records(vec![
            record("Engineering", "Essex", "Developer", 100.0, 2.0, "F"),
            record("Engineering", "Kent", "Developer", 200.0, 9.0, "M"),
            record("Sales", "Kent", "Account Manager", 50.0, 1.0, "F"),
        ]);
        AppState::new(ds, Selection::default())
    }

    #[test]
    fn summary_follows_selection() {
        let mut st = state();
        assert_eq!(st.summary.record_count(), 3);

        st.toggle_filter_value(FilterColumn::Department, "Sales");
        assert_eq!(st.summary.record_count(), 1);
        assert_eq!(st.summary.department_salary[0].department, "Sales");

        st.toggle_filter_value(FilterColumn::County, "Essex");
        assert_eq!(st.summary.record_count(), 0);

        st.select_all(FilterColumn::County);
        assert_eq!(st.summary.record_count(), 1);

        st.reset_filters();
        assert_eq!(st.summary.record_count(), 3);
    }

    #[test]
    fn initial_selection_is_applied() {
        let ds = HrDataset::from_records(vec![
            record("Engineering", "Essex", "Developer", 100.0, 2.0, "F"),
            record("Sales", "Kent", "Account Manager", 50.0, 1.0, "F"),
        ]);
        let st = AppState::new(ds, Selection::new(Vec::<String>::new(), ["Kent"]));
        assert_eq!(st.summary.record_count(), 1);
        assert_eq!(st.summary.job_title_counts[0].job_title, "Account Manager");
    }

    #[test]
    fn new_dataset_drops_selection_it_cannot_show() {
        let mut st = state();
        st.toggle_filter_value(FilterColumn::Department, "Sales");
        st.toggle_filter_value(FilterColumn::County, "Kent");
        assert_eq!(st.summary.record_count(), 1);

        st.set_dataset(HrDataset::from_records(vec![
            record("Engineering", "Kent", "Developer", 120.0, 3.0, "F"),
            record("Engineering", "Essex", "Tester", 90.0, 5.0, "M"),
        ]));

        assert!(st.selection.departments.is_empty());
        assert!(st.selection.counties.contains("Kent"));
        assert_eq!(st.summary.record_count(), 1);
        assert_eq!(st.summary.records[0].county, "Kent");
    }

    #[test]
    fn new_dataset_clears_status() {
        let mut st = state();
        st.status_message = Some("Error: boom".into());
        st.set_dataset(HrDataset::default());
        assert!(st.status_message.is_none());
        assert_eq!(st.summary, DashboardSummary::default());
    }
}
