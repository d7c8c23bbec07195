use std::collections::BTreeSet;

use serde::Serialize;

use super::model::{EmployeeRecord, HrDataset};

// ---------------------------------------------------------------------------
// Filter predicate: which departments / counties are selected
// ---------------------------------------------------------------------------

/// Multi-select filter state for the two filterable columns.
///
/// An empty set means "no filter" for that column. The two columns combine
/// with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub departments: BTreeSet<String>,
    pub counties: BTreeSet<String>,
}

/// The columns a [`Selection`] can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Department,
    County,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 2] = [FilterColumn::Department, FilterColumn::County];

    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Department => "Department",
            FilterColumn::County => "County",
        }
    }

    /// The sorted filter options this column offers for `dataset`.
    pub fn options(self, dataset: &HrDataset) -> &BTreeSet<String> {
        match self {
            FilterColumn::Department => &dataset.departments,
            FilterColumn::County => &dataset.counties,
        }
    }
}

impl Selection {
    pub fn new<D, C>(departments: D, counties: C) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            departments: departments.into_iter().map(Into::into).collect(),
            counties: counties.into_iter().map(Into::into).collect(),
        }
    }

    /// True when neither column is constrained.
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty() && self.counties.is_empty()
    }

    pub fn values(&self, column: FilterColumn) -> &BTreeSet<String> {
        match column {
            FilterColumn::Department => &self.departments,
            FilterColumn::County => &self.counties,
        }
    }

    fn values_mut(&mut self, column: FilterColumn) -> &mut BTreeSet<String> {
        match column {
            FilterColumn::Department => &mut self.departments,
            FilterColumn::County => &mut self.counties,
        }
    }

    /// Add `value` to the column's selection, or remove it if present.
    pub fn toggle(&mut self, column: FilterColumn, value: &str) {
        let selected = self.values_mut(column);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
    }

    /// Drop the column's constraint (show all values).
    pub fn clear(&mut self, column: FilterColumn) {
        self.values_mut(column).clear();
    }

    /// Drop selected values that `dataset` has no rows for.
    ///
    /// Returns true if anything was removed.
    pub fn retain_known(&mut self, dataset: &HrDataset) -> bool {
        let before = self.departments.len() + self.counties.len();
        self.departments.retain(|d| dataset.departments.contains(d));
        self.counties.retain(|c| dataset.counties.contains(c));
        before != self.departments.len() + self.counties.len()
    }

    /// Whether `record` passes both column filters.
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        passes(&self.departments, &record.department) && passes(&self.counties, &record.county)
    }
}

fn passes(selected: &BTreeSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Return indices of records that pass the selection, in dataset order.
pub fn filtered_indices(dataset: &HrDataset, selection: &Selection) -> Vec<usize> {
    if selection.is_empty() {
        return (0..dataset.len()).collect();
    }
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn dataset() -> HrDataset {
        HrDataset::from_records(vec![
            record("Engineering", "Essex", "Dev", 100.0, 2.0, "F"),
            record("Engineering", "Kent", "Dev", 200.0, 8.0, "M"),
            record("Sales", "Kent", "Rep", 50.0, 1.0, "F"),
            record("HR", "Surrey", "Advisor", 70.0, 4.0, "M"),
        ])
    }

    #[test]
    fn empty_selection_keeps_everything() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &Selection::default()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn department_filter_keeps_order() {
        let ds = dataset();
        let sel = Selection::new(["Sales", "Engineering"], Vec::<String>::new());
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 1, 2]);
    }

    #[test]
    fn department_and_county_intersect() {
        let ds = dataset();
        let sel = Selection::new(["Engineering"], ["Kent"]);
        assert_eq!(filtered_indices(&ds, &sel), vec![1]);
    }

    #[test]
    fn unknown_value_matches_nothing() {
        let ds = dataset();
        let sel = Selection::new(["Marketing"], Vec::<String>::new());
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn toggle_and_clear() {
        let mut sel = Selection::default();
        sel.toggle(FilterColumn::County, "Kent");
        sel.toggle(FilterColumn::County, "Essex");
        assert_eq!(sel.counties.len(), 2);

        sel.toggle(FilterColumn::County, "Kent");
        assert!(sel.counties.contains("Essex"));
        assert!(!sel.counties.contains("Kent"));

        sel.clear(FilterColumn::County);
        assert!(sel.is_empty());
    }

    #[test]
    fn retain_known_drops_values_missing_from_dataset() {
        let ds = dataset();
        let mut sel = Selection::new(["Sales", "Legal"], ["Kent", "Cork"]);
        assert!(sel.retain_known(&ds));
        assert_eq!(sel, Selection::new(["Sales"], ["Kent"]));
        assert!(!sel.retain_known(&ds));
    }

    #[test]
    fn options_come_from_dataset() {
        let ds = dataset();
        let opts: Vec<&str> = FilterColumn::County
            .options(&ds)
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(opts, ["Essex", "Kent", "Surrey"]);
    }
}
