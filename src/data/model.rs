use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EmployeeRecord – one row of the HR table
// ---------------------------------------------------------------------------

/// A single employee (one row of the source table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub department: String,
    pub county: String,
    pub job_title: String,
    pub salary: f64,
    pub years_of_experience: f64,
    pub gender: String,
}

/// Column names every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "department",
    "county",
    "job_title",
    "salary",
    "years_of_experience",
    "gender",
];

// ---------------------------------------------------------------------------
// HrDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter options.
///
/// Never mutated after construction; a new file produces a new dataset.
#[derive(Debug, Clone, Default)]
pub struct HrDataset {
    /// All employees, in file order.
    pub records: Vec<EmployeeRecord>,
    /// Sorted distinct departments (filter options).
    pub departments: BTreeSet<String>,
    /// Sorted distinct counties (filter options).
    pub counties: BTreeSet<String>,
    /// Sorted distinct genders (scatter colouring).
    pub genders: BTreeSet<String>,
}

impl HrDataset {
    /// Build the option indices from the loaded records.
    pub fn from_records(records: Vec<EmployeeRecord>) -> Self {
        let mut departments = BTreeSet::new();
        let mut counties = BTreeSet::new();
        let mut genders = BTreeSet::new();

        for rec in &records {
            departments.insert(rec.department.clone());
            counties.insert(rec.county.clone());
            genders.insert(rec.gender.clone());
        }

        HrDataset {
            records,
            departments,
            counties,
            genders,
        }
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(
    department: &str,
    county: &str,
    job_title: &str,
    salary: f64,
    years_of_experience: f64,
    gender: &str,
) -> EmployeeRecord {
    EmployeeRecord {
        department: department.to_string(),
        county: county.to_string(),
        job_title: job_title.to_string(),
        salary,
        years_of_experience,
        gender: gender.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_sorted_and_distinct() {
        let ds = HrDataset::from_records(vec![
            record("Sales", "Kent", "Rep", 50.0, 1.0, "F"),
            record("Engineering", "Essex", "Dev", 100.0, 3.0, "M"),
            record("Sales", "Essex", "Rep", 60.0, 2.0, "F"),
        ]);

        let depts: Vec<&str> = ds.departments.iter().map(String::as_str).collect();
        let counties: Vec<&str> = ds.counties.iter().map(String::as_str).collect();
        assert_eq!(depts, ["Engineering", "Sales"]);
        assert_eq!(counties, ["Essex", "Kent"]);
        assert_eq!(ds.genders.len(), 2);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_no_options() {
        let ds = HrDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.departments.is_empty());
        assert!(ds.counties.is_empty());
    }
}
