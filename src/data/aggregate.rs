use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;

use super::filter::{Selection, filtered_indices};
use super::model::{EmployeeRecord, HrDataset};

// ---------------------------------------------------------------------------
// Derived tables behind the three charts
// ---------------------------------------------------------------------------

/// Mean salary of one department within the filtered records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSalary {
    pub department: String,
    pub mean_salary: f64,
    /// Number of filtered employees in the department.
    pub headcount: usize,
}

/// Number of filtered employees holding one job title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobTitleCount {
    pub job_title: String,
    pub count: usize,
}

/// Everything the dashboard draws for one filter selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Ascending by department name.
    pub department_salary: Vec<DepartmentSalary>,
    /// Filtered rows, unmodified and in dataset order.
    pub records: Vec<EmployeeRecord>,
    /// Descending by count, ties by job title.
    pub job_title_counts: Vec<JobTitleCount>,
}

impl DashboardSummary {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn max_job_count(&self) -> usize {
        self.job_title_counts.iter().map(|j| j.count).max().unwrap_or(0)
    }
}

/// Filter `dataset` by `selection` and build the three chart tables.
///
/// An empty match produces empty tables rather than an error.
pub fn summarize(dataset: &HrDataset, selection: &Selection) -> DashboardSummary {
    let records: Vec<EmployeeRecord> = filtered_indices(dataset, selection)
        .into_iter()
        .map(|i| dataset.records[i].clone())
        .collect();

    DashboardSummary {
        department_salary: mean_salary_by_department(&records),
        job_title_counts: count_by_job_title(&records),
        records,
    }
}

fn mean_salary_by_department(records: &[EmployeeRecord]) -> Vec<DepartmentSalary> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in records {
        let entry = totals.entry(rec.department.as_str()).or_insert((0.0, 0));
        entry.0 += rec.salary;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(department, (sum, n))| DepartmentSalary {
            department: department.to_string(),
            mean_salary: sum / n as f64,
            headcount: n,
        })
        .collect()
}

fn count_by_job_title(records: &[EmployeeRecord]) -> Vec<JobTitleCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in records {
        *counts.entry(rec.job_title.as_str()).or_default() += 1;
    }

    let mut out: Vec<JobTitleCount> = counts
        .into_iter()
        .map(|(job_title, count)| JobTitleCount {
            job_title: job_title.to_string(),
            count,
        })
        .collect();
    // Stable sort keeps the alphabetical order from the map for equal counts.
    out.sort_by_key(|j| Reverse(j.count));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn small() -> HrDataset {
        HrDataset::from_records(vec![
            record("Engineering", "Essex", "Developer", 100.0, 2.0, "F"),
            record("Engineering", "Kent", "Developer", 200.0, 9.0, "M"),
            record("Sales", "Kent", "Account Manager", 50.0, 1.0, "F"),
        ])
    }

    fn larger() -> HrDataset {
        HrDataset::from_records(vec![
            record("Engineering", "Essex", "Developer", 120.0, 2.0, "F"),
            record("Engineering", "Kent", "Tester", 90.0, 4.0, "M"),
            record("Finance", "Kent", "Analyst", 80.0, 3.0, "F"),
            record("Finance", "Surrey", "Analyst", 85.0, 6.0, "M"),
            record("Sales", "Surrey", "Rep", 40.0, 1.0, "F"),
            record("Sales", "Essex", "Rep", 45.0, 2.0, "M"),
            record("Sales", "Kent", "Rep", 55.0, 5.0, "F"),
        ])
    }

    #[test]
    fn department_means_without_filter() {
        let summary = summarize(&small(), &Selection::default());

        assert_eq!(
            summary.department_salary,
            vec![
                DepartmentSalary {
                    department: "Engineering".into(),
                    mean_salary: 150.0,
                    headcount: 2,
                },
                DepartmentSalary {
                    department: "Sales".into(),
                    mean_salary: 50.0,
                    headcount: 1,
                },
            ]
        );
        let total: usize = summary.job_title_counts.iter().map(|j| j.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn empty_selection_returns_full_dataset() {
        let ds = larger();
        let summary = summarize(&ds, &Selection::default());
        assert_eq!(summary.records, ds.records);
    }

    #[test]
    fn headcounts_and_job_counts_add_up() {
        let ds = larger();
        for sel in [
            Selection::default(),
            Selection::new(["Sales"], Vec::<String>::new()),
            Selection::new(Vec::<String>::new(), ["Kent", "Surrey"]),
            Selection::new(["Engineering", "Finance"], ["Kent"]),
        ] {
            let summary = summarize(&ds, &sel);
            let heads: usize = summary.department_salary.iter().map(|d| d.headcount).sum();
            let jobs: usize = summary.job_title_counts.iter().map(|j| j.count).sum();
            assert_eq!(heads, summary.record_count());
            assert_eq!(jobs, summary.record_count());
        }
    }

    #[test]
    fn job_counts_are_descending_with_name_tiebreak() {
        let summary = summarize(&larger(), &Selection::default());
        let order: Vec<(&str, usize)> = summary
            .job_title_counts
            .iter()
            .map(|j| (j.job_title.as_str(), j.count))
            .collect();
        assert_eq!(
            order,
            [("Rep", 3), ("Analyst", 2), ("Developer", 1), ("Tester", 1)]
        );
        assert_eq!(summary.max_job_count(), 3);
    }

    #[test]
    fn filters_apply_before_grouping() {
        let summary = summarize(&larger(), &Selection::new(Vec::<String>::new(), ["Kent"]));
        let means: Vec<(&str, f64)> = summary
            .department_salary
            .iter()
            .map(|d| (d.department.as_str(), d.mean_salary))
            .collect();
        assert_eq!(means, [("Engineering", 90.0), ("Finance", 80.0), ("Sales", 55.0)]);
    }

    #[test]
    fn no_match_gives_empty_tables() {
        let summary = summarize(&larger(), &Selection::new(["Legal"], Vec::<String>::new()));
        assert_eq!(summary, DashboardSummary::default());
        assert_eq!(summary.max_job_count(), 0);
    }
}
