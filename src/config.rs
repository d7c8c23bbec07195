use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::Selection;

/// Desktop HR analytics dashboard.
#[derive(Parser, Debug, Clone)]
#[command(name = "hr-dashboard", version, about)]
pub struct Config {
    /// Employee table to load (.csv, .json or .parquet).
    #[arg(default_value = "hr_data.csv")]
    pub data: PathBuf,

    /// Start with this department selected (repeatable).
    #[arg(long = "department", value_name = "NAME")]
    pub departments: Vec<String>,

    /// Start with this county selected (repeatable).
    #[arg(long = "county", value_name = "NAME")]
    pub counties: Vec<String>,

    /// Print the summary for the selection as JSON and exit.
    #[arg(long)]
    pub print_summary: bool,

    /// Initial window width in points.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 860.0)]
    pub height: f32,
}

impl Config {
    pub fn initial_selection(&self) -> Selection {
        Selection::new(self.departments.iter().cloned(), self.counties.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::parse_from(["hr-dashboard"]);
        assert_eq!(cfg.data, PathBuf::from("hr_data.csv"));
        assert!(!cfg.print_summary);
        assert!(cfg.initial_selection().is_empty());
    }

    #[test]
    fn repeated_filters_build_selection() {
        let cfg = Config::parse_from([
            "hr-dashboard",
            "staff.parquet",
            "--department",
            "Sales",
            "--department",
            "Finance",
            "--county",
            "Kent",
            "--print-summary",
        ]);
        let sel = cfg.initial_selection();
        assert_eq!(cfg.data, PathBuf::from("staff.parquet"));
        assert_eq!(sel.departments.len(), 2);
        assert!(sel.counties.contains("Kent"));
        assert!(cfg.print_summary);
    }
}
