use eframe::egui::{self, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot, PlotPoint, PlotPoints, Points};

use crate::color::blues;
use crate::data::aggregate::DashboardSummary;
use crate::data::model::EmployeeRecord;
use crate::state::AppState;

use super::panels;

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Central panel – the three charts
// ---------------------------------------------------------------------------

/// Render the dashboard charts in the central panel.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view employees  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        panels::header(ui);

        ui.columns(2, |cols: &mut [Ui]| {
            card(&mut cols[0], "Average Salary by Department", |ui| {
                salary_by_department(ui, state)
            });
            card(&mut cols[1], "Salary vs Years of Experience", |ui| {
                salary_vs_experience(ui, state)
            });
        });
        ui.add_space(12.0);
        card(ui, "Employee Count by Job Title", |ui| {
            count_by_job_title(ui, &state.summary)
        });
    });
}

fn card(ui: &mut Ui, title: &str, body: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| ui.strong(title));
        body(ui);
    });
}

/// Tick label for categorical x axes: the category at integer positions.
fn category_label(labels: &[String], mark: GridMark) -> String {
    let idx = mark.value.round();
    if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

fn category_plot<'a>(id: &'a str, labels: &'a [String], x_label: &'a str, y_label: &'a str) -> Plot<'a> {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark, _range| category_label(labels, mark))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
}

// ---------------------------------------------------------------------------
// Average salary by department
// ---------------------------------------------------------------------------

fn salary_by_department(ui: &mut Ui, state: &AppState) {
    let table = &state.summary.department_salary;
    let labels: Vec<String> = table.iter().map(|d| d.department.clone()).collect();

    let bars: Vec<Bar> = table
        .iter()
        .enumerate()
        .map(|(i, d)| {
            Bar::new(i as f64, d.mean_salary)
                .name(&d.department)
                .fill(state.department_colors.color_for(&d.department))
                .width(0.6)
        })
        .collect();

    category_plot("avg_salary_dept", &labels, "Department", "Average Salary").show(
        ui,
        |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Average Salary"));
        },
    );
}

// ---------------------------------------------------------------------------
// Salary vs years of experience
// ---------------------------------------------------------------------------

/// Hover text for a scatter point: job, department and county of every
/// employee drawn at that position.
fn scatter_hover(summary: &DashboardSummary, gender: &str, point: &PlotPoint) -> String {
    let hits: Vec<&EmployeeRecord> = summary
        .records
        .iter()
        .filter(|r| r.gender == gender && r.years_of_experience == point.x && r.salary == point.y)
        .collect();

    match hits.as_slice() {
        [] => format!("Experience: {:.1}\nSalary: {:.0}", point.x, point.y),
        [r] => format!(
            "{}\n{} · {}\nExperience: {}\nSalary: {:.0}\nGender: {}",
            r.job_title, r.department, r.county, r.years_of_experience, r.salary, r.gender
        ),
        many => {
            let mut text = format!(
                "{} employees\nExperience: {}\nSalary: {:.0}\nGender: {}",
                many.len(),
                point.x,
                point.y,
                gender
            );
            for r in many {
                text.push_str(&format!("\n• {} · {} · {}", r.job_title, r.department, r.county));
            }
            text
        }
    }
}

fn salary_vs_experience(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;
    let Some(dataset) = &state.dataset else {
        return;
    };

    Plot::new("salary_vs_exp")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Years of Experience")
        .y_axis_label("Salary")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, point| scatter_hover(summary, name, point))
        .show(ui, |plot_ui| {
            for gender in &dataset.genders {
                let points: PlotPoints = summary
                    .records
                    .iter()
                    .filter(|r| &r.gender == gender)
                    .map(|r| [r.years_of_experience, r.salary])
                    .collect();
                if points.points().is_empty() {
                    continue;
                }
                plot_ui.points(
                    Points::new(points)
                        .name(gender)
                        .color(state.gender_colors.color_for(gender))
                        .radius(4.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Employee count by job title
// ---------------------------------------------------------------------------

fn count_by_job_title(ui: &mut Ui, summary: &DashboardSummary) {
    let table = &summary.job_title_counts;
    let labels: Vec<String> = table.iter().map(|j| j.job_title.clone()).collect();
    let max = summary.max_job_count().max(1) as f64;

    let bars: Vec<Bar> = table
        .iter()
        .enumerate()
        .map(|(i, j)| {
            Bar::new(i as f64, j.count as f64)
                .name(&j.job_title)
                .fill(blues(j.count as f64 / max))
                .width(0.6)
        })
        .collect();

    category_plot("count_job_title", &labels, "Job Title", "Number of Employees").show(
        ui,
        |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Employees"));
        },
    );
}
