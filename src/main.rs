mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use app::HrDashboardApp;
use clap::Parser;
use config::Config;
use data::aggregate::summarize;
use eframe::egui;
use state::AppState;

fn main() -> ExitCode {
    env_logger::init();

    match run(Config::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<()> {
    let dataset = data::loader::load_file(&config.data)?;

    let selection = config.initial_selection();

    if config.print_summary {
        let summary = summarize(&dataset, &selection);
        let report = serde_json::json!({ "selection": selection, "summary": summary });
        let json = serde_json::to_string_pretty(&report).context("serializing summary")?;
        println!("{json}");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("HR Analytics Dashboard")
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let state = AppState::new(dataset, selection);
    eframe::run_native(
        "HR Analytics Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(HrDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
