#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use contracts_business::ViewerConfig;
use contracts_ui::ContractsApp;
use contracts_ui::state::State;

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    // Filter out egui_winit clipboard errors - they occur when clipboard content
    // is not in a supported text format.
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = ViewerConfig::init().context("failed to read viewer configuration")?;
    let state = State::from_config(&config).context("failed to load contracts")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 480.0])
            .with_min_inner_size([640.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Contratos",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ContractsApp::new(state)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the contracts viewer: {err}"))
}
