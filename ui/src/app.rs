use crate::{state::State, widgets};

pub struct ContractsApp {
    pub state: State,
}

impl ContractsApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for ContractsApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::role_selector(ui, &mut self.state);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::contracts_panel(ui, &mut self.state);
        });
    }
}
