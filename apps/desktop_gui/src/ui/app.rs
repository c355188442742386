use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{UiEvent, UiIntent},
        orchestration::dispatch_backend_command,
        state::ViewState,
    },
    ui::{panels, theme},
};

pub struct FactsApp {
    state: ViewState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    visuals_applied: bool,
}

impl FactsApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            state: ViewState::new(),
            cmd_tx,
            ui_rx,
            visuals_applied: false,
        };
        let initial = app.state.mount();
        app.dispatch(initial);
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        if let Some(failed) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.state.apply_event(failed);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn apply_intents(&mut self, intents: Vec<UiIntent>) {
        for intent in intents {
            if let Some(cmd) = self.state.apply_intent(intent) {
                self.dispatch(cmd);
            }
        }
    }

    fn render(&self, ctx: &egui::Context) -> Vec<UiIntent> {
        let mut intents = Vec::new();

        egui::TopBottomPanel::top("header")
            .frame(panel_frame(egui::Margin::same(16)))
            .show(ctx, |ui| {
                panels::header(ui, &self.state, &mut intents);
                panels::notice_banner(ui, &self.state, &mut intents);
            });

        if self.state.show_form {
            egui::TopBottomPanel::top("new_fact_form")
                .frame(panel_frame(egui::Margin::symmetric(16, 8)))
                .show(ctx, |ui| panels::new_fact_form(ui, &self.state, &mut intents));
        }

        egui::SidePanel::left("category_filter")
            .resizable(false)
            .frame(panel_frame(egui::Margin::same(16)))
            .show(ctx, |ui| panels::category_filter(ui, &self.state, &mut intents));

        egui::CentralPanel::default()
            .frame(panel_frame(egui::Margin::same(16)))
            .show(ctx, |ui| panels::fact_list(ui, &self.state, &mut intents));

        intents
    }
}

fn panel_frame(margin: egui::Margin) -> egui::Frame {
    egui::Frame::new()
        .fill(theme::BACKGROUND)
        .inner_margin(margin)
}

impl eframe::App for FactsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            ctx.set_visuals(theme::visuals());
            self.visuals_applied = true;
        }

        self.process_ui_events();
        let intents = self.render(ctx);
        self.apply_intents(intents);

        if self.state.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
