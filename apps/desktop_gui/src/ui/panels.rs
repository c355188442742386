//! Presentation components. Each reads the view state and pushes the user's
//! intents; none of them mutate state.

use client_core::validation::remaining_chars;
use eframe::egui::{self, Color32, CornerRadius, Margin, RichText};
use shared::domain::{Category, CategoryFilter, Fact, VoteColumn};

use crate::{
    controller::{
        events::UiIntent,
        state::{Notice, ViewState},
    },
    ui::theme,
};

pub const APP_TITLE: &str = "Facts Today";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_LIST_MESSAGE: &str = "No facts for this category. Add your own.";
pub const DISPUTED_MARKER: &str = "[FALSE INFORMATION]";
pub const CATEGORY_PLACEHOLDER: &str = "Choose category:";

pub fn header_toggle_label(show_form: bool) -> &'static str {
    if show_form {
        "Close"
    } else {
        "Share a fact"
    }
}

pub fn fact_count_label(count: usize) -> String {
    format!("There are {count} facts in the database.")
}

pub fn vote_button_label(column: VoteColumn, count: u32) -> String {
    format!("{} {count}", column.emoji())
}

pub fn category_picker_text(raw: &str) -> String {
    raw.parse::<Category>()
        .map(Category::label)
        .unwrap_or_else(|_| CATEGORY_PLACEHOLDER.to_string())
}

pub fn header(ui: &mut egui::Ui, state: &ViewState, intents: &mut Vec<UiIntent>) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new(APP_TITLE).strong().size(28.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = RichText::new(header_toggle_label(state.show_form)).strong();
            let toggle = egui::Button::new(label).fill(theme::ACCENT);
            if ui.add(toggle).clicked() {
                intents.push(UiIntent::ToggleForm);
            }
        });
    });
}

pub fn notice_banner(ui: &mut egui::Ui, state: &ViewState, intents: &mut Vec<UiIntent>) {
    let Some(notice) = &state.notice else {
        return;
    };
    let (text, fill) = match notice {
        Notice::Error(err) => (err.display_text(), theme::DISPUTED),
    };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(text).color(Color32::WHITE));
                if ui.small_button("Dismiss").clicked() {
                    intents.push(UiIntent::DismissNotice);
                }
            });
        });
}

pub fn new_fact_form(ui: &mut egui::Ui, state: &ViewState, intents: &mut Vec<UiIntent>) {
    let uploading = state.form.is_uploading;
    let mut draft = state.form.draft.clone();
    let mut submit = false;

    egui::Frame::new()
        .fill(theme::SURFACE)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.add_enabled_ui(!uploading, |ui| {
                ui.horizontal_wrapped(|ui| {
                    let text = ui.add(
                        egui::TextEdit::singleline(&mut draft.text)
                            .hint_text("Share a fact with the world...")
                            .desired_width(360.0),
                    );
                    let remaining = remaining_chars(&draft);
                    let counter_color = if remaining < 0 {
                        theme::DISPUTED
                    } else {
                        theme::MUTED_TEXT
                    };
                    ui.label(RichText::new(remaining.to_string()).color(counter_color));

                    ui.add(
                        egui::TextEdit::singleline(&mut draft.source)
                            .hint_text("Source")
                            .desired_width(220.0),
                    );

                    egui::ComboBox::from_id_salt("new_fact_category")
                        .selected_text(category_picker_text(&draft.category))
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut draft.category,
                                String::new(),
                                CATEGORY_PLACEHOLDER,
                            );
                            for category in Category::ALL {
                                ui.selectable_value(
                                    &mut draft.category,
                                    category.name().to_string(),
                                    category.label(),
                                );
                            }
                        });

                    let post_label = if uploading { "Posting..." } else { "Post" };
                    if ui.button(RichText::new(post_label).strong()).clicked() {
                        submit = true;
                    }
                    let entered = ui.input(|input| input.key_pressed(egui::Key::Enter));
                    if text.lost_focus() && entered {
                        submit = true;
                    }
                });
            });
        });

    if draft != state.form.draft {
        intents.push(UiIntent::EditDraft(draft));
    }
    if submit {
        intents.push(UiIntent::SubmitFact);
    }
}

pub fn category_filter(ui: &mut egui::Ui, state: &ViewState, intents: &mut Vec<UiIntent>) {
    let size = egui::vec2(170.0, 34.0);
    ui.vertical(|ui| {
        let all = egui::Button::new(RichText::new("All").strong())
            .min_size(size)
            .selected(state.current_category == CategoryFilter::All);
        if ui.add(all).clicked() {
            intents.push(UiIntent::SelectCategory(CategoryFilter::All));
        }
        ui.add_space(6.0);

        for category in Category::ALL {
            let button = egui::Button::new(
                RichText::new(category.name().to_uppercase())
                    .strong()
                    .color(Color32::WHITE),
            )
            .fill(theme::category_color(category))
            .min_size(size)
            .selected(state.current_category == CategoryFilter::Only(category));
            if ui.add(button).clicked() {
                intents.push(UiIntent::SelectCategory(CategoryFilter::Only(category)));
            }
        }
    });
}

pub fn fact_list(ui: &mut egui::Ui, state: &ViewState, intents: &mut Vec<UiIntent>) {
    if state.is_loading {
        ui.label(RichText::new(LOADING_MESSAGE).size(22.0));
        return;
    }
    if state.facts.is_empty() {
        ui.label(RichText::new(EMPTY_LIST_MESSAGE).size(22.0));
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for fact in &state.facts {
                fact_row(ui, fact, state.is_vote_pending(fact.id), intents);
                ui.add_space(6.0);
            }
            let footer = fact_count_label(state.facts.len());
            ui.label(RichText::new(footer).color(theme::MUTED_TEXT));
        });
}

fn fact_row(
    ui: &mut egui::Ui,
    fact: &Fact,
    vote_pending: bool,
    intents: &mut Vec<UiIntent>,
) {
    egui::Frame::new()
        .fill(theme::SURFACE)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                if fact.is_disputed() {
                    ui.label(
                        RichText::new(DISPUTED_MARKER)
                            .strong()
                            .color(theme::DISPUTED),
                    );
                }
                ui.label(RichText::new(&fact.text).size(16.0));
                let link = RichText::new("(Source)").color(theme::MUTED_TEXT);
                ui.hyperlink_to(link, &fact.source);
            });

            ui.horizontal(|ui| {
                egui::Frame::new()
                    .fill(theme::category_color(fact.category))
                    .corner_radius(CornerRadius::same(12))
                    .inner_margin(Margin::symmetric(8, 2))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(fact.category.name().to_uppercase())
                                .small()
                                .strong()
                                .color(Color32::WHITE),
                        );
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for column in VoteColumn::ALL.into_iter().rev() {
                        let label = vote_button_label(column, fact.votes(column));
                        let button = egui::Button::new(label);
                        if ui.add_enabled(!vote_pending, button).clicked() {
                            intents.push(UiIntent::CastVote {
                                fact_id: fact.id,
                                column,
                            });
                        }
                    }
                });
            });
        });
}
