use egui::{
    Align, Button, Color32, CornerRadius, Frame, Id, Layout, Margin, RichText, ScrollArea, Sense,
    Ui, Vec2, ViewportCommand,
};

use lapwatch::view::{LapBadge, LapRow, LapSummary, StopwatchView, SummaryCard};

use super::{
    ControlAction, DEFAULT_BUTTON_CORNER_RADIUS, DEFAULT_CARD_CORNER_RADIUS,
    DEFAULT_WINDOW_CORNER_RADIUS, PALETTE_BROWN, PALETTE_GREEN, PALETTE_ORANGE, StopwatchApp,
};

const TIME_FONT_SIZE: f32 = 44.;
const CONTROL_BUTTON_SIZE: Vec2 = Vec2::new(84., 32.);

fn badge_color(badge: LapBadge) -> Color32 {
    match badge {
        LapBadge::Best => PALETTE_GREEN,
        LapBadge::Worst => PALETTE_ORANGE,
    }
}

fn control_button(ui: &mut Ui, label: &str) -> bool {
    ui.add(
        Button::new(RichText::new(label).color(Color32::WHITE).size(16.))
            .min_size(CONTROL_BUTTON_SIZE)
            .corner_radius(DEFAULT_BUTTON_CORNER_RADIUS),
    )
    .clicked()
}

fn summary_card(ui: &mut Ui, title: &str, card: &SummaryCard, color: Color32) {
    Frame::new()
        .fill(PALETTE_BROWN)
        .corner_radius(DEFAULT_CARD_CORNER_RADIUS)
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(title).color(color).strong());
                ui.label(
                    RichText::new(&card.duration)
                        .monospace()
                        .size(18.)
                        .color(Color32::WHITE),
                );
                ui.label(RichText::new(format!("Lap {}", card.lap_id)).weak());
            });
        });
}

fn summary_cards(ui: &mut Ui, summary: &LapSummary) {
    ui.horizontal(|ui| {
        summary_card(ui, "Best lap", &summary.best, PALETTE_GREEN);
        summary_card(ui, "Worst lap", &summary.worst, PALETTE_ORANGE);
    });
    ui.label(RichText::new(format!("Average {}", summary.average)).weak());
}

fn lap_row(ui: &mut Ui, row: &LapRow) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Lap {:>2}", row.id)).color(Color32::WHITE));
        ui.label(
            RichText::new(&row.duration)
                .monospace()
                .color(Color32::WHITE),
        );
        ui.label(RichText::new(&row.cumulative).monospace().weak());
        if let Some(badge) = row.badge {
            ui.label(
                RichText::new(badge.label())
                    .color(badge_color(badge))
                    .strong(),
            );
        }
    });
}

impl StopwatchApp {
    /// Draws the window and returns the control the user clicked, if any.
    pub(crate) fn stopwatch_view(&mut self, ctx: &egui::Context) -> Option<ControlAction> {
        let view = StopwatchView::from_stopwatch(&self.stopwatch);
        let mut action = None;

        egui::TopBottomPanel::top("title")
            .min_height(30.)
            .frame(Frame::new().corner_radius(CornerRadius {
                nw: DEFAULT_WINDOW_CORNER_RADIUS,
                ne: DEFAULT_WINDOW_CORNER_RADIUS,
                ..Default::default()
            }))
            .show(ctx, |ui| {
                let drag_sense = ui.interact(ui.max_rect(), Id::new("window-drag"), Sense::drag());
                if drag_sense.dragged() {
                    ui.ctx().send_viewport_cmd(ViewportCommand::StartDrag);
                }
                if drag_sense.drag_stopped()
                    && let Some(outer_rect) = ui.input(|is| is.viewport().outer_rect)
                {
                    self.app_config.window_position = outer_rect.min.into();
                }
                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                    ui.add_space(10.);
                    ui.label(RichText::new("Lapwatch").color(Color32::WHITE).strong());

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.add_space(10.);
                        if ui
                            .add(Button::new("✕").corner_radius(DEFAULT_BUTTON_CORNER_RADIUS))
                            .clicked()
                        {
                            ctx.send_viewport_cmd(ViewportCommand::Close);
                        }
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .inner_margin(Margin::same(12))
                    .corner_radius(CornerRadius {
                        sw: DEFAULT_WINDOW_CORNER_RADIUS,
                        se: DEFAULT_WINDOW_CORNER_RADIUS,
                        ..Default::default()
                    }),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&view.time)
                            .monospace()
                            .size(TIME_FONT_SIZE)
                            .color(Color32::WHITE),
                    );
                    ui.add_space(6.);

                    ui.horizontal(|ui| {
                        if control_button(ui, view.primary.label()) {
                            action = Some(ControlAction::StartPause);
                        }
                        if control_button(ui, "Reset") {
                            action = Some(ControlAction::Reset);
                        }
                        if view.show_lap_control && control_button(ui, "Lap") {
                            action = Some(ControlAction::Lap);
                        }
                    });
                });

                ui.add_space(10.);
                if let Some(summary) = &view.summary {
                    summary_cards(ui, summary);
                    ui.add_space(6.);
                }

                ui.label(RichText::new(view.message).italics().weak());
                ui.separator();

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for row in &view.laps {
                            lap_row(ui, row);
                        }
                    });
            });

        action
    }
}
