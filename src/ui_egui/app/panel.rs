use egui::{Id, LayerId, Margin, Order, Stroke};

use super::BirthdayApp;
use crate::models::countdown::CountdownSnapshot;
use crate::ui_egui::views::{
    render_confetti_button, render_countdown, render_header, render_wish_card,
};

const CARD_MAX_WIDTH: f32 = 720.0;
const INTRO_SECONDS: f32 = 0.6;
const WISH_REVEAL_SECONDS: f32 = 0.8;

impl BirthdayApp {
    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context, snapshot: &CountdownSnapshot) {
        let theme = &self.active_theme;
        let intro = ctx.animate_bool_with_time(
            Id::new("birthday_card_intro"),
            self.intro_started,
            INTRO_SECONDS,
        );
        let reveal = ctx.animate_bool_with_time(
            Id::new("wish_card_reveal"),
            snapshot.ended,
            WISH_REVEAL_SECONDS,
        );
        let name = self.settings.display_name();
        let mut burst_requested = false;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(theme.app_background)
                    .inner_margin(Margin::same(24.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0 * (1.0 - intro));
                        ui.set_opacity(intro);

                        egui::Frame::none()
                            .fill(theme.card_background)
                            .stroke(Stroke::new(1.0, theme.card_border))
                            .rounding(24.0)
                            .inner_margin(Margin::same(32.0))
                            .show(ui, |ui| {
                                ui.set_max_width(CARD_MAX_WIDTH);
                                render_header(ui, theme, name, snapshot.ended);
                                ui.add_space(28.0);

                                if snapshot.ended {
                                    render_wish_card(ui, theme, &self.wish_text, reveal);
                                } else {
                                    render_countdown(ui, theme, &snapshot.parts);
                                }

                                ui.add_space(28.0);
                                ui.vertical_centered(|ui| {
                                    burst_requested = render_confetti_button(ui, theme);
                                });
                            });
                    });
                });
            });

        self.intro_started = true;
        if burst_requested {
            self.handle_confetti_button();
        }
    }

    pub(super) fn paint_confetti(&self, ctx: &egui::Context) {
        if !self.confetti.is_animating() {
            return;
        }
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti")));
        self.confetti.paint(&painter);
    }
}
