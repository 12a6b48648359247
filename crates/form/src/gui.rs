//! A native egui front end for the estimator.
//!
//! See [`run`].

use std::time::Instant;

use eframe::egui;
use hedonic_model::Variable;

use crate::Controller;

/// Opens a blocking egui window driving `controller`.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn run(controller: Controller, title: &str) -> Result<(), eframe::Error> {
    let heading = title.to_owned();
    eframe::run_native(
        title,
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(EstimatorApp::new(controller, heading)))),
    )
}

/// The egui [`eframe::App`] that renders a [`Controller`].
struct EstimatorApp {
    controller: Controller,
    heading: String,
}

impl EstimatorApp {
    fn new(controller: Controller, heading: String) -> Self {
        Self {
            controller,
            heading,
        }
    }

    fn header_ui(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            ui.heading(&self.heading);

            let label = if self.controller.is_toggle_rotated() {
                "Hide estimator"
            } else {
                "Show estimator"
            };
            if ui.button(label).clicked() {
                self.controller.toggle(now);
            }
        });
    }

    fn price_ui(&self, ui: &mut egui::Ui, now: Instant) {
        let Some(text) = self.controller.price_text() else {
            return;
        };

        let color = if self.controller.is_pulsing(now) {
            ui.visuals().warn_fg_color
        } else {
            ui.visuals().strong_text_color()
        };
        ui.label("Predicted median home value");
        ui.label(egui::RichText::new(text).size(32.0).strong().color(color));
    }

    fn dropdowns_ui(&mut self, ui: &mut egui::Ui, now: Instant) {
        let mut picked = None;

        egui::Grid::new("variables")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for variable in Variable::ALL {
                    let Some(dropdown) = self.controller.dropdown(variable) else {
                        continue;
                    };

                    ui.label(variable.key())
                        .on_hover_text(variable.description());

                    let selected_text = dropdown
                        .selected_choice()
                        .map(|choice| choice.text.clone())
                        .unwrap_or_default();
                    egui::ComboBox::from_id_salt(variable.key())
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            for (index, choice) in dropdown.options().iter().enumerate() {
                                let is_selected = dropdown.selected() == Some(index);
                                if ui.selectable_label(is_selected, &choice.text).clicked() {
                                    picked = Some((variable, index));
                                }
                            }
                        });
                    ui.end_row();
                }
            });

        if let Some((variable, index)) = picked {
            self.controller.change(variable, index, now);
        }
    }
}

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.header_ui(ui, now);

            if !self.controller.is_panel_visible() {
                return;
            }

            ui.separator();
            self.price_ui(ui, now);
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.dropdowns_ui(ui, now);
            });
        });

        if let Some(remaining) = self.controller.pulse_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
