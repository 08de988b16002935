// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact form panel.

use crate::contact::{ContactController, FormStatus};

const FIELD_WIDTH: f32 = 560.0;

fn field_error(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(error) = error {
        ui.label(
            egui::RichText::new(error)
                .small()
                .color(egui::Color32::from_rgb(248, 113, 113)),
        );
    }
}

/// Display the form. Returns `true` when "Send Message" was clicked.
pub fn show(ui: &mut egui::Ui, contact: &mut ContactController) -> bool {
    let errors = contact.errors().clone();
    let status = contact.status().clone();
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("Let's Work Together").size(32.0));
        ui.label(
            egui::RichText::new(
                "Ready to bring your engineering vision to life? Get in touch to discuss \
                 your next project and how we can collaborate.",
            )
            .color(egui::Color32::from_gray(180)),
        );
    });
    ui.add_space(16.0);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(FIELD_WIDTH);

            ui.label("Name *");
            ui.add(
                egui::TextEdit::singleline(&mut contact.form.name)
                    .hint_text("Your full name")
                    .desired_width(FIELD_WIDTH),
            );
            field_error(ui, errors.name.as_deref());
            ui.add_space(8.0);

            ui.label("Email *");
            ui.add(
                egui::TextEdit::singleline(&mut contact.form.email)
                    .hint_text("your.email@example.com")
                    .desired_width(FIELD_WIDTH),
            );
            field_error(ui, errors.email.as_deref());
            ui.add_space(8.0);

            ui.label("Message *");
            ui.add(
                egui::TextEdit::multiline(&mut contact.form.message)
                    .hint_text("Tell me about your project, timeline, and any specific requirements...")
                    .desired_rows(6)
                    .desired_width(FIELD_WIDTH),
            );
            field_error(ui, errors.message.as_deref());
            ui.add_space(12.0);

            let label = match &status {
                FormStatus::Submitting => "⏳ Sending...",
                FormStatus::Success => "✔ Message Sent!",
                _ => "✉ Send Message",
            };
            ui.horizontal(|ui| {
                let button = egui::Button::new(label).min_size(egui::vec2(FIELD_WIDTH * 0.5, 32.0));
                submit = ui.add_enabled(status != FormStatus::Submitting, button).clicked();
                if status == FormStatus::Submitting {
                    ui.spinner();
                }
            });

            match &status {
                FormStatus::Success => {
                    ui.add_space(8.0);
                    ui.colored_label(
                        egui::Color32::from_rgb(134, 239, 172),
                        "Thank you! Your message has been sent successfully. I'll get back to you soon.",
                    );
                }
                FormStatus::Error(message) => {
                    ui.add_space(8.0);
                    ui.colored_label(egui::Color32::from_rgb(252, 165, 165), message.as_str());
                }
                _ => {}
            }
        });

    submit
}
