// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static page sections: hero, about and footer.

/// Page sections that navigation buttons can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Top,
    About,
    Projects,
    Contact,
}

const CAPABILITIES: [(&str, &str); 6] = [
    ("CAD Modeling", "Precision 3D modeling with industry-standard software"),
    ("DFM/DFA", "Design for Manufacturing and Assembly optimization"),
    ("Exploded Views", "Technical documentation and assembly visualization"),
    ("Animation", "Motion studies and assembly animations"),
    ("Photoreal Rendering", "High-quality visualizations with PBR materials"),
    ("Simulation", "FEA, CFD, and motion analysis"),
];

const TOOLS: [&str; 12] = [
    "Fusion 360", "SolidWorks", "Inventor", "CATIA", "Rhino", "Blender",
    "KeyShot", "V-Ray", "ANSYS", "ABAQUS", "MATLAB", "RobotStudio",
];

const STATS: [(&str, &str); 3] = [("5+", "Years Experience"), ("12+", "Toolchain"), ("6+", "Industries")];

/// Scroll the enclosing scroll area so this point is at the top, if asked to.
pub fn anchor(ui: &mut egui::Ui, section: Section, pending: &mut Option<Section>) {
    if *pending == Some(section) {
        ui.scroll_to_cursor(Some(egui::Align::TOP));
        *pending = None;
    }
}

pub fn hero(ui: &mut egui::Ui) -> Option<Section> {
    let mut target = None;
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(egui::RichText::new("Welcome to").size(40.0).color(egui::Color32::WHITE));
        ui.label(
            egui::RichText::new("Fresh Egg Engineering")
                .size(56.0)
                .strong()
                .color(super::ACCENT),
        );
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Schematics, renderings, and simulation-ready models for modern engineering teams.")
                .size(20.0)
                .color(egui::Color32::from_gray(190)),
        );
        ui.add_space(24.0);
        ui.horizontal(|ui| {
            // keep the pair centered
            let pair_width = 300.0;
            ui.add_space(((ui.available_width() - pair_width) / 2.0).max(0.0));
            if ui.add(egui::Button::new("View Projects").min_size(egui::vec2(140.0, 36.0))).clicked() {
                target = Some(Section::Projects);
            }
            if ui.add(egui::Button::new("Contact").min_size(egui::vec2(140.0, 36.0))).clicked() {
                target = Some(Section::Contact);
            }
        });
        ui.add_space(60.0);
    });
    target
}

pub fn about(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("About the Work").size(32.0));
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "Specializing in advanced 3D modeling, engineering visualization, and simulation, \
                 I create detailed technical documentation and photorealistic renders that bridge \
                 the gap between concept and reality.",
            )
            .color(egui::Color32::from_gray(200)),
        );
        ui.label(
            egui::RichText::new(
                "With expertise spanning multiple industries including aerospace, automotive, \
                 medical devices, and consumer electronics, I deliver solutions that meet \
                 the highest standards of precision and innovation.",
            )
            .color(egui::Color32::from_gray(200)),
        );
        ui.add_space(16.0);

        ui.columns(STATS.len(), |columns| {
            for (column, (value, label)) in columns.iter_mut().zip(STATS) {
                column.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(value).size(24.0).strong().color(super::ACCENT));
                    ui.label(egui::RichText::new(label).small().weak());
                });
            }
        });
        ui.add_space(24.0);

        ui.heading("Core Capabilities");
    });
    ui.add_space(8.0);

    egui::Grid::new("capabilities")
        .num_columns(3)
        .spacing([24.0, 16.0])
        .show(ui, |ui| {
            for (i, (title, description)) in CAPABILITIES.iter().enumerate() {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(*title).strong().size(16.0));
                    ui.label(egui::RichText::new(*description).small().weak());
                });
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.heading("Tools & Technologies");
    });
    ui.horizontal_wrapped(|ui| {
        for tool in TOOLS {
            super::chip(ui, tool, egui::Color32::from_gray(50));
        }
    });
}

pub fn footer(ui: &mut egui::Ui) -> Option<Section> {
    let mut target = None;
    ui.separator();
    ui.columns(2, |columns| {
        columns[0].label(egui::RichText::new("Fresh Egg Engineering").strong().size(18.0));
        columns[0].label(
            egui::RichText::new(
                "Professional 3D modeling, engineering visualization, and simulation services \
                 for modern engineering teams and innovative projects.",
            )
            .weak(),
        );

        columns[1].label(egui::RichText::new("Quick Links").strong());
        for (name, section) in [
            ("About", Section::About),
            ("Projects", Section::Projects),
            ("Contact", Section::Contact),
        ] {
            if columns[1].link(name).clicked() {
                target = Some(section);
            }
        }
    });
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("© FreshEggEng. All rights reserved.").small().weak());
        if ui.small_button("⬆ Back to top").clicked() {
            target = Some(Section::Top);
        }
    });
    target
}
