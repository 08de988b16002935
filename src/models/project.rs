// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records shown in the gallery.
//!
//! A project is immutable once the catalog has been loaded. Validation of
//! the record-level invariants lives in [`super::catalog`].

use super::category::Category;
use serde::{Deserialize, Serialize};

/// Kind of media a reference points at, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

const VIDEO_EXTENSIONS: [&str; 3] = [".mkv", ".mp4", ".webm"];

impl MediaKind {
    /// Classify a media reference such as `/images/turbine-cover.jpg`.
    pub fn of(reference: &str) -> Self {
        let lower = reference.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// A single portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tools: Vec<String>,
    pub cover: String,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    /// Check whether the project carries at least one of `labels`.
    pub fn has_any_category<'a>(&self, mut labels: impl Iterator<Item = &'a Category>) -> bool {
        labels.any(|label| self.categories.contains(label))
    }

    /// Media kind of the gallery thumbnail.
    pub fn cover_kind(&self) -> MediaKind {
        MediaKind::of(&self.cover)
    }

    /// The first `limit` tools plus how many were left out.
    pub fn tool_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tools.len().min(limit);
        (&self.tools[..shown], self.tools.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project {
            id: "turbine-housing".into(),
            title: "Turbine Housing Assembly".into(),
            year: 2025,
            categories: vec!["Renders".into(), "Schematics".into()],
            tools: vec![
                "Fusion 360".into(),
                "KeyShot".into(),
                "Blender".into(),
                "ANSYS".into(),
            ],
            cover: "/images/turbine-cover.jpg".into(),
            images: vec!["/images/turbine-1.jpg".into()],
            model_url: Some("/models/turbine.glb".into()),
            video_url: None,
            description: None,
        }
    }

    #[test]
    fn test_media_kind_by_extension() {
        assert_eq!(MediaKind::of("/videos/Piston.mkv"), MediaKind::Video);
        assert_eq!(MediaKind::of("/videos/spin.MP4"), MediaKind::Video);
        assert_eq!(MediaKind::of("/videos/spin.webm"), MediaKind::Video);
        assert_eq!(MediaKind::of("/images/cover.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::of("/images/cover"), MediaKind::Image);
    }

    #[test]
    fn test_tool_preview_truncates() {
        let project = sample();
        let (shown, hidden) = project.tool_preview(3);
        assert_eq!(shown, ["Fusion 360", "KeyShot", "Blender"]);
        assert_eq!(hidden, 1);

        let (shown, hidden) = project.tool_preview(10);
        assert_eq!(shown.len(), 4);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_has_any_category() {
        let project = sample();
        let renders = Category::from("Renders");
        let simulation = Category::from("Simulation");
        assert!(project.has_any_category([&simulation, &renders].into_iter()));
        assert!(!project.has_any_category([&simulation].into_iter()));
        assert!(!project.has_any_category(std::iter::empty()));
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let yaml = r#"
id: medical-device
title: Medical Device Prototype
year: 2024
categories: [Renders, Prototyping]
cover: /images/medical-cover.jpg
images: [/images/medical-1.jpg]
modelUrl: /models/medical-device.glb
"#;
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.model_url.as_deref(), Some("/models/medical-device.glb"));
        assert!(project.tools.is_empty());
        assert!(project.description.is_none());
    }
}
