//! Renders a [`UiTheme`] as configuration text for a UI library.
//!
//! Every exporter resolves palette links first, so the output only ever
//! contains concrete colors in the requested [`ColorFormat`].

#![allow(missing_docs)] // Derive macros generate undocumented methods.

mod config;
use config::*;

mod hero;
pub use hero::*;

mod mui;
pub use mui::*;

mod shadcn;
pub use shadcn::*;

use std::str::FromStr;

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, color::ColorFormat, theme::UiTheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Assoc)]
#[serde(rename_all = "lowercase")]
#[func(pub fn id(&self) -> &'static str)]
#[func(pub fn label(&self) -> &'static str)]
#[func(pub fn file_name(&self) -> &'static str)]
#[func(pub fn default_rounding(&self) -> f32)]
#[func(pub fn default_spacing(&self) -> f32)]
#[func(pub fn exporter(&self) -> &'static dyn Exporter)]
pub enum ExportTarget {
    /// Tailwind config with shadcn/ui's color names.
    #[assoc(id = "shadcn")]
    #[assoc(label = "shadcn/ui")]
    #[assoc(file_name = "tailwind.config.js")]
    #[assoc(default_rounding = 8.0)]
    #[assoc(default_spacing = 8.0)]
    #[assoc(exporter = &ShadcnExporter)]
    Shadcn,
    /// A `createTheme` call for Material UI.
    #[assoc(id = "mui")]
    #[assoc(label = "Material UI")]
    #[assoc(file_name = "theme.js")]
    #[assoc(default_rounding = 4.0)]
    #[assoc(default_spacing = 8.0)]
    #[assoc(exporter = &MuiExporter)]
    Mui,
    /// Tailwind config with Hero UI style `on-*` color names.
    #[assoc(id = "hero")]
    #[assoc(label = "Hero UI")]
    #[assoc(file_name = "tailwind.config.js")]
    #[assoc(default_rounding = 8.0)]
    #[assoc(default_spacing = 8.0)]
    #[assoc(exporter = &HeroExporter)]
    Hero,
}

impl ExportTarget {
    pub const ALL: [ExportTarget; 3] = [
        ExportTarget::Shadcn,
        ExportTarget::Mui,
        ExportTarget::Hero,
    ];

    /// The theme's rounding, or this target's default when it is not positive.
    pub fn rounding(self, theme: &UiTheme) -> f32 {
        positive_or(theme.rounding, self.default_rounding())
    }

    /// The theme's spacing, or this target's default when it is not positive.
    pub fn spacing(self, theme: &UiTheme) -> f32 {
        positive_or(theme.spacing, self.default_spacing())
    }
}

fn positive_or(value: f32, default: f32) -> f32 {
    if value > 0.0 { value } else { default }
}

impl FromStr for ExportTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownExportTarget(s.to_string()))
    }
}

impl std::fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Turns a theme into the configuration file of one UI library.
pub trait Exporter: Sync {
    fn target(&self) -> ExportTarget;

    fn export(&self, theme: &UiTheme, format: ColorFormat) -> String;
}

pub fn export_theme(theme: &UiTheme, target: ExportTarget, format: ColorFormat) -> String {
    debug!(theme = %theme.id, %target, %format, "exporting theme");
    target.exporter().export(theme, format)
}
