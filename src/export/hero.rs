use super::{ConfigObject, ExportTarget, Exporter, px};
use crate::{
    color::ColorFormat,
    theme::{ThemeExt, ThemeRole, UiTheme},
};

const HEADER: &str = "// tailwind.config.js\n\
    const colors = require('tailwindcss/colors')\n\n";

/// `tailwind.config.js` for Hero UI.
pub struct HeroExporter;

impl Exporter for HeroExporter {
    fn target(&self) -> ExportTarget {
        ExportTarget::Hero
    }

    fn export(&self, theme: &UiTheme, format: ColorFormat) -> String {
        let color = |role: ThemeRole| theme.role_color(role).format(format);

        let colors = ConfigObject::new()
            .text(
                "primary",
                color(ThemeRole::ButtonPrimaryContainedBackground),
            )
            .text(
                "secondary",
                color(ThemeRole::ButtonSecondaryContainedBackground),
            )
            .text("background", color(ThemeRole::BackgroundDefault))
            .text("error", color(ThemeRole::ButtonErrorContainedBackground))
            .text("surface", color(ThemeRole::BackgroundPaper))
            .text("on-surface", color(ThemeRole::TextPrimary))
            .text("on-primary", color(ThemeRole::ButtonPrimaryContainedText))
            .text(
                "on-secondary",
                color(ThemeRole::ButtonSecondaryContainedText),
            )
            .text("on-error", color(ThemeRole::ButtonErrorContainedText));

        let target = self.target();
        let extend = ConfigObject::new()
            .object("colors", colors)
            .object(
                "borderRadius",
                ConfigObject::new().text("DEFAULT", px(target.rounding(theme))),
            )
            .object(
                "spacing",
                ConfigObject::new().text("DEFAULT", px(target.spacing(theme))),
            );

        let config = ConfigObject::new()
            .object("theme", ConfigObject::new().object("extend", extend));

        format!("{HEADER}module.exports = {}", config.render())
    }
}
