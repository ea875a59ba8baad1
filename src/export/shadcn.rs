use super::{ConfigObject, ExportTarget, Exporter, px};
use crate::{
    color::ColorFormat,
    theme::{ThemeExt, ThemeRole, UiTheme},
};

/// `tailwind.config.js` for shadcn/ui.
pub struct ShadcnExporter;

impl Exporter for ShadcnExporter {
    fn target(&self) -> ExportTarget {
        ExportTarget::Shadcn
    }

    fn export(&self, theme: &UiTheme, format: ColorFormat) -> String {
        let color = |role: ThemeRole| theme.role_color(role).format(format);
        let pair = |default: ThemeRole, foreground: ThemeRole| {
            ConfigObject::new()
                .text("DEFAULT", color(default))
                .text("foreground", color(foreground))
        };

        let colors = ConfigObject::new()
            .text("background", color(ThemeRole::BackgroundDefault))
            .text("foreground", color(ThemeRole::TextPrimary))
            .object(
                "primary",
                pair(
                    ThemeRole::ButtonPrimaryContainedBackground,
                    ThemeRole::ButtonPrimaryContainedText,
                ),
            )
            .object(
                "secondary",
                pair(
                    ThemeRole::ButtonSecondaryContainedBackground,
                    ThemeRole::ButtonSecondaryContainedText,
                ),
            )
            .object(
                "destructive",
                pair(
                    ThemeRole::ButtonErrorContainedBackground,
                    ThemeRole::ButtonErrorContainedText,
                ),
            )
            .object(
                "muted",
                pair(ThemeRole::BackgroundComponent, ThemeRole::TextSecondary),
            )
            .object(
                "accent",
                pair(ThemeRole::BackgroundComponent, ThemeRole::TextPrimary),
            )
            .object(
                "card",
                pair(ThemeRole::BackgroundPaper, ThemeRole::TextPrimary),
            )
            .object(
                "popover",
                pair(ThemeRole::BackgroundPaper, ThemeRole::TextPrimary),
            )
            .text("border", color(ThemeRole::ButtonMutedOutlinedBorder))
            .text("input", color(ThemeRole::ButtonMutedOutlinedBorder))
            .text("ring", color(ThemeRole::ButtonPrimaryContainedBackground));

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

        format!("// tailwind.config.js\nmodule.exports = {}", config.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::default_theme;

    #[test]
    fn test_shadcn_layout() {
        let theme = default_theme();
        let output = ShadcnExporter.export(&theme, ColorFormat::Hex);

        assert!(output.starts_with(concat!(
            "// tailwind.config.js\n",
            "module.exports = {\n  theme: {\n    extend: {\n      colors: {\n",
        )));
        assert!(output.contains(&format!(
            concat!(
                "        background: '{}',\n",
                "        foreground: '{}',\n",
                "        primary: {{\n          DEFAULT: '{}',\n",
            ),
            theme.role_color(ThemeRole::BackgroundDefault),
            theme.role_color(ThemeRole::TextPrimary),
            theme.palette.primary(),
        )));
        assert!(output.contains("      borderRadius: {\n        DEFAULT: '8px',\n      },\n"));
        assert!(output.contains("      spacing: {\n        DEFAULT: '8px',\n      },\n"));
        assert!(output.ends_with("  },\n}"));
    }

    #[test]
    fn test_shadcn_key_order() {
        let output = ShadcnExporter.export(&default_theme(), ColorFormat::Hex);
        let keys = [
            "background:",
            "foreground:",
            "primary:",
            "secondary:",
            "destructive:",
            "muted:",
            "accent:",
            "card:",
            "popover:",
            "border:",
            "input:",
            "ring:",
        ];

        let positions: Vec<usize> = keys.iter().map(|key| output.find(key).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    }
}
