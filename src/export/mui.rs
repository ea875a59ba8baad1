use super::{ConfigObject, ExportTarget, Exporter};
use crate::{
    color::ColorFormat,
    theme::{ThemeExt, ThemeRole, UiTheme},
};

const HEADER: &str = "// theme.js\n\
    import { createTheme } from '@mui/material/styles';\n\n";

/// Hover tint is the primary color at `0x20` alpha.
const HOVER_ALPHA: f32 = 0x20 as f32 / 0xff as f32;

/// `theme.js` for Material UI.
pub struct MuiExporter;

impl Exporter for MuiExporter {
    fn target(&self) -> ExportTarget {
        ExportTarget::Mui
    }

    fn export(&self, theme: &UiTheme, format: ColorFormat) -> String {
        let color = |role: ThemeRole| theme.role_color(role).format(format);
        let main = |main: ThemeRole, contrast: ThemeRole| {
            ConfigObject::new()
                .text("main", color(main))
                .text("contrastText", color(contrast))
        };
        let hover = theme
            .role_color(ThemeRole::ButtonPrimaryContainedBackground)
            .with_alpha(HOVER_ALPHA)
            .format(format);

        let palette = ConfigObject::new()
            .text("mode", if theme.is_dark_mode { "dark" } else { "light" })
            .object(
                "background",
                ConfigObject::new()
                    .text("default", color(ThemeRole::BackgroundDefault))
                    .text("paper", color(ThemeRole::BackgroundPaper)),
            )
            .object(
                "text",
                ConfigObject::new()
                    .text("primary", color(ThemeRole::TextPrimary))
                    .text("secondary", color(ThemeRole::TextSecondary))
                    .text("disabled", color(ThemeRole::TextDisabled)),
            )
            .object(
                "primary",
                main(
                    ThemeRole::ButtonPrimaryContainedBackground,
                    ThemeRole::ButtonPrimaryContainedText,
                ),
            )
            .object(
                "secondary",
                main(
                    ThemeRole::ButtonSecondaryContainedBackground,
                    ThemeRole::ButtonSecondaryContainedText,
                ),
            )
            .object(
                "error",
                main(
                    ThemeRole::ButtonErrorContainedBackground,
                    ThemeRole::ButtonErrorContainedText,
                ),
            )
            .object(
                "action",
                ConfigObject::new()
                    .text("active", color(ThemeRole::ButtonPrimaryContainedBackground))
                    .text("hover", hover)
                    .text(
                        "disabled",
                        color(ThemeRole::ButtonDisabledContainedBackground),
                    )
                    .text(
                        "disabledBackground",
                        color(ThemeRole::ButtonDisabledContainedBackground),
                    ),
            )
            .text("divider", color(ThemeRole::ButtonMutedOutlinedBorder));

        let target = self.target();
        let config = ConfigObject::new()
            .object("palette", palette)
            .object(
                "shape",
                ConfigObject::new().number("borderRadius", target.rounding(theme)),
            )
            .number("spacing", target.spacing(theme));

        format!("{HEADER}export const theme = createTheme({});", config.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeOptions, create_theme_from_palette, default_theme};

    #[test]
    fn test_mui_layout() {
        let theme = default_theme();
        let output = MuiExporter.export(&theme, ColorFormat::Hex);

        assert!(output.starts_with(HEADER));
        assert!(output[HEADER.len()..].starts_with(
            "export const theme = createTheme({\n  palette: {\n    mode: 'light',\n"
        ));
        assert!(output.contains("  shape: {\n    borderRadius: 8,\n  },\n  spacing: 8,\n});"));
    }

    #[test]
    fn test_mui_hover_is_translucent_primary() {
        let theme = default_theme();
        let output = MuiExporter.export(&theme, ColorFormat::Hex);
        let primary = theme.palette.primary().format(ColorFormat::Hex);

        assert!(output.contains(&format!("hover: '{primary}20',")), "{output}");
    }

    #[test]
    fn test_mui_dark_mode_and_default_radius() {
        let options = ThemeOptions {
            is_dark_mode: Some(true),
            rounding: Some(0.0),
            ..Default::default()
        };
        let theme = create_theme_from_palette(default_theme().palette, &options);
        let output = MuiExporter.export(&theme, ColorFormat::Rgb);

        assert!(output.contains("mode: 'dark',"));
        assert!(output.contains("borderRadius: 4,"));
        assert!(output.contains("hover: 'rgba("));
    }
}
