use indexmap::IndexMap;

use crate::{
    color::{Color, contrast_ratio},
    theme::{ThemeColor, ThemeRole, UiTheme, resolve_theme_color},
};

/// Foreground/background pairs that have to stay readable.
const AUDITED_PAIRS: [(ThemeRole, ThemeRole); 11] = [
    (ThemeRole::TextPrimary, ThemeRole::BackgroundDefault),
    (ThemeRole::TextPrimary, ThemeRole::BackgroundPaper),
    (ThemeRole::TextPrimary, ThemeRole::BackgroundComponent),
    (ThemeRole::SuccessText, ThemeRole::SuccessBackground),
    (ThemeRole::InfoText, ThemeRole::InfoBackground),
    (ThemeRole::WarningText, ThemeRole::WarningBackground),
    (ThemeRole::ErrorText, ThemeRole::ErrorBackground),
    (ThemeRole::ButtonPrimaryContainedText, ThemeRole::ButtonPrimaryContainedBackground),
    (ThemeRole::ButtonSecondaryContainedText, ThemeRole::ButtonSecondaryContainedBackground),
    (ThemeRole::ButtonErrorContainedText, ThemeRole::ButtonErrorContainedBackground),
    (ThemeRole::ButtonMutedContainedText, ThemeRole::ButtonMutedContainedBackground),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    pub foreground: ThemeRole,
    pub background: ThemeRole,
    pub ratio: f32,
    pub passes: bool,
}

/// Extension trait for reading concrete colors out of a theme.
pub trait ThemeExt {
    /// Resolves a theme color against the theme's own palette.
    fn resolve(&self, color: &ThemeColor) -> Color;

    fn role_color(&self, role: ThemeRole) -> Color;

    /// Every role, in declaration order, keyed by its dotted path.
    fn resolved_roles(&self) -> IndexMap<&'static str, Color>;

    /// Checks the readable pairs against the theme's contrast level.
    fn contrast_audit(&self) -> Vec<ContrastCheck>;
}

impl ThemeExt for UiTheme {
    fn resolve(&self, color: &ThemeColor) -> Color {
        resolve_theme_color(color, &self.palette)
    }

    fn role_color(&self, role: ThemeRole) -> Color {
        self.resolve(&role.resolve(&self.props))
    }

    fn resolved_roles(&self) -> IndexMap<&'static str, Color> {
        ThemeRole::ALL
            .into_iter()
            .map(|role| (role.path(), self.role_color(role)))
            .collect()
    }

    fn contrast_audit(&self) -> Vec<ContrastCheck> {
        AUDITED_PAIRS
            .into_iter()
            .map(|(foreground, background)| {
                let ratio =
                    contrast_ratio(self.role_color(foreground), self.role_color(background));
                ContrastCheck {
                    foreground,
                    background,
                    ratio,
                    passes: self.contrast_level.is_met_by(ratio),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorLink, default_theme};

    #[test]
    fn test_role_color_resolves_links() {
        let theme = default_theme();
        assert_eq!(
            theme.role_color(ThemeRole::ButtonPrimaryContainedBackground),
            theme.palette.primary()
        );
    }

    #[test]
    fn test_resolved_roles_cover_every_role_in_order() {
        let theme = default_theme();
        let roles = theme.resolved_roles();

        assert_eq!(roles.len(), ThemeRole::ALL.len());
        assert_eq!(roles.get_index(0).map(|(path, _)| *path), Some("background.default"));
        assert_eq!(roles["text.primary"], theme.role_color(ThemeRole::TextPrimary));
    }

    #[test]
    fn test_audit_flags_unreadable_pairs() {
        let mut theme = default_theme();
        theme.props.text.primary = theme.props.background.default.clone();

        let audit = theme.contrast_audit();
        assert_eq!(audit.len(), AUDITED_PAIRS.len());

        let first = audit[0];
        assert_eq!(first.foreground, ThemeRole::TextPrimary);
        assert!((first.ratio - 1.0).abs() < 1e-5);
        assert!(!first.passes);
    }

    #[test]
    fn test_dangling_link_resolves_to_black() {
        let theme = default_theme();
        assert_eq!(theme.resolve(&ColorLink::new("missing").into()), Color::BLACK);
    }
}
