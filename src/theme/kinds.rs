#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::theme::{ThemeColor, ThemeProps};

/// Every leaf color of [`ThemeProps`], addressable by its dotted path.
///
/// Use `resolve()` to look the role up in a set of props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn path(&self) -> &'static str)]
#[func(pub fn resolve(&self, props: &ThemeProps) -> ThemeColor)]
pub enum ThemeRole {
    /// Page background.
    #[assoc(path = "background.default")]
    #[assoc(resolve = props.background.default.clone())]
    BackgroundDefault,
    /// Cards, sheets and other raised surfaces.
    #[assoc(path = "background.paper")]
    #[assoc(resolve = props.background.paper.clone())]
    BackgroundPaper,
    /// Inputs and other controls sitting on a surface.
    #[assoc(path = "background.component")]
    #[assoc(resolve = props.background.component.clone())]
    BackgroundComponent,
    /// Body text.
    #[assoc(path = "text.primary")]
    #[assoc(resolve = props.text.primary.clone())]
    TextPrimary,
    /// Supporting text.
    #[assoc(path = "text.secondary")]
    #[assoc(resolve = props.text.secondary.clone())]
    TextSecondary,
    /// Text of inactive controls.
    #[assoc(path = "text.disabled")]
    #[assoc(resolve = props.text.disabled.clone())]
    TextDisabled,
    /// Text of success alerts.
    #[assoc(path = "success.text")]
    #[assoc(resolve = props.success.text.clone())]
    SuccessText,
    /// Background of success alerts.
    #[assoc(path = "success.background")]
    #[assoc(resolve = props.success.background.clone())]
    SuccessBackground,
    /// Text of info alerts.
    #[assoc(path = "info.text")]
    #[assoc(resolve = props.info.text.clone())]
    InfoText,
    /// Background of info alerts.
    #[assoc(path = "info.background")]
    #[assoc(resolve = props.info.background.clone())]
    InfoBackground,
    /// Text of warning alerts.
    #[assoc(path = "warning.text")]
    #[assoc(resolve = props.warning.text.clone())]
    WarningText,
    /// Background of warning alerts.
    #[assoc(path = "warning.background")]
    #[assoc(resolve = props.warning.background.clone())]
    WarningBackground,
    /// Text of error alerts.
    #[assoc(path = "error.text")]
    #[assoc(resolve = props.error.text.clone())]
    ErrorText,
    /// Background of error alerts.
    #[assoc(path = "error.background")]
    #[assoc(resolve = props.error.background.clone())]
    ErrorBackground,
    /// Background of contained primary buttons.
    #[assoc(path = "buttons.primary.contained.background")]
    #[assoc(resolve = props.buttons.primary.contained.background.clone())]
    ButtonPrimaryContainedBackground,
    /// Text of contained primary buttons.
    #[assoc(path = "buttons.primary.contained.text")]
    #[assoc(resolve = props.buttons.primary.contained.text.clone())]
    ButtonPrimaryContainedText,
    /// Border of outlined primary buttons.
    #[assoc(path = "buttons.primary.outlined.border")]
    #[assoc(resolve = props.buttons.primary.outlined.border.clone())]
    ButtonPrimaryOutlinedBorder,
    /// Text of outlined primary buttons.
    #[assoc(path = "buttons.primary.outlined.text")]
    #[assoc(resolve = props.buttons.primary.outlined.text.clone())]
    ButtonPrimaryOutlinedText,
    /// Label of primary text buttons.
    #[assoc(path = "buttons.primary.text.text")]
    #[assoc(resolve = props.buttons.primary.text.text.clone())]
    ButtonPrimaryTextText,
    /// Background of contained secondary buttons.
    #[assoc(path = "buttons.secondary.contained.background")]
    #[assoc(resolve = props.buttons.secondary.contained.background.clone())]
    ButtonSecondaryContainedBackground,
    /// Text of contained secondary buttons.
    #[assoc(path = "buttons.secondary.contained.text")]
    #[assoc(resolve = props.buttons.secondary.contained.text.clone())]
    ButtonSecondaryContainedText,
    /// Border of outlined secondary buttons.
    #[assoc(path = "buttons.secondary.outlined.border")]
    #[assoc(resolve = props.buttons.secondary.outlined.border.clone())]
    ButtonSecondaryOutlinedBorder,
    /// Text of outlined secondary buttons.
    #[assoc(path = "buttons.secondary.outlined.text")]
    #[assoc(resolve = props.buttons.secondary.outlined.text.clone())]
    ButtonSecondaryOutlinedText,
    /// Label of secondary text buttons.
    #[assoc(path = "buttons.secondary.text.text")]
    #[assoc(resolve = props.buttons.secondary.text.text.clone())]
    ButtonSecondaryTextText,
    /// Background of contained error buttons.
    #[assoc(path = "buttons.error.contained.background")]
    #[assoc(resolve = props.buttons.error.contained.background.clone())]
    ButtonErrorContainedBackground,
    /// Text of contained error buttons.
    #[assoc(path = "buttons.error.contained.text")]
    #[assoc(resolve = props.buttons.error.contained.text.clone())]
    ButtonErrorContainedText,
    /// Border of outlined error buttons.
    #[assoc(path = "buttons.error.outlined.border")]
    #[assoc(resolve = props.buttons.error.outlined.border.clone())]
    ButtonErrorOutlinedBorder,
    /// Text of outlined error buttons.
    #[assoc(path = "buttons.error.outlined.text")]
    #[assoc(resolve = props.buttons.error.outlined.text.clone())]
    ButtonErrorOutlinedText,
    /// Label of error text buttons.
    #[assoc(path = "buttons.error.text.text")]
    #[assoc(resolve = props.buttons.error.text.text.clone())]
    ButtonErrorTextText,
    /// Background of contained muted buttons.
    #[assoc(path = "buttons.muted.contained.background")]
    #[assoc(resolve = props.buttons.muted.contained.background.clone())]
    ButtonMutedContainedBackground,
    /// Text of contained muted buttons.
    #[assoc(path = "buttons.muted.contained.text")]
    #[assoc(resolve = props.buttons.muted.contained.text.clone())]
    ButtonMutedContainedText,
    /// Border of outlined muted buttons.
    #[assoc(path = "buttons.muted.outlined.border")]
    #[assoc(resolve = props.buttons.muted.outlined.border.clone())]
    ButtonMutedOutlinedBorder,
    /// Text of outlined muted buttons.
    #[assoc(path = "buttons.muted.outlined.text")]
    #[assoc(resolve = props.buttons.muted.outlined.text.clone())]
    ButtonMutedOutlinedText,
    /// Label of muted text buttons.
    #[assoc(path = "buttons.muted.text.text")]
    #[assoc(resolve = props.buttons.muted.text.text.clone())]
    ButtonMutedTextText,
    /// Background of contained disabled buttons.
    #[assoc(path = "buttons.disabled.contained.background")]
    #[assoc(resolve = props.buttons.disabled.contained.background.clone())]
    ButtonDisabledContainedBackground,
    /// Text of contained disabled buttons.
    #[assoc(path = "buttons.disabled.contained.text")]
    #[assoc(resolve = props.buttons.disabled.contained.text.clone())]
    ButtonDisabledContainedText,
    /// Border of outlined disabled buttons.
    #[assoc(path = "buttons.disabled.outlined.border")]
    #[assoc(resolve = props.buttons.disabled.outlined.border.clone())]
    ButtonDisabledOutlinedBorder,
    /// Text of outlined disabled buttons.
    #[assoc(path = "buttons.disabled.outlined.text")]
    #[assoc(resolve = props.buttons.disabled.outlined.text.clone())]
    ButtonDisabledOutlinedText,
    /// Label of disabled text buttons.
    #[assoc(path = "buttons.disabled.text.text")]
    #[assoc(resolve = props.buttons.disabled.text.text.clone())]
    ButtonDisabledTextText,
}

impl ThemeRole {
    pub const ALL: [ThemeRole; 39] = [
        ThemeRole::BackgroundDefault,
        ThemeRole::BackgroundPaper,
        ThemeRole::BackgroundComponent,
        ThemeRole::TextPrimary,
        ThemeRole::TextSecondary,
        ThemeRole::TextDisabled,
        ThemeRole::SuccessText,
        ThemeRole::SuccessBackground,
        ThemeRole::InfoText,
        ThemeRole::InfoBackground,
        ThemeRole::WarningText,
        ThemeRole::WarningBackground,
        ThemeRole::ErrorText,
        ThemeRole::ErrorBackground,
        ThemeRole::ButtonPrimaryContainedBackground,
        ThemeRole::ButtonPrimaryContainedText,
        ThemeRole::ButtonPrimaryOutlinedBorder,
        ThemeRole::ButtonPrimaryOutlinedText,
        ThemeRole::ButtonPrimaryTextText,
        ThemeRole::ButtonSecondaryContainedBackground,
        ThemeRole::ButtonSecondaryContainedText,
        ThemeRole::ButtonSecondaryOutlinedBorder,
        ThemeRole::ButtonSecondaryOutlinedText,
        ThemeRole::ButtonSecondaryTextText,
        ThemeRole::ButtonErrorContainedBackground,
        ThemeRole::ButtonErrorContainedText,
        ThemeRole::ButtonErrorOutlinedBorder,
        ThemeRole::ButtonErrorOutlinedText,
        ThemeRole::ButtonErrorTextText,
        ThemeRole::ButtonMutedContainedBackground,
        ThemeRole::ButtonMutedContainedText,
        ThemeRole::ButtonMutedOutlinedBorder,
        ThemeRole::ButtonMutedOutlinedText,
        ThemeRole::ButtonMutedTextText,
        ThemeRole::ButtonDisabledContainedBackground,
        ThemeRole::ButtonDisabledContainedText,
        ThemeRole::ButtonDisabledOutlinedBorder,
        ThemeRole::ButtonDisabledOutlinedText,
        ThemeRole::ButtonDisabledTextText,
    ];

    pub fn from_path(path: &str) -> Option<ThemeRole> {
        Self::ALL.into_iter().find(|role| role.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<&str> = ThemeRole::ALL.iter().map(|role| role.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), ThemeRole::ALL.len());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            ThemeRole::from_path("buttons.primary.contained.background"),
            Some(ThemeRole::ButtonPrimaryContainedBackground)
        );
        assert_eq!(ThemeRole::from_path("buttons.primary"), None);
    }

    #[test]
    fn test_resolve_reads_the_matching_field() {
        let props = ThemeProps::defaults(false);
        assert_eq!(ThemeRole::BackgroundDefault.resolve(props), props.background.default);
        assert_eq!(ThemeRole::WarningText.resolve(props), props.warning.text);
        assert_eq!(
            ThemeRole::ButtonDisabledOutlinedBorder.resolve(props),
            props.buttons.disabled.outlined.border
        );
    }
}
