//! Data types describing the entries of an action menu.

use crate::theme::RowOverrides;

/// One selectable entry of the menu.
///
/// `name` is what the host receives when the row is clicked and also keys the row's
/// egui id, so it must be unique within one menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionDescriptor {
    pub name: String,
    pub display_name: String,
    /// Icon identifier, see [`crate::icons::resolve_glyph`].
    pub icon: Option<String>,
    /// Presentation overrides merged onto the row defaults.
    pub overrides: RowOverrides,
}

impl ActionDescriptor {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            icon: None,
            overrides: RowOverrides::default(),
        }
    }

    /// Show a leading icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Replace the row's presentation overrides.
    pub fn overrides(mut self, overrides: RowOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Label as shown in the row: the resolved glyph (if any) followed by the display name.
    pub fn label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", crate::icons::resolve_glyph(icon), self.display_name),
            None => self.display_name.clone(),
        }
    }
}
