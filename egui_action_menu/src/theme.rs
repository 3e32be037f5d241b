//! Presentation defaults for the action menu and the override structs merged onto them.

use egui::{Color32, Stroke, Vec2};

/// Full presentation of an action menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionMenuTheme {
    pub trigger: TriggerStyle,
    pub overlay: OverlayStyle,
    pub row: RowStyle,
}

/// The always-visible trigger button.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerStyle {
    /// Icon identifier, see [`crate::icons::resolve_glyph`].
    pub icon: String,
    /// Glyph size in points.
    pub icon_size: f32,
    /// Glyph color. `None` uses the current visuals.
    pub color: Option<Color32>,
    /// Draw the button frame. The default trigger is a clear button.
    pub frame: bool,
    pub min_size: Vec2,
}

impl Default for TriggerStyle {
    fn default() -> Self {
        Self {
            icon: "moreVertical".to_owned(),
            icon_size: 18.0,
            color: None,
            frame: false,
            min_size: Vec2::splat(24.0),
        }
    }
}

/// The floating panel holding the rows.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayStyle {
    pub max_width: f32,
    pub min_width: f32,
    /// Padding between the panel border and the rows.
    pub inner_margin: f32,
    /// Vertical distance between the trigger and the panel.
    pub gap: f32,
    /// Panel fill. `None` uses the window fill of the current visuals.
    pub fill: Option<Color32>,
    pub corner_radius: f32,
    /// Drop shadow under the panel.
    pub shadow: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            max_width: 300.0,
            min_width: 120.0,
            inner_margin: 0.0,
            gap: 4.0,
            fill: None,
            corner_radius: 4.0,
            shadow: true,
        }
    }
}

/// A single row of the menu.
#[derive(Clone, Debug, PartialEq)]
pub struct RowStyle {
    pub text_size: f32,
    /// Label color. `None` uses the text color of the current visuals.
    pub text_color: Option<Color32>,
    /// Row background. `None` leaves it transparent.
    pub fill: Option<Color32>,
    /// Space above and below the row.
    pub margin_y: f32,
    pub min_height: f32,
    pub corner_radius: f32,
    /// Line drawn between adjacent rows.
    pub divider: Stroke,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            text_size: 13.0,
            text_color: None,
            fill: None,
            margin_y: 2.0,
            min_height: 24.0,
            corner_radius: 0.0,
            divider: Stroke::new(1.0, Color32::from_gray(0xcc)),
        }
    }
}

/// Optional changes to a [`TriggerStyle`]. `None` keeps the base value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerOverrides {
    pub icon: Option<String>,
    pub icon_size: Option<f32>,
    pub color: Option<Color32>,
    pub frame: Option<bool>,
    pub min_size: Option<Vec2>,
}

impl TriggerOverrides {
    pub fn apply_to(&self, base: &TriggerStyle) -> TriggerStyle {
        TriggerStyle {
            icon: self.icon.clone().unwrap_or_else(|| base.icon.clone()),
            icon_size: self.icon_size.unwrap_or(base.icon_size),
            color: self.color.or(base.color),
            frame: self.frame.unwrap_or(base.frame),
            min_size: self.min_size.unwrap_or(base.min_size),
        }
    }
}

/// Optional changes to an [`OverlayStyle`]. `None` keeps the base value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayOverrides {
    pub max_width: Option<f32>,
    pub min_width: Option<f32>,
    pub inner_margin: Option<f32>,
    pub gap: Option<f32>,
    pub fill: Option<Color32>,
    pub corner_radius: Option<f32>,
    pub shadow: Option<bool>,
}

impl OverlayOverrides {
    pub fn apply_to(&self, base: &OverlayStyle) -> OverlayStyle {
        OverlayStyle {
            max_width: self.max_width.unwrap_or(base.max_width),
            min_width: self.min_width.unwrap_or(base.min_width),
            inner_margin: self.inner_margin.unwrap_or(base.inner_margin),
            gap: self.gap.unwrap_or(base.gap),
            fill: self.fill.or(base.fill),
            corner_radius: self.corner_radius.unwrap_or(base.corner_radius),
            shadow: self.shadow.unwrap_or(base.shadow),
        }
    }
}

/// Optional changes to a [`RowStyle`], carried per action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowOverrides {
    pub text_size: Option<f32>,
    pub text_color: Option<Color32>,
    pub fill: Option<Color32>,
    pub margin_y: Option<f32>,
    pub min_height: Option<f32>,
    pub corner_radius: Option<f32>,
    pub divider: Option<Stroke>,
}

impl RowOverrides {
    pub fn apply_to(&self, base: &RowStyle) -> RowStyle {
        RowStyle {
            text_size: self.text_size.unwrap_or(base.text_size),
            text_color: self.text_color.or(base.text_color),
            fill: self.fill.or(base.fill),
            margin_y: self.margin_y.unwrap_or(base.margin_y),
            min_height: self.min_height.unwrap_or(base.min_height),
            corner_radius: self.corner_radius.unwrap_or(base.corner_radius),
            divider: self.divider.unwrap_or(base.divider),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
