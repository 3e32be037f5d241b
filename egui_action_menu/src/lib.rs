//! Standalone egui "more actions" menu widget.
//!
//! [`ActionMenuButton`] renders an icon trigger. Clicking it opens a floating panel
//! with one row per [`ActionDescriptor`]. Selecting a row hands the action's name to
//! the caller and closes the panel. The widget carries no domain logic; the host
//! decides what an action does.

pub mod anchor;
pub mod icons;
pub mod overlay;
pub mod rows;
pub mod state;
pub mod theme;
pub mod types;
pub mod widget;

pub use anchor::AnchorHandle;
pub use icons::{add_icon_font, resolve_glyph};
pub use state::{MenuEvent, MenuState, Transition};
pub use theme::{
    ActionMenuTheme, OverlayOverrides, OverlayStyle, RowOverrides, RowStyle, TriggerOverrides,
    TriggerStyle,
};
pub use types::ActionDescriptor;
pub use widget::{ActionMenuButton, ActionMenuResponse};
