//! The composed "more actions" widget.

use egui::{Button, Context, Id, Response, RichText, Ui};

use crate::anchor::AnchorHandle;
use crate::icons::resolve_glyph;
use crate::overlay::Overlay;
use crate::rows::show_rows;
use crate::state::{MenuEvent, MenuState};
use crate::theme::{ActionMenuTheme, OverlayOverrides, TriggerOverrides, TriggerStyle};
use crate::types::ActionDescriptor;

/// Outcome of one [`ActionMenuButton::show`] call.
pub struct ActionMenuResponse {
    /// Persistent id of this menu instance; use with [`ActionMenuButton::is_open`].
    pub id: Id,
    /// Response of the trigger button.
    pub trigger: Response,
    /// Name of the action selected this frame.
    pub selected: Option<String>,
    /// The overlay was closed by an outside click this frame.
    pub dismissed: bool,
    /// State after this frame.
    pub is_open: bool,
}

/// An icon button that toggles a floating list of actions.
///
/// ```no_run
/// # egui::__run_test_ui(|ui| {
/// use egui_action_menu::{ActionDescriptor, ActionMenuButton};
///
/// let actions = [
///     ActionDescriptor::new("edit", "Edit").icon("edit"),
///     ActionDescriptor::new("delete", "Delete").icon("delete"),
/// ];
/// ActionMenuButton::new(&actions)
///     .id_salt("row-menu")
///     .on_action_click(|name| println!("{name}"))
///     .show(ui);
/// # });
/// ```
pub struct ActionMenuButton<'a> {
    id_salt: Option<Id>,
    actions: &'a [ActionDescriptor],
    theme: ActionMenuTheme,
    trigger_overrides: TriggerOverrides,
    overlay_overrides: OverlayOverrides,
    on_action_click: Option<Box<dyn FnMut(&str) + 'a>>,
}

impl<'a> ActionMenuButton<'a> {
    pub fn new(actions: &'a [ActionDescriptor]) -> Self {
        Self {
            id_salt: None,
            actions,
            theme: ActionMenuTheme::default(),
            trigger_overrides: TriggerOverrides::default(),
            overlay_overrides: OverlayOverrides::default(),
            on_action_click: None,
        }
    }

    /// Stable identity for the menu, e.g. the id of the item it acts on.
    ///
    /// Without a salt the menu is keyed by its trigger's auto id, which stays stable as
    /// long as the surrounding layout does.
    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(id_salt));
        self
    }

    pub fn theme(mut self, theme: ActionMenuTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn trigger_style(mut self, overrides: TriggerOverrides) -> Self {
        self.trigger_overrides = overrides;
        self
    }

    pub fn overlay_style(mut self, overrides: OverlayOverrides) -> Self {
        self.overlay_overrides = overrides;
        self
    }

    /// Called with the action name when a row is clicked.
    pub fn on_action_click(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.on_action_click = Some(Box::new(callback));
        self
    }

    pub fn show(mut self, ui: &mut Ui) -> ActionMenuResponse {
        let trigger_style = self.trigger_overrides.apply_to(&self.theme.trigger);
        let trigger = ui.add(trigger_button(&trigger_style));
        let id = match self.id_salt {
            Some(salt) => ui.make_persistent_id(salt),
            None => trigger.id.with("action_menu"),
        };

        let ctx = ui.ctx().clone();
        let mut state = MenuState::load(&ctx, id);
        if trigger.clicked() {
            state = state.apply(MenuEvent::Toggle).to;
        }

        let overlay_style = self.overlay_overrides.apply_to(&self.theme.overlay);
        let row_style = &self.theme.row;
        let actions = self.actions;
        let overlay = Overlay::new(AnchorHandle::new(id, trigger.clone()), &overlay_style)
            .open(state.is_open())
            .show(|ui| show_rows(ui, actions, row_style));

        let mut selected = None;
        if let Some(name) = overlay.inner.flatten() {
            let transition = state.apply(MenuEvent::Select(name));
            if let (Some(name), Some(callback)) =
                (transition.selected, &mut self.on_action_click)
            {
                callback(name);
            }
            selected = transition.selected.map(str::to_owned);
            state = transition.to;
        } else if overlay.dismissed {
            state = state.apply(MenuEvent::Dismiss).to;
        }

        state.store(&ctx, id);
        ActionMenuResponse {
            id,
            trigger,
            selected,
            dismissed: overlay.dismissed,
            is_open: state.is_open(),
        }
    }

    /// Whether the menu with the given response id is open.
    pub fn is_open(ctx: &Context, id: Id) -> bool {
        MenuState::load(ctx, id).is_open()
    }

    /// Close the menu from host code, as if it had been dismissed.
    pub fn close(ctx: &Context, id: Id) {
        MenuState::load(ctx, id)
            .apply(MenuEvent::Dismiss)
            .to
            .store(ctx, id);
    }

    /// Drop the stored state of a menu that will not be shown again.
    pub fn forget(ctx: &Context, id: Id) {
        MenuState::forget(ctx, id);
    }
}

fn trigger_button(style: &TriggerStyle) -> Button<'static> {
    let mut text = RichText::new(resolve_glyph(&style.icon)).size(style.icon_size);
    if let Some(color) = style.color {
        text = text.color(color);
    }
    Button::new(text).frame(style.frame).min_size(style.min_size)
}
