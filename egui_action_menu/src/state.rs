//! Visibility state of a menu instance.

use egui::{Context, Id};

/// Whether the overlay of one menu instance is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Input that can change a [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent<'a> {
    /// The trigger was clicked.
    Toggle,
    /// The overlay reported an interaction outside of the menu.
    Dismiss,
    /// A row was clicked; carries the action name.
    Select(&'a str),
}

/// Result of applying a [`MenuEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<'a> {
    pub from: MenuState,
    pub to: MenuState,
    /// Action name to hand to the host, set only for a selection made while open.
    pub selected: Option<&'a str>,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn apply<'a>(self, event: MenuEvent<'a>) -> Transition<'a> {
        let (to, selected) = match (self, event) {
            (state, MenuEvent::Toggle) => (state.toggled(), None),
            (_, MenuEvent::Dismiss) => (MenuState::Closed, None),
            (MenuState::Open, MenuEvent::Select(name)) => (MenuState::Closed, Some(name)),
            // Rows are not on screen while closed.
            (MenuState::Closed, MenuEvent::Select(_)) => (MenuState::Closed, None),
        };
        if to != self {
            log::debug!("action menu {:?} -> {:?} on {:?}", self, to, event);
        }
        Transition {
            from: self,
            to,
            selected,
        }
    }

    /// Read the state stored for `id`, `Closed` if none.
    pub fn load(ctx: &Context, id: Id) -> Self {
        ctx.data(|d| d.get_temp::<MenuState>(id)).unwrap_or_default()
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    pub fn forget(ctx: &Context, id: Id) {
        ctx.data_mut(|d| {
            d.remove_temp::<MenuState>(id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(MenuState::Closed.apply(MenuEvent::Toggle).to, MenuState::Open);
        assert_eq!(MenuState::Open.apply(MenuEvent::Toggle).to, MenuState::Closed);
    }

    #[test]
    fn toggle_parity() {
        for n in 0..7 {
            let mut state = MenuState::Closed;
            for _ in 0..n {
                state = state.apply(MenuEvent::Toggle).to;
            }
            assert_eq!(state.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn select_while_open_emits_and_closes() {
        let t = MenuState::Open.apply(MenuEvent::Select("delete"));
        assert_eq!(t.from, MenuState::Open);
        assert_eq!(t.to, MenuState::Closed);
        assert_eq!(t.selected, Some("delete"));
    }

    #[test]
    fn select_while_closed_is_ignored() {
        let t = MenuState::Closed.apply(MenuEvent::Select("delete"));
        assert_eq!(t.to, MenuState::Closed);
        assert_eq!(t.selected, None);
    }

    #[test]
    fn dismiss_closes_without_selection() {
        let t = MenuState::Open.apply(MenuEvent::Dismiss);
        assert_eq!(t.to, MenuState::Closed);
        assert_eq!(t.selected, None);
        assert_eq!(MenuState::Closed.apply(MenuEvent::Dismiss).to, MenuState::Closed);
    }

    #[test]
    fn state_is_kept_per_id() {
        let ctx = Context::default();
        let a = Id::new("a");
        let b = Id::new("b");
        MenuState::Open.store(&ctx, a);
        assert_eq!(MenuState::load(&ctx, a), MenuState::Open);
        assert_eq!(MenuState::load(&ctx, b), MenuState::Closed);
    }

    #[test]
    fn forget_removes_entry() {
        let ctx = Context::default();
        let id = Id::new("gone");
        MenuState::Open.store(&ctx, id);
        MenuState::forget(&ctx, id);
        assert!(ctx.data(|d| d.get_temp::<MenuState>(id)).is_none());
        assert_eq!(MenuState::load(&ctx, id), MenuState::Closed);
    }
}
