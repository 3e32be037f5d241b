//! Positioning relation between the trigger and the overlay.

use egui::{Id, Rect, Response};

/// Names the element an overlay positions itself against.
///
/// Built from the trigger's [`Response`] each frame and handed to the overlay by value.
/// `id` is the menu instance the overlay belongs to; the overlay derives its own id
/// from it.
#[derive(Clone, Debug)]
pub struct AnchorHandle {
    pub id: Id,
    pub response: Response,
}

impl AnchorHandle {
    pub fn new(id: Id, response: Response) -> Self {
        Self { id, response }
    }

    /// Anchor keyed by the widget's own id.
    pub fn from_response(response: &Response) -> Self {
        Self::new(response.id, response.clone())
    }

    pub fn rect(&self) -> Rect {
        self.response.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui_kittest::Harness;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn handle_follows_the_widget() {
        let seen: Rc<RefCell<Vec<(Id, Id, Rect, Rect)>>> = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let _harness = Harness::builder()
            .with_size(egui::vec2(200.0, 200.0))
            .build_ui(move |ui| {
                let response = ui.button("Anchor");
                let handle = AnchorHandle::from_response(&response);
                s.borrow_mut()
                    .push((handle.id, response.id, handle.rect(), response.rect));
            });
        let (handle_id, widget_id, handle_rect, widget_rect) =
            *seen.borrow().last().expect("frame ran");
        assert_eq!(handle_id, widget_id);
        assert_eq!(handle_rect, widget_rect);
    }

    #[test]
    fn explicit_id_overrides_widget_id() {
        let ids: Rc<RefCell<Vec<(Id, Id)>>> = Rc::new(RefCell::new(Vec::new()));
        let i = ids.clone();
        let _harness = Harness::builder()
            .with_size(egui::vec2(200.0, 200.0))
            .build_ui(move |ui| {
                let response = ui.button("Anchor");
                let menu_id = Id::new("menu");
                let handle = AnchorHandle::new(menu_id, response.clone());
                i.borrow_mut().push((handle.id, handle.response.id));
            });
        let (menu_id, widget_id) = *ids.borrow().last().expect("frame ran");
        assert_eq!(menu_id, Id::new("menu"));
        assert_ne!(menu_id, widget_id);
    }
}
