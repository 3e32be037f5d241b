//! Floating panel anchored to another widget.

use egui::{Frame, Id, Popup, PopupCloseBehavior, Ui};

use crate::anchor::AnchorHandle;
use crate::theme::OverlayStyle;

/// What the overlay did this frame.
pub struct OverlayOutput<R> {
    /// Value returned by the content closure, `None` while closed.
    pub inner: Option<R>,
    /// The popup closed itself on a click outside the panel and its anchor.
    pub dismissed: bool,
}

/// An [`egui::Popup`] below its anchor that reports outside clicks instead of
/// owning its open flag.
pub struct Overlay<'a> {
    anchor: AnchorHandle,
    open: bool,
    style: &'a OverlayStyle,
}

impl<'a> Overlay<'a> {
    pub fn new(anchor: AnchorHandle, style: &'a OverlayStyle) -> Self {
        Self {
            anchor,
            open: false,
            style,
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn id(&self) -> Id {
        self.anchor.id.with("overlay")
    }

    pub fn show<R>(self, add_contents: impl FnOnce(&mut Ui) -> R) -> OverlayOutput<R> {
        if !self.open {
            return OverlayOutput {
                inner: None,
                dismissed: false,
            };
        }

        let style = self.style;
        let mut frame = Frame::popup(&self.anchor.response.ctx.style())
            .inner_margin(style.inner_margin)
            .corner_radius(style.corner_radius);
        if let Some(fill) = style.fill {
            frame = frame.fill(fill);
        }
        if !style.shadow {
            frame = frame.shadow(egui::epaint::Shadow::NONE);
        }

        let mut still_open = true;
        let shown = Popup::from_response(&self.anchor.response)
            .id(self.id())
            .open_bool(&mut still_open)
            .close_behavior(PopupCloseBehavior::CloseOnClickOutside)
            .gap(style.gap)
            .frame(frame)
            .show(|ui| {
                ui.set_min_width(style.min_width);
                ui.set_max_width(style.max_width);
                ui.spacing_mut().item_spacing.y = 0.0;
                add_contents(ui)
            });

        OverlayOutput {
            inner: shown.map(|r| r.inner),
            dismissed: !still_open,
        }
    }
}
