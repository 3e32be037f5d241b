use eframe::egui;
use egui_action_menu::ActionMenuTheme;

/// Menu presentation derived from the host's current visuals.
pub fn menu_theme(visuals: &egui::Visuals) -> ActionMenuTheme {
    let mut theme = ActionMenuTheme::default();
    theme.trigger.color = Some(visuals.text_color());
    theme.overlay.fill = Some(visuals.window_fill);
    theme.row.divider = visuals.widgets.noninteractive.bg_stroke;
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_light_and_dark_visuals() {
        let light = egui::Visuals::light();
        let dark = egui::Visuals::dark();
        assert_eq!(menu_theme(&light).overlay.fill, Some(light.window_fill));
        assert_eq!(menu_theme(&dark).overlay.fill, Some(dark.window_fill));
        assert_ne!(
            menu_theme(&light).trigger.color,
            menu_theme(&dark).trigger.color
        );
    }

    #[test]
    fn keeps_row_layout_defaults() {
        let theme = menu_theme(&egui::Visuals::dark());
        let defaults = ActionMenuTheme::default();
        assert_eq!(theme.row.margin_y, defaults.row.margin_y);
        assert_eq!(theme.overlay.max_width, defaults.overlay.max_width);
        assert_eq!(
            theme.row.divider,
            egui::Visuals::dark().widgets.noninteractive.bg_stroke
        );
    }
}
