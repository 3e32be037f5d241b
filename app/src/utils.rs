use egui::Context;

pub fn setup_fonts(ctx: &Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_action_menu::add_icon_font(&mut fonts);
    ctx.set_fonts(fonts);
}
