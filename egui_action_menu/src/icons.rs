//! Icon identifiers used by the menu and their Phosphor glyphs.

use egui::FontDefinitions;
use egui_phosphor::regular as icons;

/// Map an icon identifier to the glyph drawn for it.
///
/// Identifiers follow the camelCase names used by web icon sets (`moreVertical`,
/// `delete`, ...). Anything unknown is returned as-is, so a caller may pass a glyph
/// directly.
pub fn resolve_glyph(id: &str) -> &str {
    match id {
        "moreVertical" => icons::DOTS_THREE_VERTICAL,
        "moreHorizontal" | "more" => icons::DOTS_THREE,
        "edit" | "pencil" => icons::PENCIL_SIMPLE,
        "delete" | "trash" => icons::TRASH,
        "copy" | "duplicate" => icons::COPY,
        "share" => icons::SHARE_NETWORK,
        "download" => icons::DOWNLOAD_SIMPLE,
        "upload" => icons::UPLOAD_SIMPLE,
        "archive" => icons::ARCHIVE,
        "settings" => icons::GEAR,
        "view" | "eye" => icons::EYE,
        "star" | "favorite" => icons::STAR,
        "add" | "plus" => icons::PLUS,
        "close" => icons::X,
        "link" => icons::LINK,
        other => other,
    }
}

/// Register the Phosphor font so resolved glyphs render.
pub fn add_icon_font(fonts: &mut FontDefinitions) {
    egui_phosphor::add_to_fonts(fonts, egui_phosphor::Variant::Regular);
}
