use eframe::egui::{self, Color32};
use shared::domain::Category;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x29, 0x25, 0x24);
pub const SURFACE: Color32 = Color32::from_rgb(0x44, 0x40, 0x3c);
pub const TEXT: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xf9);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(0xa8, 0xa2, 0x9e);
pub const DISPUTED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const ACCENT: Color32 = Color32::from_rgb(0xdb, 0x27, 0x77);

pub fn rgb(hex: u32) -> Color32 {
    Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

pub fn category_color(category: Category) -> Color32 {
    rgb(category.color())
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = SURFACE;
    visuals.override_text_color = Some(TEXT);
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_colors_match_palette() {
        assert_eq!(
            category_color(Category::Technology),
            Color32::from_rgb(0x3b, 0x82, 0xf6)
        );
        assert_eq!(
            category_color(Category::News),
            Color32::from_rgb(0x8b, 0x5c, 0xf6)
        );
    }
}
