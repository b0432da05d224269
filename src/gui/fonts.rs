// src/gui/fonts.rs
//
// egui's bundled fonts carry no Hangul glyphs, so the sheet's Korean
// values would render as boxes. Best effort: load a known system font
// and append it to both families. No font found → keep the defaults.

use std::sync::Arc;

use eframe::egui;

const CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    // Linux
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
];

pub fn install(ctx: &egui::Context) {
    let found = CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|bytes| (*p, bytes)));

    let Some((path, bytes)) = found else {
        logd!("Fonts: no Korean system font found; Hangul may render as boxes");
        return;
    };
    logf!("Fonts: using {}", path);

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(s!("korean"), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        if let Some(list) = fonts.families.get_mut(&family) {
            list.push(s!("korean"));
        }
    }
    ctx.set_fonts(fonts);
}
