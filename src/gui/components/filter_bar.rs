// src/gui/components/filter_bar.rs
//
// Search box, sort toggle and the cascading filter dropdowns. All input
// goes through ViewState's mutators so the page reset stays in one place.

use eframe::egui;

use crate::config::consts::VARIANT_EXERCISE_URL;
use crate::config::sheet::SHEET;
use crate::config::state::SortMode;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("작품명 검색:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .hint_text("작품명을 입력하세요")
                .desired_width(220.0),
        );
        if resp.changed() {
            let term = app.search_text.clone();
            app.state.set_search(term);
            app.dirty = true;
            logd!("UI: search → {:?}", app.state.search);
        }

        ui.separator();

        ui.label("정렬:");
        let before = app.state.sort;
        let mut sort = before;
        ui.selectable_value(&mut sort, SortMode::Title, "작품명순");
        ui.selectable_value(&mut sort, SortMode::Source, "교과서순");
        if sort != before {
            app.state.set_sort(sort);
            app.dirty = true;
            logf!("UI: sort → {:?}", sort);
        }

        ui.separator();
        ui.hyperlink_to("변형문제 만들기", VARIANT_EXERCISE_URL);
    });

    ui.horizontal(|ui| {
        for level in 0..SHEET.filterable.len() {
            let select = &SHEET.filterable[level];
            let current = app.state.filters[level].clone();
            let mut pick: Option<Option<String>> = None;

            let shown = current.clone().unwrap_or_else(|| s!(select.placeholder));
            egui::ComboBox::from_id_salt(("filter", level))
                .selected_text(shown)
                .width(180.0)
                .show_ui(ui, |ui| {
                    if ui.selectable_label(current.is_none(), select.all_label).clicked() {
                        pick = Some(None);
                    }
                    for opt in &app.options[level] {
                        let chosen = current.as_deref() == Some(opt.as_str());
                        if ui.selectable_label(chosen, opt).clicked() {
                            pick = Some(Some(opt.clone()));
                        }
                    }
                });

            if let Some(value) = pick {
                logf!("UI: filter {} → {:?}", select.column, value);
                app.state.set_filter(&SHEET, level, value);
                app.dirty = true;
            }
        }
    });
}
