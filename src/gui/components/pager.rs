// src/gui/components/pager.rs
//
// Page buttons plus the status line: loading spinner on first load,
// row count + last-updated when ready, error banner (with prior data
// still on screen) when a refresh fails.

use std::time::SystemTime;

use eframe::egui;

use crate::gui::app::App;
use crate::page;
use crate::refresh::RefreshStatus;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let total = page::total_pages(app.row_ix.len());

        if total > 0 {
            if ui.button("◀").clicked() {
                app.state.page = page::clamp_page(app.state.page.saturating_sub(1), total);
            }
            let (lo, hi) = button_window(app.state.page, total);
            for p in lo..=hi {
                if ui.selectable_label(p == app.state.page, p.to_string()).clicked() {
                    app.state.page = page::clamp_page(p, total);
                }
            }
            if ui.button("▶").clicked() {
                app.state.page = page::clamp_page(app.state.page + 1, total);
            }
            ui.separator();
        }

        match app.refresher.status() {
            RefreshStatus::Loading => {
                ui.spinner();
                ui.label("시트를 불러오는 중…");
            }
            RefreshStatus::Ready { last_updated } => {
                ui.label(format!("{}건 · {}페이지", app.row_ix.len(), total.max(1)));
                ui.label(format!("갱신 {}", ago(last_updated)));
            }
            RefreshStatus::Error { message, last_updated } => {
                ui.colored_label(
                    egui::Color32::from_rgb(220, 80, 60),
                    format!("오류: {message}"),
                );
                if let Some(at) = last_updated {
                    ui.label(format!("이전 데이터 표시 중 · 갱신 {}", ago(at)));
                }
            }
        }
    });
}

/// At most 10 numbered buttons, windowed around the current page.
fn button_window(page: usize, total: usize) -> (usize, usize) {
    const MAX: usize = 10;
    if total <= MAX {
        return (1, total);
    }
    let lo = page.saturating_sub(MAX / 2).max(1);
    let hi = (lo + MAX - 1).min(total);
    (hi.saturating_sub(MAX - 1).max(1), hi)
}

fn ago(at: SystemTime) -> String {
    match at.elapsed() {
        Ok(d) if d.as_secs() < 2 => s!("방금 전"),
        Ok(d) => format!("{}초 전", d.as_secs()),
        Err(_) => s!("방금 전"),
    }
}
