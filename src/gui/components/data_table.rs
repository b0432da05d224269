// src/gui/components/data_table.rs
//
// Draws the current page of results. Purely a view: reads the cached
// row indices and renders the configured display columns.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::sheet::SHEET;
use crate::gui::app::App;
use crate::page;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let data = app.snapshot.clone();
    let bounds = page::page_bounds(app.row_ix.len(), app.state.page);
    let page_ix: Vec<usize> = app.row_ix[bounds].to_vec();

    // Display columns may be absent from a malformed sheet; such cells
    // render empty rather than shifting the row.
    let cols: Vec<Option<usize>> = SHEET.display.iter().map(|n| data.col_index(n)).collect();

    TableBuilder::new(ui)
        .striped(true)
        .columns(
            Column::auto().resizable(true).clip(true).at_least(60.0),
            cols.len(),
        )
        .header(24.0, |mut header| {
            for name in SHEET.display {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(*name).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, page_ix.len(), |mut row| {
                let src = page_ix[row.index()];
                for col in &cols {
                    row.col(|ui| {
                        ui.label(data.value(src, *col));
                    });
                }
            });
        });
}
