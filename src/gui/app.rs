// src/gui/app.rs
use std::{error::Error, sync::Arc, time::Duration};

use eframe::egui;

use crate::{
    config::sheet::{FeedSpec, SHEET},
    config::state::ViewState,
    dataset::Dataset,
    page,
    refresh::Refresher,
    view::{self, ResultView},
};

use super::{components, fonts};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "문학 작품 찾기",
        options,
        Box::new(|cc| {
            fonts::install(&cc.egui_ctx);
            Ok(Box::new(App::new()))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: ViewState,

    /// Text-edit buffer; committed into state via set_search on change.
    pub search_text: String,

    // background polling; dropped (and cancelled) with the App
    pub refresher: Refresher,

    // latest snapshot + derived view
    pub snapshot: Arc<Dataset>,
    pub row_ix: Vec<usize>,
    /// Per filter level, the current cascading option list.
    pub options: Vec<Vec<String>>,

    last_gen: u64,
    pub dirty: bool,
}

impl App {
    pub fn new() -> Self {
        let refresher = Refresher::start(FeedSpec::default());
        let snapshot = refresher.snapshot();

        logf!("Init: polling {:?}", FeedSpec::default());

        Self {
            state: ViewState::new(&SHEET),
            search_text: s!(),
            refresher,
            snapshot,
            row_ix: Vec::new(),
            options: vec![Vec::new(); SHEET.filterable.len()],
            last_gen: 0,
            dirty: true,
        }
    }

    /// Recompute the result view and the dropdown option lists from the
    /// current snapshot + state. Full recomputation, no diffing.
    pub fn rebuild_view(&mut self) {
        let view = ResultView::build(&self.snapshot, &SHEET, &self.state);
        let row_ix = view.row_ix;

        let options = (0..SHEET.filterable.len())
            .map(|level| view::filter_options(&self.snapshot, &SHEET, &self.state, level))
            .collect();

        // A shrinking refresh may strand the page past the end.
        let total = page::total_pages(row_ix.len());
        self.state.page = page::clamp_page(self.state.page, total);

        self.row_ix = row_ix;
        self.options = options;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up background refreshes.
        let current = self.refresher.generation();
        if current != self.last_gen {
            self.last_gen = current;
            self.snapshot = self.refresher.snapshot();
            self.dirty = true;
            logd!("UI: refresh generation {} rows={}", current, self.snapshot.row_count());
        }
        if self.dirty {
            self.rebuild_view();
            self.dirty = false;
        }

        egui::TopBottomPanel::bottom("pager").show(ctx, |ui| {
            components::pager::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::filter_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });

        // Keep polling the refresher while idle.
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}
