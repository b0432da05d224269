// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use lit_sheet::gui;

fn main() {
    let options = eframe::NativeOptions::default();

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
