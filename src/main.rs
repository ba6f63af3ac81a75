//! Clipreel
//!
//! A desktop media-timeline editor for slideshow-style video compositions.

mod app;
mod components;
mod constants;
mod core;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use log::info;

fn main() {
    env_logger::init();
    info!("clipreel starting");

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Clipreel")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None);

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
