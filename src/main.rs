//! Folio - a desktop portfolio with scroll-triggered reveal animations
//! Built with iced, light and dark modes with a blue accent

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod content;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Run as a daemon; the app exits itself when the main window closes
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
