//! Portfolio Frontend Entry Point

mod models;
mod content;
mod section;
mod theme;
mod store;
mod nav;
mod config;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(config::log_level());
    tracing::info!(
        skills = content::SKILLS.len(),
        projects = content::PROJECTS.len(),
        "mounting portfolio"
    );
    mount_to_body(App);
}
