#![allow(non_snake_case)]

use dioxus_logger::tracing::{self, Level};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!("Starting job board client");

    dioxus::launch(jobboard::client::App);
}
