#![warn(clippy::all)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use moves_view::{Arguments, DataSource, MovesViewApp};
use tracing::error;

/*
cargo fmt
cargo test -- --nocapture
cargo test -- --show-output tests_view
cargo run -- --help
cargo run -- "scraped data/moves.csv" -t Fire
cargo doc --open
cargo b -r && cargo install --path=.
*/

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Use RUST_LOG environment variable to set logging level.  eg `export RUST_LOG=info`
    tracing_subscriber::fmt::init();

    let args = Arguments::build();
    let initial_state = args.initial_state();

    let native_options = eframe::NativeOptions {
        centered: true,
        persist_window: true,
        vsync: true,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 600.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Moves View",
        native_options,
        Box::new(move |creation_context| {
            // Load the file if it exists; otherwise open empty with a drag-and-drop prompt.
            let app = if args.path.is_file() {
                let data_source = DataSource::new(&args)?;

                // RUST_LOG=debug cargo run -- moves.csv
                tracing::debug!("main()\nDataSource: {data_source:#?}");

                MovesViewApp::new_with_future(creation_context, data_source, initial_state)
            } else {
                tracing::info!(
                    "{} is not a file; starting without data",
                    args.path.display()
                );
                MovesViewApp::new(creation_context, initial_state)
            };

            match app {
                Ok(app) => Ok(Box::new(app)),
                Err(err) => {
                    error!("Failed to initialize MovesViewApp: {}", err);
                    Err(err.into())
                }
            }
        }),
    )
}
