use crate::{MoveRecord, MovesViewError, MovesViewResult, records_to_frame};

use egui::Context;
use polars::prelude::*;
use rfd::AsyncFileDialog;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tokio::sync::oneshot;
use tracing::error;

/// Default file name offered by the export dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "moves_view.csv";

/// Opens a file dialog asynchronously, allowing the user to choose a moves file.
///
/// # Returns
///
/// - `Ok(PathBuf)`: The path to the selected file.
/// - `Err(MovesViewError::FileNotFound)`: If the user cancels the dialog.
pub async fn open_file() -> MovesViewResult<PathBuf> {
    let opt_file = AsyncFileDialog::new()
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file()
        .await;

    opt_file
        .map(|file| file.path().to_path_buf())
        .ok_or_else(|| MovesViewError::FileNotFound(PathBuf::new()))
}

/// Writes `records`, in the given order, to `path` as comma-separated CSV with the usual
/// column headers.
pub fn write_records_csv(records: &[MoveRecord], path: &Path) -> MovesViewResult<()> {
    let mut df = records_to_frame(records)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df)?;
    writer.flush()?;

    tracing::info!("Exported {} moves to {}", records.len(), path.display());
    Ok(())
}

/// Asks for a destination and exports the displayed rows there.
///
/// ### Arguments
///
/// * `records`: The displayed records, in display order.
/// * `ctx`: The `egui::Context`, repainted once the file is written.
///
/// ### Returns
///
/// `Ok(())` on success or if the user cancelled the dialog.
pub async fn save_view_as(records: Vec<MoveRecord>, ctx: Context) -> MovesViewResult<()> {
    // 1. Ask for the destination.
    let file = AsyncFileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(DEFAULT_EXPORT_FILE_NAME)
        .save_file()
        .await;

    let Some(file) = file else {
        tracing::debug!("save_view_as(): cancelled");
        return Ok(());
    };
    let path = file.path().to_path_buf();

    // 2. Channel for the write result.
    let (tx, rx) = oneshot::channel::<MovesViewResult<()>>();

    // 3. File I/O on a blocking thread.
    let _handle = tokio::task::spawn_blocking(move || {
        let result = write_records_csv(&records, &path);

        if tx.send(result).is_err() {
            error!("The receiver has been dropped.");
        }

        ctx.request_repaint();
    });

    // 4. Wait for the result and propagate write errors.
    rx.await
        .map_err(|e| MovesViewError::ChannelReceive(e.to_string()))?
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//
