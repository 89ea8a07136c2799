//! CSV + PNG output

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use image::ImageFormat;
use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::analysis::{WindowConfig, WindowResult};
use crate::error::Result;
use crate::plot;

pub const CSV_HEADER: [&str; 3] = ["position", "gt_proportion", "g_to_t_ratio"];

/// File stem shared by the CSV and the plot, e.g. `window100-step25-start1-end5000`.
///
/// Bounds appear only when they were given, in the 1-based form the user typed,
/// so every distinct parameter set gets its own name.
pub fn output_stem(config: &WindowConfig) -> String {
    let mut stem = format!("window{}-step{}", config.window(), config.step());
    if let Some(start) = config.start() {
        stem.push_str(&format!("-start{}", start + 1));
    }
    if let Some(end) = config.end() {
        stem.push_str(&format!("-end{end}"));
    }
    stem
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub csv: PathBuf,
    pub plot: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: impl AsRef<Path>, config: &WindowConfig) -> Self {
        let stem = output_stem(config);
        let dir = dir.as_ref();
        OutputPaths {
            csv: dir.join(format!("{stem}.csv")),
            plot: dir.join(format!("{stem}.png")),
        }
    }
}

/// Serialize rows as CSV. The header is always written, and an undefined
/// ratio becomes an empty field.
pub fn to_csv(rows: &[WindowResult]) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    Ok(wtr.into_inner().map_err(|e| e.into_error())?)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Render and write both outputs; `title` heads the plot.
///
/// Everything goes to temporary files next to the targets first and is renamed
/// into place only once both are complete, so a failure never leaves a partial
/// CSV or PNG behind. The plot is moved first and taken back out if the CSV
/// cannot be moved, so a CSV never lands without its plot.
pub fn write_report(rows: &[WindowResult], paths: &OutputPaths, title: &str) -> Result<()> {
    let csv = to_csv(rows)?;
    let image = plot::render(rows, title)?;

    let csv_dir = parent_dir(&paths.csv);
    let plot_dir = parent_dir(&paths.plot);
    fs::create_dir_all(csv_dir)?;
    fs::create_dir_all(plot_dir)?;

    let mut csv_tmp = NamedTempFile::new_in(csv_dir)?;
    csv_tmp.write_all(&csv)?;
    let plot_tmp = NamedTempFile::new_in(plot_dir)?;
    image.save_with_format(plot_tmp.path(), ImageFormat::Png)?;
    debug!("Rendered outputs to temporary files in {}", csv_dir.display());

    plot_tmp.persist(&paths.plot).map_err(|e| e.error)?;
    if let Err(e) = csv_tmp.persist(&paths.csv) {
        if let Err(rm) = fs::remove_file(&paths.plot) {
            warn!("Could not remove {} after failed CSV write: {}", paths.plot.display(), rm);
        }
        return Err(e.error.into());
    }
    info!("Wrote {} rows to {}", rows.len(), paths.csv.display());
    info!("Wrote plot to {}", paths.plot.display());
    Ok(())
}
