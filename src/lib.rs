pub mod barcode;
pub mod catalog;
mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod paginate;
pub mod pdf;
pub mod selection;

pub use barcode::{BarcodeEncoder, Code128Encoder};
pub use error::Error;
pub use model::{Item, Selection};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// A finished document held in memory.
pub struct LabelDocument {
    pub bytes: Vec<u8>,
    pub total_pages: u32,
}

impl LabelDocument {
    /// Artifact name: `output_page{N}.pdf`, N being the final page count.
    pub fn file_name(&self) -> String {
        format!("output_page{}.pdf", self.total_pages)
    }
}

/// Lay out and render `selections` entirely in memory.
pub fn render_labels(
    selections: &[Selection],
    encoder: &dyn BarcodeEncoder,
) -> Result<LabelDocument, Error> {
    if selections.is_empty() {
        return Err(Error::InvalidSelection);
    }
    let t0 = Instant::now();

    let sheet = layout::layout_sheet(selections);
    let t_layout = t0.elapsed();

    let bytes = pdf::render(&sheet, encoder)?;
    let t_render = t0.elapsed();

    log::info!(
        "Timing: layout={:.1}ms, render={:.1}ms ({} labels on {} pages, {} bytes)",
        t_layout.as_secs_f64() * 1000.0,
        (t_render - t_layout).as_secs_f64() * 1000.0,
        sheet.total_boxes(),
        sheet.total_pages(),
        bytes.len(),
    );

    Ok(LabelDocument {
        bytes,
        total_pages: sheet.total_pages(),
    })
}

/// Render `selections` and write `output_page{N}.pdf` into `out_dir`. Nothing is
/// written unless the whole document rendered.
pub fn generate_labels(
    selections: &[Selection],
    encoder: &dyn BarcodeEncoder,
    out_dir: &Path,
) -> Result<(PathBuf, u32), Error> {
    let t0 = Instant::now();
    let doc = render_labels(selections, encoder)?;
    let t_render = t0.elapsed();

    let output = out_dir.join(doc.file_name());
    std::fs::write(&output, &doc.bytes).map_err(|e| {
        Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", e, output.display())))
    })?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms -> {}",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        output.display(),
    );

    Ok((output, doc.total_pages))
}
