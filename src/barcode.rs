use std::io::Cursor;

use barcoders::sym::code128::Code128;
use image::{GrayImage, ImageFormat, Luma};

use crate::error::Error;

/// Turns a payload into a scannable raster image (PNG bytes).
///
/// Implementations must be deterministic: the same payload always yields the same bytes.
pub trait BarcodeEncoder {
    fn encode(&self, payload: &str) -> Result<Vec<u8>, Error>;
}

/// Leading character that selects CODE128 character set B (printable ASCII).
const CHARSET_B: char = '\u{0181}';

/// CODE128 symbology, bars only (no human-readable text underneath).
#[derive(Clone, Copy, Debug)]
pub struct Code128Encoder {
    pub module_px: u32,
    pub height_px: u32,
    /// Blank modules on each side of the symbol.
    pub quiet_zone: u32,
}

impl Default for Code128Encoder {
    fn default() -> Self {
        Self {
            module_px: 2,
            height_px: 100,
            quiet_zone: 10,
        }
    }
}

impl Code128Encoder {
    /// Module pattern for `payload`: 1 = bar, 0 = space.
    ///
    /// Only printable ASCII is accepted. The symbology's in-band charset switch
    /// characters (`À`, `Ɓ`, `Ć`) are rejected along with everything else outside it.
    pub fn modules(&self, payload: &str) -> Result<Vec<u8>, Error> {
        if let Some(bad) = payload.chars().find(|c| !(' '..='~').contains(c)) {
            return Err(Error::Barcode(format!(
                "{payload:?}: {bad:?} is not encodable in CODE128 set B"
            )));
        }
        let symbol = Code128::new(format!("{CHARSET_B}{payload}"))
            .map_err(|e| Error::Barcode(format!("{payload:?}: {e}")))?;
        Ok(symbol.encode())
    }

    pub fn rasterize(&self, modules: &[u8]) -> GrayImage {
        let total_modules = modules.len() as u32 + 2 * self.quiet_zone;
        let width = total_modules * self.module_px;
        GrayImage::from_fn(width, self.height_px, |x, _| {
            let module = (x / self.module_px).checked_sub(self.quiet_zone);
            let is_bar = module
                .and_then(|m| modules.get(m as usize))
                .is_some_and(|&m| m == 1);
            if is_bar { Luma([0]) } else { Luma([255]) }
        })
    }
}

impl BarcodeEncoder for Code128Encoder {
    fn encode(&self, payload: &str) -> Result<Vec<u8>, Error> {
        let raster = self.rasterize(&self.modules(payload)?);
        let mut png = Vec::new();
        raster
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| Error::Barcode(e.to_string()))?;
        Ok(png)
    }
}
