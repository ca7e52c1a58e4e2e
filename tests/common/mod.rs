use std::path::PathBuf;

use sel_printer::{BarcodeEncoder, Error, Item, Selection};

pub fn item(id: &str, desc: &str) -> Item {
    Item {
        product_id: id.to_string(),
        product_name: format!("Product {id}"),
        product_desc: desc.to_string(),
        mrp: Some("120".to_string()),
        rrp: Some("99".to_string()),
        min_qty: Some("3".to_string()),
        flag: Some("NP".to_string()),
    }
}

pub fn selection(id: &str, desc: &str, quantity: u32) -> Selection {
    Selection::new(item(id, desc), quantity).expect("positive quantity")
}

/// Output directory: tests/output/<case>/
pub fn output_dir(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn count_token(pdf: &[u8], token: &[u8], excluded_next: Option<u8>) -> usize {
    pdf.windows(token.len() + 1)
        .filter(|w| w[..token.len()] == *token && Some(w[token.len()]) != excluded_next)
        .count()
}

/// Page objects in a PDF (excludes the `/Type /Pages` tree node).
pub fn page_count(pdf: &[u8]) -> usize {
    count_token(pdf, b"/Type /Page", Some(b's'))
}

pub fn image_count(pdf: &[u8]) -> usize {
    count_token(pdf, b"/Subtype /Image", None)
}

/// Fails on one specific payload, delegating everything else.
pub struct FailOn<E> {
    pub inner: E,
    pub payload: String,
}

impl<E: BarcodeEncoder> BarcodeEncoder for FailOn<E> {
    fn encode(&self, payload: &str) -> Result<Vec<u8>, Error> {
        if payload == self.payload {
            return Err(Error::Barcode(format!("refused {payload}")));
        }
        self.inner.encode(payload)
    }
}
