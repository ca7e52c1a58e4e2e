use sel_printer::{BarcodeEncoder, Code128Encoder, Error};

#[test]
fn encodes_png_with_quiet_zones() {
    let encoder = Code128Encoder::default();
    let modules = encoder.modules("Green Tea 100g-1").unwrap();
    assert_eq!(modules.first(), Some(&1));
    assert_eq!(modules.last(), Some(&1));

    let png = encoder.encode("Green Tea 100g-1").unwrap();
    assert!(png.starts_with(b"\x89PNG"));

    let decoded = image::load_from_memory(&png).unwrap().to_luma8();
    let expected_width = (modules.len() as u32 + 2 * encoder.quiet_zone) * encoder.module_px;
    assert_eq!(decoded.width(), expected_width);
    assert_eq!(decoded.height(), encoder.height_px);

    // Quiet zone is blank, first bar starts right after it.
    let first_bar_x = encoder.quiet_zone * encoder.module_px;
    assert!((0..first_bar_x).all(|x| decoded.get_pixel(x, 0).0 == [255]));
    assert_eq!(decoded.get_pixel(first_bar_x, 0).0, [0]);
}

#[test]
fn encoding_is_deterministic_and_payload_specific() {
    let encoder = Code128Encoder::default();
    assert_eq!(encoder.encode("Tea-1").unwrap(), encoder.encode("Tea-1").unwrap());
    assert_ne!(encoder.modules("Tea-1").unwrap(), encoder.modules("Tea-2").unwrap());
}

#[test]
fn rejects_characters_outside_code128() {
    let err = Code128Encoder::default().encode("Thé-1").unwrap_err();
    assert!(matches!(err, Error::Barcode(_)), "{err}");
}

#[test]
fn rejects_charset_switch_characters() {
    let encoder = Code128Encoder::default();
    for payload in ["\u{C0}TEA-1", "TEA-\u{181}1", "\u{106}12-1"] {
        let err = encoder.encode(payload).unwrap_err();
        assert!(matches!(err, Error::Barcode(_)), "{payload:?}: {err}");
    }
    assert!(encoder.modules("TEA~ -1").is_ok());
}
