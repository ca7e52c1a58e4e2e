mod common;

use sel_printer::Error;
use sel_printer::catalog::{self, PrintFilter};
use sel_printer::selection::{
    RawSelection, apply_quantities, parse_quantity, select_all, validate,
};

use common::item;

const ENVELOPE: &str = r#"{
  "record": {
    "ladderPricingLists": [
      {"productId": 1001, "productName": "Green Tea", "productDesc": "Green Tea 100g",
       "mrp": 120, "rrp": "99.50", "minQty": 3, "flag": "P"},
      {"productId": "1002", "productName": "Rice", "productDesc": "Basmati Rice 5kg",
       "mrp": 650.0, "rrp": null, "flag": "NP"},
      {"productId": "1003", "productName": "Salt"}
    ]
  }
}"#;

#[test]
fn parses_hosted_envelope() {
    let items = catalog::parse(ENVELOPE.as_bytes()).unwrap();
    assert_eq!(items.len(), 3);

    assert_eq!(items[0].product_id, "1001");
    assert_eq!(items[0].mrp.as_deref(), Some("120"));
    assert_eq!(items[0].rrp.as_deref(), Some("99.50"));
    assert_eq!(items[0].min_qty.as_deref(), Some("3"));

    assert_eq!(items[1].mrp.as_deref(), Some("650"));
    assert_eq!(items[1].rrp, None);
    assert_eq!(items[1].min_qty, None);

    assert_eq!(items[2].product_desc, "");
    assert_eq!(items[2].flag, None);
}

#[test]
fn parses_bare_array() {
    let json = r#"[{"productId": "7", "productDesc": "Sugar 1kg", "mrp": 45.5}]"#;
    let items = catalog::parse(json.as_bytes()).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].mrp.as_deref(), Some("45.5"));
}

#[test]
fn parses_single_item_envelope() {
    let json = r#"{"record": {"ladderPricingLists": [{"productId": "7", "mrp": 45.5}]}}"#;
    let items = catalog::parse(json.as_bytes()).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, "7");
}

#[test]
fn single_element_array_is_not_read_as_an_envelope() {
    let items = catalog::parse(br#"[{"productId": "7"}]"#).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, "7");
}

#[test]
fn missing_list_is_an_empty_catalog() {
    let items = catalog::parse(br#"{"record": {}}"#).unwrap();
    assert!(items.is_empty());
}

#[test]
fn malformed_json_is_a_catalog_error() {
    let err = catalog::parse(b"{\"record\": [").unwrap_err();
    assert!(matches!(err, Error::Catalog(_)), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = catalog::load(std::path::Path::new("tests/no-such-catalog.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err}");
}

#[test]
fn print_status_filter() {
    let items = catalog::parse(ENVELOPE.as_bytes()).unwrap();
    let ids = |filter: PrintFilter| -> Vec<String> {
        catalog::filter(items.clone(), filter)
            .into_iter()
            .map(|i| i.product_id)
            .collect()
    };
    assert_eq!(ids(PrintFilter::All), vec!["1001", "1002", "1003"]);
    assert_eq!(ids(PrintFilter::Printed), vec!["1001"]);
    assert_eq!(ids(PrintFilter::NotPrinted), vec!["1002"]);
}

#[test]
fn quantity_parsing() {
    assert_eq!(parse_quantity("4"), Some(4));
    assert_eq!(parse_quantity(" 12 "), Some(12));
    for bad in ["", "0", "-3", "two", "1.5"] {
        assert_eq!(parse_quantity(bad), None, "{bad:?}");
    }
}

#[test]
fn invalid_quantities_are_skipped_in_order() {
    let raw = vec![
        RawSelection::new(item("A1", "Tea"), "abc"),
        RawSelection::new(item("B2", "Coffee"), "2"),
        RawSelection::new(item("C3", "Sugar"), "0"),
        RawSelection::new(item("D4", "Salt"), "5"),
    ];
    let selections = validate(raw).unwrap();
    let kept: Vec<(&str, u32)> = selections
        .iter()
        .map(|s| (s.item.product_id.as_str(), s.quantity()))
        .collect();
    assert_eq!(kept, vec![("B2", 2), ("D4", 5)]);
}

#[test]
fn all_invalid_quantities_refuse_generation() {
    let raw = vec![
        RawSelection::new(item("A1", "Tea"), ""),
        RawSelection::new(item("B2", "Coffee"), "0"),
        RawSelection::new(item("C3", "Sugar"), "n/a"),
    ];
    let err = validate(raw).unwrap_err();
    assert!(matches!(err, Error::InvalidSelection));
    assert_eq!(
        err.to_string(),
        "Please enter a quantity in at least one input field"
    );
    assert!(matches!(validate(Vec::new()), Err(Error::InvalidSelection)));
}

#[test]
fn select_all_uses_quantity_one() {
    let items = vec![item("A1", "Tea"), item("B2", "Coffee")];
    let selections = validate(select_all(&items)).unwrap();
    assert_eq!(selections.len(), 2);
    assert!(selections.iter().all(|s| s.quantity() == 1));
}

fn ids_and_quantities(raw: &[RawSelection]) -> Vec<(&str, &str)> {
    raw.iter()
        .map(|r| (r.item.product_id.as_str(), r.quantity.as_str()))
        .collect()
}

#[test]
fn explicit_quantity_wins_over_all() {
    let items = vec![item("A1", "Tea"), item("B2", "Coffee"), item("C3", "Sugar")];
    let raw = apply_quantities(&items, true, vec![("B2".into(), "4".into())]).unwrap();
    assert_eq!(
        ids_and_quantities(&raw),
        vec![("A1", "1"), ("B2", "4"), ("C3", "1")]
    );
}

#[test]
fn quantities_follow_catalog_order() {
    let items = vec![item("A1", "Tea"), item("B2", "Coffee"), item("C3", "Sugar")];
    let quantities = vec![("C3".into(), "2".into()), ("A1".into(), "5".into())];
    let raw = apply_quantities(&items, false, quantities).unwrap();
    assert_eq!(ids_and_quantities(&raw), vec![("A1", "5"), ("C3", "2")]);
}

#[test]
fn repeated_product_id_keeps_last_quantity() {
    let items = vec![item("A1", "Tea")];
    let quantities = vec![("A1".into(), "2".into()), ("A1".into(), "7".into())];
    let raw = apply_quantities(&items, false, quantities).unwrap();
    assert_eq!(ids_and_quantities(&raw), vec![("A1", "7")]);
}

#[test]
fn unknown_product_id_refuses_the_request() {
    let items = vec![item("A1", "Tea")];
    let quantities = vec![("A1".into(), "1".into()), ("ZZ".into(), "3".into())];
    let err = apply_quantities(&items, true, quantities).unwrap_err();
    assert!(matches!(&err, Error::UnknownProduct(id) if id == "ZZ"), "{err}");
}
