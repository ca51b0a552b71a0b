use std::fs;

use chrono::NaiveDate;
use retail_mock::data::catalog::{load_catalog, resolve_catalog, Catalog};
use retail_mock::data::dates::Period;
use retail_mock::data::generator::{generate_sales_data, mock_rng};

const TWO_REGION_CATALOG: &str = r#"
regions:
  - name: Nordics
    marketStrength: 0.5
  - name: Iberia
    marketStrength: 1.0
products:
  - name: Trail Runners
    basePrice: 140
    popularity: 0.7
    stock: 12
    color: Green
    id: prod_100
"#;

#[test]
fn no_override_uses_built_in_catalog() {
    let catalog = resolve_catalog(None).expect("default catalog");
    assert_eq!(catalog, Catalog::default());
    assert_eq!(
        catalog.region_names(),
        vec![
            "North America",
            "Europe",
            "Asia Pacific",
            "Latin America",
            "Middle East",
            "Africa"
        ]
    );
}

#[test]
fn yaml_override_drives_generation() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("catalog.yaml");
    fs::write(&path, TWO_REGION_CATALOG).expect("write catalog");

    let catalog = load_catalog(&path).expect("load catalog");
    assert_eq!(catalog.regions.len(), 2);
    assert_eq!(catalog.products[0].base_price, 140.0);
    assert_eq!(catalog.seasonal_factors.for_month(11), 1.3);

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
    let records = generate_sales_data(&catalog, Period::Month, 0, today, &mut mock_rng(Some(1)))
        .expect("sales");
    assert_eq!(records.len(), 30 * 2);
    assert!(records.iter().all(|r| r.product == "Trail Runners"));
}

#[test]
fn rejects_out_of_range_popularity() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("catalog.yaml");
    fs::write(&path, TWO_REGION_CATALOG.replace("0.7", "1.7")).expect("write catalog");

    let err = load_catalog(&path).expect_err("popularity above 1 should fail");
    assert!(err.to_string().contains("popularity"), "unexpected error: {err}");
}

#[test]
fn rejects_malformed_yaml() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("catalog.yaml");
    fs::write(&path, "regions: [unterminated").expect("write catalog");

    let err = load_catalog(&path).expect_err("malformed yaml should fail");
    assert!(
        err.to_string().contains("yaml error"),
        "unexpected error: {err}"
    );
}

#[test]
fn rejects_empty_region_list() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("catalog.yaml");
    let yaml = "regions: []\nproducts: []\n";
    fs::write(&path, yaml).expect("write catalog");

    let err = load_catalog(&path).expect_err("empty catalog should fail");
    assert!(err.to_string().contains("region"), "unexpected error: {err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let err = load_catalog(temp.path().join("absent.yaml")).expect_err("missing file");
    assert!(err.to_string().contains("io error"), "unexpected error: {err}");
}
