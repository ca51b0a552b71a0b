use chrono::NaiveDate;
use retail_mock::data::catalog::Catalog;
use retail_mock::data::dates::{generate_dates, Period};
use retail_mock::data::generator::{generate_customer_data, mock_rng};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 20).expect("valid date")
}

#[test]
fn record_count_is_dates_times_regions() {
    let catalog = Catalog::default();
    let mut rng = mock_rng(Some(11));
    for period in [Period::Month, Period::Quarter, Period::Year] {
        let dates = generate_dates(period, 0, today()).expect("dates");
        let records =
            generate_customer_data(&catalog, period, 0, today(), &mut rng).expect("customers");
        assert_eq!(records.len(), dates.len() * catalog.regions.len());
    }
}

#[test]
fn totals_come_from_one_shared_pool_in_date_major_order() {
    let catalog = Catalog::default();
    let region_count = catalog.regions.len() as f64;
    for offset in [0, -1, -3] {
        let mut rng = mock_rng(Some(5));
        let records = generate_customer_data(&catalog, Period::Month, offset, today(), &mut rng)
            .expect("customers");

        let mut pool = 5_000 - i64::from(offset) * 1_000;
        let mut last_pool = pool;
        for (idx, record) in records.iter().enumerate() {
            let region = &catalog.regions[idx % catalog.regions.len()];
            assert_eq!(record.region, region.name);

            pool += record.new_customers as i64;
            assert!(pool >= last_pool, "shared pool decreased");
            last_pool = pool;

            let expected = (pool as f64 * region.market_strength / region_count).floor() as u64;
            assert_eq!(record.total_customers, expected, "record {idx}");
        }
    }
}

#[test]
fn older_periods_start_from_a_larger_pool() {
    let catalog = Catalog::default();
    let mut rng = mock_rng(Some(21));
    let previous = generate_customer_data(&catalog, Period::Month, -1, today(), &mut rng)
        .expect("customers");
    // First record: North America, strength 1.0, pool 6000 + new customers.
    let first = &previous[0];
    let expected = ((6_000 + first.new_customers) as f64 / 6.0).floor() as u64;
    assert_eq!(first.total_customers, expected);
}

#[test]
fn returning_customers_stay_below_half_of_new() {
    let catalog = Catalog::default();
    let mut rng = mock_rng(Some(8));
    let records =
        generate_customer_data(&catalog, Period::Quarter, 0, today(), &mut rng).expect("customers");
    for record in &records {
        assert!(
            record.returning_customers * 2 <= record.new_customers,
            "{record:?}"
        );
        // 15 * 1.3 seasonal * 1.0 strength * 1.3 variation
        assert!(record.new_customers <= 25, "{record:?}");
    }
}

#[test]
fn far_future_offsets_clamp_to_zero() {
    let catalog = Catalog::default();
    let mut rng = mock_rng(Some(2));
    let records =
        generate_customer_data(&catalog, Period::Month, 20, today(), &mut rng).expect("customers");
    assert!(records.iter().all(|r| r.returning_customers == 0));
    assert_eq!(records[0].total_customers, 0);
}

#[test]
fn serializes_camel_case_customer_fields() {
    let catalog = Catalog::default();
    let mut rng = mock_rng(Some(4));
    let records =
        generate_customer_data(&catalog, Period::Month, 0, today(), &mut rng).expect("customers");
    let value = serde_json::to_value(&records[0]).expect("json");
    for field in ["date", "region", "newCustomers", "returningCustomers", "totalCustomers"] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
}
