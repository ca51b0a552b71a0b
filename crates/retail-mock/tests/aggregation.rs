use chrono::NaiveDate;
use retail_mock::aggregate::{
    compare_by_day_of_month, customers_by_date, customers_by_region, sales_by_date,
    sales_by_product, sales_by_region, sort_by_date, SalesMetric,
};
use retail_mock::data::catalog::Catalog;
use retail_mock::data::datasets::{CustomerRecord, SalesRecord};
use retail_mock::data::dates::Period;
use retail_mock::data::generator::{generate_customer_data, generate_sales_data, mock_rng};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).expect("valid date")
}

fn sale(date: NaiveDate, region: &str, product: &str, sales: u64, orders: u64) -> SalesRecord {
    SalesRecord {
        date,
        region: region.to_string(),
        product: product.to_string(),
        sales,
        orders,
        units: orders * 2,
    }
}

fn customer(date: NaiveDate, region: &str, new: u64, total: u64) -> CustomerRecord {
    CustomerRecord {
        date,
        region: region.to_string(),
        new_customers: new,
        returning_customers: new / 2,
        total_customers: total,
    }
}

#[test]
fn date_aggregate_is_sorted_and_stable_under_resorting() {
    let catalog = Catalog::default();
    let mut rng = mock_rng(Some(12));
    let records = generate_sales_data(&catalog, Period::Quarter, 0, day(15), &mut rng)
        .expect("sales data");
    let daily = sales_by_date(&records);

    let mut resorted = daily.clone();
    sort_by_date(&mut resorted, |row| row.date);
    assert_eq!(daily, resorted);
    assert!(daily.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn date_aggregate_sums_out_of_order_input() {
    let records = vec![
        sale(day(3), "Europe", "Sandals", 100, 1),
        sale(day(1), "Europe", "Sandals", 10, 1),
        sale(day(3), "Africa", "Sandals", 5, 2),
    ];
    let daily = sales_by_date(&records);
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].date, day(1));
    assert_eq!(daily[0].totals.sales, 10);
    assert_eq!(daily[1].date, day(3));
    assert_eq!(daily[1].totals.sales, 105);
    assert_eq!(daily[1].totals.orders, 3);
    assert_eq!(daily[1].totals.units, 6);
}

#[test]
fn region_and_product_rows_sort_descending_by_metric() {
    let catalog = Catalog::default();
    let mut rng = mock_rng(Some(13));
    let records =
        generate_sales_data(&catalog, Period::Month, 0, day(15), &mut rng).expect("sales data");

    let by_region = sales_by_region(&records, SalesMetric::Sales);
    assert_eq!(by_region.len(), catalog.regions.len());
    assert!(by_region
        .windows(2)
        .all(|w| w[0].totals.sales >= w[1].totals.sales));

    let by_region_orders = sales_by_region(&records, SalesMetric::Orders);
    assert!(by_region_orders
        .windows(2)
        .all(|w| w[0].totals.orders >= w[1].totals.orders));

    let by_product = sales_by_product(&records, SalesMetric::Orders);
    assert_eq!(by_product.len(), catalog.products.len());
    assert!(by_product
        .windows(2)
        .all(|w| w[0].totals.orders >= w[1].totals.orders));
}

#[test]
fn single_key_input_collapses_to_one_row() {
    let catalog = Catalog::default();
    let mut rng = mock_rng(Some(14));
    let mut records =
        generate_sales_data(&catalog, Period::Month, 0, day(15), &mut rng).expect("sales data");
    records.retain(|r| r.region == "Europe");
    let expected: u64 = records.iter().map(|r| r.sales).sum();

    let rows = sales_by_region(&records, SalesMetric::Sales);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Europe");
    assert_eq!(rows[0].totals.sales, expected);

    records.retain(|r| r.product == "Sandals");
    let expected_units: u64 = records.iter().map(|r| r.units).sum();
    let rows = sales_by_product(&records, SalesMetric::Units);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].totals.units, expected_units);
}

#[test]
fn ties_keep_encounter_order() {
    let records = vec![
        sale(day(1), "Europe", "Sandals", 50, 1),
        sale(day(1), "Africa", "Sandals", 50, 1),
        sale(day(1), "Asia Pacific", "Sandals", 70, 1),
    ];
    let rows = sales_by_region(&records, SalesMetric::Sales);
    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Asia Pacific", "Europe", "Africa"]);
}

#[test]
fn customer_totals_take_max_while_counts_sum() {
    let records = vec![
        customer(day(2), "Europe", 10, 400),
        customer(day(2), "Africa", 6, 250),
        customer(day(1), "Europe", 8, 390),
        customer(day(1), "Africa", 4, 260),
    ];

    let daily = customers_by_date(&records);
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].date, day(1));
    assert_eq!(daily[0].counts.new_customers, 12);
    assert_eq!(daily[0].counts.returning_customers, 6);
    assert_eq!(daily[0].counts.total_customers, 390);
    assert_eq!(daily[1].counts.new_customers, 16);
    assert_eq!(daily[1].counts.total_customers, 400);

    let by_region = customers_by_region(&records);
    assert_eq!(by_region[0].region, "Europe");
    assert_eq!(by_region[0].counts.total_customers, 400);
    assert_eq!(by_region[0].counts.new_customers, 18);
    assert_eq!(by_region[1].region, "Africa");
    assert_eq!(by_region[1].counts.total_customers, 260);
}

#[test]
fn generated_customer_rows_sort_by_total_descending() {
    let catalog = Catalog::default();
    let mut rng = mock_rng(Some(15));
    let records = generate_customer_data(&catalog, Period::Month, 0, day(15), &mut rng)
        .expect("customers");
    let by_region = customers_by_region(&records);
    assert_eq!(by_region.len(), catalog.regions.len());
    assert!(by_region
        .windows(2)
        .all(|w| w[0].counts.total_customers >= w[1].counts.total_customers));
}

#[test]
fn comparison_matches_by_day_of_month_and_defaults_to_zero() {
    let current = sales_by_date(&[
        sale(day(30), "Europe", "Sandals", 30, 1),
        sale(day(31), "Europe", "Sandals", 31, 1),
    ]);
    let february = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
    let previous = sales_by_date(&[sale(february, "Europe", "Sandals", 29, 1)]);
    let previous_30 = sales_by_date(&[sale(
        NaiveDate::from_ymd_opt(2024, 1, 30).expect("valid date"),
        "Europe",
        "Sandals",
        7,
        1,
    )]);

    let points = compare_by_day_of_month(&current, &previous);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].current, 30);
    assert_eq!(points[0].previous, 0);
    assert_eq!(points[1].previous, 0);

    let points = compare_by_day_of_month(&current, &previous_30);
    assert_eq!(points[0].previous, 7);
}
