use chrono::{Datelike, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::catalog::Catalog;
use super::datasets::{CustomerRecord, RegionProfile, SalesRecord};
use super::dates::{generate_dates, Period};
use crate::error::MockResult;

const BASE_NEW_CUSTOMERS_PER_DAY: f64 = 15.0;
const BASE_RETURNING_RATIO: f64 = 0.4;
const BASE_CUSTOMER_POOL: i64 = 5_000;
const CUSTOMER_POOL_STEP: i64 = 1_000;

/// Seeded runs are reproducible; unseeded runs draw fresh entropy every call.
pub fn mock_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// One record per (date, region, product), date-major.
pub fn generate_sales_data<R: Rng + ?Sized>(
    catalog: &Catalog,
    period: Period,
    offset: i32,
    today: NaiveDate,
    rng: &mut R,
) -> MockResult<Vec<SalesRecord>> {
    let dates = generate_dates(period, offset, today)?;
    let mut out = Vec::with_capacity(dates.len() * catalog.regions.len() * catalog.products.len());

    for date in &dates {
        let seasonal = catalog.seasonal_factors.for_month(date.month0());

        for region in &catalog.regions {
            let strength = region.market_strength;

            for product in &catalog.products {
                let base_orders =
                    (rng.gen_range(10.0..30.0) * product.popularity * strength * seasonal).floor();
                let units_per_order = rng.gen_range(1.0_f64..3.0).floor();
                let daily_variation = rng.gen_range(0.8..1.2);

                let orders = (base_orders * daily_variation).floor();
                let units = (base_orders * units_per_order * daily_variation).floor();
                let price_variation = rng.gen_range(0.95..1.05);
                let sales = (units * product.base_price * price_variation).floor();

                out.push(SalesRecord {
                    date: *date,
                    region: region.name.clone(),
                    product: product.name.clone(),
                    sales: sales.max(0.0) as u64,
                    orders: orders.max(0.0) as u64,
                    units: units.max(0.0) as u64,
                });
            }
        }
    }

    debug!(
        period = period.as_str(),
        offset,
        days = dates.len(),
        records = out.len(),
        "generated sales data"
    );
    Ok(out)
}

/// One record per (date, region), date-major.
///
/// A single running customer pool is shared by every region in the call.
/// Each record reports that pool scaled by the region's strength and divided
/// by the region count, so per-region totals are not additive.
pub fn generate_customer_data<R: Rng + ?Sized>(
    catalog: &Catalog,
    period: Period,
    offset: i32,
    today: NaiveDate,
    rng: &mut R,
) -> MockResult<Vec<CustomerRecord>> {
    let dates = generate_dates(period, offset, today)?;
    let region_count = catalog.regions.len() as f64;
    let returning_scale = (1.0 + f64::from(offset) * -0.1).max(0.0);
    let mut running_total = BASE_CUSTOMER_POOL - i64::from(offset) * CUSTOMER_POOL_STEP;
    let mut out = Vec::with_capacity(dates.len() * catalog.regions.len());

    for date in &dates {
        let seasonal = catalog.seasonal_factors.for_month(date.month0());

        for region in &catalog.regions {
            let strength = region.market_strength;

            let new_base = BASE_NEW_CUSTOMERS_PER_DAY * seasonal * strength;
            let new_customers = (new_base * rng.gen_range(0.7..1.3)).floor().max(0.0) as u64;

            let returning_ratio = BASE_RETURNING_RATIO + rng.gen_range(-0.1..0.1);
            let returning_customers = (new_customers as f64 * returning_ratio * returning_scale)
                .floor()
                .max(0.0) as u64;

            running_total += new_customers as i64;
            let total_customers = (running_total as f64 * strength / region_count)
                .floor()
                .max(0.0) as u64;

            out.push(CustomerRecord {
                date: *date,
                region: region.name.clone(),
                new_customers,
                returning_customers,
                total_customers,
            });
        }
    }

    debug!(
        period = period.as_str(),
        offset,
        days = dates.len(),
        records = out.len(),
        final_pool = running_total,
        "generated customer data"
    );
    Ok(out)
}

pub fn generate_region_profiles<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
) -> Vec<RegionProfile> {
    catalog
        .regions
        .iter()
        .map(|region| RegionProfile {
            id: region_id(&region.name),
            name: region.name.clone(),
            market_strength: region.market_strength,
            population: rng.gen_range(10.0_f64..510.0).floor() as u64 * 1_000_000,
            gdp: rng.gen_range(5.0_f64..55.0).floor() as u64 * 10,
            sales_target: rng.gen_range(20.0_f64..120.0).floor() as u64 * 1_000_000,
        })
        .collect()
}

/// `"Asia Pacific"` becomes `"reg_asia_pacific"`.
pub fn region_id(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("reg_{slug}")
}
