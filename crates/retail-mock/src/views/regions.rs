use rand::Rng;
use serde::Serialize;

use super::ViewContext;
use crate::aggregate::{sales_by_region, NamedSales, SalesMetric};
use crate::data::datasets::RegionProfile;
use crate::data::dates::Period;
use crate::data::generator::{generate_region_profiles, generate_sales_data};
use crate::error::MockResult;
use crate::metrics::{growth_rate_u64, percentage};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRow {
    #[serde(flatten)]
    pub profile: RegionProfile,
    pub sales: u64,
    pub previous_sales: u64,
    pub sales_growth: f64,
    pub target_achievement: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegionsView {
    pub regions: Vec<RegionRow>,
}

/// Region table comparing this year's sales with last year's, whatever the context period.
///
/// Draw order is profiles, current year, previous year.
pub fn build<R: Rng + ?Sized>(ctx: &ViewContext<'_>, rng: &mut R) -> MockResult<RegionsView> {
    let profiles = generate_region_profiles(ctx.catalog, rng);
    let current = generate_sales_data(ctx.catalog, Period::Year, 0, ctx.today, rng)?;
    let previous = generate_sales_data(ctx.catalog, Period::Year, -1, ctx.today, rng)?;
    let current = sales_by_region(&current, SalesMetric::Sales);
    let previous = sales_by_region(&previous, SalesMetric::Sales);

    let regions = profiles
        .into_iter()
        .map(|profile| {
            let sales = region_sales(&current, &profile.name);
            let previous_sales = region_sales(&previous, &profile.name);
            RegionRow {
                target_achievement: percentage(sales as f64, profile.sales_target as f64),
                sales_growth: growth_rate_u64(sales, previous_sales),
                sales,
                previous_sales,
                profile,
            }
        })
        .collect();

    Ok(RegionsView { regions })
}

fn region_sales(rows: &[NamedSales], name: &str) -> u64 {
    rows.iter()
        .find(|row| row.name == name)
        .map(|row| row.totals.sales)
        .unwrap_or(0)
}
