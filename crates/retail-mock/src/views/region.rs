use rand::Rng;
use serde::Serialize;

use super::ViewContext;
use crate::aggregate::{
    compare_by_day_of_month, sales_by_date, sales_by_product, ComparisonPoint, NamedSales,
    SalesMetric, SalesTotals,
};
use crate::data::generator::generate_sales_data;
use crate::error::{MockError, MockResult};
use crate::metrics::{growth_rate_u64, ratio};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductComparison {
    pub name: String,
    pub region_sales: u64,
    pub avg_sales: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionView {
    pub region: String,
    pub total_sales: u64,
    pub total_orders: u64,
    pub total_units: u64,
    pub sales_growth: f64,
    pub product_breakdown: Vec<NamedSales>,
    pub trend: Vec<ComparisonPoint>,
    pub product_comparison: Vec<ProductComparison>,
}

/// Drill-down for one region; falls back to the first catalog region.
pub fn build<R: Rng + ?Sized>(ctx: &ViewContext<'_>, rng: &mut R) -> MockResult<RegionView> {
    let region = match ctx.region.as_deref() {
        Some(name) => ctx.catalog.require_region(name)?,
        None => ctx.catalog.regions.first().ok_or_else(|| {
            MockError::InvalidCatalog("catalog must define at least one region".to_string())
        })?,
    };

    let all_current = generate_sales_data(ctx.catalog, ctx.period, 0, ctx.today, rng)?;
    let mut previous = generate_sales_data(ctx.catalog, ctx.period, -1, ctx.today, rng)?;
    previous.retain(|r| r.region == region.name);
    let current: Vec<_> = all_current
        .iter()
        .filter(|r| r.region == region.name)
        .cloned()
        .collect();

    let totals = SalesTotals::from_records(&current);
    let previous_totals = SalesTotals::from_records(&previous);
    let region_count = ctx.catalog.regions.len() as f64;

    let product_comparison = ctx
        .catalog
        .products
        .iter()
        .map(|product| {
            let mut all_regions = 0u64;
            let mut region_sales = 0u64;
            for record in all_current.iter().filter(|r| r.product == product.name) {
                all_regions += record.sales;
                if record.region == region.name {
                    region_sales += record.sales;
                }
            }
            ProductComparison {
                name: product.name.clone(),
                region_sales,
                avg_sales: ratio(all_regions as f64, region_count),
            }
        })
        .collect();

    Ok(RegionView {
        region: region.name.clone(),
        total_sales: totals.sales,
        total_orders: totals.orders,
        total_units: totals.units,
        sales_growth: growth_rate_u64(totals.sales, previous_totals.sales),
        product_breakdown: sales_by_product(&current, SalesMetric::Sales),
        trend: compare_by_day_of_month(&sales_by_date(&current), &sales_by_date(&previous)),
        product_comparison,
    })
}
