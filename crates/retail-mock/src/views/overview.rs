use rand::Rng;
use serde::Serialize;

use super::ViewContext;
use crate::aggregate::{
    compare_by_day_of_month, sales_by_date, sales_by_product, sales_by_region, ComparisonPoint,
    NamedSales, SalesMetric, SalesTotals,
};
use crate::data::dates::Period;
use crate::error::MockResult;
use crate::metrics::growth_rate_u64;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_sales: u64,
    pub sales_growth: f64,
    pub total_orders: u64,
    pub orders_growth: f64,
    pub total_units: u64,
    pub units_growth: f64,
}

impl KpiSummary {
    pub fn compare(current: &SalesTotals, previous: &SalesTotals) -> Self {
        Self {
            total_sales: current.sales,
            sales_growth: growth_rate_u64(current.sales, previous.sales),
            total_orders: current.orders,
            orders_growth: growth_rate_u64(current.orders, previous.orders),
            total_units: current.units,
            units_growth: growth_rate_u64(current.units, previous.units),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub period: Period,
    pub period_label: &'static str,
    pub kpis: KpiSummary,
    pub sales_trend: Vec<ComparisonPoint>,
    pub regional_sales: Vec<NamedSales>,
    pub product_performance: Vec<NamedSales>,
}

pub fn build<R: Rng + ?Sized>(ctx: &ViewContext<'_>, rng: &mut R) -> MockResult<OverviewView> {
    let current = ctx.filtered_sales(0, rng)?;
    let previous = ctx.filtered_sales(-1, rng)?;

    let kpis = KpiSummary::compare(
        &SalesTotals::from_records(&current),
        &SalesTotals::from_records(&previous),
    );
    let sales_trend = compare_by_day_of_month(&sales_by_date(&current), &sales_by_date(&previous));

    Ok(OverviewView {
        period: ctx.period,
        period_label: ctx.period.label(),
        kpis,
        sales_trend,
        regional_sales: sales_by_region(&current, SalesMetric::Sales),
        product_performance: sales_by_product(&current, SalesMetric::Sales),
    })
}
