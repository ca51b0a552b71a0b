use rand::Rng;
use serde::Serialize;

use super::ViewContext;
use crate::aggregate::{
    sales_by_date, sales_by_product, sales_by_region, DatedSales, NamedSales, SalesMetric,
    SalesTotals,
};
use crate::error::MockResult;
use crate::metrics::{growth_rate, growth_rate_u64, ratio};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersView {
    pub total_orders: u64,
    pub total_units: u64,
    pub total_revenue: u64,
    pub orders_growth: f64,
    pub average_order_value: f64,
    pub average_order_value_growth: f64,
    pub units_per_order: f64,
    pub by_date: Vec<DatedSales>,
    pub by_region: Vec<NamedSales>,
    pub by_product: Vec<NamedSales>,
}

pub fn build<R: Rng + ?Sized>(ctx: &ViewContext<'_>, rng: &mut R) -> MockResult<OrdersView> {
    let current = ctx.filtered_sales(0, rng)?;
    let previous = ctx.filtered_sales(-1, rng)?;
    let now = SalesTotals::from_records(&current);
    let before = SalesTotals::from_records(&previous);

    let average_order_value = ratio(now.sales as f64, now.orders as f64);
    let previous_average_order_value = ratio(before.sales as f64, before.orders as f64);

    Ok(OrdersView {
        total_orders: now.orders,
        total_units: now.units,
        total_revenue: now.sales,
        orders_growth: growth_rate_u64(now.orders, before.orders),
        average_order_value,
        average_order_value_growth: growth_rate(average_order_value, previous_average_order_value),
        units_per_order: ratio(now.units as f64, now.orders as f64),
        by_date: sales_by_date(&current),
        by_region: sales_by_region(&current, SalesMetric::Orders),
        by_product: sales_by_product(&current, SalesMetric::Orders),
    })
}
