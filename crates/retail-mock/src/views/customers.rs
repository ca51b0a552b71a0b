use rand::Rng;
use serde::Serialize;

use super::ViewContext;
use crate::aggregate::{customers_by_date, customers_by_region, DatedCustomers, RegionCustomers};
use crate::error::MockResult;
use crate::metrics::{growth_rate_u64, retention_rate};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersView {
    pub latest_total_customers: u64,
    pub total_new_customers: u64,
    pub total_returning_customers: u64,
    pub retention_rate: f64,
    pub customer_growth: f64,
    pub daily: Vec<DatedCustomers>,
    pub by_region: Vec<RegionCustomers>,
}

pub fn build<R: Rng + ?Sized>(ctx: &ViewContext<'_>, rng: &mut R) -> MockResult<CustomersView> {
    let current = ctx.filtered_customers(0, rng)?;
    let previous = ctx.filtered_customers(-1, rng)?;

    let total_new_customers: u64 = current.iter().map(|r| r.new_customers).sum();
    let total_returning_customers: u64 = current.iter().map(|r| r.returning_customers).sum();
    let previous_new_customers: u64 = previous.iter().map(|r| r.new_customers).sum();

    let daily = customers_by_date(&current);
    let latest_total_customers = daily
        .last()
        .map(|row| row.counts.total_customers)
        .unwrap_or(0);

    Ok(CustomersView {
        latest_total_customers,
        total_new_customers,
        total_returning_customers,
        retention_rate: retention_rate(total_new_customers, total_returning_customers),
        customer_growth: growth_rate_u64(total_new_customers, previous_new_customers),
        daily,
        by_region: customers_by_region(&current),
    })
}
