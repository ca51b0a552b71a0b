use rand::Rng;
use serde::Serialize;

use super::ViewContext;
use crate::data::datasets::MockOrder;
use crate::data::dates::Period;
use crate::data::generator::generate_sales_data;
use crate::data::orders::{generate_orders, DEFAULT_ORDER_LIMIT};
use crate::error::MockResult;

#[derive(Clone, Debug, Serialize)]
pub struct OrderListView {
    pub orders: Vec<MockOrder>,
}

/// Recent orders are always drawn from the current month.
pub fn build<R: Rng + ?Sized>(ctx: &ViewContext<'_>, rng: &mut R) -> MockResult<OrderListView> {
    let mut sales = generate_sales_data(ctx.catalog, Period::Month, 0, ctx.today, rng)?;
    sales.retain(|r| ctx.matches_sale(r));
    Ok(OrderListView {
        orders: generate_orders(&sales, rng, DEFAULT_ORDER_LIMIT)?,
    })
}
