use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::data::catalog::Catalog;
use crate::data::datasets::{CustomerRecord, SalesRecord};
use crate::data::dates::Period;
use crate::data::generator::{generate_customer_data, generate_sales_data};
use crate::error::{MockError, MockResult};

pub mod customers;
pub mod order_list;
pub mod orders;
pub mod overview;
pub mod region;
pub mod regions;

pub fn list_views() -> &'static [&'static str] {
    &[
        "overview",
        "orders",
        "customers",
        "region",
        "regions",
        "order_list",
    ]
}

/// Inputs shared by every dashboard view.
#[derive(Clone, Debug)]
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub period: Period,
    pub today: NaiveDate,
    pub region: Option<String>,
    pub product: Option<String>,
}

impl<'a> ViewContext<'a> {
    pub fn new(catalog: &'a Catalog, period: Period, today: NaiveDate) -> Self {
        Self {
            catalog,
            period,
            today,
            region: None,
            product: None,
        }
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn with_product(mut self, product: Option<String>) -> Self {
        self.product = product;
        self
    }

    pub fn validate(&self) -> MockResult<()> {
        if let Some(region) = self.region.as_deref() {
            self.catalog.require_region(region)?;
        }
        if let Some(product) = self.product.as_deref() {
            self.catalog.require_product(product)?;
        }
        Ok(())
    }

    pub fn matches_sale(&self, record: &SalesRecord) -> bool {
        self.region.as_deref().is_none_or(|r| record.region == r)
            && self.product.as_deref().is_none_or(|p| record.product == p)
    }

    pub fn matches_customer(&self, record: &CustomerRecord) -> bool {
        self.region.as_deref().is_none_or(|r| record.region == r)
    }

    /// Sales for `offset` periods back, narrowed to the active filters.
    pub fn filtered_sales<R: Rng + ?Sized>(
        &self,
        offset: i32,
        rng: &mut R,
    ) -> MockResult<Vec<SalesRecord>> {
        let mut records = generate_sales_data(self.catalog, self.period, offset, self.today, rng)?;
        records.retain(|r| self.matches_sale(r));
        Ok(records)
    }

    pub fn filtered_customers<R: Rng + ?Sized>(
        &self,
        offset: i32,
        rng: &mut R,
    ) -> MockResult<Vec<CustomerRecord>> {
        let mut records =
            generate_customer_data(self.catalog, self.period, offset, self.today, rng)?;
        records.retain(|r| self.matches_customer(r));
        Ok(records)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum ViewOutput {
    Overview(overview::OverviewView),
    Orders(orders::OrdersView),
    Customers(customers::CustomersView),
    Region(region::RegionView),
    Regions(regions::RegionsView),
    OrderList(order_list::OrderListView),
}

pub fn render_view<R: Rng + ?Sized>(
    name: &str,
    ctx: &ViewContext<'_>,
    rng: &mut R,
) -> MockResult<ViewOutput> {
    ctx.validate()?;
    info!(
        view = name,
        period = ctx.period.as_str(),
        today = %ctx.today,
        region = ctx.region.as_deref().unwrap_or("all"),
        product = ctx.product.as_deref().unwrap_or("all"),
        "rendering view"
    );
    match name {
        "overview" => Ok(ViewOutput::Overview(overview::build(ctx, rng)?)),
        "orders" => Ok(ViewOutput::Orders(orders::build(ctx, rng)?)),
        "customers" => Ok(ViewOutput::Customers(customers::build(ctx, rng)?)),
        "region" => Ok(ViewOutput::Region(region::build(ctx, rng)?)),
        "regions" => Ok(ViewOutput::Regions(regions::build(ctx, rng)?)),
        "order_list" => Ok(ViewOutput::OrderList(order_list::build(ctx, rng)?)),
        other => Err(MockError::InvalidArgument(format!(
            "unknown view '{other}' (expected one of: {})",
            list_views().join(", ")
        ))),
    }
}
