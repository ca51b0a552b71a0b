use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::data::datasets::{CustomerRecord, SalesRecord};

/// How a numeric field folds repeated keys together.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Combine {
    Sum,
    /// For fields that are already cumulative.
    Max,
}

impl Combine {
    pub fn apply(self, acc: &mut u64, value: u64) {
        match self {
            Self::Sum => *acc += value,
            Self::Max => *acc = (*acc).max(value),
        }
    }
}

/// Groups `records` by `key`, keeping keys in first-seen order.
///
/// `init` builds the zero row for a new key; `fold` then runs for every record,
/// the first one included.
pub fn group_by<'a, T, K, A>(
    records: &'a [T],
    mut key: impl FnMut(&'a T) -> K,
    mut init: impl FnMut(&'a T) -> A,
    mut fold: impl FnMut(&mut A, &'a T),
) -> Vec<A>
where
    K: Eq + Hash,
{
    let mut index = HashMap::<K, usize>::new();
    let mut rows = Vec::<A>::new();
    for record in records {
        let slot = *index.entry(key(record)).or_insert_with(|| {
            rows.push(init(record));
            rows.len() - 1
        });
        fold(&mut rows[slot], record);
    }
    rows
}

/// Stable, so rows sharing a date keep their encounter order.
pub fn sort_by_date<A>(rows: &mut [A], date: impl Fn(&A) -> NaiveDate) {
    rows.sort_by_key(|row| date(row));
}

/// Stable, so ties keep their encounter order.
pub fn sort_by_metric_desc<A>(rows: &mut [A], metric: impl Fn(&A) -> u64) {
    rows.sort_by_key(|row| Reverse(metric(row)));
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SalesTotals {
    pub sales: u64,
    pub orders: u64,
    pub units: u64,
}

impl SalesTotals {
    pub fn add(&mut self, record: &SalesRecord) {
        Combine::Sum.apply(&mut self.sales, record.sales);
        Combine::Sum.apply(&mut self.orders, record.orders);
        Combine::Sum.apply(&mut self.units, record.units);
    }

    pub fn from_records(records: &[SalesRecord]) -> Self {
        let mut totals = Self::default();
        for record in records {
            totals.add(record);
        }
        totals
    }

    pub fn metric(&self, metric: SalesMetric) -> u64 {
        match metric {
            SalesMetric::Sales => self.sales,
            SalesMetric::Orders => self.orders,
            SalesMetric::Units => self.units,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SalesMetric {
    Sales,
    Orders,
    Units,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCounts {
    pub new_customers: u64,
    pub returning_customers: u64,
    pub total_customers: u64,
}

impl CustomerCounts {
    /// New and returning counts add up; the total is already cumulative, so it keeps the max.
    pub fn add(&mut self, record: &CustomerRecord) {
        Combine::Sum.apply(&mut self.new_customers, record.new_customers);
        Combine::Sum.apply(&mut self.returning_customers, record.returning_customers);
        Combine::Max.apply(&mut self.total_customers, record.total_customers);
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DatedSales {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub totals: SalesTotals,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NamedSales {
    pub name: String,
    #[serde(flatten)]
    pub totals: SalesTotals,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DatedCustomers {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: CustomerCounts,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RegionCustomers {
    pub region: String,
    #[serde(flatten)]
    pub counts: CustomerCounts,
}

pub fn sales_by_date(records: &[SalesRecord]) -> Vec<DatedSales> {
    let mut rows = group_by(
        records,
        |r| r.date,
        |r| DatedSales {
            date: r.date,
            totals: SalesTotals::default(),
        },
        |row, r| row.totals.add(r),
    );
    sort_by_date(&mut rows, |row| row.date);
    rows
}

pub fn sales_by_region(records: &[SalesRecord], order_by: SalesMetric) -> Vec<NamedSales> {
    sales_by_name(records, |r| r.region.as_str(), order_by)
}

pub fn sales_by_product(records: &[SalesRecord], order_by: SalesMetric) -> Vec<NamedSales> {
    sales_by_name(records, |r| r.product.as_str(), order_by)
}

fn sales_by_name<'a>(
    records: &'a [SalesRecord],
    name: impl Fn(&'a SalesRecord) -> &'a str,
    order_by: SalesMetric,
) -> Vec<NamedSales> {
    let mut rows = group_by(
        records,
        &name,
        |r| NamedSales {
            name: name(r).to_string(),
            totals: SalesTotals::default(),
        },
        |row, r| row.totals.add(r),
    );
    sort_by_metric_desc(&mut rows, |row| row.totals.metric(order_by));
    rows
}

pub fn customers_by_date(records: &[CustomerRecord]) -> Vec<DatedCustomers> {
    let mut rows = group_by(
        records,
        |r| r.date,
        |r| DatedCustomers {
            date: r.date,
            counts: CustomerCounts::default(),
        },
        |row, r| row.counts.add(r),
    );
    sort_by_date(&mut rows, |row| row.date);
    rows
}

pub fn customers_by_region(records: &[CustomerRecord]) -> Vec<RegionCustomers> {
    let mut rows = group_by(
        records,
        |r| r.region.as_str(),
        |r| RegionCustomers {
            region: r.region.clone(),
            counts: CustomerCounts::default(),
        },
        |row, r| row.counts.add(r),
    );
    sort_by_metric_desc(&mut rows, |row| row.counts.total_customers);
    rows
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ComparisonPoint {
    pub date: NaiveDate,
    pub current: u64,
    pub previous: u64,
}

/// Lines the current period up against the previous one by day of month.
/// Days the previous period lacks (e.g. the 31st) compare against zero.
pub fn compare_by_day_of_month(
    current: &[DatedSales],
    previous: &[DatedSales],
) -> Vec<ComparisonPoint> {
    current
        .iter()
        .map(|row| ComparisonPoint {
            date: row.date,
            current: row.totals.sales,
            previous: previous
                .iter()
                .find(|p| p.date.day() == row.date.day())
                .map(|p| p.totals.sales)
                .unwrap_or(0),
        })
        .collect()
}
