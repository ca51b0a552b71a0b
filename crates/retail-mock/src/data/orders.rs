use std::collections::HashSet;

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::datasets::{MockOrder, OrderStatus, PaymentMethod, SalesRecord};
use crate::error::MockResult;

pub const DEFAULT_ORDER_LIMIT: usize = 100;

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Michael", "Sarah", "David", "Emma", "Robert", "Lisa", "James", "Emily",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Rodriguez",
    "Wilson",
];
const STATUS_WEIGHTS: [(OrderStatus, f64); 6] = [
    (OrderStatus::Pending, 0.15),
    (OrderStatus::Processing, 0.2),
    (OrderStatus::Shipped, 0.3),
    (OrderStatus::Delivered, 0.25),
    (OrderStatus::Cancelled, 0.05),
    (OrderStatus::Returned, 0.05),
];
const PAYMENT_METHODS: [PaymentMethod; 4] = [
    PaymentMethod::CreditCard,
    PaymentMethod::PayPal,
    PaymentMethod::BankTransfer,
    PaymentMethod::CashOnDelivery,
];

/// Turns the first `limit` distinct (date, region, product) sales records into
/// order rows, newest first.
pub fn generate_orders<R: Rng + ?Sized>(
    sales: &[SalesRecord],
    rng: &mut R,
    limit: usize,
) -> MockResult<Vec<MockOrder>> {
    let statuses = status_distribution()?;
    let mut seen = HashSet::new();
    let mut orders = Vec::with_capacity(limit.min(sales.len()));

    for sale in sales {
        if orders.len() >= limit {
            break;
        }
        if !seen.insert((sale.date, sale.region.as_str(), sale.product.as_str())) {
            continue;
        }

        let customer = format!(
            "{} {}",
            FIRST_NAMES.choose(rng).copied().unwrap_or("John"),
            LAST_NAMES.choose(rng).copied().unwrap_or("Smith"),
        );
        let status = STATUS_WEIGHTS[statuses.sample(rng)].0;
        let payment_method = PAYMENT_METHODS
            .choose(rng)
            .copied()
            .unwrap_or(PaymentMethod::CreditCard);

        orders.push(MockOrder {
            id: format!("ORD-{:04}", rng.gen_range(0..10_000)),
            date: sale.date,
            customer,
            region: sale.region.clone(),
            product: sale.product.clone(),
            quantity: sale.units,
            total: sale.sales,
            status,
            payment_method,
            shipping_cost: rng.gen_range(5..25),
            notes: String::new(),
        });
    }

    orders.sort_by(|a, b| b.date.cmp(&a.date));
    debug!(orders = orders.len(), limit, "generated mock orders");
    Ok(orders)
}

fn status_distribution() -> Result<WeightedIndex<f64>, WeightedError> {
    WeightedIndex::new(STATUS_WEIGHTS.iter().map(|(_, weight)| *weight))
}
