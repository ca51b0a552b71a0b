use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: String,
    pub product: String,
    pub sales: u64,
    pub orders: u64,
    pub units: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub date: NaiveDate,
    pub region: String,
    pub new_customers: u64,
    pub returning_customers: u64,
    pub total_customers: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionProfile {
    pub id: String,
    pub name: String,
    pub market_strength: f64,
    pub population: u64,
    pub gdp: u64,
    pub sales_target: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    PayPal,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockOrder {
    pub id: String,
    pub date: NaiveDate,
    pub customer: String,
    pub region: String,
    pub product: String,
    pub quantity: u64,
    pub total: u64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub shipping_cost: u64,
    pub notes: String,
}
