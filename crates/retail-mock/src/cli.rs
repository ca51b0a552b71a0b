use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::data::dates::Period;
use crate::error::{MockError, MockResult};
use crate::views::list_views;

#[derive(Debug, Parser)]
#[command(name = "retail-mock", about = "synthetic retail dashboard data generator")]
pub struct Args {
    /// YAML file replacing the built-in regions and products.
    #[arg(long, env = "RETAIL_MOCK_CATALOG")]
    pub catalog: Option<PathBuf>,
    /// Calendar date treated as "now" (YYYY-MM-DD). Defaults to the local date.
    #[arg(long, env = "RETAIL_MOCK_TODAY")]
    pub today: Option<String>,
    /// Fixes the random stream so output is reproducible.
    #[arg(long, env = "RETAIL_MOCK_SEED")]
    pub seed: Option<u64>,
    #[arg(long)]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List,
    Catalog,
    Dates {
        #[arg(long, value_enum, default_value_t = Period::Month)]
        period: Period,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    Sales {
        #[arg(long, value_enum, default_value_t = Period::Month)]
        period: Period,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        product: Option<String>,
    },
    Customers {
        #[arg(long, value_enum, default_value_t = Period::Month)]
        period: Period,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
        #[arg(long)]
        region: Option<String>,
    },
    View {
        #[arg(default_value = "overview")]
        name: String,
        #[arg(long, value_enum, default_value_t = Period::Month)]
        period: Period,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        product: Option<String>,
    },
}

pub fn parse_today(value: Option<&str>) -> MockResult<NaiveDate> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(Local::now().date_naive());
    };
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|error| {
        MockError::InvalidArgument(format!(
            "invalid today '{value}'; expected YYYY-MM-DD ({error})"
        ))
    })
}

/// `"all"` and blank values mean no filter.
pub fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

pub fn validate_view_name(name: &str) -> MockResult<()> {
    if list_views().contains(&name) {
        return Ok(());
    }
    Err(MockError::InvalidArgument(format!(
        "unknown view '{name}' (expected one of: {})",
        list_views().join(", ")
    )))
}
