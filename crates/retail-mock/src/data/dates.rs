use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{MockError, MockResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Month,
    Quarter,
    Year,
}

impl Period {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Month => "Monthly",
            Self::Quarter => "Quarterly",
            Self::Year => "Yearly",
        }
    }
}

/// Inclusive calendar window covered by one reporting period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |day| *day <= self.end)
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

pub fn period_range(period: Period, offset: i32, today: NaiveDate) -> MockResult<DateRange> {
    let year = today.year();
    let month0 = today.month0();
    let offset = i64::from(offset);

    let (start, next) = match period {
        Period::Month => (
            first_of_shifted_month(year, month0, offset),
            first_of_shifted_month(year, month0, offset + 1),
        ),
        Period::Quarter => {
            let quarter = i64::from(month0 / 3);
            (
                first_of_shifted_month(year, 0, (quarter + offset) * 3),
                first_of_shifted_month(year, 0, (quarter + offset + 1) * 3),
            )
        }
        Period::Year => (
            first_of_shifted_month(year, 0, offset * 12),
            first_of_shifted_month(year, 0, (offset + 1) * 12),
        ),
    };

    let start = start.ok_or_else(|| out_of_range(period, offset))?;
    let end = next
        .and_then(|first| first.pred_opt())
        .ok_or_else(|| out_of_range(period, offset))?;
    Ok(DateRange { start, end })
}

/// Every calendar day of the requested period, ascending and inclusive.
pub fn generate_dates(period: Period, offset: i32, today: NaiveDate) -> MockResult<Vec<NaiveDate>> {
    let range = period_range(period, offset, today)?;
    Ok(range.days().collect())
}

fn first_of_shifted_month(year: i32, month0: u32, shift: i64) -> Option<NaiveDate> {
    let total = i64::from(year) * 12 + i64::from(month0) + shift;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn out_of_range(period: Period, offset: i64) -> MockError {
    MockError::InvalidArgument(format!(
        "offset {offset} for period '{}' is outside the supported calendar range",
        period.as_str()
    ))
}
