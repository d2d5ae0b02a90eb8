//! Meal types and feeding-form validation.
//!
//! Feedings arrive as browser form fields (`date`, `meal`), so both values
//! are validated here before anything touches the database.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The three meal slots a feeding can be logged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    /// The lowercase string stored in the `feedings.meal` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Meal::Breakfast),
            "lunch" => Ok(Meal::Lunch),
            "dinner" => Ok(Meal::Dinner),
            other => Err(CoreError::Validation(format!(
                "Invalid meal '{other}'. Must be one of: breakfast, lunch, dinner"
            ))),
        }
    }
}

/// Validate the raw feeding form fields.
///
/// `date` must parse as an ISO calendar date (`YYYY-MM-DD`) and `meal` must
/// be one of the [`Meal`] values.
pub fn parse_feeding_form(date: &str, meal: &str) -> Result<(NaiveDate, Meal), CoreError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| CoreError::Validation(format!("Invalid date '{date}': {e}")))?;
    let meal = meal.parse::<Meal>()?;
    Ok((date, meal))
}
