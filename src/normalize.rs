use chrono::NaiveDate;

use crate::error::{PlannerError, Result};
use crate::types::{BudgetTier, PassengerCount, TripRequest, TripSpec};

/// Fallback trip length in days when the dates are missing, unparseable, or
/// not chronologically ordered
const DEFAULT_DURATION_DAYS: i64 = 3;

/// Reduce a raw [`TripRequest`] to a canonical [`TripSpec`].
///
/// Pure function of its input. Date problems never fail the request (the
/// duration just falls back to three days) and an unknown budget label falls
/// back to the mid tier. A malformed or zero passenger count is the one
/// strict field: it fails normalization, matching the upstream form which
/// only submits positive integers.
pub fn normalize_request(request: &TripRequest) -> Result<TripSpec> {
    let origin = strip_parens(&request.origin);
    let destination = strip_parens(&request.destination);

    let departure_date = parse_date(request.departure_date.as_deref());
    let return_date = parse_date(request.return_date.as_deref());
    let duration_days = duration_between(departure_date, return_date);

    let budget_tier = BudgetTier::from_label(request.budget.as_deref().unwrap_or("mid"));
    let passenger_count = coerce_passenger_count(request.passengers.as_ref())?;

    Ok(TripSpec {
        origin,
        destination,
        departure_date,
        return_date,
        duration_days,
        budget_tier,
        budget_amount: budget_tier.amount(),
        passenger_count,
    })
}

/// Drop literal parenthesis characters, leaving everything else untouched
fn strip_parens(text: &str) -> String {
    text.chars().filter(|c| *c != '(' && *c != ')').collect()
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|text| text.parse::<NaiveDate>().ok())
}

fn duration_between(departure: Option<NaiveDate>, ret: Option<NaiveDate>) -> i64 {
    match (departure, ret) {
        (Some(departure), Some(ret)) => {
            let days = ret.signed_duration_since(departure).num_days();
            if days >= 1 {
                days
            } else {
                DEFAULT_DURATION_DAYS
            }
        }
        _ => DEFAULT_DURATION_DAYS,
    }
}

fn coerce_passenger_count(value: Option<&PassengerCount>) -> Result<u32> {
    let count = match value {
        None => 1,
        Some(PassengerCount::Number(n)) => *n,
        Some(PassengerCount::Text(text)) => text.trim().parse::<u32>().map_err(|_| {
            PlannerError::Normalization(format!("Invalid passenger count: {:?}", text))
        })?,
    };

    if count == 0 {
        return Err(PlannerError::Normalization(
            "Passenger count must be at least 1".to_string(),
        ));
    }

    Ok(count)
}
