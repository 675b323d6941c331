//! Query and prompt composition for the three provider phases.

use chrono::NaiveDate;

use crate::types::TripSpec;

/// Build the destination research query sent to the search/answer provider
pub fn search_query(destination: &str, passenger_count: u32) -> String {
    format!(
        "Find travel information for {} including:\n\
         - Top attractions and activities with prices\n\
         - Hotel recommendations and costs in Indian Rupees\n\
         - Best restaurants and dining costs\n\
         - Local transportation options and costs\n\
         - Weather and best time to visit\n\
         - Safety tips and local customs\n\
         - Daily budget estimates for {} travelers",
        destination, passenger_count
    )
}

/// Build the fixed-shape points-of-interest query
pub fn places_query(destination: &str) -> String {
    format!("hotels restaurants attractions in {}", destination)
}

/// Compose the itinerary generation prompt from the trip spec and the two
/// prior phase outputs, embedded verbatim
pub fn itinerary_prompt(spec: &TripSpec, search_summary: &str, places_summary: &str) -> String {
    format!(
        "Create a detailed {duration}-day travel plan for {destination}.\n\n\
         TRIP DETAILS:\n\
         - Origin: {origin}\n\
         - Destination: {destination}\n\
         - Duration: {duration} days\n\
         - Budget: ₹{budget}\n\
         - Travelers: {travelers}\n\
         - Dates: {departure} to {ret}\n\n\
         SEARCH RESULTS:\n\
         {search}\n\n\
         LOCATION DATA:\n\
         {places}\n\n\
         Create a comprehensive plan with:\n\
         1. Executive Summary\n\
         2. Day-by-day detailed itinerary with timings\n\
         3. Accommodation recommendations (3-4 options)\n\
         4. Transportation guide\n\
         5. Food & dining suggestions\n\
         6. Complete budget breakdown\n\
         7. Practical tips\n\
         8. Backup plans\n\n\
         Ensure the plan stays within ₹{budget} budget and includes specific costs.",
        duration = spec.duration_days,
        destination = spec.destination,
        origin = spec.origin,
        budget = group_thousands(spec.budget_amount),
        travelers = spec.passenger_count,
        departure = format_date(spec.departure_date),
        ret = format_date(spec.return_date),
        search = search_summary,
        places = places_summary,
    )
}

/// Render an amount with comma separators ("25,000")
pub fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string())
        .unwrap_or_else(|| "unspecified".to_string())
}
