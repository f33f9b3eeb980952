use std::collections::HashMap;

use chrono::Duration;
use log::debug;

use crate::config::TicketFormat;
use crate::error::TicketError;
use crate::ticket::Ticket;

/// Elapsed time between departure and arrival.
///
/// When the arrival time of day is earlier than the departure time of day and
/// the arrival date was not advanced past the departure date, the arrival is
/// moved one day forward. At most one day is ever added, so flights longer
/// than a day are not represented correctly.
pub fn flight_duration(ticket: &Ticket, format: &TicketFormat) -> Result<Duration, TicketError> {
    let departure = ticket.departure(format)?;
    let mut arrival = ticket.arrival(format)?;

    if arrival.time() < departure.time() && arrival.date() <= departure.date() {
        arrival = arrival + Duration::days(1);
    }

    Ok(arrival.signed_duration_since(departure))
}

/// Shortest flight of every carrier in `tickets`.
pub fn min_duration_by_carrier(
    tickets: &[&Ticket],
    format: &TicketFormat,
) -> Result<HashMap<String, Duration>, TicketError> {
    let mut min_durations: HashMap<String, Duration> = HashMap::new();

    for ticket in tickets {
        let duration = flight_duration(ticket, format)?;
        debug!("{} {} -> {}", ticket.carrier, ticket.departure_time, format_duration(duration));

        min_durations
            .entry(ticket.carrier.clone())
            .and_modify(|min| {
                if duration < *min {
                    *min = duration;
                }
            })
            .or_insert(duration);
    }

    Ok(min_durations)
}

/// `HH:MM`, hours are not wrapped at 24. Negative durations, from an arrival
/// dated before the departure, get a leading `-`.
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes();
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();

    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}
