use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::config::TicketFormat;
use crate::error::TicketError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    pub origin: String,
    #[serde(default)]
    pub origin_name: Option<String>,
    pub destination: String,
    #[serde(default)]
    pub destination_name: Option<String>,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub carrier: String,
    #[serde(default)]
    pub stops: u32,
    pub price: u32,
}

/// Top level layout of a ticket file: `{ "tickets": [ ... ] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tickets {
    pub tickets: Vec<Ticket>,
}

impl Ticket {
    pub fn departure(&self, format: &TicketFormat) -> Result<NaiveDateTime, TicketError> {
        parse_date_time(
            "departure",
            &self.departure_date,
            &self.departure_time,
            format,
        )
    }

    pub fn arrival(&self, format: &TicketFormat) -> Result<NaiveDateTime, TicketError> {
        parse_date_time("arrival", &self.arrival_date, &self.arrival_time, format)
    }
}

fn parse_date_time(
    field: &'static str,
    date: &str,
    time: &str,
    format: &TicketFormat,
) -> Result<NaiveDateTime, TicketError> {
    let date = NaiveDate::parse_from_str(date, &format.date).map_err(|source| {
        TicketError::MalformedDateTime {
            field: format!("{}_date", field),
            value: date.to_string(),
            source,
        }
    })?;
    let time = NaiveTime::parse_from_str(time, &format.time).map_err(|source| {
        TicketError::MalformedDateTime {
            field: format!("{}_time", field),
            value: time.to_string(),
            source,
        }
    })?;

    Ok(NaiveDateTime::new(date, time))
}

#[cfg(test)]
pub(crate) fn ticket(
    carrier: &str,
    departure: (&str, &str),
    arrival: (&str, &str),
    price: u32,
) -> Ticket {
    Ticket {
        origin: String::from("VVO"),
        origin_name: None,
        destination: String::from("TLV"),
        destination_name: None,
        departure_date: String::from(departure.0),
        departure_time: String::from(departure.1),
        arrival_date: String::from(arrival.0),
        arrival_time: String::from(arrival.1),
        carrier: String::from(carrier),
        stops: 0,
        price,
    }
}
