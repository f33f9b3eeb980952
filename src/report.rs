use std::collections::HashMap;
use std::io::{self, Write};

use chrono::Duration;
use log::{info, warn};
use prettytable::Table;

use crate::config::Config;
use crate::duration::{format_duration, min_duration_by_carrier};
use crate::error::TicketError;
use crate::filter::filter_route;
use crate::stats::PriceStatistics;
use crate::ticket::Ticket;

#[derive(Debug, Clone)]
pub struct Report {
    pub prices: PriceStatistics,
    pub min_durations: HashMap<String, Duration>,
}

impl Report {
    pub fn build(tickets: &[Ticket], config: &Config) -> Result<Self, TicketError> {
        let route = &config.route;
        let filtered = filter_route(tickets, route);
        info!("{} of {} tickets fly {} -> {}", filtered.len(), tickets.len(), route.origin, route.destination);

        if filtered.is_empty() {
            warn!("no tickets for {} -> {}", route.origin, route.destination);
        }

        let min_durations = min_duration_by_carrier(&filtered, &config.format)?;
        let prices = PriceStatistics::from_tickets(&filtered)?;

        Ok(Report { prices, min_durations })
    }

    /// Carriers with their minimum flight time, sorted by carrier.
    pub fn carriers(&self) -> Vec<(&str, Duration)> {
        let mut carriers: Vec<(&str, Duration)> = self
            .min_durations
            .iter()
            .map(|(carrier, duration)| (carrier.as_str(), *duration))
            .collect();
        carriers.sort_by(|a, b| a.0.cmp(b.0));
        carriers
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![b->"Carrier", b->"Min. flight time"]);

        for (carrier, duration) in self.carriers() {
            table.add_row(row![carrier, format_duration(duration)]);
        }

        table
    }

    /// Price difference line, price summary, then the carrier table.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{:?}", self.prices.difference)?;
        writeln!(
            out,
            "=== mean {:?} / median {:?} over {} tickets ===",
            self.prices.mean, self.prices.median, self.prices.count
        )?;
        self.table().print(out)?;

        Ok(())
    }

    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Route, TicketFormat};
    use crate::loader::parse_tickets;

    fn config() -> Config {
        Config {
            source: String::from("tickets.json"),
            route: Route::default(),
            format: TicketFormat::default(),
        }
    }

    const TICKETS: &str = r#"{ "tickets": [
      { "origin": "VVO", "destination": "TLV", "departure_date": "01.01.24", "departure_time": "23:50",
        "arrival_date": "02.01.24", "arrival_time": "00:10", "carrier": "A", "price": 1000 },
      { "origin": "vvo", "destination": "tlv", "departure_date": "01.01.24", "departure_time": "10:00",
        "arrival_date": "01.01.24", "arrival_time": "12:30", "carrier": "A", "price": 2000 },
      { "origin": "VVO", "destination": "TLV", "departure_date": "01.01.24", "departure_time": "6:10",
        "arrival_date": "01.01.24", "arrival_time": "15:25", "carrier": "S7", "price": 3000 },
      { "origin": "VVO", "destination": "TLV", "departure_date": "01.01.24", "departure_time": "9:40",
        "arrival_date": "01.01.24", "arrival_time": "19:25", "carrier": "BA", "price": 4000 },
      { "origin": "VVO", "destination": "TLV", "departure_date": "01.01.24", "departure_time": "8:00",
        "arrival_date": "01.01.24", "arrival_time": "9:00", "carrier": "BA", "price": 100000 },
      { "origin": "LRN", "destination": "TLV", "departure_date": "01.01.24", "departure_time": "12:50",
        "arrival_date": "01.01.24", "arrival_time": "14:30", "carrier": "SU", "price": 1 }
    ] }"#;

    #[test]
    fn builds_route_report() {
        let tickets = parse_tickets(TICKETS).unwrap();
        let report = Report::build(&tickets, &config()).unwrap();

        assert_eq!(report.prices.count, 5);
        assert_eq!(report.prices.difference, 19000.0);

        let carriers: Vec<(&str, String)> = report
            .carriers()
            .into_iter()
            .map(|(carrier, duration)| (carrier, format_duration(duration)))
            .collect();
        assert_eq!(
            carriers,
            vec![
                ("A", String::from("00:20")),
                ("BA", String::from("01:00")),
                ("S7", String::from("09:15")),
            ]
        );
    }

    #[test]
    fn table_lists_every_carrier() {
        let tickets = parse_tickets(TICKETS).unwrap();
        let table = Report::build(&tickets, &config()).unwrap().table();
        let rendered = table.to_string();

        assert_eq!(table.len(), 4);
        assert!(rendered.contains("00:20"));
        assert!(!rendered.contains("SU"));
    }

    #[test]
    fn writes_whole_report() {
        let tickets = parse_tickets(TICKETS).unwrap();
        let report = Report::build(&tickets, &config()).unwrap();
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "19000.0");
        assert_eq!(lines[1], "=== mean 22000.0 / median 3000.0 over 5 tickets ===");
        assert!(text.contains("| A "));
        assert!(text.contains("09:15"));
    }

    #[test]
    fn whole_number_difference_keeps_a_decimal() {
        let report = Report {
            prices: PriceStatistics::from_prices(&[12400, 13100, 15300, 15300]).unwrap(),
            min_durations: HashMap::new(),
        };
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().starts_with("-175.0\n"));
    }

    #[test]
    fn unknown_route_fails_on_prices() {
        let tickets = parse_tickets(TICKETS).unwrap();
        let mut config = config();
        config.route = Route::new("LED", "SVO");

        assert!(matches!(
            Report::build(&tickets, &config),
            Err(TicketError::EmptyDataSet)
        ));
    }

    #[test]
    fn malformed_ticket_fails_the_report() {
        let tickets = parse_tickets(&TICKETS.replace("15:25", "15h25")).unwrap();

        assert!(matches!(
            Report::build(&tickets, &config()),
            Err(TicketError::MalformedDateTime { .. })
        ));
    }
}
