use crate::config::Route;
use crate::ticket::Ticket;

/// Tickets flying `route`, compared case-insensitively, in input order.
pub fn filter_route<'a>(tickets: &'a [Ticket], route: &Route) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|ticket| ticket.origin.eq_ignore_ascii_case(&route.origin))
        .filter(|ticket| ticket.destination.eq_ignore_ascii_case(&route.destination))
        .collect()
}
