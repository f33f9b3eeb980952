use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::ticket::{Ticket, Tickets};

const BOM: char = '\u{feff}';

/// Read tickets from a local file or an `http(s)://` URL.
pub fn load_tickets(source: &str) -> Result<Vec<Ticket>> {
    let text = if is_url(source) {
        fetch(source)
    } else {
        read_file(Path::new(source))
    };
    let text = text.with_context(|| format!("ticket source unavailable: {}", source))?;

    let tickets = parse_tickets(&text).with_context(|| format!("parsing {}", source))?;
    info!("loaded {} tickets from {}", tickets.len(), source);

    Ok(tickets)
}

/// Parse a `{ "tickets": [...] }` document. A leading byte order mark is skipped.
pub fn parse_tickets(text: &str) -> Result<Vec<Ticket>> {
    let text = text.trim_start_matches(BOM);
    let wrapper: Tickets = serde_json::from_str(text).context("invalid ticket JSON")?;

    Ok(wrapper.tickets)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn read_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

fn fetch(url: &str) -> Result<String> {
    let text = reqwest::blocking::get(url)?
        .error_for_status()?
        .text()?;

    Ok(text)
}
