use crate::error::TicketError;
use crate::ticket::Ticket;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// `mean - median`
    pub difference: f64,
}

impl PriceStatistics {
    pub fn from_prices(prices: &[u32]) -> Result<Self, TicketError> {
        let mean = mean(prices)?;
        let median = median(prices)?;

        Ok(PriceStatistics {
            count: prices.len(),
            mean,
            median,
            difference: mean - median,
        })
    }

    pub fn from_tickets(tickets: &[&Ticket]) -> Result<Self, TicketError> {
        let prices: Vec<u32> = tickets.iter().map(|ticket| ticket.price).collect();
        PriceStatistics::from_prices(&prices)
    }
}

pub fn mean(prices: &[u32]) -> Result<f64, TicketError> {
    if prices.is_empty() {
        return Err(TicketError::EmptyDataSet);
    }

    let sum: u64 = prices.iter().map(|&price| u64::from(price)).sum();
    Ok(sum as f64 / prices.len() as f64)
}

pub fn median(prices: &[u32]) -> Result<f64, TicketError> {
    if prices.is_empty() {
        return Err(TicketError::EmptyDataSet);
    }

    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        let sum = u64::from(sorted[middle - 1]) + u64::from(sorted[middle]);
        Ok(sum as f64 / 2.0)
    } else {
        Ok(f64::from(sorted[middle]))
    }
}

pub fn price_difference(tickets: &[&Ticket]) -> Result<f64, TicketError> {
    PriceStatistics::from_tickets(tickets).map(|stats| stats.difference)
}
