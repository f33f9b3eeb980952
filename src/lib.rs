//! Route statistics over a tickets file: the shortest flight of every carrier
//! and the gap between the mean and the median price.

extern crate chrono;
extern crate clap;
extern crate reqwest;
extern crate serde_json;
#[macro_use] extern crate prettytable;

pub mod config;
pub mod duration;
pub mod error;
pub mod filter;
pub mod loader;
pub mod report;
pub mod stats;
pub mod ticket;

pub use config::{Config, Route, TicketFormat};
pub use error::TicketError;
pub use report::Report;
pub use ticket::Ticket;
