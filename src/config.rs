use clap::{App, Arg, ArgMatches};

pub const DEFAULT_ORIGIN: &str = "VVO";
pub const DEFAULT_DESTINATION: &str = "TLV";
/// `dd.MM.yy`
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%y";
/// `H:mm`
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// chrono patterns used to read the date and time fields of a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketFormat {
    pub date: String,
    pub time: String,
}

impl Default for TicketFormat {
    fn default() -> Self {
        TicketFormat {
            date: String::from(DEFAULT_DATE_FORMAT),
            time: String::from(DEFAULT_TIME_FORMAT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: &str, destination: &str) -> Self {
        Route {
            origin: String::from(origin),
            destination: String::from(destination),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new(DEFAULT_ORIGIN, DEFAULT_DESTINATION)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: String,
    pub route: Route,
    pub format: TicketFormat,
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("tickets")
        .version("0.1.0")
        .about("Minimum flight time per carrier and mean/median price difference for a route")
        .arg(Arg::with_name("source")
            .required(true)
            .index(1)
            .help("Path or http(s) URL of the tickets.json file"))
        .arg(Arg::with_name("from")
            .short("f")
            .long("from")
            .takes_value(true)
            .default_value(DEFAULT_ORIGIN)
            .help("Origin airport code"))
        .arg(Arg::with_name("to")
            .short("t")
            .long("to")
            .takes_value(true)
            .default_value(DEFAULT_DESTINATION)
            .help("Destination airport code"))
        .arg(Arg::with_name("date-format")
            .long("date-format")
            .takes_value(true)
            .default_value(DEFAULT_DATE_FORMAT)
            .help("chrono pattern of the departure/arrival dates"))
        .arg(Arg::with_name("time-format")
            .long("time-format")
            .takes_value(true)
            .default_value(DEFAULT_TIME_FORMAT)
            .help("chrono pattern of the departure/arrival times"))
}

impl Config {
    pub fn from_args() -> Self {
        Config::from_matches(&app().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let value = |name: &str, default: &str| {
            String::from(matches.value_of(name).unwrap_or(default))
        };

        Config {
            source: value("source", ""),
            route: Route {
                origin: value("from", DEFAULT_ORIGIN),
                destination: value("to", DEFAULT_DESTINATION),
            },
            format: TicketFormat {
                date: value("date-format", DEFAULT_DATE_FORMAT),
                time: value("time-format", DEFAULT_TIME_FORMAT),
            },
        }
    }
}
