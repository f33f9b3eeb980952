use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("malformed {field} '{value}': {source}")]
    MalformedDateTime {
        field: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("no tickets to compute price statistics from")]
    EmptyDataSet,
}
