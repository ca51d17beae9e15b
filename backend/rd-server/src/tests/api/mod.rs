mod error;
mod extractors;
mod record_outcome_request;
