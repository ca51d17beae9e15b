use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] rd_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] rd_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics recorder error: {message}")]
    Metrics { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
