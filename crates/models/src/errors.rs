use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Insert referenced a parent row that does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => ModelError::ForeignKey(msg),
            _ => ModelError::Db(e.to_string()),
        }
    }
}
