use thiserror::Error;

use shared_models::AppError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Cast to ObjectId failed for value \"{0}\"")]
    InvalidId(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Unexpected database state: {0}")]
    Unexpected(String),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

impl DatabaseError {
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, DatabaseError::DuplicateKey(_))
    }
}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Unexpected(_) => AppError::Internal(err.to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}
