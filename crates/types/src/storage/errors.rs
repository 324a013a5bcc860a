//! Error types for storage operations

use thiserror::Error;

/// Storage error type
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
	#[error("Entity not found with ID: {id}")]
	EntityNotFound { id: String },
	#[error("Entity already exists with ID: {id}")]
	EntityExists { id: String },
	#[error("Storage operation failed: {message}")]
	Operation { message: String },
}
