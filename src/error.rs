use thiserror::Error;

use crate::auth::AuthError;
use crate::store::StoreError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("No permission to access this order")]
    Forbidden,
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Order store error: {0}")]
    StoreFailure(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(String),
    #[error("Food not found: {0}")]
    FoodNotFound(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("No permission to modify this review")]
    Forbidden,
    #[error("Review validation error: {0}")]
    ValidationError(String),
    #[error("Review store error: {0}")]
    StoreFailure(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodError {
    #[error("Food not found: {0}")]
    NotFound(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Insufficient privileges")]
    Forbidden,
    #[error("Food validation error: {0}")]
    ValidationError(String),
    #[error("Food store error: {0}")]
    StoreFailure(String),
}

impl OrderError {
    /// HTTP status the transport layer should answer with.
    #[allow(dead_code)]
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::ValidationError(_) => 400,
            OrderError::Unauthorized => 401,
            OrderError::Forbidden => 403,
            OrderError::NotFound(_) => 404,
            OrderError::StoreFailure(_) => 500,
        }
    }
}

impl ReviewError {
    /// HTTP status the transport layer should answer with.
    #[allow(dead_code)]
    pub fn status_code(&self) -> u16 {
        match self {
            ReviewError::ValidationError(_) => 400,
            ReviewError::Unauthorized => 401,
            ReviewError::Forbidden => 403,
            ReviewError::NotFound(_) | ReviewError::FoodNotFound(_) => 404,
            ReviewError::StoreFailure(_) => 500,
        }
    }
}

impl FoodError {
    /// HTTP status the transport layer should answer with.
    #[allow(dead_code)]
    pub fn status_code(&self) -> u16 {
        match self {
            FoodError::ValidationError(_) => 400,
            FoodError::Unauthorized => 401,
            FoodError::Forbidden => 403,
            FoodError::NotFound(_) => 404,
            FoodError::StoreFailure(_) => 500,
        }
    }
}

impl From<AuthError> for OrderError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized => OrderError::Unauthorized,
            AuthError::Forbidden => OrderError::Forbidden,
        }
    }
}

impl From<AuthError> for ReviewError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized => ReviewError::Unauthorized,
            AuthError::Forbidden => ReviewError::Forbidden,
        }
    }
}

impl From<AuthError> for FoodError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized => FoodError::Unauthorized,
            AuthError::Forbidden => FoodError::Forbidden,
        }
    }
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::StoreFailure(other.to_string()),
        }
    }
}

impl From<StoreError> for ReviewError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ReviewError::NotFound(id),
            other => ReviewError::StoreFailure(other.to_string()),
        }
    }
}

impl From<StoreError> for FoodError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => FoodError::NotFound(id),
            other => FoodError::StoreFailure(other.to_string()),
        }
    }
}

/// Failures crossing from the food catalog into review operations keep their
/// 404 identity; everything else is opaque to the review caller.
impl From<FoodError> for ReviewError {
    fn from(e: FoodError) -> Self {
        match e {
            FoodError::NotFound(id) => ReviewError::FoodNotFound(id),
            other => ReviewError::StoreFailure(other.to_string()),
        }
    }
}
