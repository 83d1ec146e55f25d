//! Core library for the tasks service
//!
//! This crate contains the business logic behind the task API:
//! - The task entity and its validity rule
//! - The repository abstraction and its in-memory backend
//! - The service layer enforcing task rules

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
