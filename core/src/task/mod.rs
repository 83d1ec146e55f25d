//! Task module
//!
//! This module contains the task entity, its storage contract and the
//! service that applies task rules on top of it.

mod memory_store;
mod model;
mod repository;
mod service;

pub use memory_store::InMemoryTaskStore;
pub use model::*;
pub use repository::TaskRepository;
pub use service::TaskService;
