pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::CoursehubError;
pub use crate::core::services::CoursehubService;
pub use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage, mongo::MongoStorage};

#[cfg(test)]
mod tests; // Include integration tests
