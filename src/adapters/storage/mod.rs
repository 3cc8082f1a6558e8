//! Storage Adapters
//!
//! Implementations of the AvailabilityRepository port.
//!
//! ## Available Adapters
//!
//! - **FileAvailabilityRepository** - One YAML file per worker on disk
//! - **InMemoryAvailabilityRepository** - Map in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileAvailabilityRepository, InMemoryAvailabilityRepository};
//!
//! // Production: file-based storage
//! let repo = FileAvailabilityRepository::new("./data/availability");
//!
//! // Testing: in-memory storage
//! let repo = InMemoryAvailabilityRepository::new();
//! ```

mod file_availability_repository;
mod in_memory_availability_repository;

pub use file_availability_repository::FileAvailabilityRepository;
pub use in_memory_availability_repository::InMemoryAvailabilityRepository;
