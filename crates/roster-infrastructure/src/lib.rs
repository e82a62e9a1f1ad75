//! Storage implementations for Roster.

pub mod in_memory_user_repository;

pub use crate::in_memory_user_repository::InMemoryUserRepository;
