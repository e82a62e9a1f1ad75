//! Identifier generation for user records.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces identifiers for new records.
///
/// Uniqueness within one generator instance is the only requirement.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonically increasing counter, starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// Which generator a service is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl IdStrategy {
    pub fn build(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Uuid => Box::new(UuidIdGenerator),
            Self::Sequential => Box::new(SequentialIdGenerator::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_unique() {
        let generator = UuidIdGenerator;
        let ids: HashSet<String> = (0..100).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_sequential_ids_increase() {
        let generator = SequentialIdGenerator::new();
        assert_eq!(generator.next_id(), "1");
        assert_eq!(generator.next_id(), "2");

        let generator = SequentialIdGenerator::starting_at(41);
        assert_eq!(generator.next_id(), "41");
    }

    #[test]
    fn test_strategy_builds_matching_generator() {
        assert_eq!(IdStrategy::Sequential.build().next_id(), "1");
        assert!(Uuid::parse_str(&IdStrategy::Uuid.build().next_id()).is_ok());
    }
}
