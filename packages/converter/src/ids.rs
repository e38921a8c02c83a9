//! Identifier generation for emitted nodes.
//!
//! Ids look like `container_3k9x0q2m1z7a` and are unique within one run.
//! Random suffixes carry 62 random bits taken from a v4 UUID; the sequential mode
//! numbers nodes instead so repeated conversions produce identical output.

use uuid::Uuid;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Prefix for container ids.
pub const CONTAINER_PREFIX: &str = "container";

/// Prefix for widget ids.
pub const WIDGET_PREFIX: &str = "widget";

/// How id suffixes are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMode {
    /// 62 random bits per id, no cross-run stability.
    Random,
    /// A per-run counter, stable across runs on the same input.
    Sequential,
}

/// Issues run-unique identifiers.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    mode: IdMode,
    counter: u64,
}

impl IdGenerator {
    /// Create a generator in the given mode.
    #[must_use]
    pub fn new(mode: IdMode) -> Self {
        Self { mode, counter: 0 }
    }

    /// Create a random-suffix generator.
    #[must_use]
    pub fn random() -> Self {
        Self::new(IdMode::Random)
    }

    /// Create a counter-based generator.
    #[must_use]
    pub fn sequential() -> Self {
        Self::new(IdMode::Sequential)
    }

    /// The mode this generator runs in.
    #[must_use]
    pub fn mode(&self) -> IdMode {
        self.mode
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.counter
    }

    /// Issue the next id with the given prefix.
    pub fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        let suffix = match self.mode {
            IdMode::Random => to_base36(random_u64()),
            IdMode::Sequential => to_base36(self.counter),
        };
        format!("{prefix}_{suffix}")
    }

    /// Issue a container id.
    pub fn container_id(&mut self) -> String {
        self.next_id(CONTAINER_PREFIX)
    }

    /// Issue a widget id.
    pub fn widget_id(&mut self) -> String {
        self.next_id(WIDGET_PREFIX)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::random()
    }
}

/// Low half of a v4 UUID: 62 random bits below the fixed variant bits.
fn random_u64() -> u64 {
    Uuid::new_v4().as_u64_pair().1
}

/// Encode a number in lowercase base 36.
fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::sequential();
        assert_eq!(ids.container_id(), "container_1");
        assert_eq!(ids.widget_id(), "widget_2");
        assert_eq!(ids.next_id("x"), "x_3");
        assert_eq!(ids.count(), 3);
    }

    #[test]
    fn test_sequential_ids_repeat_across_generators() {
        let mut first = IdGenerator::sequential();
        let mut second = IdGenerator::sequential();
        for _ in 0..10 {
            assert_eq!(first.widget_id(), second.widget_id());
        }
    }

    #[test]
    fn test_random_ids_have_prefix_and_base36_suffix() {
        let mut ids = IdGenerator::random();
        let id = ids.widget_id();

        let suffix = id.strip_prefix("widget_").unwrap();
        assert!(!suffix.is_empty());
        assert!(suffix.len() <= 13);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_random_ids_are_unique_within_run() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.mode(), IdMode::Random);

        let issued: HashSet<String> = (0..10_000).map(|_| ids.container_id()).collect();
        assert_eq!(issued.len(), 10_000);
    }
}
