//! Arena configuration parameters.

/// Configuration for the line arena.
///
/// Fixed at construction; both buffers are sized from it once and never
/// grow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of machines in the line.
    pub length: u32,
}

impl ArenaConfig {
    /// Create a config for a line of `length` machines.
    pub fn new(length: u32) -> Self {
        Self { length }
    }

    /// Buffer length in machines.
    pub fn cell_count(&self) -> usize {
        self.length as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_count_matches_length() {
        let config = ArenaConfig::new(1024);
        assert_eq!(config.cell_count(), 1024);
        assert_eq!(config.length, 1024);
    }
}
