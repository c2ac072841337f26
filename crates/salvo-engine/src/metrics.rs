//! Per-step metrics for the squad engine.
//!
//! [`StepMetrics`] captures timing and line-activity data for a single
//! step.

/// Timing and activity metrics collected during a single step.
///
/// All durations are in microseconds. The engine fills these in after each
/// step; the seeded generation reports all zeros apart from `red_count`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent in rule transitions, in microseconds.
    pub rule_us: u64,
    /// Number of positions whose machine differs from the previous step.
    pub changed: u32,
    /// Number of soldiers promoted to general this step.
    pub promotions: u32,
    /// Number of red machines after the step.
    pub red_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.rule_us, 0);
        assert_eq!(m.changed, 0);
        assert_eq!(m.promotions, 0);
        assert_eq!(m.red_count, 0);
    }
}
