//! Termination detection.

use salvo_core::LineReader;

/// `true` when every machine in `line` is red.
///
/// An empty reader is vacuously all red; lines built by the engine are
/// never empty.
pub fn all_red(line: &dyn LineReader) -> bool {
    line.machines().iter().all(|m| m.is_red())
}

/// Number of red machines in `line`.
pub fn red_count(line: &dyn LineReader) -> usize {
    line.machines().iter().filter(|m| m.is_red()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use salvo_core::{General, Position, Soldier};
    use salvo_test_utils::MockLine;

    #[test]
    fn one_black_machine_blocks_firing() {
        let mut line = MockLine::new(vec![General::right_end().into(); 4]);
        assert!(all_red(&line));
        line.set(Position(2), Soldier::recruit());
        assert!(!all_red(&line));
        assert_eq!(red_count(&line), 3);
    }
}
