//! Mutable access to the staging buffer during a step.
//!
//! [`WriteLine`] implements [`LineWriter`] over the staging buffer. It is
//! created by `PingPongLine::begin_step()` and dropped before `publish()`.

use salvo_core::{LineWriter, Machine, Position};

/// Mutable access to the staging generation for a single step.
///
/// Tracks which positions have been handed out so the engine can check
/// that a rule covered the whole line. The tracking slice is owned by the
/// arena and cleared on `begin_step()`.
pub struct WriteLine<'a> {
    machines: &'a mut [Machine],
    written: &'a mut [bool],
    written_count: usize,
}

impl<'a> WriteLine<'a> {
    pub(crate) fn new(machines: &'a mut [Machine], written: &'a mut [bool]) -> Self {
        Self {
            machines,
            written,
            written_count: 0,
        }
    }

    /// `true` once every position has been written.
    pub fn is_complete(&self) -> bool {
        self.written_count == self.machines.len()
    }
}

impl LineWriter for WriteLine<'_> {
    fn write(&mut self, position: Position) -> Option<&mut Machine> {
        let i = position.index();
        let slot = self.machines.get_mut(i)?;
        if let Some(flag) = self.written.get_mut(i) {
            if !*flag {
                *flag = true;
                self.written_count += 1;
            }
        }
        Some(slot)
    }
}
