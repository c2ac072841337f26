//! Read-only snapshot views of a published generation.
//!
//! [`Snapshot`] borrows from the published buffer of a
//! [`crate::PingPongLine`] and implements both [`LineReader`] and
//! [`SnapshotAccess`]. [`OwnedSnapshot`] is a detached copy for callers
//! that keep generations around (trace recorders, tests).

use salvo_core::{LineReader, Machine, SnapshotAccess, StepId};

/// A read-only view of a published generation.
///
/// `'a` is the borrow of the `PingPongLine`. During a step the guard holds
/// one of these over the previous generation while the staging buffer is
/// written, so the two never alias.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    machines: &'a [Machine],
    step_id: StepId,
    generation: u32,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(machines: &'a [Machine], step_id: StepId, generation: u32) -> Self {
        Self {
            machines,
            step_id,
            generation,
        }
    }

    /// Arena generation of this snapshot (number of publishes since reset).
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Copy into an [`OwnedSnapshot`].
    pub fn to_owned_snapshot(&self) -> OwnedSnapshot {
        OwnedSnapshot {
            machines: self.machines.to_vec(),
            step_id: self.step_id,
            generation: self.generation,
        }
    }
}

impl LineReader for Snapshot<'_> {
    fn machines(&self) -> &[Machine] {
        self.machines
    }
}

impl SnapshotAccess for Snapshot<'_> {
    fn step_id(&self) -> StepId {
        self.step_id
    }
}

/// An owned copy of a published generation.
///
/// Created by [`crate::PingPongLine::owned_snapshot()`]. `Send + Sync`, so
/// it can be handed to another thread for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedSnapshot {
    machines: Vec<Machine>,
    step_id: StepId,
    generation: u32,
}

// Compile-time assertion: OwnedSnapshot must be Send + Sync.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OwnedSnapshot>();
};

impl OwnedSnapshot {
    /// Arena generation of this snapshot.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Consume the snapshot, returning its machines.
    pub fn into_machines(self) -> Vec<Machine> {
        self.machines
    }
}

impl LineReader for OwnedSnapshot {
    fn machines(&self) -> &[Machine] {
        &self.machines
    }
}

impl SnapshotAccess for OwnedSnapshot {
    fn step_id(&self) -> StepId {
        self.step_id
    }
}
