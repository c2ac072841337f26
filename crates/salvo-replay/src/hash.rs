//! Hashing utilities for generation comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of line state. These hashes
//! are not cryptographically secure; they are used for fast equality
//! checks during trace comparison.

use salvo_core::{Activity, Color, Direction, Kind, MachineSummary, Payload, SnapshotAccess};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

fn kind_tag(k: Kind) -> u8 {
    match k {
        Kind::General => 0,
        Kind::Soldier => 1,
    }
}

fn activity_tag(a: Activity) -> u8 {
    match a {
        Activity::Active => 0,
        Activity::Passive => 1,
    }
}

fn color_tag(c: Color) -> u8 {
    match c {
        Color::Black => 0,
        Color::Red => 1,
    }
}

fn direction_tag(d: Direction) -> u8 {
    match d {
        Direction::Left => 0,
        Direction::Right => 1,
        Direction::Broadcast => 2,
    }
}

fn payload_tag(p: Payload) -> u8 {
    match p {
        Payload::Empty => 0,
        Payload::Test => 1,
        Payload::MidTest => 2,
        Payload::MidAck => 3,
        Payload::Reset => 4,
        Payload::Promote => 5,
    }
}

/// Compute a hash over ordered per-position summaries.
///
/// The position is folded in ahead of each machine so that order matters.
/// Returns `FNV_OFFSET` for an empty slice.
pub fn summaries_hash(summaries: &[MachineSummary]) -> u64 {
    let mut hash = FNV_OFFSET;
    for s in summaries {
        hash = fnv1a_u32(hash, s.position.0);
        for byte in [
            kind_tag(s.kind),
            activity_tag(s.activity),
            color_tag(s.color),
            u8::from(s.testing),
            s.timer,
            direction_tag(s.direction),
            payload_tag(s.payload),
        ] {
            hash = fnv1a_byte(hash, byte);
        }
    }
    hash
}

/// Compute a hash over every machine in a snapshot.
pub fn snapshot_hash(snapshot: &dyn SnapshotAccess) -> u64 {
    summaries_hash(&snapshot.summaries())
}
