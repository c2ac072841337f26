//! Text rendering of squad generations.

use std::io::{self, Write};

use salvo_core::SnapshotAccess;
use salvo_engine::Outcome;

/// Glyph table printed by `--legend`.
pub const LEGEND: &str = "\
Machine State Legend

|Type [Color] [Testing state[timer]] Msg Direction [Msg]|

Type G[g] or S[s] = General/Soldier[passive].
Color R = Red, Black if absent.
Testing state = t if present. Timer value 0-3.
Directions: -> right, <- left, <-> broadcast.
Possible Messages:

\t0!: RESET
\t! : TEST
\tm?: MIDDLE QUERY
\tm!: MIDDLE ACK
\t^ : PROMOTE
";

/// One generation as a single line of machine summaries.
pub fn render_row(snapshot: &dyn SnapshotAccess) -> String {
    snapshot
        .summaries()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write one generation followed by a blank line.
pub fn write_generation(out: &mut impl Write, snapshot: &dyn SnapshotAccess) -> io::Result<()> {
    writeln!(out, "{}", render_row(snapshot))?;
    writeln!(out)
}

/// Write the closing report for a finished run.
pub fn write_outcome(out: &mut impl Write, length: u32, outcome: &Outcome) -> io::Result<()> {
    if outcome.fired() {
        writeln!(out, "BANG!!!")?;
        writeln!(out)?;
        writeln!(
            out,
            "Length = {length}. Synchronization in {} steps.",
            outcome.step
        )
    } else {
        writeln!(
            out,
            "Length = {length}. Capped after {} steps without firing.",
            outcome.step
        )
    }
}
