//! The command interpreter - the core state machine
//!
//! A pure function of (starting pose, obstacle set, command string).
//! No hidden state and no side effects, which is what makes it testable
//! and reusable independent of persistence.

use std::collections::HashSet;

use crate::model::{Coord, Pose};

/// Outcome of interpreting a command string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    /// The last successfully entered pose
    pub pose: Pose,
    /// The blocked cell that halted execution, if any
    pub halted_at: Option<Coord>,
}

/// Interpret a command string against a starting pose and obstacle set.
///
/// Commands are case-insensitive: `F` moves forward, `B` backward,
/// `L`/`R` rotate 90° without changing coordinates. Any other character
/// is a no-op; this is a permissive scanner, not a strict parser.
///
/// The obstacle check happens before a move is committed: if the
/// candidate cell is blocked, execution halts immediately — the move is
/// not applied, the rest of the command string is not processed, and the
/// blocked cell is reported in `halted_at`. The final pose is the last
/// successfully entered cell, one step short of the obstacle, with the
/// direction in effect at the blocked step. Rotations never trigger
/// obstacle checks.
pub fn interpret(start: Pose, obstacles: &HashSet<Coord>, commands: &str) -> Interpretation {
    let mut pose = start;

    for c in commands.chars() {
        match c.to_ascii_uppercase() {
            'L' => pose.facing = pose.facing.rotate_left(),
            'R' => pose.facing = pose.facing.rotate_right(),
            step @ ('F' | 'B') => {
                let (dx, dy) = pose.facing.forward_delta();
                let (dx, dy) = if step == 'B' { (-dx, -dy) } else { (dx, dy) };
                let candidate = (pose.x + dx, pose.y + dy);
                if obstacles.contains(&candidate) {
                    return Interpretation {
                        pose,
                        halted_at: Some(candidate),
                    };
                }
                pose.x = candidate.0;
                pose.y = candidate.1;
            }
            // Unrecognized characters are silently skipped
            _ => {}
        }
    }

    Interpretation {
        pose,
        halted_at: None,
    }
}
