//! Movement resolution of the player token.
//!
//! A proposed displacement is applied to the token's bounds and checked against the walls first
//! and the exit second. The resolver only decides; applying the outcome is up to the caller.

use super::{Delta, Rect, World};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// The moved token would hit a wall. The token stays where it was.
    Blocked,
    Moved(Rect),
    /// Legal move that also reaches the exit.
    Won(Rect),
}

pub fn resolve_move(current: &Rect, delta: Delta, world: &World) -> MoveOutcome {
    let candidate = current.translated(delta);

    if world.has_collision(&candidate) {
        MoveOutcome::Blocked
    } else if world.is_exit_reached(&candidate) {
        MoveOutcome::Won(candidate)
    } else {
        MoveOutcome::Moved(candidate)
    }
}
