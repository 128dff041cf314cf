//! The domain module encapsulates the core game logic. It defines the maze `World`, the movement
//! resolver deciding between blocked, legal and winning moves, and the `Session` state machine
//! driven by pointer actions.
//!
//! Nothing in here depends on Bevy, so the rules can be exercised without a window.

mod basis;
mod collision;
mod resolver;
mod session;
mod world;

pub use basis::{drag_delta, Delta, Point};
pub use collision::{GeometryError, HasCollision, Rect};
pub use resolver::{resolve_move, MoveOutcome};
pub use session::{Action, ConfigError, Effect, Phase, Session, SessionConfig};
pub use world::{Wall, World};
