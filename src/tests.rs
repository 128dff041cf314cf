//! Test utils.

use crate::domain::{Action, Effect, Point, Session, SessionConfig, World};

macro_rules! rect {
    ($x1:expr, $y1:expr, $x2:expr, $y2:expr) => {
        $crate::domain::Rect::new(($x1) as f64, ($y1) as f64, ($x2) as f64, ($y2) as f64).unwrap()
    };
}

/// Feeds `actions` into `session` in order and collects every effect.
pub fn play(session: Session, actions: impl IntoIterator<Item = Action>) -> (Session, Vec<Effect>) {
    actions
        .into_iter()
        .fold((session, vec![]), |(session, mut effects), action| {
            let (session, produced) = session.step(action);
            effects.extend(produced);
            (session, effects)
        })
}

/// Reference maze with a 20 x 20 token starting at `start`.
pub fn session_starting_at(start: Point) -> Session {
    Session::new(SessionConfig::new(World::reference(), start, 20.0).unwrap())
}
