//! Game session driven by pointer actions.
//!
//! A session starts in [`Phase::Playing`] and ends in [`Phase::Lost`] or [`Phase::Won`]. Terminal
//! sessions ignore drag actions. [`Action::Restart`] replaces the session with a new one built
//! from the same [`SessionConfig`].

use thiserror::Error;

use super::{drag_delta, resolve_move, GeometryError, MoveOutcome, Point, Rect, World};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    #[default]
    Playing,
    Lost,
    Won,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        self != Phase::Playing
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    DragStart(Point),
    DragMotion(Point),
    Restart,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PositionUpdated(Rect),
    GameLost,
    GameWon,
    Restarted { player: Rect, world: World },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    bounds: Rect,
    last_pointer: Option<Point>,
}

impl PlayerState {
    fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            last_pointer: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Everything needed to start a session. Validated on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    world: World,
    start: Rect,
}

impl SessionConfig {
    pub fn new(world: World, start: Point, token_size: f64) -> Result<Self, ConfigError> {
        if !(token_size.is_finite() && token_size > 0.0) {
            return Err(ConfigError::TokenSize(token_size));
        }
        if let Some(index) = world.walls().iter().position(|w| !w.is_finite()) {
            return Err(ConfigError::NonFiniteWall(index));
        }
        world.exit().validated()?;

        let start = Rect::with_size(start, token_size, token_size)?;
        if let Some(index) = world.colliding_wall(&start) {
            return Err(ConfigError::StartOverlapsWall { start, index });
        }

        Ok(Self { world, start })
    }

    /// Reference maze with a 20 x 20 token in the top-left corridor.
    pub fn reference() -> Self {
        Self {
            world: World::reference(),
            start: Rect::from_corners(Point::new(20.0, 20.0), Point::new(40.0, 40.0)),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("token size must be a positive number, got {0}")]
    TokenSize(f64),
    #[error("wall {0} has non-finite coordinates")]
    NonFiniteWall(usize),
    #[error("start position {start:?} overlaps wall {index}")]
    StartOverlapsWall { start: Rect, index: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    config: SessionConfig,
    world: World,
    player: PlayerState,
    phase: Phase,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            world: config.world.clone(),
            player: PlayerState::new(config.start),
            phase: Phase::Playing,
            config,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether `action` can change the session. Drags are ignored once the game is over, and a
    /// motion needs a pointer recorded by an earlier drag start.
    pub fn accepts(&self, action: Action) -> bool {
        match action {
            Action::Restart => true,
            _ if self.phase.is_terminal() => false,
            Action::DragStart(_) => true,
            Action::DragMotion(_) => self.player.last_pointer.is_some(),
        }
    }

    /// Applies one action and returns the following session together with the effects to
    /// present. Only the returned session is valid afterwards.
    pub fn step(mut self, action: Action) -> (Session, Vec<Effect>) {
        if !self.accepts(action) {
            return (self, vec![]);
        }

        match action {
            Action::Restart => {
                let session = Session::new(self.config);
                let effects = vec![Effect::Restarted {
                    player: session.player.bounds,
                    world: session.world.clone(),
                }];
                (session, effects)
            }
            Action::DragStart(position) => {
                self.player.last_pointer = Some(position);
                (self, vec![])
            }
            Action::DragMotion(position) => {
                let Some(last_pointer) = self.player.last_pointer else {
                    return (self, vec![]);
                };
                let delta = drag_delta(last_pointer, position);
                let effects = match resolve_move(&self.player.bounds, delta, &self.world) {
                    MoveOutcome::Blocked => {
                        self.phase = Phase::Lost;
                        vec![Effect::GameLost]
                    }
                    MoveOutcome::Moved(bounds) => {
                        self.player.bounds = bounds;
                        self.player.last_pointer = Some(position);
                        vec![Effect::PositionUpdated(bounds)]
                    }
                    MoveOutcome::Won(bounds) => {
                        self.player.bounds = bounds;
                        self.player.last_pointer = Some(position);
                        self.phase = Phase::Won;
                        vec![Effect::PositionUpdated(bounds), Effect::GameWon]
                    }
                };
                (self, effects)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::reference())
    }
}
