//! Simulation of the game session.
//!
//! Player actions are applied to the session in the order they arrive. Every resulting effect is
//! forwarded to the presentation.

use bevy::prelude::*;

use crate::{
    domain::Effect,
    resource::{ActionEvent, EffectEvent, SessionRes},
};

pub struct Simulator;

#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MazeSet {
    Input,
    Simulation,
    Presentation,
}

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.add_event::<ActionEvent>()
            .add_event::<EffectEvent>()
            .init_resource::<SessionRes>()
            .configure_sets(
                Update,
                (MazeSet::Input, MazeSet::Simulation, MazeSet::Presentation).chain(),
            )
            .add_systems(Update, simulate.in_set(MazeSet::Simulation));
    }
}

fn simulate(
    mut actions: EventReader<ActionEvent>,
    mut session: ResMut<SessionRes>,
    mut effects: EventWriter<EffectEvent>,
) {
    for ActionEvent(action) in actions.read() {
        if !session.accepts(*action) {
            debug!("ignored {action:?} in phase {:?}", session.phase());
            continue;
        }

        let (next, produced) = std::mem::take(&mut **session).step(*action);
        **session = next;

        for effect in &produced {
            match effect {
                Effect::PositionUpdated(bounds) => debug!("token moved to {bounds:?}"),
                Effect::GameLost => info!("token hit a wall, game lost"),
                Effect::GameWon => info!("token reached the exit, game won"),
                Effect::Restarted { player, .. } => info!("game restarted at {player:?}"),
            }
        }

        effects.send_batch(produced.into_iter().map(EffectEvent));
    }
}
