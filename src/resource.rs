//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::{event::Event, system::Resource};

use crate::domain;

#[derive(Resource, Default)]
pub struct SessionRes(domain::Session);

impl Deref for SessionRes {
    type Target = domain::Session;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SessionRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Session> for SessionRes {
    fn from(value: domain::Session) -> Self {
        Self(value)
    }
}

/// Action requested by the player.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct ActionEvent(pub domain::Action);

/// Effect produced by the session, to be presented.
#[derive(Event, Clone, Debug, PartialEq)]
pub struct EffectEvent(pub domain::Effect);
