//! Controller translating pointer input into player actions.
//!
//! A drag only starts when the left button is pressed on the token. While the button is held,
//! every pointer movement becomes a drag motion. The restart button requests a new session.

use bevy::{prelude::*, window::PrimaryWindow};

use crate::{
    domain::{Action, Point, Rect},
    resource::{ActionEvent, SessionRes},
    simulator::MazeSet,
    visualizer::{to_domain_position, RestartButton},
};

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragTracker>().add_systems(
            Update,
            (capture_pointer, handle_restart_button).in_set(MazeSet::Input),
        );
    }
}

/// State of the left mouse button and the cursor in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub pressed: bool,
    pub just_pressed: bool,
    pub position: Option<Point>,
}

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    last_position: Option<Point>,
}

impl DragTracker {
    pub fn track(&mut self, pointer: PointerSample, token: &Rect) -> Option<Action> {
        if pointer.just_pressed {
            self.last_position = pointer.position.filter(|p| token.contains(*p));
            return self.last_position.map(Action::DragStart);
        }

        if !pointer.pressed {
            self.last_position = None;
            return None;
        }

        match (self.last_position, pointer.position) {
            (Some(last), Some(position)) if last != position => {
                self.last_position = Some(position);
                Some(Action::DragMotion(position))
            }
            _ => None,
        }
    }
}

fn capture_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    session: Res<SessionRes>,
    mut tracker: ResMut<DragTracker>,
    mut actions: EventWriter<ActionEvent>,
) {
    let pointer = PointerSample {
        pressed: buttons.pressed(MouseButton::Left),
        just_pressed: buttons.just_pressed(MouseButton::Left),
        position: windows
            .get_single()
            .ok()
            .and_then(|w| w.cursor_position())
            .map(to_domain_position),
    };

    if let Some(action) = tracker.track(pointer, &session.player().bounds()) {
        actions.send(ActionEvent(action));
    }
}

fn handle_restart_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    mut actions: EventWriter<ActionEvent>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            actions.send(ActionEvent(Action::Restart));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(x: f64, y: f64) -> PointerSample {
        PointerSample {
            pressed: true,
            just_pressed: true,
            position: Some(Point::new(x, y)),
        }
    }

    fn hold(x: f64, y: f64) -> PointerSample {
        PointerSample {
            pressed: true,
            just_pressed: false,
            position: Some(Point::new(x, y)),
        }
    }

    fn release() -> PointerSample {
        PointerSample::default()
    }

    fn track_all(samples: impl IntoIterator<Item = PointerSample>) -> Vec<Action> {
        let token = rect!(20, 20, 40, 40);
        let mut tracker = DragTracker::default();
        samples
            .into_iter()
            .filter_map(|s| tracker.track(s, &token))
            .collect()
    }

    #[test]
    fn test_drag_on_token() {
        assert_eq!(
            track_all([press(30.0, 30.0), hold(35.0, 30.0), hold(40.0, 32.0), release()]),
            vec![
                Action::DragStart(Point::new(30.0, 30.0)),
                Action::DragMotion(Point::new(35.0, 30.0)),
                Action::DragMotion(Point::new(40.0, 32.0)),
            ]
        );
    }

    #[test]
    fn test_press_outside_token_does_not_drag() {
        assert!(track_all([press(100.0, 100.0), hold(30.0, 30.0), hold(35.0, 35.0)]).is_empty());
    }

    #[test]
    fn test_unmoved_pointer_is_not_motion() {
        assert_eq!(
            track_all([press(30.0, 30.0), hold(30.0, 30.0), hold(30.0, 30.0)]),
            vec![Action::DragStart(Point::new(30.0, 30.0))]
        );
    }

    #[test]
    fn test_release_ends_drag() {
        let token = rect!(20, 20, 40, 40);
        let mut tracker = DragTracker::default();
        tracker.track(press(30.0, 30.0), &token);
        assert_eq!(tracker.last_position, Some(Point::new(30.0, 30.0)));

        assert_eq!(tracker.track(release(), &token), None);
        assert_eq!(tracker, DragTracker::default());
        assert_eq!(tracker.track(hold(35.0, 35.0), &token), None);
    }

    #[test]
    fn test_cursor_outside_window_pauses_drag() {
        let outside = PointerSample {
            pressed: true,
            just_pressed: false,
            position: None,
        };
        assert_eq!(
            track_all([press(30.0, 30.0), outside, hold(45.0, 30.0)]),
            vec![
                Action::DragStart(Point::new(30.0, 30.0)),
                Action::DragMotion(Point::new(45.0, 30.0)),
            ]
        );
    }
}
