//! Application configuration.

use bevy::{ecs::system::Resource, math::Vec2};
use thiserror::Error;

use crate::domain::{ConfigError, Point, SessionConfig, World};

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Asset path of the image stretched over the whole canvas.
    pub background: String,
    pub wall_width: f32,
    pub world: World,
    /// Top-left corner of the token when a session starts.
    pub start: Point,
    pub token_size: f64,
}

impl AppConfig {
    /// Checks the whole configuration and returns the session configuration built from it.
    pub fn validate(&self) -> Result<SessionConfig, AppConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(AppConfigError::CanvasSize {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(self.wall_width > 0.0) {
            return Err(AppConfigError::WallWidth(self.wall_width));
        }
        Ok(SessionConfig::new(
            self.world.clone(),
            self.start,
            self.token_size,
        )?)
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Maze with Gracy".to_string(),
            canvas_width: 600.0,
            canvas_height: 600.0,
            background: "gracy.png".to_string(),
            wall_width: 5.0,
            world: World::reference(),
            start: Point::new(20.0, 20.0),
            token_size: 20.0,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppConfigError {
    #[error("canvas size must be positive, got {width} x {height}")]
    CanvasSize { width: f32, height: f32 },
    #[error("wall width must be positive, got {0}")]
    WallWidth(f32),
    #[error("invalid session: {0}")]
    Session(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::{GeometryError, Rect, Wall};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.validate(), Ok(SessionConfig::reference()));
        assert_eq!(config.canvas_size(), Vec2::new(600.0, 600.0));
    }

    #[rstest]
    #[case::zero_width(0.0, 600.0, 5.0, AppConfigError::CanvasSize { width: 0.0, height: 600.0 })]
    #[case::negative_height(600.0, -1.0, 5.0, AppConfigError::CanvasSize { width: 600.0, height: -1.0 })]
    #[case::zero_wall(600.0, 600.0, 0.0, AppConfigError::WallWidth(0.0))]
    fn test_invalid_config(
        #[case] canvas_width: f32,
        #[case] canvas_height: f32,
        #[case] wall_width: f32,
        #[case] expected: AppConfigError,
    ) {
        let config = AppConfig {
            canvas_width,
            canvas_height,
            wall_width,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(expected));
    }

    #[rstest]
    #[case::zero_token(Point::new(20.0, 20.0), 0.0, ConfigError::TokenSize(0.0))]
    #[case::start_on_wall(
        Point::new(65.0, 20.0),
        20.0,
        ConfigError::StartOverlapsWall { start: rect!(65, 20, 85, 40), index: 0 }
    )]
    fn test_invalid_session_config(
        #[case] start: Point,
        #[case] token_size: f64,
        #[case] expected: ConfigError,
    ) {
        let config = AppConfig {
            start,
            token_size,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(AppConfigError::Session(expected)));
    }

    #[test]
    fn test_invalid_world() {
        let config = AppConfig {
            world: World::new(
                vec![Wall::from_coords(75.0, 0.0, 75.0, 450.0)],
                Rect::from_corners(Point::new(f64::NAN, 540.0), Point::new(580.0, 580.0)),
            ),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AppConfigError::Session(ConfigError::Geometry(
                GeometryError::NonFinite { .. }
            )))
        ));
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            AppConfigError::CanvasSize {
                width: 0.0,
                height: 600.0
            }
            .to_string(),
            "canvas size must be positive, got 0 x 600"
        );
        assert_eq!(
            AppConfigError::WallWidth(-2.5).to_string(),
            "wall width must be positive, got -2.5"
        );
        assert_eq!(
            AppConfigError::from(ConfigError::TokenSize(0.0)).to_string(),
            "invalid session: token size must be a positive number, got 0"
        );
    }
}
