use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};

#[cfg(test)]
#[macro_use]
mod tests;

mod config;
mod controller;
mod domain;
mod resource;
mod simulator;
mod visualizer;

use config::AppConfig;
use resource::SessionRes;

const LOG_FILTER: &str = "wgpu=error,naga=warn,maze_escape=debug";

fn main() {
    let config = AppConfig::default();

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: config.title.clone(),
                    resolution: WindowResolution::new(config.canvas_width, config.canvas_height),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: LOG_FILTER.to_string(),
                ..default()
            }),
    );

    let session = match config.validate() {
        Ok(session) => session,
        Err(error) => {
            error!("invalid configuration: {error}");
            return;
        }
    };
    info!(
        "starting {:?} on a {}x{} canvas",
        config.title, config.canvas_width, config.canvas_height
    );

    app.insert_resource(SessionRes::from(domain::Session::new(session)))
        .insert_resource(config)
        .add_plugins(simulator::Simulator)
        .add_plugins(controller::Controller)
        .add_plugins(visualizer::Visualizer)
        .run();
}
