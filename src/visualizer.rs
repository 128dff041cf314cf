//! 2D visualization.
//!
//! The canvas is centered on the origin of the Bevy world. Canvas coordinates have their origin in
//! the top-left corner with the y-axis pointing down, so every domain position passes through
//! [`to_bevy_position`] before it is drawn.

use bevy::{
    asset::LoadState,
    prelude::*,
    sprite::{MaterialMesh2dBundle, Mesh2dHandle},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    config::AppConfig,
    domain::{Effect, Point, Rect, Wall, World},
    resource::{EffectEvent, SessionRes},
    simulator::MazeSet,
};

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::WHITE))
            .init_resource::<Scene>()
            .add_systems(Startup, set_up)
            .add_systems(
                Update,
                (watch_background, present_effects, draw_outlines)
                    .chain()
                    .in_set(MazeSet::Presentation),
            );
    }
}

#[derive(Resource, Default)]
pub struct Scene {
    background: Handle<Image>,
    background_resolved: bool,
    board: Vec<Entity>,
    token: Option<Entity>,
    message: Option<Entity>,
    restart_button: Option<Entity>,
    restarts: u32,
}

#[derive(Component)]
pub struct RestartButton;

const BACKGROUND_Z: f32 = 0.0;
const SPECKLE_Z: f32 = 0.1;
const WALL_Z: f32 = 1.0;
const EXIT_Z: f32 = 2.0;
const TOKEN_Z: f32 = 3.0;
const MESSAGE_Z: f32 = 4.0;

const WALL_COLOR: Color = Color::ORANGE;
const OUTLINE_COLOR: Color = Color::BLACK;
const MESSAGE_COLOR: Color = Color::RED;
const MESSAGE_FONT_SIZE: f32 = 24.0;

const SPECKLE_COUNT: usize = 600;
const RNG_SEED: u64 = 60060060;

fn set_up(
    mut scene: ResMut<Scene>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<AppConfig>,
    session: Res<SessionRes>,
) {
    commands.spawn(Camera2dBundle::default());
    create_background(&mut scene, &mut commands, &asset_server, &config);
    create_board(
        &mut scene,
        &mut commands,
        &mut meshes,
        &mut materials,
        session.world(),
        session.player().bounds(),
        &config,
    );
}

fn create_background(
    scene: &mut Scene,
    commands: &mut Commands,
    asset_server: &AssetServer,
    config: &AppConfig,
) {
    scene.background = asset_server.load(config.background.clone());
    commands.spawn(SpriteBundle {
        texture: scene.background.clone(),
        sprite: Sprite {
            custom_size: Some(config.canvas_size()),
            ..default()
        },
        transform: Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
        ..default()
    });
}

fn create_board(
    scene: &mut Scene,
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    world: &World,
    player: Rect,
    config: &AppConfig,
) {
    let canvas = config.canvas_size();

    for wall in world.walls() {
        let (position, length, angle) = wall_placement(wall, canvas);
        scene.board.push(
            commands
                .spawn(SpriteBundle {
                    sprite: Sprite {
                        color: WALL_COLOR,
                        custom_size: Some(Vec2::new(length, config.wall_width)),
                        ..default()
                    },
                    transform: Transform::from_translation(position.extend(WALL_Z))
                        .with_rotation(Quat::from_rotation_z(angle)),
                    ..default()
                })
                .id(),
        );
    }

    let exit = world.exit();
    scene.board.push(
        commands
            .spawn(SpriteBundle {
                sprite: Sprite {
                    color: Color::WHITE,
                    custom_size: Some(rect_size(exit)),
                    ..default()
                },
                transform: Transform::from_translation(
                    to_bevy_position(exit.center(), canvas).extend(EXIT_Z),
                ),
                ..default()
            })
            .id(),
    );

    // The token turns blue once the game has been restarted.
    let color = if scene.restarts == 0 {
        Color::WHITE
    } else {
        Color::BLUE
    };
    scene.token = Some(
        commands
            .spawn(MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(player.width() as f32 / 2.0))),
                material: materials.add(color),
                transform: token_transform(player, canvas),
                ..default()
            })
            .id(),
    );
}

fn remove_board(scene: &mut Scene, commands: &mut Commands) {
    for entity in scene.board.drain(..).chain(scene.token.take()) {
        commands.entity(entity).despawn_recursive();
    }
}

fn show_result(scene: &mut Scene, commands: &mut Commands, message: &str) {
    if scene.message.is_none() {
        scene.message = Some(
            commands
                .spawn(Text2dBundle {
                    text: Text::from_section(
                        message,
                        TextStyle {
                            font_size: MESSAGE_FONT_SIZE,
                            color: MESSAGE_COLOR,
                            ..default()
                        },
                    ),
                    transform: Transform::from_xyz(0.0, 0.0, MESSAGE_Z),
                    ..default()
                })
                .id(),
        );
    }

    if scene.restart_button.is_none() {
        scene.restart_button = Some(create_restart_button(commands));
    }
}

fn create_restart_button(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            ButtonBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                    ..default()
                },
                background_color: BackgroundColor(Color::rgb(0.9, 0.9, 0.9)),
                ..default()
            },
            RestartButton,
        ))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                "Restart",
                TextStyle {
                    font_size: 20.0,
                    color: Color::BLACK,
                    ..default()
                },
            ));
        })
        .id()
}

fn remove_result(scene: &mut Scene, commands: &mut Commands) {
    for entity in [scene.message.take(), scene.restart_button.take()]
        .into_iter()
        .flatten()
    {
        commands.entity(entity).despawn_recursive();
    }
}

fn present_effects(
    mut effects: EventReader<EffectEvent>,
    mut scene: ResMut<Scene>,
    mut commands: Commands,
    mut transforms: Query<&mut Transform>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<AppConfig>,
) {
    for EffectEvent(effect) in effects.read() {
        match effect {
            Effect::PositionUpdated(bounds) => {
                if let Some(entity) = scene.token {
                    if let Ok(mut transform) = transforms.get_mut(entity) {
                        *transform = token_transform(*bounds, config.canvas_size());
                    }
                }
            }
            Effect::GameLost => show_result(&mut scene, &mut commands, "Defeat!"),
            Effect::GameWon => show_result(&mut scene, &mut commands, "Victory!"),
            Effect::Restarted { player, world } => {
                remove_result(&mut scene, &mut commands);
                remove_board(&mut scene, &mut commands);
                scene.restarts += 1;
                create_board(
                    &mut scene,
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    world,
                    *player,
                    &config,
                );
            }
        }
    }
}

fn watch_background(
    mut scene: ResMut<Scene>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<AppConfig>,
) {
    if scene.background_resolved {
        return;
    }

    match asset_server.get_load_state(scene.background.id()) {
        Some(LoadState::Loaded) => scene.background_resolved = true,
        Some(LoadState::Failed) => {
            error!(
                "failed to load background image {}, drawing fallback",
                config.background
            );
            for (position, size, shade) in
                fallback_speckles(config.canvas_size(), SPECKLE_COUNT, RNG_SEED)
            {
                commands.spawn(SpriteBundle {
                    sprite: Sprite {
                        color: Color::rgb(shade, shade, shade),
                        custom_size: Some(Vec2::splat(size)),
                        ..default()
                    },
                    transform: Transform::from_translation(position.extend(SPECKLE_Z)),
                    ..default()
                });
            }
            scene.background_resolved = true;
        }
        _ => {}
    }
}

fn draw_outlines(mut gizmos: Gizmos, session: Res<SessionRes>, config: Res<AppConfig>) {
    let canvas = config.canvas_size();

    let exit = session.world().exit();
    gizmos.rect_2d(
        to_bevy_position(exit.center(), canvas),
        0.0,
        rect_size(exit),
        OUTLINE_COLOR,
    );

    let token = session.player().bounds();
    gizmos.circle_2d(
        to_bevy_position(token.center(), canvas),
        token.width() as f32 / 2.0,
        OUTLINE_COLOR,
    );
}

/// Center, length and rotation of the sprite drawing `wall`.
fn wall_placement(wall: &Wall, canvas: Vec2) -> (Vec2, f32, f32) {
    let start = to_bevy_position(wall.start(), canvas);
    let end = to_bevy_position(wall.end(), canvas);
    let direction = end - start;
    (
        (start + end) / 2.0,
        wall.length() as f32,
        direction.y.atan2(direction.x),
    )
}

/// Position, edge length and gray level of the dots covering the canvas when no background image
/// is available.
fn fallback_speckles(canvas: Vec2, count: usize, seed: u64) -> Vec<(Vec2, f32, f32)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let half = canvas / 2.0;
    (0..count)
        .map(|_| {
            (
                Vec2::new(
                    rng.random_range(-half.x..=half.x),
                    rng.random_range(-half.y..=half.y),
                ),
                rng.random_range(1.0..=4.0),
                rng.random_range(0.6..=0.9),
            )
        })
        .collect()
}

fn token_transform(bounds: Rect, canvas: Vec2) -> Transform {
    Transform::from_translation(to_bevy_position(bounds.center(), canvas).extend(TOKEN_Z))
}

fn rect_size(rect: Rect) -> Vec2 {
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

pub fn to_domain_position(position: Vec2) -> Point {
    Point::new(position.x as f64, position.y as f64)
}

pub fn to_bevy_position(position: Point, canvas: Vec2) -> Vec2 {
    Vec2::new(
        position.x as f32 - canvas.x / 2.0,
        canvas.y / 2.0 - position.y as f32,
    )
}
