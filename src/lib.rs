#[cfg(feature = "dev")]
mod dev_tools;
mod game;
pub mod cmdline;
pub mod config;
pub mod headless;
pub mod scheduler;
pub mod snake_game;

use bevy::{prelude::*, window::WindowResolution};

use config::GameConfig;

pub const WINDOW_TITLE: &str = "Snake";

pub struct AppPlugin {
    pub config: GameConfig,
}

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        // Order new `AppStep` variants by adding them here:
        app.configure_sets(
            Update,
            (AppSet::RecordInput, AppSet::Update).chain(),
        );

        // Spawn the main camera.
        app.add_systems(Startup, spawn_camera);
        app.insert_resource(ClearColor(Color::BLACK));

        // Add Bevy plugins.
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Window {
                        title: WINDOW_TITLE.to_string(),
                        resizable: false,
                        resolution: WindowResolution::new(self.config.window_width as f32, self.config.window_height as f32)
                            .with_scale_factor_override(1.0),
                        ..default()
                    }
                    .into(),
                    ..default()
                }),
        );

        app.insert_resource(game::SnakeSession::new(&self.config));
        app.add_plugins(game::plugin);

        // Enable dev tools for dev builds.
        #[cfg(feature = "dev")]
        app.add_plugins(dev_tools::plugin);
    }
}

/// High-level groupings of systems for the app in the `Update` schedule.
/// When adding a new variant, make sure to order it in the `configure_sets`
/// call above.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash)]
enum AppSet {
    /// Record player input.
    RecordInput,
    /// Advance the game and redraw it.
    Update,
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("Camera"),
        Camera2dBundle::default(),
    ));
}
