//! Windowed host: keyboard in, coloured squares out.

use bevy::prelude::*;

pub mod snake_visualizer;

pub use snake_visualizer::SnakeSession;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(snake_visualizer::plugin);
}
