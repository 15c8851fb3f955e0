//! Development tools for the game. This plugin is only enabled in dev builds.

use bevy::{dev_tools::fps_overlay::FpsOverlayPlugin, prelude::*};
use log::debug;

use crate::game::SnakeSession;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(FpsOverlayPlugin::default());
    app.add_systems(Update, log_growth);
}

/// Log each change in snake length.
fn log_growth(session: Res<SnakeSession>, mut last_length: Local<usize>) {
    let length = session.game.snake().length();
    if length != *last_length {
        debug!("snake length {} -> {length}", *last_length);
        *last_length = length;
    }
}
