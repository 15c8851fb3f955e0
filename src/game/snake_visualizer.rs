//! Handle player input, tick the game on a fixed timestep and draw it as coloured squares.
//! The whole board is cleared and redrawn on every tick, so sprites never have to be tracked
//! across moves.

use bevy::prelude::*;
use log::info;

use crate::config::GameConfig;
use crate::scheduler::FrameScheduler;
use crate::snake_game::{Direction, GridPoint, SnakeGame, StepOutcome};
use crate::AppSet;

const SNAKE_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const FOOD_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

const KEY_BINDINGS: [(KeyCode, Direction); 4] = [
    (KeyCode::ArrowUp, Direction::Up),
    (KeyCode::ArrowDown, Direction::Down),
    (KeyCode::ArrowLeft, Direction::Left),
    (KeyCode::ArrowRight, Direction::Right),
];


#[derive(Resource)]
pub struct SnakeSession {
    pub game: SnakeGame,
    pub scheduler: FrameScheduler,
    block_size: f32,
    board_size: Vec2,
}

impl SnakeSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: config.new_game(),
            scheduler: FrameScheduler::new(config.tick_interval, 0.0),
            block_size: config.block_size as f32,
            board_size: Vec2::new(config.grid_width() as f32, config.grid_height() as f32) * config.block_size as f32,
        }
    }

    /// Centre of `pt` in world space. The grid's origin is the board's top-left with y down;
    /// the 2D camera has its origin in the middle with y up. The board is centred in the window,
    /// so any leftover pixels of a window that isn't a whole number of blocks end up as a margin.
    fn cell_center(&self, pt: GridPoint) -> Vec2 {
        let (px, py) = pt.pixel_origin(self.block_size as u32);
        let half = self.block_size / 2.0;
        Vec2::new(
            px as f32 + half - self.board_size.x / 2.0,
            self.board_size.y / 2.0 - py as f32 - half,
        )
    }
}


/// Marks every sprite drawn for the board, so a redraw can clear them all.
#[derive(Component)]
struct CellSprite;


pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, draw_board);

    // Record what the player presses; this always lands before the tick in the same frame.
    app.add_systems(Update, (record_heading, exit_on_escape).in_set(AppSet::RecordInput));

    app.add_systems(Update, tick_snake.in_set(AppSet::Update));
}

fn record_heading(
    input: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<SnakeSession>,
) {
    for (key, direction) in KEY_BINDINGS {
        if input.just_pressed(key) {
            session.game.set_heading(direction);
        }
    }
}

fn exit_on_escape(
    input: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if input.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

fn tick_snake(
    mut commands: Commands,
    time: Res<Time>,
    mut session: ResMut<SnakeSession>,
    cells: Query<Entity, With<CellSprite>>,
) {
    let session = &mut *session;
    if !session.scheduler.poll(time.elapsed_seconds_f64()) { return; }

    if let StepOutcome::Reset(collision) = session.game.step() {
        info!("{collision:?} collision, snake reset");
    }

    for cell in &cells {
        commands.entity(cell).despawn();
    }
    spawn_cells(&mut commands, session);
}

fn draw_board(mut commands: Commands, session: Res<SnakeSession>) {
    spawn_cells(&mut commands, &session);
}

fn spawn_cells(commands: &mut Commands, session: &SnakeSession) {
    for segment in session.game.snake().segments() {
        spawn_cell(commands, session, segment, SNAKE_COLOR, 0.0);
    }
    // Food goes on top, it may share a cell with the snake.
    spawn_cell(commands, session, session.game.food(), FOOD_COLOR, 1.0);
}

fn spawn_cell(commands: &mut Commands, session: &SnakeSession, pt: GridPoint, color: Color, z: f32) {
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color,
                custom_size: Some(Vec2::splat(session.block_size)),
                ..default()
            },
            transform: Transform::from_translation(session.cell_center(pt).extend(z)),
            ..default()
        },
        CellSprite,
    ));
}
