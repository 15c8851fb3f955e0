//! Grid snake simulation. Pure game state: no rendering, no windowing, no clocks.
//!
//! The snake advances one cell per [`SnakeGame::step`]. Running into a wall or into
//! itself is not an error; the snake is simply put back at the centre of the grid.

mod food;

use std::{collections::VecDeque, ops};
use log::debug;
use serde::{Serialize, Deserialize};

pub use food::{FoodSource, RandomFood, ScriptedFood};

pub const INITIAL_SNAKE_LENGTH: usize = 3;


#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
}

impl Grid {
    pub const WIDTH:  i16 = 40;
    pub const HEIGHT: i16 = 30;

    pub fn new(width: i16, height: i16) -> Grid {
        Grid { width, height }
    }
    pub fn is_in_bounds(&self, pt: GridPoint) -> bool {
        pt.x >= 0 && pt.y >= 0 && pt.x < self.width && pt.y < self.height
    }
    pub fn center(&self) -> GridPoint {
        GridPoint { x: self.width / 2, y: self.height / 2 }
    }
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Self::WIDTH, Self::HEIGHT)
    }
}


#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
    /// Screen convention: y grows downward.
    pub fn to_point(self) -> GridPoint {
        match self {
            Direction::Up    => GridPoint { x: 0, y: -1, },
            Direction::Down  => GridPoint { x: 0, y: 1, },
            Direction::Left  => GridPoint { x: -1, y: 0, },
            Direction::Right => GridPoint { x: 1, y: 0, },
        }
    }
}


#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
pub struct GridPoint {
    pub x: i16,
    pub y: i16,
}

impl GridPoint {
    pub fn new(x: i16, y: i16) -> Self {
        Self {
            x, y
        }
    }
    /// Top-left pixel of this cell, with the origin at the top-left of the window.
    pub fn pixel_origin(self, block_size: u32) -> (i64, i64) {
        (self.x as i64 * block_size as i64, self.y as i64 * block_size as i64)
    }
}

impl ops::Add<Self> for GridPoint {
    type Output = Self;
    fn add(self, rhs:Self) -> Self::Output {
        GridPoint { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}


/// Body segments, head first. Serialized as a plain array of points; an empty array is rejected.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(into = "VecDeque<GridPoint>", try_from = "VecDeque<GridPoint>")]
pub struct Snake {
    locations: VecDeque<GridPoint>,
}

impl TryFrom<VecDeque<GridPoint>> for Snake {
    type Error = &'static str;
    fn try_from(locations: VecDeque<GridPoint>) -> Result<Self, Self::Error> {
        if locations.is_empty() {
            return Err("snake needs at least a head");
        }
        Ok(Snake { locations })
    }
}

impl From<Snake> for VecDeque<GridPoint> {
    fn from(snake: Snake) -> Self {
        snake.locations
    }
}

impl Snake {
    /// Panics if `segments` is empty; a snake always has a head.
    pub fn from_segments(segments: impl IntoIterator<Item = GridPoint>) -> Snake {
        let locations: VecDeque<GridPoint> = segments.into_iter().collect();
        assert!(!locations.is_empty(), "snake needs at least a head");
        Snake { locations }
    }
    /// Horizontal snake with its head at `head`, body trailing off to the left.
    pub fn starting_at(head: GridPoint, length: usize) -> Snake {
        let mut snake = Snake { locations: VecDeque::with_capacity(length) };
        snake.restart(head, length);
        snake
    }
    fn restart(&mut self, head: GridPoint, length: usize) {
        self.locations.clear();
        for i in 0..length {
            self.locations.push_back(GridPoint { x: head.x - i as i16, y: head.y });
        }
    }

    pub fn head(&self) -> GridPoint {
        self.locations[0]
    }
    pub fn length(&self) -> usize {
        self.locations.len()
    }
    pub fn contains(&self, pt: GridPoint) -> bool {
        self.locations.contains(&pt)
    }
    pub fn segments(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.locations.iter().copied()
    }
}


#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// What a single [`SnakeGame::step`] did.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum StepOutcome {
    Moved,
    Ate,
    Reset(Collision),
}


/// Read-only view handed to whatever draws the game.
#[derive(Serialize, Debug)]
pub struct GameView<'a> {
    pub grid: Grid,
    pub heading: Direction,
    pub food: GridPoint,
    pub snake: &'a Snake,
}


pub struct SnakeGame<F: FoodSource = RandomFood> {
    grid: Grid,
    snake: Snake,
    food: GridPoint,
    heading: Direction,
    pending_heading: Option<Direction>,
    initial_length: usize,
    food_source: F,
}

impl<F: FoodSource> SnakeGame<F> {
    /// Fresh game: snake centred and heading right, food at the first cell `food_source` hands out.
    pub fn new(grid: Grid, initial_length: usize, mut food_source: F) -> Self {
        let snake = Snake::starting_at(grid.center(), initial_length);
        let food = food_source.next_food(&grid);
        Self {
            grid,
            snake,
            food,
            heading: Direction::Right,
            pending_heading: None,
            initial_length,
            food_source,
        }
    }

    /// Game in an arbitrary arrangement. Resets still use `initial_length`.
    pub fn from_parts(grid: Grid, snake: Snake, heading: Direction, food: GridPoint, initial_length: usize, food_source: F) -> Self {
        Self {
            grid,
            snake,
            food,
            heading,
            pending_heading: None,
            initial_length,
            food_source,
        }
    }

    /// Queue a turn for the next tick; the last accepted call before the tick wins.
    /// A reversal is refused, judged against the heading of the last tick rather than a pending one.
    pub fn set_heading(&mut self, requested: Direction) -> bool {
        if requested == self.heading.opposite() { return false; }
        self.pending_heading = Some(requested);
        true
    }

    /// Advance the snake exactly one cell.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }
        let new_head = self.snake.head() + self.heading.to_point();

        // Food is eaten (and replaced) before the collision checks; the tail only moves when not eating.
        let ate = new_head == self.food;
        if ate {
            self.food = self.food_source.next_food(&self.grid);
            debug!("food eaten at {new_head:?}, new food at {:?}", self.food);
        } else {
            self.snake.locations.pop_back();
        }

        if !self.grid.is_in_bounds(new_head) {
            return self.reset(Collision::Wall);
        }
        if self.snake.contains(new_head) {
            return self.reset(Collision::SelfCollision);
        }

        self.snake.locations.push_front(new_head);
        if ate { StepOutcome::Ate } else { StepOutcome::Moved }
    }

    /// Snake back to the centre. Heading and food are left where they are.
    fn reset(&mut self, collision: Collision) -> StepOutcome {
        debug!("{collision:?} collision at length {}, resetting", self.snake.length());
        self.snake.restart(self.grid.center(), self.initial_length);
        StepOutcome::Reset(collision)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
    pub fn snake(&self) -> &Snake {
        &self.snake
    }
    pub fn food(&self) -> GridPoint {
        self.food
    }
    pub fn heading(&self) -> Direction {
        self.heading
    }
    /// Heading the next tick will use.
    pub fn next_heading(&self) -> Direction {
        self.pending_heading.unwrap_or(self.heading)
    }
    pub fn view(&self) -> GameView<'_> {
        GameView {
            grid: self.grid,
            heading: self.heading,
            food: self.food,
            snake: &self.snake,
        }
    }
}
