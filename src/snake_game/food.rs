use std::collections::VecDeque;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{Grid, GridPoint};

/// Where the next piece of food goes.
pub trait FoodSource {
    fn next_food(&mut self, grid: &Grid) -> GridPoint;
}


/// Uniform over the whole grid. The snake is not consulted, so food can land on it.
pub struct RandomFood<R: Rng = StdRng> {
    rng: R,
}

impl RandomFood<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomFood<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FoodSource for RandomFood<R> {
    fn next_food(&mut self, grid: &Grid) -> GridPoint {
        GridPoint {
            x: self.rng.gen_range(0..grid.width),
            y: self.rng.gen_range(0..grid.height),
        }
    }
}


/// Hands out predetermined cells in order, e.g. to replay a game. Once the queue runs dry the
/// last cell is repeated.
#[derive(Debug, Default)]
pub struct ScriptedFood {
    locations: VecDeque<GridPoint>,
    last: GridPoint,
}

impl ScriptedFood {
    pub fn new(locations: impl IntoIterator<Item = GridPoint>) -> Self {
        Self {
            locations: locations.into_iter().collect(),
            last: GridPoint::default(),
        }
    }
    pub fn push(&mut self, location: GridPoint) {
        self.locations.push_back(location);
    }
}

impl FoodSource for ScriptedFood {
    fn next_food(&mut self, _grid: &Grid) -> GridPoint {
        if let Some(pt) = self.locations.pop_front() {
            self.last = pt;
        }
        self.last
    }
}
