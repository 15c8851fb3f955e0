//! Fixed-timestep driver. The snake moves at the tick rate no matter how often the host polls
//! or how long it spends drawing.

use std::time::{Duration, Instant};
use log::info;

use crate::snake_game::{Direction, FoodSource, GameView, SnakeGame, StepOutcome};

/// How long to nap between polls when no tick is due.
pub const IDLE_SLEEP: Duration = Duration::from_millis(1);


#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FrameScheduler {
    last_tick: f64,
    tick_interval: f64,
}

impl FrameScheduler {
    /// `start` is the time of the notional tick zero, in seconds.
    pub fn new(tick_interval: f64, start: f64) -> Self {
        Self { last_tick: start, tick_interval }
    }

    /// True when a tick is due at `now`, in which case `now` becomes the last tick.
    pub fn poll(&mut self, now: f64) -> bool {
        if now - self.last_tick < self.tick_interval { return false; }
        self.last_tick = now;
        true
    }

    pub fn last_tick(&self) -> f64 {
        self.last_tick
    }
    pub fn tick_interval(&self) -> f64 {
        self.tick_interval
    }
}


pub trait Clock {
    /// Monotonic seconds.
    fn now(&self) -> f64;
    fn sleep(&mut self, duration: Duration);
}

/// Seconds since the clock was made, backed by [`Instant`].
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}


#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum HostEvent {
    Turn(Direction),
    Close,
}

/// Whatever shows the game and collects input between ticks.
pub trait FrameHost {
    type Error;

    /// Clear, draw and present the state after tick number `tick`.
    fn present(&mut self, tick: u64, outcome: StepOutcome, view: GameView<'_>) -> Result<(), Self::Error>;

    /// Input gathered since the last call.
    fn poll_events(&mut self) -> Vec<HostEvent>;
}

/// Drive `game` until the host asks to close. Returns the number of ticks run.
pub fn run<F, C, H>(game: &mut SnakeGame<F>, scheduler: &mut FrameScheduler, clock: &mut C, host: &mut H) -> Result<u64, H::Error>
where
    F: FoodSource,
    C: Clock,
    H: FrameHost,
{
    let mut ticks = 0;
    let mut closing = false;
    while !closing {
        if !scheduler.poll(clock.now()) {
            clock.sleep(IDLE_SLEEP);
            continue;
        }
        let outcome = game.step();
        ticks += 1;
        host.present(ticks, outcome, game.view())?;
        for event in host.poll_events() {
            match event {
                HostEvent::Turn(direction) => { game.set_heading(direction); }
                HostEvent::Close => closing = true,
            }
        }
    }
    info!("closed after {ticks} ticks");
    Ok(ticks)
}
