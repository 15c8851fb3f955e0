//! Windowless host: runs the real scheduler loop and writes one JSON line per tick.

use std::io::{self, Write};
use log::info;
use serde::Serialize;

use crate::config::GameConfig;
use crate::scheduler::{self, FrameHost, FrameScheduler, HostEvent, SystemClock};
use crate::snake_game::{GameView, StepOutcome};


#[derive(Serialize)]
struct TickRecord<'a> {
    tick: u64,
    outcome: StepOutcome,
    #[serde(flatten)]
    view: GameView<'a>,
}

/// Writes snapshots to `out` and asks to close once `tick_limit` ticks have been shown.
pub struct JsonLinesHost<W: Write> {
    out: W,
    tick_limit: u64,
    ticks_shown: u64,
}

impl<W: Write> JsonLinesHost<W> {
    pub fn new(out: W, tick_limit: u64) -> Self {
        Self { out, tick_limit, ticks_shown: 0 }
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameHost for JsonLinesHost<W> {
    type Error = io::Error;

    fn present(&mut self, tick: u64, outcome: StepOutcome, view: GameView<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &TickRecord { tick, outcome, view })?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.ticks_shown = tick;
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<HostEvent> {
        if self.ticks_shown >= self.tick_limit {
            vec![HostEvent::Close]
        } else {
            Vec::new()
        }
    }
}

/// Play `ticks` ticks in real time with no input, printing to stdout.
pub fn run(config: &GameConfig, ticks: u64) -> io::Result<u64> {
    if ticks == 0 {
        return Ok(0);
    }
    info!("headless run: {}x{} grid, {ticks} ticks every {}s", config.grid_width(), config.grid_height(), config.tick_interval);
    let mut game = config.new_game();
    let mut clock = SystemClock::new();
    let mut scheduler = FrameScheduler::new(config.tick_interval, 0.0);
    let mut host = JsonLinesHost::new(io::stdout().lock(), ticks);
    scheduler::run(&mut game, &mut scheduler, &mut clock, &mut host)
}
