use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::grid::Grid;

pub(crate) trait Renderer {
    fn frame(&mut self, grid: &Grid) -> io::Result<()>;
}

pub(crate) trait Clock {
    fn pause(&mut self, interval: Duration) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SimState {
    Idle,
    Running,
    Stopped,
}

/// Cooperative stop flag shared between the simulator and whatever requests
/// the stop (the tick clock's key poll, a signal handler). The simulator
/// observes it once per generation, at the top of the loop.
#[derive(Clone)]
pub(crate) struct SimHandle {
    stopped: Arc<AtomicBool>,
}

impl SimHandle {
    pub(crate) fn new() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub(crate) fn stop_requested(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// One synchronous generation. Every cell's rule is evaluated against the old
/// grid; results land in a fresh grid and the input is left untouched.
pub(crate) fn step(grid: &Grid) -> Grid {
    let mut next = grid.blank_like();

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let window = grid.neighborhood(row, col);
            let center = window[1][1];

            let mut live = 0u8;
            for line in &window {
                for &cell in line {
                    live += cell;
                }
            }
            live -= center;

            let state = match (center, live) {
                (1, n) if n < 2 => 0, // underpopulation
                (1, 2) | (1, 3) => 1,
                (1, _) => 0, // overpopulation
                (0, 3) => 1, // reproduction
                (s, _) => s,
            };
            next.set(row, col, state);
        }
    }

    next
}

pub(crate) struct Simulator<R, C> {
    tick: Duration,
    grid: Grid,
    state: SimState,
    generation: u64,
    handle: SimHandle,
    renderer: R,
    clock: C,
}

impl<R: Renderer, C: Clock> Simulator<R, C> {
    pub(crate) fn new(config: &Config, grid: Grid, renderer: R, clock: C, handle: SimHandle) -> Self {
        Self {
            tick: config.tick,
            grid,
            state: SimState::Idle,
            generation: 0,
            handle,
            renderer,
            clock,
        }
    }

    /// Render, compute the next generation, swap it in, pause one tick;
    /// repeat until the handle asks us to stop. `Stopped` is terminal: the
    /// flag stays set, so a stopped simulator never ticks again and a fresh
    /// one must be built to run anew.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        if self.state == SimState::Stopped {
            return Ok(());
        }
        self.state = SimState::Running;

        while !self.handle.stop_requested() {
            self.renderer.frame(&self.grid)?;
            self.grid = step(&self.grid);
            self.generation += 1;
            self.clock.pause(self.tick)?;
        }

        self.state = SimState::Stopped;
        Ok(())
    }

    pub(crate) fn generations(&self) -> u64 {
        self.generation
    }

    pub(crate) fn population(&self) -> usize {
        self.grid.live_count()
    }
}
