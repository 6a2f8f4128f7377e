//! Fixed-timestep tick driver
//!
//! One frame:
//! 1. drain renderer input (quit, mouse pick)
//! 2. skip the step while PAUSED
//! 3. run one engine step under the lock and draw the live bodies
//! 4. present
//! 5. every `LOG_INTERVAL_SECS · fps` frames, append a snapshot log entry
//! 6. (`run` only) sleep out the rest of the frame budget
//!
//! Frame times are collected in [`FrameStats`]; the first `STARTUP_FRAMES`
//! frames do not count towards average/min/max.

use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::simulation::engine::Engine;
use crate::simulation::params::STARTUP_FRAMES;
use crate::visualization::{InputEvent, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Quit,
    Paused,
    Stepped { elapsed: Duration },
}

#[derive(Debug, Clone)]
pub struct FrameStats {
    started: Instant,
    pub frames: u64,
    pub over_budget: u64,
    sum: Duration,
    min: Option<Duration>,
    max: Duration,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            frames: 0,
            over_budget: 0,
            sum: Duration::ZERO,
            min: None,
            max: Duration::ZERO,
        }
    }

    fn record(&mut self, elapsed: Duration, budget: Duration) {
        self.frames += 1;
        if self.frames > STARTUP_FRAMES {
            self.sum += elapsed;
            self.min = Some(self.min.map_or(elapsed, |m| m.min(elapsed)));
            self.max = self.max.max(elapsed);
        }
        if elapsed > budget {
            self.over_budget += 1;
            debug!(frame = self.frames, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "frame over budget");
        }
    }

    /// Frames that count towards average/min/max
    pub fn measured_frames(&self) -> u64 {
        self.frames.saturating_sub(STARTUP_FRAMES)
    }

    pub fn average(&self) -> Option<Duration> {
        let n = self.measured_frames();
        (n > 0).then(|| self.sum.div_f64(n as f64))
    }

    pub fn min(&self) -> Option<Duration> {
        self.min
    }

    pub fn max(&self) -> Option<Duration> {
        (self.measured_frames() > 0).then_some(self.max)
    }

    pub fn wall_time(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = |d: Option<Duration>| d.map_or(0.0, |d| d.as_secs_f64() * 1000.0);
        writeln!(f, "Time passed:\t{:.2} s", self.wall_time().as_secs_f64())?;
        writeln!(f, "No. of frames:\t{}", self.frames)?;
        writeln!(f, "Frames over dt:\t{}", self.over_budget)?;
        writeln!(f, "After excluding {STARTUP_FRAMES} frames during startup:")?;
        writeln!(f, "Avg. Frame Time: {:.2} ms", ms(self.average()))?;
        writeln!(f, "Min. Frame Time: {:.2} ms", ms(self.min()))?;
        write!(f, "Max. Frame Time: {:.2} ms", ms(self.max()))
    }
}

pub struct TickDriver<R: Renderer> {
    engine: Arc<Engine>,
    renderer: R,
    stats: FrameStats,
}

impl<R: Renderer> TickDriver<R> {
    pub fn new(engine: Arc<Engine>, renderer: R) -> Self {
        Self {
            engine,
            renderer,
            stats: FrameStats::new(),
        }
    }

    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Steps 1 to 5 of a frame, without pacing
    pub fn frame(&mut self) -> FrameOutcome {
        let start = Instant::now();

        for event in self.renderer.poll_events() {
            match event {
                InputEvent::Quit => return FrameOutcome::Quit,
                InputEvent::Pick(point) => {
                    self.engine.report_pick(&point);
                }
            }
        }

        // sampled before the step takes the lock
        if self.engine.is_paused() {
            return FrameOutcome::Paused;
        }

        self.renderer.clear();
        self.engine.run_one_step(&mut self.renderer);
        self.renderer.present();

        let params = self.engine.params();
        if (self.stats.frames + 1) % params.log_interval_frames() == 0 {
            if let Err(err) = self.engine.log_snapshot() {
                warn!(error = %err, "could not write snapshot log entry");
            }
        }

        let elapsed = start.elapsed();
        self.stats.record(elapsed, params.frame_budget());
        FrameOutcome::Stepped { elapsed }
    }

    /// Run frames at the engine's fps until the renderer reports Quit
    pub fn run(mut self) -> FrameStats {
        let budget = self.engine.params().frame_budget();
        info!(fps = self.engine.params().fps, "tick driver started");

        loop {
            match self.frame() {
                FrameOutcome::Quit => break,
                FrameOutcome::Paused => thread::sleep(budget),
                FrameOutcome::Stepped { elapsed } => {
                    if let Some(rest) = budget.checked_sub(elapsed) {
                        thread::sleep(rest);
                    }
                }
            }
        }

        info!(frames = self.stats.frames, "tick driver stopped");
        self.stats
    }
}
