// driver.rs - Generation loop: cancellation, rendering and frame pacing

use std::io::Write;
use std::time::Duration;

use conway::GameOfLife;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::cancel::Cancellation;
use crate::error::AppResult;
use crate::term::Screen;

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    Cancelled,
    GenerationLimit,
    Cycle,
}

pub struct Driver<W: Write> {
    life: GameOfLife,
    screen: Screen<W>,
    frame_period: Option<Duration>,
    generations: Option<u64>,
    stop_on_cycle: bool,
    cycle_reported: bool,
}

impl<W: Write> Driver<W> {
    pub fn new(life: GameOfLife, screen: Screen<W>) -> Self {
        Self {
            life,
            screen,
            frame_period: None,
            generations: None,
            stop_on_cycle: false,
            cycle_reported: false,
        }
    }

    /// Cap the rate at one generation per `period`.
    pub fn with_frame_period(mut self, period: Option<Duration>) -> Self {
        self.frame_period = period;
        self
    }

    pub fn with_generation_limit(mut self, limit: Option<u64>) -> Self {
        self.generations = limit;
        self
    }

    pub fn with_stop_on_cycle(mut self, stop: bool) -> Self {
        self.stop_on_cycle = stop;
        self
    }

    /// Run generations until cancelled, the limit is hit, or a cycle is seen
    /// with `stop_on_cycle` set.
    ///
    /// Cancellation is only checked between generations; on cancel the
    /// terminal colors are reset before returning.
    pub async fn run(&mut self, cancel: &Cancellation) -> AppResult<Stop> {
        let mut pacer = self.frame_period.map(pacer);
        debug!(period = ?self.frame_period, limit = ?self.generations, "generation loop started");

        loop {
            if cancel.is_cancelled() {
                self.screen.reset()?;
                return Ok(Stop::Cancelled);
            }

            let tick = self.life.advance();
            self.screen.draw(self.life.frame(), tick.generation)?;

            if self.generations.is_some_and(|limit| tick.generation >= limit) {
                info!(generation = tick.generation, "generation limit reached");
                return Ok(Stop::GenerationLimit);
            }

            if tick.cycle {
                if !self.cycle_reported {
                    info!(generation = tick.generation, population = self.life.population(), "board entered a cycle");
                    self.cycle_reported = true;
                }
                if self.stop_on_cycle {
                    return Ok(Stop::Cycle);
                }
            }

            match pacer.as_mut() {
                Some(interval) => {
                    interval.tick().await;
                }
                // Uncapped: still give the interrupt listener a chance to run.
                None => tokio::task::yield_now().await,
            }
        }
    }

    #[cfg(test)]
    fn screen(&self) -> &Screen<W> {
        &self.screen
    }
}

fn pacer(period: Duration) -> Interval {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{CLEAR, RESET};
    use conway::patterns::Pattern;
    use conway::{GridSize, Palette};

    fn driver(pattern: &str, size: (usize, usize)) -> Driver<Vec<u8>> {
        let mut life = GameOfLife::new(GridSize::new(size.0, size.1).unwrap(), Palette::COLOR);
        life.apply_pattern(Pattern::find(pattern).unwrap()).unwrap();
        Driver::new(life, Screen::new(Vec::new()))
    }

    fn output(driver: &Driver<Vec<u8>>) -> String {
        String::from_utf8(driver.screen().get_ref().clone()).unwrap()
    }

    #[tokio::test]
    async fn stops_at_generation_limit() {
        let mut driver = driver("glider", (8, 8)).with_generation_limit(Some(3));
        let stop = driver.run(&Cancellation::new()).await.unwrap();
        assert_eq!(stop, Stop::GenerationLimit);

        let out = output(&driver);
        assert!(out.starts_with(std::str::from_utf8(CLEAR).unwrap()));
        assert!(out.contains("gen: 1\n"));
        assert!(out.ends_with("gen: 3\n"));
        assert!(!out.contains("gen: 4\n"));
    }

    #[tokio::test]
    async fn cancelled_before_start_only_resets() {
        let mut driver = driver("glider", (8, 8));
        let cancel = Cancellation::new();
        cancel.cancel();
        assert_eq!(driver.run(&cancel).await.unwrap(), Stop::Cancelled);
        assert_eq!(driver.screen().get_ref().as_slice(), RESET);
    }

    #[tokio::test]
    async fn stops_on_cycle_when_asked() {
        let mut driver = driver("blinker", (5, 5))
            .with_stop_on_cycle(true)
            .with_generation_limit(Some(100));
        assert_eq!(driver.run(&Cancellation::new()).await.unwrap(), Stop::Cycle);
        assert!(output(&driver).ends_with("gen: 3\n"));
    }

    #[tokio::test]
    async fn cycle_alone_does_not_stop() {
        let mut driver = driver("blinker", (5, 5)).with_generation_limit(Some(12));
        assert_eq!(driver.run(&Cancellation::new()).await.unwrap(), Stop::GenerationLimit);
    }

    #[tokio::test]
    async fn first_frame_has_no_change_colors() {
        let mut driver = driver("r-pentomino", (10, 10)).with_generation_limit(Some(1));
        driver.run(&Cancellation::new()).await.unwrap();
        let out = output(&driver);
        assert!(!out.contains("\x1b[41m"));
        assert!(!out.contains("\x1b[42m"));
        assert!(out.contains("\x1b[47m"));
    }

    #[tokio::test(start_paused = true)]
    async fn frame_period_paces_generations() {
        let mut driver = driver("glider", (8, 8))
            .with_frame_period(Some(Duration::from_millis(100)))
            .with_generation_limit(Some(3));
        let started = Instant::now();
        driver.run(&Cancellation::new()).await.unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(200), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(300), "{elapsed:?}");
    }
}
