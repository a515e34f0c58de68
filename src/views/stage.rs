// src/views/stage.rs
//
// Owns the chain, the ticker and the drawing parameters.
// A tap starts the current node animating and starts the ticker; every tick
// redraws and advances the chain; a settle stops the ticker and redraws once
// more. Taps while a node is animating are ignored.

use nannou::prelude::*;

use crate::animation::{BeginOutcome, Ticker};
use crate::config::{Config, ConfigError};
use crate::draw::{Layout, WedgeStyle};
use crate::models::{Chain, ChainStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePhase {
    Idle,
    Running,
}

pub struct Stage {
    chain: Chain,
    ticker: Ticker,
    layout: Layout,
    background: Rgb,
    wedge_style: WedgeStyle,
    needs_redraw: bool,
}

impl Stage {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let wedge_count = config.chain.wedge_count;
        let step = config.animation.step_size / wedge_count as f32;

        Ok(Self {
            chain: Chain::new(config.chain.node_count, step),
            ticker: Ticker::new(
                config.animation.tick_period(),
                config.animation.max_catch_up,
            ),
            layout: Layout::new(
                config.window.width as f32,
                config.window.height as f32,
                config.chain.node_count,
            ),
            background: config.style.background_color()?,
            wedge_style: WedgeStyle {
                color: config.style.foreground_color()?,
                wedge_count,
                arc_step_degrees: config.rendering.arc_step_degrees,
            },
            // The idle frame has to be rendered once before any tap
            needs_redraw: true,
        })
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn phase(&self) -> StagePhase {
        if self.ticker.is_running() {
            StagePhase::Running
        } else {
            StagePhase::Idle
        }
    }

    /// Returns true if the tap started a new cycle.
    pub fn tap(&mut self) -> bool {
        match self.chain.begin_animating() {
            BeginOutcome::Started(sweep) => {
                log::debug!("tap: node {} begins {:?}", self.chain.current(), sweep);
                self.ticker.start();
                true
            }
            BeginOutcome::AlreadyAnimating => {
                log::debug!("tap ignored, node {} is animating", self.chain.current());
                false
            }
        }
    }

    /// Feeds frame time to the ticker and runs the ticks that are due.
    /// Returns true when the frame has to be redrawn.
    pub fn update(&mut self, dt: f32) -> bool {
        for _ in 0..self.ticker.due_ticks(dt) {
            if !self.ticker.is_running() {
                break;
            }
            self.tick();
        }
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    fn tick(&mut self) {
        // Also covers the final frame after a settle
        self.needs_redraw = true;

        match self.chain.advance() {
            ChainStep::CycleComplete { settled, scale } => {
                log::debug!(
                    "node {} settled at {}, node {} is next",
                    settled,
                    scale,
                    self.chain.current()
                );
                self.ticker.stop();
            }
            ChainStep::Partial => {
                log::trace!(
                    "node {} progress {:.3}",
                    self.chain.current(),
                    self.chain.current_node().scale()
                );
            }
            // Ticker outlived the animation; nothing left to drive
            ChainStep::Idle => {
                self.ticker.stop();
            }
        }
    }

    /// Clears to the background and draws the chain from the current node back.
    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.background);
        self.chain.draw(draw, &self.layout, &self.wedge_style);
    }

    pub fn status_line(&self) -> String {
        let node = self.chain.current_node();
        format!(
            "node {} | {:?} | scale {:.3} | {:?}",
            node.index(),
            self.chain.traversal(),
            node.scale(),
            self.phase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Traversal;

    const FRAME: f32 = 1.0 / 60.0;

    fn stage() -> Stage {
        Stage::new(&Config::default()).unwrap()
    }

    // Runs frames until the stage is idle again
    fn run_until_idle(stage: &mut Stage) -> usize {
        for frame in 1..=10_000 {
            stage.update(FRAME);
            if stage.phase() == StagePhase::Idle {
                return frame;
            }
        }
        panic!("stage never went idle");
    }

    #[test]
    fn test_initial_frame_is_drawn() {
        let mut stage = stage();
        assert_eq!(stage.phase(), StagePhase::Idle);
        assert!(stage.update(FRAME));
        // nothing changes while idle
        assert!(!stage.update(FRAME));
        assert!(!stage.update(1.0));
    }

    #[test]
    fn test_tap_starts_and_settle_stops() {
        let mut stage = stage();
        stage.update(FRAME);

        assert!(stage.tap());
        assert_eq!(stage.phase(), StagePhase::Running);

        // 40-41 ticks at 50ms is about two seconds of frames
        let frames = run_until_idle(&mut stage);
        assert!(frames > 100 && frames < 150, "took {} frames", frames);

        assert_eq!(stage.chain().current(), 1);
        assert_eq!(stage.chain().nodes()[0].scale(), 1.0);
        assert_eq!(stage.chain().traversal(), Traversal::Forward);
    }

    #[test]
    fn test_tap_while_running_is_ignored() {
        let mut stage = stage();
        stage.tap();
        stage.update(0.2);
        let progress = stage.chain().current_node().scale();

        assert!(!stage.tap());
        assert_eq!(stage.chain().current_node().scale(), progress);
        assert_eq!(stage.phase(), StagePhase::Running);
    }

    #[test]
    fn test_ticks_request_redraws() {
        let mut stage = stage();
        stage.update(FRAME);
        stage.tap();

        assert!(stage.update(0.05));
        assert!(stage.chain().current_node().scale() > 0.0);
        // Less than a period: no tick, no redraw
        assert!(!stage.update(0.01));
    }

    #[test]
    fn test_settle_redraw_and_retrigger() {
        let mut stage = stage();
        stage.tap();
        run_until_idle(&mut stage);
        assert!(!stage.update(FRAME));

        assert!(stage.tap());
        run_until_idle(&mut stage);
        assert_eq!(stage.chain().current(), 2);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.style.background = "nope".into();
        assert!(matches!(
            Stage::new(&config),
            Err(ConfigError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_draw_does_not_panic_on_any_state() {
        let mut stage = stage();
        let draw = Draw::new();
        stage.draw(&draw);
        stage.tap();
        stage.update(0.5);
        stage.draw(&draw);
        assert!(stage.status_line().contains("Running"));
    }
}
