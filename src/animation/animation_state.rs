// src/animation/animation_state.rs
//
// Per-node progress and direction.
// A node is either idle (settled at its committed scale) or sweeping
// towards committed + 1 or committed - 1.

/// Which way an active animation moves the node's scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Expand,
    Collapse,
}

impl Sweep {
    pub fn sign(self) -> f32 {
        match self {
            Sweep::Expand => 1.0,
            Sweep::Collapse => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginOutcome {
    Started(Sweep),
    AlreadyAnimating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing to do, the state is not animating.
    Idle,
    /// Progress moved but the sweep is not finished.
    Partial,
    /// The sweep finished; carries the newly committed scale.
    Settled(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    progress: f32,
    direction: Option<Sweep>,
    committed: f32,
    step: f32,
}

impl AnimationState {
    /// `step` is the progress added per tick (step_size / wedge_count).
    pub fn new(step: f32) -> Self {
        Self {
            progress: 0.0,
            direction: None,
            committed: 0.0,
            step,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn committed(&self) -> f32 {
        self.committed
    }

    pub fn direction(&self) -> Option<Sweep> {
        self.direction
    }

    /// -1, 0 or 1.
    pub fn direction_sign(&self) -> f32 {
        self.direction.map_or(0.0, Sweep::sign)
    }

    pub fn is_animating(&self) -> bool {
        self.direction.is_some()
    }

    /// Picks a direction from the committed scale: a collapsed node expands,
    /// anything else collapses. Refused while a sweep is already running.
    pub fn begin_animating(&mut self) -> BeginOutcome {
        if self.direction.is_some() {
            return BeginOutcome::AlreadyAnimating;
        }

        let sweep = if self.committed <= 0.0 {
            Sweep::Expand
        } else {
            Sweep::Collapse
        };
        self.direction = Some(sweep);
        BeginOutcome::Started(sweep)
    }

    pub fn advance(&mut self) -> Step {
        let Some(sweep) = self.direction else {
            return Step::Idle;
        };

        self.progress += self.step * sweep.sign();

        if (self.progress - self.committed).abs() > 1.0 {
            self.progress = self.committed + sweep.sign();
            self.direction = None;
            self.committed = self.progress;
            Step::Settled(self.committed)
        } else {
            Step::Partial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.1 / 4.0;

    fn run_to_settle(state: &mut AnimationState) -> (usize, f32) {
        for ticks in 1..=1000 {
            if let Step::Settled(value) = state.advance() {
                return (ticks, value);
            }
        }
        panic!("animation never settled");
    }

    #[test]
    fn test_begin_from_collapsed_expands() {
        let mut state = AnimationState::new(STEP);
        assert_eq!(state.direction_sign(), 0.0);
        assert_eq!(state.begin_animating(), BeginOutcome::Started(Sweep::Expand));
        assert_eq!(state.direction(), Some(Sweep::Expand));
        assert_eq!(state.direction_sign(), 1.0);
    }

    #[test]
    fn test_begin_while_animating_is_refused() {
        let mut state = AnimationState::new(STEP);
        state.begin_animating();
        state.advance();
        let before = state.clone();

        assert_eq!(state.begin_animating(), BeginOutcome::AlreadyAnimating);
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_law() {
        let mut state = AnimationState::new(STEP);
        state.begin_animating();
        let (_, value) = run_to_settle(&mut state);
        assert_eq!(value, 1.0);

        assert_eq!(state.begin_animating(), BeginOutcome::Started(Sweep::Collapse));
        assert!(state.direction_sign() < 0.0);
        let (_, value) = run_to_settle(&mut state);
        assert_eq!(value, 0.0);

        assert_eq!(state.begin_animating(), BeginOutcome::Started(Sweep::Expand));
    }

    #[test]
    fn test_advance_is_monotonic_until_settle() {
        let mut state = AnimationState::new(STEP);
        state.begin_animating();

        let mut last = state.progress();
        loop {
            match state.advance() {
                Step::Partial => {
                    assert!(state.progress() > last);
                    assert!((state.progress() - state.committed()).abs() <= 1.0);
                    last = state.progress();
                }
                Step::Settled(value) => {
                    assert_eq!(value, 1.0);
                    assert_eq!(state.progress(), 1.0);
                    assert_eq!(state.committed(), 1.0);
                    assert!(!state.is_animating());
                    assert_eq!(state.direction(), None);
                    break;
                }
                Step::Idle => panic!("state went idle without settling"),
            }
        }
    }

    #[test]
    fn test_settle_tick_count() {
        // 1 / 0.025 = 40 steps reach the target; settling needs to exceed it
        let mut state = AnimationState::new(STEP);
        state.begin_animating();
        let (ticks, _) = run_to_settle(&mut state);
        assert!((40..=41).contains(&ticks), "settled after {} ticks", ticks);
    }

    #[test]
    fn test_advance_when_idle_does_nothing() {
        let mut state = AnimationState::new(STEP);
        assert_eq!(state.advance(), Step::Idle);
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.committed(), 0.0);
    }
}
