//! The orchestrator a UI host drives.
//!
//! The host owns the clock: it calls [`Visualizer::tick`] to advance every
//! orbit by one step and [`Visualizer::frame`] as often as it likes to
//! sample the animation in between.

use tracing::{debug, info, trace};

use crate::bubble::BubbleState;
use crate::cache::StepCache;
use crate::color::Palette;
use crate::config::VizConfig;
use crate::error::Result;
use crate::iteration::Iteration;
use crate::layout::Layout;
use crate::scene::{Frame, Transition};

/// Iterates the configured map over `0..=max_int` and produces frames.
#[derive(Debug)]
pub struct Visualizer {
    config: VizConfig,
    cache: StepCache,
    iteration: Iteration,
    layout: Layout,
    palette: Palette,
    state: BubbleState,
    current: Transition,
}

impl Visualizer {
    /// Builds a visualiser with every integer at its starting position.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: VizConfig) -> Result<Self> {
        config.validate()?;
        let mut cache = StepCache::new();
        let iteration = Iteration::new(&config, &mut cache)?;
        let layout = Layout::new(&config)?;
        let palette = palette_for(&config);
        let state = BubbleState::new(config.max_int);
        let current = Transition::new(
            0,
            state.stationary(),
            &layout,
            &palette,
            config.dot_radius,
            config.connect,
        );

        info!(
            prime = config.prime,
            power = config.power,
            max_int = config.max_int,
            polynomial = %config.polynomial,
            "visualizer configured"
        );

        Ok(Self {
            config,
            cache,
            iteration,
            layout,
            palette,
            state,
            current,
        })
    }

    /// Replaces the configuration and restarts every orbit.
    ///
    /// Tables for the new prime are kept; tables for other primes are dropped.
    /// On error the previous configuration stays active.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn reconfigure(&mut self, config: VizConfig) -> Result<()> {
        config.validate()?;
        if config.prime != self.config.prime {
            debug!(old = self.config.prime, new = config.prime, "prime changed");
            self.cache.retain_prime(config.prime);
        }
        let iteration = Iteration::new(&config, &mut self.cache)?;
        let layout = Layout::new(&config)?;

        self.iteration = iteration;
        self.layout = layout;
        self.palette = palette_for(&config);
        self.config = config;
        self.reset();

        info!(
            prime = self.config.prime,
            power = self.config.power,
            max_int = self.config.max_int,
            polynomial = %self.config.polynomial,
            "visualizer reconfigured"
        );
        Ok(())
    }

    /// Puts every integer back at itself.
    pub fn reset(&mut self) {
        self.state = BubbleState::new(self.config.max_int);
        self.current = Transition::new(
            0,
            self.state.stationary(),
            &self.layout,
            &self.palette,
            self.config.dot_radius,
            self.config.connect,
        );
    }

    /// Advances every orbit by one step and returns the animation of that step.
    pub fn tick(&mut self) -> &Transition {
        let motions = self.state.advance(&self.iteration);
        self.current = Transition::new(
            self.state.ticks(),
            motions,
            &self.layout,
            &self.palette,
            self.config.dot_radius,
            self.config.connect,
        );
        trace!(
            tick = self.state.ticks(),
            moved = self.current.len(),
            vanished = self.current.vanished(),
            "tick"
        );
        &self.current
    }

    /// Samples the current transition at progress `t ∈ [0, 1]`.
    #[must_use]
    pub fn frame(&self, t: f64) -> Frame {
        self.current.frame(t)
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    /// Orbit state.
    #[must_use]
    pub fn state(&self) -> &BubbleState {
        &self.state
    }

    /// The table cache.
    #[must_use]
    pub fn cache(&self) -> &StepCache {
        &self.cache
    }

    /// The resolved layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

fn palette_for(config: &VizConfig) -> Palette {
    let count = usize::try_from(config.max_int).map_or(usize::MAX, |n| n.saturating_add(1));
    Palette::new(count, config.saturation, config.value)
}
