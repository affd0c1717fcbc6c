// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns the page set, layout, and navigation state.

use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect};

use crate::{
    Color, Command, ConfigError, DotLayout, DotVisual, IndicatorConfig, IndicatorScene,
    IndicatorSet, IndicatorState, SelectorState, SelectorVisual, transition,
};

/// Controller for a row of page dots with an animated selector.
///
/// This type:
/// - owns the immutable [`IndicatorSet`] and [`IndicatorConfig`],
/// - keeps the most recent [`DotLayout`] for the host-provided bounds,
/// - applies navigation [`Command`]s through [`transition`],
/// - produces an [`IndicatorScene`] for any clock reading.
///
/// Every time-dependent method takes the host clock in milliseconds.
#[derive(Clone, Debug)]
pub struct PageIndicator {
    set: IndicatorSet,
    config: IndicatorConfig,
    layout: Option<DotLayout>,
    state: IndicatorState,
}

impl PageIndicator {
    /// Creates an indicator with `pages` dots.
    ///
    /// `initial_index` is clamped into `[0, pages)`. Per-page `colors` are used
    /// only when there is exactly one per page; otherwise every dot uses
    /// [`IndicatorConfig::default_color`].
    pub fn new(
        pages: usize,
        initial_index: usize,
        colors: Option<Vec<Color>>,
        config: IndicatorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let set = IndicatorSet::new(pages, colors, config.default_color)?;
        let current = initial_index.min(pages - 1);
        let half = config.selected_size / 2.0;
        let color = set.color(current).unwrap_or(config.default_color);
        Ok(Self {
            set,
            config,
            layout: None,
            state: IndicatorState {
                current,
                selector: SelectorState::at_rest(Point::new(half, half), color),
            },
        })
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.set.len()
    }

    /// Index of the current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.state.current
    }

    /// The page set.
    #[must_use]
    pub const fn pages(&self) -> &IndicatorSet {
        &self.set
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// The current layout, if bounds have been provided.
    #[must_use]
    pub const fn layout(&self) -> Option<&DotLayout> {
        self.layout.as_ref()
    }

    /// The navigation state.
    #[must_use]
    pub const fn state(&self) -> &IndicatorState {
        &self.state
    }

    /// Lays the dots out inside `bounds`.
    ///
    /// The first layout animates the selector from its initial position to
    /// the current dot. Later layouts move it straight to the new center.
    pub fn set_bounds(&mut self, bounds: Rect, now_ms: u64) {
        let layout = DotLayout::compute(bounds, self.set.len(), self.config.unselected_size);
        tracing::trace!(?bounds, pages = layout.len(), "dot layout");
        let first = self.layout.is_none();
        self.layout = Some(layout);

        let current = self.state.current;
        if first {
            self.apply(Command::GoTo(current), now_ms);
        } else if let Some(center) = self.layout.as_ref().and_then(|l| l.center(current)) {
            self.state.selector = SelectorState::at_rest(center, self.state.selector.color);
        }
    }

    /// Applies a navigation command.
    ///
    /// Returns `false` if the command was ignored.
    pub fn apply(&mut self, command: Command, now_ms: u64) -> bool {
        match transition(
            &self.set,
            self.layout.as_ref(),
            &self.config,
            &self.state,
            command,
            now_ms,
        ) {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    /// Selects page `index`. Out-of-range indices are ignored.
    pub fn go_to_page(&mut self, index: usize, now_ms: u64) -> bool {
        self.apply(Command::GoTo(index), now_ms)
    }

    /// Advances to the next page, wrapping to the first.
    pub fn next_page(&mut self, now_ms: u64) -> bool {
        self.apply(Command::Next, now_ms)
    }

    /// Goes back to the previous page, wrapping to the last.
    pub fn previous_page(&mut self, now_ms: u64) -> bool {
        self.apply(Command::Previous, now_ms)
    }

    /// Selects the dot under `pt`, if any.
    ///
    /// `tolerance` widens every dot for touch input.
    pub fn select_at(&mut self, pt: Point, tolerance: f64, now_ms: u64) -> bool {
        match self.layout.as_ref().and_then(|l| l.hit_test(pt, tolerance)) {
            Some(index) => self.go_to_page(index, now_ms),
            None => false,
        }
    }

    /// Selector center as drawn at `now_ms`.
    #[must_use]
    pub fn selector_position(&self, now_ms: u64) -> Point {
        self.state.selector.sample(now_ms).0
    }

    /// Color of the current page, which the selector settles on.
    #[must_use]
    pub const fn selector_color(&self) -> Color {
        self.state.selector.color
    }

    /// Opacity of dot `index`.
    #[must_use]
    pub fn dot_alpha(&self, index: usize) -> f32 {
        self.state.dot_alpha(index, &self.config)
    }

    /// Returns `true` while the selector is moving.
    #[must_use]
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.state.selector.is_animating(now_ms)
    }

    /// Drops the selector animation once it has finished.
    pub fn settle(&mut self, now_ms: u64) {
        self.state.selector.settle(now_ms);
    }

    /// Describes the indicator as drawn at `now_ms`.
    ///
    /// Dots are only listed once bounds are known.
    #[must_use]
    pub fn scene(&self, now_ms: u64) -> IndicatorScene {
        let dots = match &self.layout {
            Some(layout) => (0..layout.len())
                .filter_map(|index| {
                    Some(DotVisual {
                        index,
                        circle: layout.circle(index)?,
                        color: self.set.color(index)?,
                        alpha: self.dot_alpha(index),
                    })
                })
                .collect(),
            None => Vec::new(),
        };

        let (center, color) = self.state.selector.sample(now_ms);
        IndicatorScene {
            dots,
            selector: SelectorVisual {
                circle: Circle::new(center, self.config.selected_size / 2.0),
                fill: color,
                border_color: color,
                border_width: self.config.border_width,
                ring_color: self.config.secondary_color,
                ring_width: self.config.ring_width,
            },
        }
    }
}
