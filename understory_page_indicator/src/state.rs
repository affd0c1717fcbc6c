// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page set, navigation commands, and the pure state transition.

use alloc::vec::Vec;

use kurbo::Point;

use crate::{Color, ConfigError, DotLayout, IndicatorConfig, SelectorAnimation, SpringCurve};

/// The fixed, ordered set of pages and their dot colors.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorSet {
    colors: Vec<Color>,
}

impl IndicatorSet {
    /// Creates a set of `pages` dots.
    ///
    /// `colors` is used only when it holds exactly one color per page;
    /// otherwise every page gets `default_color`.
    pub fn new(
        pages: usize,
        colors: Option<Vec<Color>>,
        default_color: Color,
    ) -> Result<Self, ConfigError> {
        if pages == 0 {
            return Err(ConfigError::NoPages);
        }
        let colors = match colors {
            Some(colors) if colors.len() == pages => colors,
            Some(colors) => {
                tracing::debug!(
                    pages,
                    colors = colors.len(),
                    "color count does not match page count; using default color"
                );
                alloc::vec![default_color; pages]
            }
            None => alloc::vec![default_color; pages],
        };
        Ok(Self { colors })
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: a set holds at least one page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Dot color of page `index`, if it exists.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// All dot colors in page order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// A navigation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Jump to a specific page. Out-of-range pages are ignored.
    GoTo(usize),
    /// Advance one page, wrapping from the last page to the first.
    Next,
    /// Go back one page, wrapping from the first page to the last.
    Previous,
}

impl Command {
    /// Page this command targets when the current page is `current` of `pages`.
    ///
    /// Returns `None` when the command cannot be applied.
    #[must_use]
    pub fn target(self, current: usize, pages: usize) -> Option<usize> {
        if pages == 0 {
            return None;
        }
        match self {
            Self::GoTo(index) => (index < pages).then_some(index),
            Self::Next => Some(if current + 1 >= pages { 0 } else { current + 1 }),
            Self::Previous => Some(if current == 0 { pages - 1 } else { current - 1 }),
        }
    }
}

/// Where the selector marker is and what it looks like.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectorState {
    /// Resting position, or the target of the running animation.
    pub position: Point,
    /// Resting color, or the target color of the running animation.
    pub color: Color,
    /// The move in flight, if any.
    pub animation: Option<SelectorAnimation>,
}

impl SelectorState {
    /// A selector at rest.
    #[must_use]
    pub const fn at_rest(position: Point, color: Color) -> Self {
        Self {
            position,
            color,
            animation: None,
        }
    }

    /// Position and color as drawn at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> (Point, Color) {
        match &self.animation {
            Some(anim) if !anim.is_finished(now_ms) => anim.sample(now_ms),
            _ => (self.position, self.color),
        }
    }

    /// Returns `true` while a move is still in flight at `now_ms`.
    #[must_use]
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.animation.is_some_and(|anim| !anim.is_finished(now_ms))
    }

    /// Starts a move to `to`, beginning from wherever the selector is drawn
    /// at `now_ms`, including mid-way through a previous move.
    #[must_use]
    pub fn retarget(
        &self,
        to: Point,
        to_color: Color,
        now_ms: u64,
        config: &IndicatorConfig,
    ) -> Self {
        let (from, from_color) = self.sample(now_ms);
        let animation = (config.motion.duration_ms > 0).then_some(SelectorAnimation {
            from,
            to,
            from_color,
            to_color,
            start_ms: now_ms,
            duration_ms: config.motion.duration_ms,
            curve: SpringCurve::from_motion(&config.motion),
        });
        Self {
            position: to,
            color: to_color,
            animation,
        }
    }

    /// Drops a finished animation.
    pub fn settle(&mut self, now_ms: u64) {
        if self.animation.is_some_and(|anim| anim.is_finished(now_ms)) {
            self.animation = None;
        }
    }
}

/// Mutable part of an indicator: the current page and the selector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorState {
    /// Index of the current page, always in `[0, pages)`.
    pub current: usize,
    /// The selector marker.
    pub selector: SelectorState,
}

impl IndicatorState {
    /// Opacity of dot `index` under the emphasis rule.
    ///
    /// Pages up to and including the current one are opaque; later pages use
    /// [`IndicatorConfig::dimmed_alpha`] when dimming is enabled.
    #[must_use]
    pub fn dot_alpha(&self, index: usize, config: &IndicatorConfig) -> f32 {
        if !config.dim_future_pages || index <= self.current {
            1.0
        } else {
            config.dimmed_alpha
        }
    }
}

/// Applies `command` to `state`.
///
/// Returns `None` when the command is ignored (an out-of-range
/// [`Command::GoTo`]); the caller keeps its current state. Otherwise the new
/// state has the target page selected and the selector retargeted to that
/// page's dot. Without a `layout` the selector only changes color and keeps
/// its position.
#[must_use]
pub fn transition(
    set: &IndicatorSet,
    layout: Option<&DotLayout>,
    config: &IndicatorConfig,
    state: &IndicatorState,
    command: Command,
    now_ms: u64,
) -> Option<IndicatorState> {
    let Some(target) = command.target(state.current, set.len()) else {
        tracing::trace!(?command, pages = set.len(), "ignoring out-of-range page");
        return None;
    };
    let color = set.color(target)?;
    let position = layout
        .and_then(|layout| layout.center(target))
        .unwrap_or(state.selector.position);

    tracing::debug!(from = state.current, to = target, "page change");
    Some(IndicatorState {
        current: target,
        selector: state.selector.retarget(position, color, now_ms, config),
    })
}

#[cfg(test)]
mod tests {
    use super::{Command, IndicatorSet, IndicatorState, SelectorState, transition};
    use crate::{Color, ConfigError, DotLayout, IndicatorConfig};
    use alloc::vec;
    use kurbo::{Point, Rect};

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    fn four_pages() -> IndicatorSet {
        IndicatorSet::new(4, Some(vec![RED, GREEN, BLUE, YELLOW]), Color::WHITE).unwrap()
    }

    fn initial(color: Color) -> IndicatorState {
        IndicatorState {
            current: 0,
            selector: SelectorState::at_rest(Point::new(11.0, 11.0), color),
        }
    }

    #[test]
    fn set_requires_pages_and_matching_colors() {
        assert_eq!(
            IndicatorSet::new(0, None, Color::WHITE),
            Err(ConfigError::NoPages)
        );

        let set = IndicatorSet::new(3, Some(vec![RED, GREEN]), Color::WHITE).unwrap();
        assert_eq!(set.colors(), &[Color::WHITE; 3]);

        let set = IndicatorSet::new(2, None, BLUE).unwrap();
        assert_eq!(set.color(1), Some(BLUE));
        assert_eq!(set.color(2), None);
    }

    #[test]
    fn command_targets_wrap() {
        assert_eq!(Command::Next.target(0, 4), Some(1));
        assert_eq!(Command::Next.target(3, 4), Some(0));
        assert_eq!(Command::Previous.target(2, 4), Some(1));
        assert_eq!(Command::Previous.target(0, 4), Some(3));
        assert_eq!(Command::GoTo(3).target(0, 4), Some(3));
        assert_eq!(Command::GoTo(4).target(0, 4), None);
        assert_eq!(Command::Next.target(0, 1), Some(0));
        assert_eq!(Command::Previous.target(0, 1), Some(0));
    }

    #[test]
    fn out_of_range_goto_is_ignored() {
        let set = four_pages();
        let config = IndicatorConfig::default();
        let state = initial(RED);
        assert_eq!(
            transition(&set, None, &config, &state, Command::GoTo(4), 0),
            None
        );
        assert_eq!(
            transition(&set, None, &config, &state, Command::GoTo(usize::MAX), 0),
            None
        );
    }

    #[test]
    fn transition_moves_selector_to_dot_center() {
        let set = four_pages();
        let config = IndicatorConfig::default();
        let layout = DotLayout::compute(Rect::new(0.0, 0.0, 200.0, 30.0), 4, 14.0);
        let state = initial(RED);

        let next = transition(&set, Some(&layout), &config, &state, Command::Next, 0).unwrap();
        assert_eq!(next.current, 1);
        assert_eq!(next.selector.color, GREEN);
        assert_eq!(next.selector.position, Point::new(69.0, 23.0));
        assert!(next.selector.is_animating(100));
        assert_eq!(next.selector.sample(0), (Point::new(11.0, 11.0), RED));
        assert_eq!(next.selector.sample(200), (Point::new(69.0, 23.0), GREEN));
    }

    #[test]
    fn transition_without_layout_keeps_position() {
        let set = four_pages();
        let config = IndicatorConfig::default();
        let state = initial(RED);

        let next = transition(&set, None, &config, &state, Command::GoTo(2), 0).unwrap();
        assert_eq!(next.current, 2);
        assert_eq!(next.selector.position, Point::new(11.0, 11.0));
        assert_eq!(next.selector.color, BLUE);
    }

    #[test]
    fn retarget_starts_from_mid_flight_position() {
        let set = four_pages();
        let config = IndicatorConfig::default();
        let layout = DotLayout::compute(Rect::new(0.0, 0.0, 200.0, 30.0), 4, 14.0);
        let state = initial(RED);

        let first = transition(&set, Some(&layout), &config, &state, Command::GoTo(3), 0).unwrap();
        let (mid, _) = first.selector.sample(50);
        let second =
            transition(&set, Some(&layout), &config, &first, Command::GoTo(1), 50).unwrap();
        let anim = second.selector.animation.unwrap();
        assert_eq!(anim.from, mid);
        assert_eq!(anim.to, Point::new(69.0, 23.0));
        assert_eq!(anim.start_ms, 50);
    }

    #[test]
    fn emphasis_dims_future_pages() {
        let config = IndicatorConfig::default();
        let state = IndicatorState {
            current: 1,
            ..initial(GREEN)
        };
        assert_eq!(state.dot_alpha(0, &config), 1.0);
        assert_eq!(state.dot_alpha(1, &config), 1.0);
        assert_eq!(state.dot_alpha(2, &config), 0.25);
        assert_eq!(state.dot_alpha(3, &config), 0.25);

        let flat = IndicatorConfig {
            dim_future_pages: false,
            ..IndicatorConfig::default()
        };
        assert_eq!(state.dot_alpha(3, &flat), 1.0);
    }

    #[test]
    fn settle_drops_finished_animation() {
        let set = four_pages();
        let config = IndicatorConfig::default();
        let layout = DotLayout::compute(Rect::new(0.0, 0.0, 200.0, 30.0), 4, 14.0);
        let mut state =
            transition(&set, Some(&layout), &config, &initial(RED), Command::Next, 0).unwrap();

        state.selector.settle(199);
        assert!(state.selector.animation.is_some());
        state.selector.settle(200);
        assert_eq!(state.selector.animation, None);
    }
}
