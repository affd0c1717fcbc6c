// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering adapter seam and a presenter that drives it.
//!
//! The indicator itself never draws. Hosts implement [`IndicatorRenderer`]
//! for their drawing backend and let a [`Presenter`] decide when a frame
//! must be produced.

use kurbo::{Point, Rect};

use crate::{IndicatorScene, PageIndicator};

/// Backend that turns an [`IndicatorScene`] into pixels.
pub trait IndicatorRenderer {
    /// Draw one frame.
    fn render(&mut self, scene: &IndicatorScene);
}

impl<R: IndicatorRenderer + ?Sized> IndicatorRenderer for &mut R {
    fn render(&mut self, scene: &IndicatorScene) {
        (**self).render(scene);
    }
}

/// Couples a [`PageIndicator`] with a renderer.
///
/// Setup happens once, the first time the host reports the indicator on
/// screen via [`Presenter::appear`]. Navigation before that only updates
/// state; nothing is drawn until the first appearance.
#[derive(Debug)]
pub struct Presenter<R> {
    indicator: PageIndicator,
    renderer: R,
    initialized: bool,
}

impl<R: IndicatorRenderer> Presenter<R> {
    /// Wraps `indicator` and `renderer`.
    pub fn new(indicator: PageIndicator, renderer: R) -> Self {
        Self {
            indicator,
            renderer,
            initialized: false,
        }
    }

    /// Shared access to the indicator.
    #[must_use]
    pub fn indicator(&self) -> &PageIndicator {
        &self.indicator
    }

    /// Shared access to the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns `true` once [`Presenter::appear`] has run setup.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Unwraps the presenter.
    #[must_use]
    pub fn into_parts(self) -> (PageIndicator, R) {
        (self.indicator, self.renderer)
    }

    /// Reports that the indicator is on screen inside `bounds`.
    ///
    /// Lays out the dots and starts the move to the current page the first
    /// time; later calls do nothing. Returns whether setup ran.
    pub fn appear(&mut self, bounds: Rect, now_ms: u64) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.indicator.set_bounds(bounds, now_ms);
        self.draw(now_ms);
        true
    }

    /// Reports new bounds after the first appearance.
    pub fn resize(&mut self, bounds: Rect, now_ms: u64) {
        if !self.initialized {
            return;
        }
        self.indicator.set_bounds(bounds, now_ms);
        self.draw(now_ms);
    }

    /// See [`PageIndicator::go_to_page`].
    pub fn go_to_page(&mut self, index: usize, now_ms: u64) -> bool {
        let applied = self.indicator.go_to_page(index, now_ms);
        self.redraw_if(applied, now_ms)
    }

    /// See [`PageIndicator::next_page`].
    pub fn next_page(&mut self, now_ms: u64) -> bool {
        let applied = self.indicator.next_page(now_ms);
        self.redraw_if(applied, now_ms)
    }

    /// See [`PageIndicator::previous_page`].
    pub fn previous_page(&mut self, now_ms: u64) -> bool {
        let applied = self.indicator.previous_page(now_ms);
        self.redraw_if(applied, now_ms)
    }

    /// See [`PageIndicator::select_at`].
    pub fn tap(&mut self, pt: Point, tolerance: f64, now_ms: u64) -> bool {
        let applied = self.indicator.select_at(pt, tolerance, now_ms);
        self.redraw_if(applied, now_ms)
    }

    /// Draws the frame for `now_ms`.
    ///
    /// Returns `true` while the selector is still moving, so the host knows
    /// to schedule another tick.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.initialized {
            return false;
        }
        self.draw(now_ms);
        let animating = self.indicator.is_animating(now_ms);
        if !animating {
            self.indicator.settle(now_ms);
        }
        animating
    }

    fn redraw_if(&mut self, applied: bool, now_ms: u64) -> bool {
        if applied && self.initialized {
            self.draw(now_ms);
        }
        applied
    }

    fn draw(&mut self, now_ms: u64) {
        let scene = self.indicator.scene(now_ms);
        self.renderer.render(&scene);
    }
}
