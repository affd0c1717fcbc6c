// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Page Indicator: the row of dots under a pager or carousel.
//!
//! A page indicator shows `N` equally sized dots in a horizontal row, tracks
//! the current page in `[0, N)`, and moves a larger *selector* disk onto the
//! current dot with a short spring animation. Dots after the current page can
//! be dimmed so the row also reads as progress.
//!
//! The crate splits the widget into small, renderer-agnostic pieces:
//!
//! - [`IndicatorConfig`]: immutable sizes, colors, dimming, and [`MotionConfig`].
//! - [`IndicatorSet`]: the fixed list of pages and their dot colors.
//! - [`DotLayout`]: where each dot sits for a given bounds rectangle.
//! - [`Command`] and [`transition`]: a pure `(state, command) -> state` step
//!   over [`IndicatorState`]. Out-of-range page requests are ignored, never
//!   reported as errors.
//! - [`SpringCurve`] and [`SelectorAnimation`]: selector motion sampled
//!   against a host clock in milliseconds. A new request while the selector
//!   is moving restarts the move from wherever the selector is drawn.
//! - [`PageIndicator`]: a controller bundling the pieces above, producing an
//!   [`IndicatorScene`] for any clock reading.
//! - [`IndicatorRenderer`] and [`Presenter`]: the drawing seam. The presenter
//!   performs one-time setup on first appearance and forwards frames to the
//!   renderer.
//!
//! This crate deliberately does **not** know about any widget toolkit.
//! Hosts own the drawing surface, the clock, and input dispatch.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_page_indicator::{Color, IndicatorConfig, PageIndicator};
//!
//! let red = Color::rgb(1.0, 0.0, 0.0);
//! let green = Color::rgb(0.0, 1.0, 0.0);
//! let blue = Color::rgb(0.0, 0.0, 1.0);
//!
//! let mut indicator =
//!     PageIndicator::new(3, 0, Some(vec![red, green, blue]), IndicatorConfig::default())
//!         .unwrap();
//! indicator.set_bounds(Rect::new(0.0, 0.0, 120.0, 24.0), 0);
//!
//! indicator.next_page(0);
//! assert_eq!(indicator.current_page(), 1);
//! assert_eq!(indicator.selector_color(), green);
//! // Later pages are dimmed until they are reached.
//! assert_eq!(indicator.dot_alpha(2), 0.25);
//!
//! // Going back from the first page wraps to the last.
//! indicator.go_to_page(0, 0);
//! indicator.previous_page(0);
//! assert_eq!(indicator.current_page(), 2);
//!
//! // Requests past the end are ignored.
//! assert!(!indicator.go_to_page(7, 0));
//!
//! // Once the move has settled the selector sits on the dot center.
//! let scene = indicator.scene(1_000);
//! assert_eq!(scene.selector.circle.center, Point::new(113.0, 17.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float math through `kurbo`'s `libm` support.
//! - `serde`: `Serialize`/`Deserialize` for [`Color`], [`IndicatorConfig`],
//!   and [`MotionConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod config;
mod indicator;
mod layout;
mod motion;
mod render;
mod scene;
mod state;

pub use color::Color;
pub use config::{ConfigError, IndicatorConfig, MotionConfig};
pub use indicator::PageIndicator;
pub use layout::DotLayout;
pub use motion::{SelectorAnimation, SpringCurve};
pub use render::{IndicatorRenderer, Presenter};
pub use scene::{DotVisual, IndicatorScene, SelectorVisual};
pub use state::{Command, IndicatorSet, IndicatorState, SelectorState, transition};
