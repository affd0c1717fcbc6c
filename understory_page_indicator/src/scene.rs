// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderable description of one indicator frame.

use alloc::vec::Vec;

use kurbo::Circle;

use crate::Color;

/// One page dot as it should be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotVisual {
    /// Page index of this dot.
    pub index: usize,
    /// Filled disk to draw.
    pub circle: Circle,
    /// Fill color.
    pub color: Color,
    /// Opacity applied on top of `color`.
    pub alpha: f32,
}

/// The selector marker as it should be drawn.
///
/// Drawn as a filled disk with a border in the page color, plus a ring in
/// the secondary color stroked along the same circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectorVisual {
    /// Disk to draw, centered on the sampled selector position.
    pub circle: Circle,
    /// Fill color.
    pub fill: Color,
    /// Border color.
    pub border_color: Color,
    /// Border width.
    pub border_width: f64,
    /// Secondary ring color.
    pub ring_color: Color,
    /// Secondary ring stroke width.
    pub ring_width: f64,
}

/// Everything a renderer needs to draw the indicator at one instant.
///
/// Dots are listed in page order and are drawn below the selector.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorScene {
    /// Page dots in page order.
    pub dots: Vec<DotVisual>,
    /// The selector marker.
    pub selector: SelectorVisual,
}
