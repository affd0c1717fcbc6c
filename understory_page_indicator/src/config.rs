// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable layout, styling, and motion configuration.

use crate::Color;

/// Errors reported when constructing an indicator from invalid input.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An indicator needs at least one page.
    #[error("page indicator needs at least one page")]
    NoPages,
    /// A diameter was zero, negative, or not finite.
    #[error("{field} must be finite and positive, got {value}")]
    InvalidSize {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A stroke width was negative or not finite.
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidStrokeWidth {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The dimmed opacity was outside `[0, 1]`.
    #[error("dimmed_alpha must lie in [0, 1], got {0}")]
    InvalidDimmedAlpha(f32),
    /// The spring damping ratio was zero, negative, or not finite.
    #[error("spring damping must be finite and positive, got {0}")]
    InvalidDamping(f64),
    /// The initial spring velocity was not finite.
    #[error("spring initial velocity must be finite, got {0}")]
    InvalidVelocity(f64),
}

/// Selector motion tuning.
///
/// The defaults give a short, slightly bouncy move: 200ms with a damping
/// ratio of 0.7 and a matching initial velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// Duration of a selector move in milliseconds. Zero moves instantly.
    pub duration_ms: u64,
    /// Spring damping ratio; values below 1 overshoot before settling.
    pub damping: f64,
    /// Initial velocity, in units of the total travel distance per duration.
    pub initial_velocity: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 200,
            damping: 0.7,
            initial_velocity: 0.7,
        }
    }
}

/// Configuration shared by every page of an indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndicatorConfig {
    /// Diameter of the inactive dots.
    pub unselected_size: f64,
    /// Diameter of the selector marker.
    pub selected_size: f64,
    /// Stroke color of the ring drawn inside the selector.
    pub secondary_color: Color,
    /// Stroke width of the secondary ring.
    pub ring_width: f64,
    /// Width of the selector border, which takes the current page color.
    pub border_width: f64,
    /// Dot color used when no per-page colors are supplied.
    pub default_color: Color,
    /// Whether pages after the current one are drawn dimmed.
    pub dim_future_pages: bool,
    /// Opacity of dimmed dots.
    pub dimmed_alpha: f32,
    /// Selector motion tuning.
    pub motion: MotionConfig,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            unselected_size: 14.0,
            selected_size: 22.0,
            secondary_color: Color::WHITE.with_alpha(0.8),
            ring_width: 10.0,
            border_width: 2.0,
            default_color: Color::WHITE,
            dim_future_pages: true,
            dimmed_alpha: 0.25,
            motion: MotionConfig::default(),
        }
    }
}

impl IndicatorConfig {
    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size("unselected_size", self.unselected_size)?;
        check_size("selected_size", self.selected_size)?;
        check_stroke("ring_width", self.ring_width)?;
        check_stroke("border_width", self.border_width)?;
        if !(0.0..=1.0).contains(&self.dimmed_alpha) {
            return Err(ConfigError::InvalidDimmedAlpha(self.dimmed_alpha));
        }
        let motion = &self.motion;
        if !motion.damping.is_finite() || motion.damping <= 0.0 {
            return Err(ConfigError::InvalidDamping(motion.damping));
        }
        if !motion.initial_velocity.is_finite() {
            return Err(ConfigError::InvalidVelocity(motion.initial_velocity));
        }
        Ok(())
    }
}

fn check_size(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize { field, value })
    }
}

fn check_stroke(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidStrokeWidth { field, value })
    }
}
