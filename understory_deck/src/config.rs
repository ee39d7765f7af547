// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time deck options.

use core::time::Duration;

use understory_swipe::types::SwipeConfig;

use crate::error::ConfigError;

/// Options for a [`Deck`](crate::Deck).
///
/// Every field has a default matching the stock widget; adjust with the
/// `with_*` setters and validate with [`DeckConfig::validate`].
///
/// ```
/// use understory_deck::DeckConfig;
///
/// let config = DeckConfig::default()
///     .with_max_visible_stack(3)
///     .with_adaptive_height(true)
///     .with_viewport_width(390.0);
/// assert!(config.validate().is_ok());
/// assert!(DeckConfig::default().with_max_visible_stack(0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeckConfig {
    /// Index of the first active card; earlier cards start dismissed.
    pub init_index: usize,
    /// Cards more than this many positions past the current one are hidden.
    pub max_visible_stack: usize,
    /// Vertical offset per stack depth.
    pub shift_y: f64,
    /// Depth offset per stack depth (negative moves away from the viewer).
    pub translate_z: f64,
    /// Minimum drag distance for a release to dismiss a card.
    pub threshold: f64,
    /// Displacement below which a press is treated as a tap.
    pub tap_slop: f64,
    /// Track card content heights and report the deck height.
    pub adaptive_height: bool,
    /// Trailing debounce window for height recomputation after a resize.
    pub resize_debounce: Duration,
    /// Width of the host viewport, used to park dismissed cards offscreen.
    pub viewport_width: f64,
    /// Extra distance past the viewport edge for parked cards.
    pub offscreen_margin: f64,
    /// Rotation, in degrees, of a parked card.
    pub dismiss_rotation: f64,
}

impl DeckConfig {
    /// Default `max_visible_stack`.
    pub const DEFAULT_MAX_VISIBLE_STACK: usize = 4;
    /// Default `shift_y`.
    pub const DEFAULT_SHIFT_Y: f64 = 13.0;
    /// Default `translate_z`.
    pub const DEFAULT_TRANSLATE_Z: f64 = -30.0;
    /// Default `resize_debounce`.
    pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(1000);
    /// Default `offscreen_margin`.
    pub const DEFAULT_OFFSCREEN_MARGIN: f64 = 200.0;
    /// Default `dismiss_rotation`.
    pub const DEFAULT_DISMISS_ROTATION: f64 = 70.0;

    /// Set `init_index`.
    #[must_use]
    pub fn with_init_index(mut self, init_index: usize) -> Self {
        self.init_index = init_index;
        self
    }

    /// Set `max_visible_stack`.
    #[must_use]
    pub fn with_max_visible_stack(mut self, max_visible_stack: usize) -> Self {
        self.max_visible_stack = max_visible_stack;
        self
    }

    /// Set the per-depth offsets.
    #[must_use]
    pub fn with_offsets(mut self, shift_y: f64, translate_z: f64) -> Self {
        self.shift_y = shift_y;
        self.translate_z = translate_z;
        self
    }

    /// Set the commit `threshold`.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set `tap_slop`.
    #[must_use]
    pub fn with_tap_slop(mut self, tap_slop: f64) -> Self {
        self.tap_slop = tap_slop;
        self
    }

    /// Enable or disable adaptive height.
    #[must_use]
    pub fn with_adaptive_height(mut self, adaptive_height: bool) -> Self {
        self.adaptive_height = adaptive_height;
        self
    }

    /// Set `resize_debounce`.
    #[must_use]
    pub fn with_resize_debounce(mut self, resize_debounce: Duration) -> Self {
        self.resize_debounce = resize_debounce;
        self
    }

    /// Set `viewport_width`.
    #[must_use]
    pub fn with_viewport_width(mut self, viewport_width: f64) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    /// Thresholds for the gesture interpreter.
    pub fn swipe(&self) -> SwipeConfig {
        SwipeConfig {
            threshold: self.threshold,
            tap_slop: self.tap_slop,
        }
    }

    /// Horizontal distance from the origin to a parked card.
    pub fn park_distance(&self) -> f64 {
        self.viewport_width + self.offscreen_margin
    }

    /// Check that the options can produce a sane layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_visible_stack == 0 {
            return Err(ConfigError::ZeroVisibleStack);
        }
        let floats = [
            ("shift_y", self.shift_y),
            ("translate_z", self.translate_z),
            ("threshold", self.threshold),
            ("tap_slop", self.tap_slop),
            ("viewport_width", self.viewport_width),
            ("offscreen_margin", self.offscreen_margin),
            ("dismiss_rotation", self.dismiss_rotation),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }
        if self.threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold);
        }
        if self.tap_slop < 0.0 {
            return Err(ConfigError::NegativeTapSlop);
        }
        if self.viewport_width < 0.0 {
            return Err(ConfigError::NegativeViewport {
                field: "viewport_width",
            });
        }
        if self.offscreen_margin < 0.0 {
            return Err(ConfigError::NegativeViewport {
                field: "offscreen_margin",
            });
        }
        Ok(())
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            init_index: 0,
            max_visible_stack: Self::DEFAULT_MAX_VISIBLE_STACK,
            shift_y: Self::DEFAULT_SHIFT_Y,
            translate_z: Self::DEFAULT_TRANSLATE_Z,
            threshold: SwipeConfig::DEFAULT_THRESHOLD,
            tap_slop: SwipeConfig::DEFAULT_TAP_SLOP,
            adaptive_height: false,
            resize_debounce: Self::DEFAULT_RESIZE_DEBOUNCE,
            viewport_width: 0.0,
            offscreen_margin: Self::DEFAULT_OFFSCREEN_MARGIN,
            dismiss_rotation: Self::DEFAULT_DISMISS_ROTATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_widget() {
        let c = DeckConfig::default();
        assert_eq!(c.shift_y, 13.0);
        assert_eq!(c.translate_z, -30.0);
        assert_eq!(c.threshold, 70.0);
        assert_eq!(c.resize_debounce, Duration::from_millis(1000));
        assert_eq!(c.park_distance(), 200.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let base = DeckConfig::default();
        assert_eq!(
            base.clone().with_max_visible_stack(0).validate(),
            Err(ConfigError::ZeroVisibleStack)
        );
        assert_eq!(
            base.clone().with_offsets(f64::NAN, -30.0).validate(),
            Err(ConfigError::NonFinite { field: "shift_y" })
        );
        assert_eq!(
            base.clone().with_threshold(-1.0).validate(),
            Err(ConfigError::NegativeThreshold)
        );
        assert_eq!(
            base.clone().with_tap_slop(-0.5).validate(),
            Err(ConfigError::NegativeTapSlop)
        );
        assert_eq!(
            base.with_viewport_width(-10.0).validate(),
            Err(ConfigError::NegativeViewport {
                field: "viewport_width"
            })
        );
    }

    #[test]
    fn swipe_config_mirrors_thresholds() {
        let c = DeckConfig::default().with_threshold(40.0).with_tap_slop(1.0);
        let s = c.swipe();
        assert_eq!(s.threshold, 40.0);
        assert_eq!(s.tap_slop, 1.0);
    }
}
