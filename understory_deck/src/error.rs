// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use thiserror::Error;

/// A [`DeckConfig`](crate::DeckConfig) that cannot produce a usable layout.
///
/// Returned by [`DeckConfig::validate`](crate::DeckConfig::validate) and
/// [`Deck::new`](crate::Deck::new). Operations on a constructed deck never fail;
/// invalid runtime input is ignored instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// `max_visible_stack` must be at least one.
    #[error("max_visible_stack must be at least 1")]
    ZeroVisibleStack,
    /// A numeric option is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Name of the offending option.
        field: &'static str,
    },
    /// The commit threshold is below zero.
    #[error("threshold must not be negative")]
    NegativeThreshold,
    /// The tap filter distance is below zero.
    #[error("tap_slop must not be negative")]
    NegativeTapSlop,
    /// The viewport width or offscreen margin is below zero.
    #[error("{field} must not be negative")]
    NegativeViewport {
        /// Name of the offending option.
        field: &'static str,
    },
}
