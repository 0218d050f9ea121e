// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

/// Errors returned when evaluating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have exactly five cards, holds the offending count.
    #[error("Invalid hand size {0}, a hand must have exactly 5 cards")]
    InvalidHandSize(usize),
}
