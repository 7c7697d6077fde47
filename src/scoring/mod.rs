// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Every field has a fixed weight per matching term. Titles weigh the most,
//! and a title that contains the whole query earns a flat phrase bonus on top.
//! Section text is the long tail, so its contribution is capped.

mod core;
pub mod ranking;

pub use core::*;
