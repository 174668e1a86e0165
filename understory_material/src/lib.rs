// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Material: static design tokens and vector icons for Material components.
//!
//! ## Overview
//!
//! - [`app_bar`]: the app bar token table (stacking, heights, keylines, theme colors)
//!   and its customizable theme values.
//! - [`icon`]: an [`SvgIcon`](crate::icon::SvgIcon) wrapper that parses a fixed path into a
//!   Kurbo [`BezPath`](kurbo::BezPath) and renders it with pass-through visual props, plus the
//!   `airplay` icon. Requires the `std` feature.
//!
//! This crate holds data, not styling logic: values are exposed exactly as the
//! stylesheet declares them, and resolving CSS variables is left to the host.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod app_bar;
#[cfg(feature = "std")]
pub mod icon;
