// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Press: a deterministic, `no_std` pressed-state tracker for UI elements.
//!
//! ## Overview
//!
//! This crate answers one question for an interactive element: is the user pressing it right now?
//! It is the fallback a toolkit uses for press feedback when ripples are disabled.
//!
//! A [`PressedStates`](crate::state::PressedStates) owns a boolean flag and a set of optional caller
//! handlers. Its `on_*` methods form the merged handler set a host attaches to the element.
//! Each one calls the caller's handler with the original event, then applies the transition.
//!
//! ## Inputs
//!
//! Feed it touch, pointer, and keyboard events as [`TouchEvent`](crate::types::TouchEvent),
//! [`PointerEvent`](crate::types::PointerEvent), and [`KeyboardEvent`](crate::types::KeyboardEvent).
//! Hosts with a single dispatch loop can wrap them in a [`PressEvent`](crate::types::PressEvent)
//! and call [`PressedStates::handle`](crate::state::PressedStates::handle).
//!
//! ## Activation
//!
//! - Touch start presses; touch move and touch end release.
//! - Pointer down presses for the primary button only; pointer up and pointer leave release.
//! - Key down presses for `Enter`, and for the space bar unless
//!   [`disable_spacebar_click`](crate::handlers::PressedStatesOptions::disable_spacebar_click) is set.
//!   Key up of any key releases.
//!
//! ## Layering
//!
//! The tracker does not schedule renders. Every event method returns an
//! `Option<`[`PressTransition`](crate::types::PressTransition)`>`; when it is `Some`, the host
//! re-renders. Call [`PressedStates::sync`](crate::state::PressedStates::sync) once per render so
//! the tracker holds the latest caller handlers.
//!
//! ## Example
//!
//! ```
//! use core::cell::Cell;
//! use understory_press::handlers::{PressHandlers, PressedStatesOptions};
//! use understory_press::state::PressedStates;
//! use understory_press::types::{Key, KeyboardEvent, PressEvent};
//!
//! let key_downs = Cell::new(0);
//! let counter = &key_downs;
//! let options = move || {
//!     PressedStatesOptions::new()
//!         .disable_spacebar_click(true)
//!         .handlers(PressHandlers::new().on_key_down(move |_| counter.set(counter.get() + 1)))
//! };
//!
//! let mut press = PressedStates::new(options());
//!
//! let space = KeyboardEvent::new(Key::from_dom(" "));
//! assert!(press.handle(PressEvent::KeyDown(&space)).is_none());
//! assert!(!press.pressed());
//!
//! // Next render.
//! press.sync(options());
//! let enter = KeyboardEvent::new(Key::from_dom("Enter"));
//! assert!(press.handle(PressEvent::KeyDown(&enter)).is_some());
//! assert!(press.pressed());
//! assert_eq!(key_downs.get(), 2);
//! ```
//!
//! Transitions are logged with [`tracing`] at `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod handlers;
pub mod state;
pub mod types;
