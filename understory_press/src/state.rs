// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressed-state tracker: a two-state machine driven by touch, pointer, and keyboard input.
//!
//! ## Usage
//!
//! 1) Create a [`PressedStates`] when the component is first built.
//! 2) On every render, call [`PressedStates::sync`] with the current options and read
//!    [`PressedStates::pressed`] for styling.
//! 3) Forward the element's events to the `on_*` methods (or [`PressedStates::handle`]).
//!    When one returns a [`PressTransition`], schedule a re-render.
//!
//! ## Transitions
//!
//! | Event | Precondition | Result |
//! |---|---|---|
//! | touch start | idle | pressed |
//! | touch move, touch end | pressed | idle |
//! | pointer down, primary button only | idle | pressed |
//! | pointer up, pointer leave | pressed | idle |
//! | key down, `Enter` or space unless disabled | idle | pressed |
//! | key up | pressed | idle |
//!
//! ## Minimal example
//!
//! ```
//! use understory_press::handlers::PressedStatesOptions;
//! use understory_press::state::PressedStates;
//! use understory_press::types::{PointerButton, PointerEvent, PressTransition};
//!
//! let mut press = PressedStates::new(PressedStatesOptions::new());
//! let down = PointerEvent::new(PointerButton::Primary);
//! assert_eq!(press.on_pointer_down(&down), Some(PressTransition::Pressed));
//! assert!(press.pressed());
//! assert_eq!(press.on_pointer_up(&down), Some(PressTransition::Released));
//! assert!(!press.pressed());
//! ```

use crate::handlers::{PressHandlers, PressedStatesOptions};
use crate::types::{
    EventKind, Key, KeyboardEvent, PointerEvent, PressEvent, PressTransition, TouchEvent,
};

/// Tracks whether an element is currently pressed.
///
/// The `on_*` methods are the merged handler set: each calls the caller's
/// handler for that slot (if any) with the original event, then applies the
/// internal transition. Guards always read the tracker's own flag, so several
/// events delivered between two renders see each other's effects.
///
/// The identity of the handler set is the tracker itself; it does not change
/// across renders. Only the captured caller handlers are replaced, by
/// [`PressedStates::sync`].
pub struct PressedStates<'a> {
    pressed: bool,
    handlers: PressHandlers<'a>,
    disable_spacebar_click: bool,
}

impl core::fmt::Debug for PressedStates<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PressedStates")
            .field("pressed", &self.pressed)
            .field("handlers", &self.handlers)
            .field("disable_spacebar_click", &self.disable_spacebar_click)
            .finish()
    }
}

impl Default for PressedStates<'_> {
    fn default() -> Self {
        Self::new(PressedStatesOptions::default())
    }
}

impl<'a> PressedStates<'a> {
    /// Create an idle tracker with the given options.
    pub fn new(options: PressedStatesOptions<'a>) -> Self {
        Self {
            pressed: false,
            handlers: options.handlers,
            disable_spacebar_click: options.disable_spacebar_click,
        }
    }

    /// Refresh the captured options; call once per render.
    ///
    /// Replaces the caller handlers and the space bar setting. The pressed
    /// flag is left untouched.
    pub fn sync(&mut self, options: PressedStatesOptions<'a>) {
        self.handlers = options.handlers;
        self.disable_spacebar_click = options.disable_spacebar_click;
    }

    /// Whether the element is currently pressed.
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Whether `key` starts a keyboard press under the current options.
    pub fn is_activation_key(&self, key: &Key) -> bool {
        match key {
            Key::Enter => true,
            Key::Space => !self.disable_spacebar_click,
            Key::Other(_) => false,
        }
    }

    /// Route a tagged event to the matching `on_*` method.
    #[must_use]
    pub fn handle(&mut self, event: PressEvent<'_>) -> Option<PressTransition> {
        match event {
            PressEvent::TouchStart(e) => self.on_touch_start(e),
            PressEvent::TouchMove(e) => self.on_touch_move(e),
            PressEvent::TouchEnd(e) => self.on_touch_end(e),
            PressEvent::PointerDown(e) => self.on_pointer_down(e),
            PressEvent::PointerUp(e) => self.on_pointer_up(e),
            PressEvent::PointerLeave(e) => self.on_pointer_leave(e),
            PressEvent::KeyDown(e) => self.on_key_down(e),
            PressEvent::KeyUp(e) => self.on_key_up(e),
        }
    }

    /// Touch start: press.
    #[must_use]
    pub fn on_touch_start(&mut self, event: &TouchEvent) -> Option<PressTransition> {
        self.handlers.touch(EventKind::TouchStart, event);
        self.press(EventKind::TouchStart)
    }

    /// Touch move: release.
    ///
    /// There is no portable touch-leave event, so any movement cancels the press.
    #[must_use]
    pub fn on_touch_move(&mut self, event: &TouchEvent) -> Option<PressTransition> {
        self.handlers.touch(EventKind::TouchMove, event);
        self.release(EventKind::TouchMove)
    }

    /// Touch end: release.
    #[must_use]
    pub fn on_touch_end(&mut self, event: &TouchEvent) -> Option<PressTransition> {
        self.handlers.touch(EventKind::TouchEnd, event);
        self.release(EventKind::TouchEnd)
    }

    /// Pointer down: press, for the primary button only.
    #[must_use]
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> Option<PressTransition> {
        self.handlers.pointer(EventKind::PointerDown, event);
        if !event.button.is_primary() {
            return None;
        }
        self.press(EventKind::PointerDown)
    }

    /// Pointer up: release.
    #[must_use]
    pub fn on_pointer_up(&mut self, event: &PointerEvent) -> Option<PressTransition> {
        self.handlers.pointer(EventKind::PointerUp, event);
        self.release(EventKind::PointerUp)
    }

    /// Pointer leave: release.
    #[must_use]
    pub fn on_pointer_leave(&mut self, event: &PointerEvent) -> Option<PressTransition> {
        self.handlers.pointer(EventKind::PointerLeave, event);
        self.release(EventKind::PointerLeave)
    }

    /// Key down: press, for activation keys only.
    #[must_use]
    pub fn on_key_down(&mut self, event: &KeyboardEvent) -> Option<PressTransition> {
        self.handlers.keyboard(EventKind::KeyDown, event);
        if !self.is_activation_key(&event.key) {
            return None;
        }
        self.press(EventKind::KeyDown)
    }

    /// Key up: release, for any key.
    #[must_use]
    pub fn on_key_up(&mut self, event: &KeyboardEvent) -> Option<PressTransition> {
        self.handlers.keyboard(EventKind::KeyUp, event);
        self.release(EventKind::KeyUp)
    }

    fn press(&mut self, kind: EventKind) -> Option<PressTransition> {
        if self.pressed {
            return None;
        }
        self.pressed = true;
        tracing::trace!(event = kind.name(), "pressed");
        Some(PressTransition::Pressed)
    }

    fn release(&mut self, kind: EventKind) -> Option<PressTransition> {
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        tracing::trace!(event = kind.name(), "released");
        Some(PressTransition::Released)
    }
}
