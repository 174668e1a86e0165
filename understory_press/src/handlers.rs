// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied handlers and tracker options.
//!
//! A [`PressHandlers`] set holds at most one handler per [`EventKind`].
//! Any subset may be omitted. The tracker calls the matching handler with
//! the original event before applying its own transition, and never skips it.

use alloc::boxed::Box;

use crate::types::{EventKind, KeyboardEvent, PointerEvent, TouchEvent};

/// A boxed caller handler for events of type `E`.
pub type Handler<'a, E> = Box<dyn FnMut(&E) + 'a>;

/// Optional caller handlers, one slot per [`EventKind`].
///
/// Built with chained setters:
///
/// ```
/// use understory_press::handlers::PressHandlers;
/// use understory_press::types::EventKind;
///
/// let handlers = PressHandlers::new()
///     .on_pointer_down(|e| assert!(e.button.is_primary()))
///     .on_key_up(|_| {});
/// assert!(handlers.contains(EventKind::PointerDown));
/// assert!(!handlers.contains(EventKind::TouchStart));
/// ```
#[derive(Default)]
pub struct PressHandlers<'a> {
    touch_start: Option<Handler<'a, TouchEvent>>,
    touch_move: Option<Handler<'a, TouchEvent>>,
    touch_end: Option<Handler<'a, TouchEvent>>,
    pointer_down: Option<Handler<'a, PointerEvent>>,
    pointer_up: Option<Handler<'a, PointerEvent>>,
    pointer_leave: Option<Handler<'a, PointerEvent>>,
    key_down: Option<Handler<'a, KeyboardEvent>>,
    key_up: Option<Handler<'a, KeyboardEvent>>,
}

impl core::fmt::Debug for PressHandlers<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut list = f.debug_list();
        for kind in EventKind::ALL {
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

impl<'a> PressHandlers<'a> {
    /// Create an empty handler set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the touch-start handler.
    pub fn on_touch_start(mut self, f: impl FnMut(&TouchEvent) + 'a) -> Self {
        self.touch_start = Some(Box::new(f));
        self
    }

    /// Set the touch-move handler.
    pub fn on_touch_move(mut self, f: impl FnMut(&TouchEvent) + 'a) -> Self {
        self.touch_move = Some(Box::new(f));
        self
    }

    /// Set the touch-end handler.
    pub fn on_touch_end(mut self, f: impl FnMut(&TouchEvent) + 'a) -> Self {
        self.touch_end = Some(Box::new(f));
        self
    }

    /// Set the pointer-down handler.
    pub fn on_pointer_down(mut self, f: impl FnMut(&PointerEvent) + 'a) -> Self {
        self.pointer_down = Some(Box::new(f));
        self
    }

    /// Set the pointer-up handler.
    pub fn on_pointer_up(mut self, f: impl FnMut(&PointerEvent) + 'a) -> Self {
        self.pointer_up = Some(Box::new(f));
        self
    }

    /// Set the pointer-leave handler.
    pub fn on_pointer_leave(mut self, f: impl FnMut(&PointerEvent) + 'a) -> Self {
        self.pointer_leave = Some(Box::new(f));
        self
    }

    /// Set the key-down handler.
    pub fn on_key_down(mut self, f: impl FnMut(&KeyboardEvent) + 'a) -> Self {
        self.key_down = Some(Box::new(f));
        self
    }

    /// Set the key-up handler.
    pub fn on_key_up(mut self, f: impl FnMut(&KeyboardEvent) + 'a) -> Self {
        self.key_up = Some(Box::new(f));
        self
    }

    /// Whether a handler is set for `kind`.
    pub fn contains(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::TouchStart => self.touch_start.is_some(),
            EventKind::TouchMove => self.touch_move.is_some(),
            EventKind::TouchEnd => self.touch_end.is_some(),
            EventKind::PointerDown => self.pointer_down.is_some(),
            EventKind::PointerUp => self.pointer_up.is_some(),
            EventKind::PointerLeave => self.pointer_leave.is_some(),
            EventKind::KeyDown => self.key_down.is_some(),
            EventKind::KeyUp => self.key_up.is_some(),
        }
    }

    /// Whether no handler is set.
    pub fn is_empty(&self) -> bool {
        !EventKind::ALL.into_iter().any(|kind| self.contains(kind))
    }

    pub(crate) fn touch(&mut self, kind: EventKind, event: &TouchEvent) {
        let slot = match kind {
            EventKind::TouchStart => &mut self.touch_start,
            EventKind::TouchMove => &mut self.touch_move,
            EventKind::TouchEnd => &mut self.touch_end,
            _ => return,
        };
        invoke(slot, event);
    }

    pub(crate) fn pointer(&mut self, kind: EventKind, event: &PointerEvent) {
        let slot = match kind {
            EventKind::PointerDown => &mut self.pointer_down,
            EventKind::PointerUp => &mut self.pointer_up,
            EventKind::PointerLeave => &mut self.pointer_leave,
            _ => return,
        };
        invoke(slot, event);
    }

    pub(crate) fn keyboard(&mut self, kind: EventKind, event: &KeyboardEvent) {
        let slot = match kind {
            EventKind::KeyDown => &mut self.key_down,
            EventKind::KeyUp => &mut self.key_up,
            _ => return,
        };
        invoke(slot, event);
    }
}

fn invoke<E>(slot: &mut Option<Handler<'_, E>>, event: &E) {
    if let Some(f) = slot {
        f(event);
    }
}

/// Options for [`PressedStates`](crate::state::PressedStates).
///
/// Pass to [`PressedStates::new`](crate::state::PressedStates::new) on first
/// render and to [`PressedStates::sync`](crate::state::PressedStates::sync) on
/// every render after that.
#[derive(Debug, Default)]
pub struct PressedStatesOptions<'a> {
    /// Caller handlers merged into the tracker's own.
    pub handlers: PressHandlers<'a>,
    /// When true, only `Enter` starts a keyboard press; the space bar is ignored.
    pub disable_spacebar_click: bool,
}

impl<'a> PressedStatesOptions<'a> {
    /// Default options: no caller handlers, space bar enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caller handlers.
    pub fn handlers(mut self, handlers: PressHandlers<'a>) -> Self {
        self.handlers = handlers;
        self
    }

    /// Set whether the space bar is excluded from keyboard activation.
    pub fn disable_spacebar_click(mut self, disable: bool) -> Self {
        self.disable_spacebar_click = disable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::Point;

    #[test]
    fn empty_set_has_no_slots() {
        let h = PressHandlers::new();
        assert!(h.is_empty());
        for kind in EventKind::ALL {
            assert!(!h.contains(kind));
        }
        assert_eq!(format!("{h:?}"), "[]");
    }

    #[test]
    fn debug_lists_populated_slots() {
        let h = PressHandlers::new()
            .on_touch_end(|_| {})
            .on_key_down(|_| {});
        assert_eq!(format!("{h:?}"), "[TouchEnd, KeyDown]");
        assert!(!h.is_empty());
    }

    // Routing only reaches the slot named by the kind.
    #[test]
    fn touch_routes_to_matching_slot() {
        let starts = Rc::new(Cell::new(0));
        let moves = Rc::new(Cell::new(0));
        let (s, m) = (starts.clone(), moves.clone());
        let mut h = PressHandlers::new()
            .on_touch_start(move |_| s.set(s.get() + 1))
            .on_touch_move(move |_| m.set(m.get() + 1));
        let e = TouchEvent::new(1, Point::ORIGIN);
        h.touch(EventKind::TouchStart, &e);
        h.touch(EventKind::TouchStart, &e);
        h.touch(EventKind::TouchEnd, &e);
        // Mismatched kinds are ignored.
        h.touch(EventKind::KeyDown, &e);
        assert_eq!(starts.get(), 2);
        assert_eq!(moves.get(), 0);
    }

    #[test]
    fn options_builder() {
        let o = PressedStatesOptions::new().disable_spacebar_click(true);
        assert!(o.disable_spacebar_click);
        assert!(o.handlers.is_empty());
        let o = o.handlers(PressHandlers::new().on_pointer_up(|_| {}));
        assert!(o.handlers.contains(EventKind::PointerUp));
    }
}
