// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for press tracking: event payloads, buttons, keys, and transitions.
//!
//! ## Overview
//!
//! These types describe the input a host delivers to
//! [`PressedStates`](crate::state::PressedStates) and the transitions it reports back.
//! Payloads are passed to caller handlers unchanged, so they carry the fields a
//! toolkit typically needs (position, held buttons, modifiers) even though the
//! tracker itself only inspects `button` and `key`.

use alloc::string::String;

use kurbo::Point;

/// The handler slots a press tracker merges.
///
/// Each slot corresponds to one method on
/// [`PressedStates`](crate::state::PressedStates) and one optional caller handler in
/// [`PressHandlers`](crate::handlers::PressHandlers).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// A touch point was placed on the element.
    TouchStart,
    /// A touch point moved.
    TouchMove,
    /// A touch point was lifted.
    TouchEnd,
    /// A pointer button was pressed over the element.
    PointerDown,
    /// A pointer button was released.
    PointerUp,
    /// The pointer left the element.
    PointerLeave,
    /// A key was pressed while the element had focus.
    KeyDown,
    /// A key was released while the element had focus.
    KeyUp,
}

impl EventKind {
    /// All handler slots, in dispatch-table order.
    pub const ALL: [Self; 8] = [
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::PointerDown,
        Self::PointerUp,
        Self::PointerLeave,
        Self::KeyDown,
        Self::KeyUp,
    ];

    /// The DOM event type name for this slot (e.g. `"pointerdown"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::PointerDown => "pointerdown",
            Self::PointerUp => "pointerup",
            Self::PointerLeave => "pointerleave",
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
        }
    }
}

/// The button whose state change produced a pointer event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left mouse button or a pen tip.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the wheel or middle button.
    Auxiliary,
    /// Browser back button.
    Back,
    /// Browser forward button.
    Forward,
    /// Any other DOM button index.
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` index to a button.
    ///
    /// `0` is the primary button; note that the DOM orders auxiliary (`1`)
    /// before secondary (`2`).
    pub const fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            3 => Self::Back,
            4 => Self::Forward,
            other => Self::Other(other),
        }
    }

    /// Whether this is the primary button.
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

bitflags::bitflags! {
    /// Set of pointer buttons held while an event was dispatched.
    ///
    /// Bit positions match the DOM `MouseEvent.buttons` mask.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary button held.
        const PRIMARY   = 0b0000_0001;
        /// Secondary button held.
        const SECONDARY = 0b0000_0010;
        /// Auxiliary button held.
        const AUXILIARY = 0b0000_0100;
        /// Back button held.
        const BACK      = 0b0000_1000;
        /// Forward button held.
        const FORWARD   = 0b0001_0000;
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers active while an event was dispatched.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT   = 0b0000_0001;
        /// Control key.
        const CONTROL = 0b0000_0010;
        /// Alt / Option key.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows key.
        const META    = 0b0000_1000;
    }
}

/// Logical key value of a keyboard event.
///
/// Only the keys that can activate an element get their own variant.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// The `Enter` key.
    Enter,
    /// The space bar (DOM key value `" "`).
    Space,
    /// Any other key, carrying its DOM key value.
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a key.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " => Self::Space,
            other => Self::Other(other.into()),
        }
    }
}

/// A pointer (mouse, pen) event payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Button whose state changed.
    pub button: PointerButton,
    /// Buttons held at dispatch time.
    pub buttons: PointerButtons,
    /// Position in the element's local coordinates.
    pub position: Point,
    /// Active keyboard modifiers.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A pointer event for `button` at the origin with no modifiers.
    pub fn new(button: PointerButton) -> Self {
        let buttons = match button {
            PointerButton::Primary => PointerButtons::PRIMARY,
            PointerButton::Secondary => PointerButtons::SECONDARY,
            PointerButton::Auxiliary => PointerButtons::AUXILIARY,
            PointerButton::Back => PointerButtons::BACK,
            PointerButton::Forward => PointerButtons::FORWARD,
            PointerButton::Other(_) => PointerButtons::empty(),
        };
        Self {
            button,
            buttons,
            position: Point::ORIGIN,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the event position.
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }
}

/// A touch event payload for a single touch point.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Platform identifier of the touch point.
    pub id: u64,
    /// Position in the element's local coordinates.
    pub position: Point,
}

impl TouchEvent {
    /// A touch event for touch point `id` at `position`.
    pub fn new(id: u64, position: Point) -> Self {
        Self { id, position }
    }
}

/// A keyboard event payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// Logical key.
    pub key: Key,
    /// Whether this is an auto-repeat of a held key.
    pub repeat: bool,
    /// Active keyboard modifiers.
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// A non-repeating keyboard event for `key` with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            repeat: false,
            modifiers: Modifiers::empty(),
        }
    }
}

/// A borrowed event tagged with its handler slot.
///
/// Hosts with a single dispatch loop build one of these and pass it to
/// [`PressedStates::handle`](crate::state::PressedStates::handle).
#[derive(Copy, Clone, Debug)]
pub enum PressEvent<'e> {
    /// See [`EventKind::TouchStart`].
    TouchStart(&'e TouchEvent),
    /// See [`EventKind::TouchMove`].
    TouchMove(&'e TouchEvent),
    /// See [`EventKind::TouchEnd`].
    TouchEnd(&'e TouchEvent),
    /// See [`EventKind::PointerDown`].
    PointerDown(&'e PointerEvent),
    /// See [`EventKind::PointerUp`].
    PointerUp(&'e PointerEvent),
    /// See [`EventKind::PointerLeave`].
    PointerLeave(&'e PointerEvent),
    /// See [`EventKind::KeyDown`].
    KeyDown(&'e KeyboardEvent),
    /// See [`EventKind::KeyUp`].
    KeyUp(&'e KeyboardEvent),
}

impl PressEvent<'_> {
    /// The handler slot this event is delivered to.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::TouchStart(_) => EventKind::TouchStart,
            Self::TouchMove(_) => EventKind::TouchMove,
            Self::TouchEnd(_) => EventKind::TouchEnd,
            Self::PointerDown(_) => EventKind::PointerDown,
            Self::PointerUp(_) => EventKind::PointerUp,
            Self::PointerLeave(_) => EventKind::PointerLeave,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
        }
    }
}

/// A change of the pressed flag.
///
/// Returned by the event methods of [`PressedStates`](crate::state::PressedStates)
/// when the flag flips; the host should schedule a re-render.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PressTransition {
    /// `idle` → `pressed`.
    Pressed,
    /// `pressed` → `idle`.
    Released,
}

impl PressTransition {
    /// The pressed flag after this transition.
    pub const fn pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_button_dom_mapping() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(1), PointerButton::Auxiliary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Forward);
        assert_eq!(PointerButton::from_dom(-1), PointerButton::Other(-1));
        assert!(PointerButton::from_dom(0).is_primary());
        assert!(!PointerButton::from_dom(2).is_primary());
    }

    #[test]
    fn key_dom_mapping() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom(" "), Key::Space);
        // The DOM spells the space bar as a literal space, not "Space".
        assert_eq!(Key::from_dom("Space"), Key::Other("Space".into()));
        assert_eq!(Key::from_dom("a"), Key::Other("a".into()));
    }

    #[test]
    fn pointer_event_sets_held_button() {
        let e = PointerEvent::new(PointerButton::Secondary);
        assert_eq!(e.buttons, PointerButtons::SECONDARY);
        assert_eq!(e.position, Point::ORIGIN);
        let e = PointerEvent::new(PointerButton::Other(7)).at(Point::new(3.0, 4.0));
        assert!(e.buttons.is_empty());
        assert_eq!(e.position, Point::new(3.0, 4.0));
    }

    #[test]
    fn press_event_kind_matches_variant() {
        let t = TouchEvent::new(1, Point::ORIGIN);
        let k = KeyboardEvent::new(Key::Enter);
        assert_eq!(PressEvent::TouchMove(&t).kind(), EventKind::TouchMove);
        assert_eq!(PressEvent::KeyUp(&k).kind(), EventKind::KeyUp);
        assert_eq!(EventKind::PointerLeave.name(), "pointerleave");
        assert_eq!(EventKind::ALL.len(), 8);
    }
}
