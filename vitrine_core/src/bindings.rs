// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event registration table.
//!
//! [`BINDINGS`] lists every `(target, event)` pair the page listens to and
//! the [`Action`] it triggers. Backends walk the table once at mount and
//! attach one listener per entry (per element, for targets that match several
//! elements). The table is ordered the way listeners are attached.

use crate::hover::HoverPhase;

/// An element (or group of elements) that receives listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Every control that opens the modal.
    OpenModalButtons,
    /// The modal's close button.
    CloseModalButton,
    /// The backdrop behind the modal.
    Overlay,
    /// The "scroll to features" button.
    ScrollToButton,
    /// The navigation links container.
    NavLinks,
    /// The tab button container.
    TabContainer,
    /// The navigation bar.
    Nav,
    /// The carousel's "next" button.
    SliderRight,
    /// The carousel's "previous" button.
    SliderLeft,
    /// The dot indicator container.
    DotContainer,
    /// The document itself, for global keyboard handling.
    Document,
}

/// A DOM event type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `click`
    Click,
    /// `mouseover`
    MouseOver,
    /// `mouseout`
    MouseOut,
    /// `keydown`
    KeyDown,
}

impl EventKind {
    /// The DOM event type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseOver => "mouseover",
            Self::MouseOut => "mouseout",
            Self::KeyDown => "keydown",
        }
    }
}

/// What a bound event does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Show the modal; the event's default action is suppressed.
    OpenModal,
    /// Hide the modal.
    CloseModal,
    /// Scroll smoothly to the features section.
    ScrollToFeatures,
    /// Scroll smoothly to the section a clicked nav link points at.
    ScrollToLink,
    /// Activate the clicked tab and its panel.
    SwitchTab,
    /// Dim or restore the navigation around a hovered link.
    Hover(HoverPhase),
    /// Show the next slide.
    NextSlide,
    /// Show the previous slide.
    PreviousSlide,
    /// Show the slide of a clicked dot.
    SelectDot,
    /// Escape closes the modal; arrow keys move the carousel.
    Keyboard,
}

/// One entry of the registration table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Element(s) receiving the listener.
    pub target: Target,
    /// Event type listened for.
    pub kind: EventKind,
    /// Behavior triggered.
    pub action: Action,
}

const fn bind(target: Target, kind: EventKind, action: Action) -> Binding {
    Binding {
        target,
        kind,
        action,
    }
}

/// Every listener the page attaches.
pub const BINDINGS: &[Binding] = &[
    bind(Target::OpenModalButtons, EventKind::Click, Action::OpenModal),
    bind(Target::CloseModalButton, EventKind::Click, Action::CloseModal),
    bind(Target::Overlay, EventKind::Click, Action::CloseModal),
    bind(Target::ScrollToButton, EventKind::Click, Action::ScrollToFeatures),
    bind(Target::NavLinks, EventKind::Click, Action::ScrollToLink),
    bind(Target::TabContainer, EventKind::Click, Action::SwitchTab),
    bind(
        Target::Nav,
        EventKind::MouseOver,
        Action::Hover(HoverPhase::Enter),
    ),
    bind(
        Target::Nav,
        EventKind::MouseOut,
        Action::Hover(HoverPhase::Leave),
    ),
    bind(Target::SliderRight, EventKind::Click, Action::NextSlide),
    bind(Target::SliderLeft, EventKind::Click, Action::PreviousSlide),
    bind(Target::DotContainer, EventKind::Click, Action::SelectDot),
    bind(Target::Document, EventKind::KeyDown, Action::Keyboard),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_target_event_pair_is_bound_once() {
        for (i, a) in BINDINGS.iter().enumerate() {
            for b in &BINDINGS[i + 1..] {
                assert!(
                    (a.target, a.kind) != (b.target, b.kind),
                    "{a:?} and {b:?} share a listener slot"
                );
            }
        }
    }

    #[test]
    fn hover_phases_map_to_mouse_events() {
        let hover: alloc::vec::Vec<_> = BINDINGS
            .iter()
            .filter(|b| b.target == Target::Nav)
            .map(|b| (b.kind.name(), b.action))
            .collect();
        assert_eq!(
            hover,
            [
                ("mouseover", Action::Hover(HoverPhase::Enter)),
                ("mouseout", Action::Hover(HoverPhase::Leave)),
            ]
        );
    }
}
