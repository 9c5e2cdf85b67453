// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM event listeners.
//!
//! [`Listeners`] attaches one closure per [`BINDINGS`] entry and target
//! element. Each closure translates the DOM event into a [`PageEvent`],
//! dispatches it, and suppresses the default action when asked to.
//!
//! [`BINDINGS`]: vitrine_core::bindings::BINDINGS

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use vitrine_core::bindings::{Action, BINDINGS};
use vitrine_core::input::Key;
use vitrine_core::page::{PageChanges, PageEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

use crate::document::{PageElements, class_selector, index_of};
use crate::{Mounted, Shared};

pub(crate) type EventClosure = Closure<dyn FnMut(Event)>;

/// A listener that stays attached until dropped.
pub(crate) struct Attached {
    target: EventTarget,
    event: &'static str,
    closure: EventClosure,
}

impl Attached {
    /// Adds `closure` as a listener for `event` on `target`.
    pub(crate) fn new(
        target: EventTarget,
        event: &'static str,
        closure: EventClosure,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }
}

impl Drop for Attached {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Every listener from the binding table.
pub(crate) struct Listeners {
    attached: Vec<Attached>,
}

impl Listeners {
    /// Attaches every binding to its target elements.
    pub(crate) fn attach(
        shared: &Shared,
        elements: &PageElements,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let mut attached = Vec::new();
        for binding in BINDINGS {
            for target in elements.targets(binding.target) {
                let shared = Rc::clone(shared);
                let action = binding.action;
                let closure = Closure::wrap(Box::new(move |event: Event| {
                    // A listener fired from inside another dispatch has
                    // nothing new to add.
                    let Ok(mut mounted) = shared.try_borrow_mut() else {
                        return;
                    };
                    let changes = respond(&mut mounted, action, &event);
                    if changes.prevent_default {
                        event.prevent_default();
                    }
                }) as Box<dyn FnMut(Event)>);
                attached.push(Attached::new(target, binding.kind.name(), closure)?);
            }
        }
        Ok(Self { attached })
    }

    pub(crate) fn len(&self) -> usize {
        self.attached.len()
    }
}

/// Translates a DOM event for `action` and dispatches it.
fn respond(mounted: &mut Mounted, action: Action, event: &Event) -> PageChanges {
    match action {
        Action::OpenModal => mounted.dispatch(PageEvent::OpenModal),
        Action::CloseModal => mounted.dispatch(PageEvent::CloseModal),
        Action::ScrollToFeatures => mounted.dispatch(PageEvent::ScrollToFeatures),
        Action::NextSlide => mounted.dispatch(PageEvent::NextSlide),
        Action::PreviousSlide => mounted.dispatch(PageEvent::PreviousSlide),
        Action::ScrollToLink => {
            let selector = mounted.config().selectors.nav_link;
            let href = matching(event, selector).and_then(|link| link.get_attribute("href"));
            mounted.dispatch(PageEvent::NavClick {
                href: href.as_deref(),
            })
        }
        Action::SwitchTab => {
            let config = *mounted.config();
            let tab = event_element(event)
                .and_then(|el| el.closest(config.selectors.tab).ok().flatten())
                .and_then(|tab| tab.get_attribute(config.attributes.tab));
            mounted.dispatch(PageEvent::TabClick {
                tab: tab.as_deref(),
            })
        }
        Action::Hover(phase) => {
            let selector = mounted.config().selectors.nav_link;
            let link = matching(event, selector)
                .and_then(|link| index_of(&mounted.elements().links, link.as_ref()));
            mounted.dispatch(PageEvent::Hover { link, phase })
        }
        Action::SelectDot => {
            let config = *mounted.config();
            let slide: Option<String> = matching(event, &class_selector(config.markers.dot))
                .and_then(|dot| dot.get_attribute(config.attributes.slide));
            mounted.dispatch(PageEvent::DotClick {
                slide: slide.as_deref(),
            })
        }
        Action::Keyboard => {
            let key = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(Key::Other, |event| Key::from_key_name(&event.key()));
            mounted.dispatch(PageEvent::Key(key))
        }
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// The event target itself, if it matches `selector`.
fn matching(event: &Event, selector: &str) -> Option<Element> {
    event_element(event).filter(|el| el.matches(selector).unwrap_or(false))
}
