// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport watchers.
//!
//! [`Watchers`] feeds [`Intersection`] observations of the header, the
//! sections, and the lazy images into the page. With `IntersectionObserver`
//! available there is one observer per watcher, configured with the watcher's
//! root margin and thresholds; targets are unobserved once their one-shot
//! transition fires. Sections report at every reveal step, and each section
//! entry carries the section's reach snapped to those steps, so a section
//! taller than the viewport still reveals. Without it, a scroll/resize listener computes the same
//! observations from bounding rectangles via
//! [`geometry::intersect`](vitrine_core::geometry::intersect).
//!
//! Every lazy image also gets a `load` listener at start; a load that arrives
//! before the source swap is ignored by the page.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use js_sys::{Array, Reflect};
use kurbo::Rect;
use vitrine_core::config::WatchConfig;
use vitrine_core::geometry;
use vitrine_core::page::{PageChanges, PageEvent};
use vitrine_core::watch::{ImageState, Intersection, RevealState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast as _;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::document::{PageElements, index_of};
use crate::listeners::Attached;
use crate::{Mounted, Shared, root_margin_css};

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Which watcher an observation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Watched {
    Header,
    Sections,
    Images,
}

/// A connected `IntersectionObserver` and its callback.
struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverClosure,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// The running viewport watchers.
pub(crate) struct Watchers {
    observers: Vec<Observer>,
    listeners: Vec<Attached>,
    polling: bool,
}

impl core::fmt::Debug for Watchers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Watchers")
            .field("observers", &self.observers.len())
            .field("listeners", &self.listeners.len())
            .field("polling", &self.polling)
            .finish()
    }
}

impl Watchers {
    /// Conceals the pending sections and starts watching.
    pub(crate) fn start(shared: &Shared, elements: &PageElements) -> Result<Self, JsValue> {
        {
            let mut mounted = shared.borrow_mut();
            let changes = mounted.page().start_watching();
            mounted.present(&changes);
        }

        let mut watchers = Self {
            observers: Vec::new(),
            listeners: Vec::new(),
            polling: false,
        };
        for (index, img) in elements.lazy_images.iter().enumerate() {
            let shared = Rc::clone(shared);
            let closure = Closure::wrap(Box::new(move |_: Event| {
                if let Ok(mut mounted) = shared.try_borrow_mut() {
                    mounted.dispatch(PageEvent::ImageLoaded { index });
                }
            }) as Box<dyn FnMut(Event)>);
            watchers
                .listeners
                .push(Attached::new(img.clone().into(), "load", closure)?);
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        if Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
            watchers.observe(shared, elements)?;
        } else {
            watchers.poll_on_scroll(shared, &window)?;
        }
        Ok(watchers)
    }

    fn observe(&mut self, shared: &Shared, elements: &PageElements) -> Result<(), JsValue> {
        let watch = *shared.borrow().page().watch_config();
        let nav_height = elements.nav.get_bounding_client_rect().height();

        let header = observer(
            shared,
            Watched::Header,
            WatchConfig::sticky_root_margin_px(nav_height),
            &[0.0],
        )?;
        header.observer.observe(&elements.header);
        self.observers.push(header);

        let sections = observer(shared, Watched::Sections, 0.0, &watch.reveal_steps())?;
        for section in &elements.sections {
            sections.observer.observe(section);
        }
        self.observers.push(sections);

        let images = observer(shared, Watched::Images, watch.lazy_root_margin_px, &[0.0])?;
        for img in &elements.lazy_images {
            images.observer.observe(img);
        }
        self.observers.push(images);
        Ok(())
    }

    fn poll_on_scroll(&mut self, shared: &Shared, window: &Window) -> Result<(), JsValue> {
        self.polling = true;
        for event in ["scroll", "resize"] {
            let shared = Rc::clone(shared);
            let window_handle = window.clone();
            let closure = Closure::wrap(Box::new(move |_: Event| {
                if let Ok(mut mounted) = shared.try_borrow_mut() {
                    poll(&mut mounted, &window_handle);
                }
            }) as Box<dyn FnMut(Event)>);
            self.listeners
                .push(Attached::new(window.clone().into(), event, closure)?);
        }
        // The page may load scrolled, or short enough to show everything.
        if let Ok(mut mounted) = shared.try_borrow_mut() {
            poll(&mut mounted, window);
        }
        Ok(())
    }
}

fn observer(
    shared: &Shared,
    watched: Watched,
    root_margin_px: f64,
    thresholds: &[f64],
) -> Result<Observer, JsValue> {
    let shared = Rc::clone(shared);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let Ok(mut mounted) = shared.try_borrow_mut() else {
            return;
        };
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let mut observation =
                Intersection::new(entry.is_intersecting(), entry.intersection_ratio());
            if watched == Watched::Sections {
                observation = observation.with_reach(section_reach(&mounted, &target));
            }
            let changes = deliver(&mut mounted, watched, &target, observation);
            for done in finished(&mounted, watched, &changes) {
                observer.unobserve(&done);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&root_margin_css(root_margin_px));
    let thresholds: Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
    options.set_threshold(&thresholds);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    Ok(Observer {
        observer,
        _callback: callback,
    })
}

/// Largest ratio `section` can reach, rounded down to a reveal step.
fn section_reach(mounted: &Mounted, section: &Element) -> f64 {
    let Some(window) = web_sys::window() else {
        return 1.0;
    };
    let reach = geometry::reach(bounds(section), viewport(&window));
    mounted.page().watch_config().snap_reach(reach)
}

/// Dispatches one observation of `target`.
fn deliver(
    mounted: &mut Mounted,
    watched: Watched,
    target: &Element,
    entry: Intersection,
) -> PageChanges {
    let elements = mounted.elements();
    let event = match watched {
        Watched::Header => Some(PageEvent::Header(entry)),
        Watched::Sections => index_of(&elements.sections, target.as_ref())
            .map(|index| PageEvent::Section { index, entry }),
        Watched::Images => index_of(&elements.lazy_images, target.as_ref())
            .map(|index| PageEvent::Image { index, entry }),
    };
    match event {
        Some(event) => mounted.dispatch(event),
        None => PageChanges::default(),
    }
}

/// Targets whose one-shot transition fired and need no more observations.
fn finished(mounted: &Mounted, watched: Watched, changes: &PageChanges) -> Vec<Element> {
    let elements = mounted.elements();
    match watched {
        Watched::Header => Vec::new(),
        Watched::Sections => changes
            .revealed
            .iter()
            .filter_map(|&i| elements.sections.get(i).cloned())
            .collect(),
        Watched::Images => changes
            .swapped
            .iter()
            .filter_map(|&i| elements.lazy_images.get(i).cloned().map(Into::into))
            .collect(),
    }
}

/// Computes and dispatches observations for every target still waiting.
fn poll(mounted: &mut Mounted, window: &Window) {
    let viewport = viewport(window);
    let watch = *mounted.page().watch_config();
    let elements = mounted.elements().clone();

    let nav_height = elements.nav.get_bounding_client_rect().height();
    let header = geometry::intersect(
        bounds(&elements.header),
        viewport,
        WatchConfig::sticky_root_margin_px(nav_height),
    );
    mounted.dispatch(PageEvent::Header(header));

    for (index, section) in elements.sections.iter().enumerate() {
        if mounted.page().sections().state(index) != Some(RevealState::Pending) {
            continue;
        }
        let entry = geometry::intersect(bounds(section), viewport, 0.0);
        if entry.meets(watch.reveal_threshold) {
            mounted.dispatch(PageEvent::Section { index, entry });
        }
    }

    for (index, img) in elements.lazy_images.iter().enumerate() {
        if mounted.page().images().state(index) != Some(ImageState::Pending) {
            continue;
        }
        let entry = geometry::intersect(bounds(img), viewport, watch.lazy_root_margin_px);
        if entry.is_intersecting {
            mounted.dispatch(PageEvent::Image { index, entry });
        }
    }
}

fn viewport(window: &Window) -> Rect {
    let size = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Rect::new(
        0.0,
        0.0,
        size(window.inner_width()),
        size(window.inner_height()),
    )
}

fn bounds(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}
