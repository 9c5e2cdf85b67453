// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page state and its event dispatcher.
//!
//! [`Page`] owns one controller per behavior group. Backends translate DOM
//! events into [`PageEvent`]s, feed them to [`Page::dispatch`], and hand the
//! resulting [`PageChanges`] to a [`Presenter`](crate::backend::Presenter),
//! which reads the current marker state back from the page.
//!
//! Dispatch never fails: lookups that do not resolve (an unknown tab, a
//! malformed link fragment, a bad dot ordinal) leave the state untouched and
//! are reported through [`Tracer::rejected`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::carousel::Carousel;
use crate::config::WatchConfig;
use crate::error::PageError;
use crate::hover::{Highlight, HoverPhase};
use crate::input::Key;
use crate::modal::Modal;
use crate::tabs::TabSwitcher;
use crate::trace::{
    DispatchEvent, ImageEvent, ImageStage, ModalEvent, RevealEvent, SlideEvent, StickyEvent,
    TabEvent, Tracer,
};
use crate::watch::{Intersection, LazyImageSet, RevealSet, StickyNav};

/// What a backend found in the document at mount time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Number of carousel slides.
    pub slide_count: usize,
    /// Tab discriminators, in document order.
    pub tabs: Vec<String>,
    /// Content panel discriminators, in document order.
    pub panels: Vec<String>,
    /// Tab the markup marks active.
    pub initial_tab: Option<usize>,
    /// Number of reveal-on-scroll sections.
    pub section_count: usize,
    /// Number of lazy images.
    pub image_count: usize,
}

/// An input to [`Page::dispatch`].
///
/// Fields holding `Option`s are `None` when the DOM event hit no relevant
/// element (for example a click between two tabs); such events are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent<'a> {
    /// An "open account" control was clicked.
    OpenModal,
    /// The close button or the overlay was clicked.
    CloseModal,
    /// A key was pressed anywhere in the document.
    Key(Key),
    /// The "learn more" button was clicked.
    ScrollToFeatures,
    /// A click inside the navigation links container.
    NavClick {
        /// The clicked link's `href`, if a link was clicked.
        href: Option<&'a str>,
    },
    /// A click inside the tab container.
    TabClick {
        /// Discriminator of the nearest enclosing tab, if any.
        tab: Option<&'a str>,
    },
    /// The pointer entered or left something inside the navigation.
    Hover {
        /// Index of the navigation link under the pointer, if any.
        link: Option<usize>,
        /// Whether the pointer entered or left.
        phase: HoverPhase,
    },
    /// The "next" button or `ArrowRight`.
    NextSlide,
    /// The "previous" button or `ArrowLeft`.
    PreviousSlide,
    /// A click inside the dot container.
    DotClick {
        /// The clicked dot's slide attribute, if a dot was clicked.
        slide: Option<&'a str>,
    },
    /// An observation of the header sentinel.
    Header(Intersection),
    /// An observation of a section.
    Section {
        /// Section index in document order.
        index: usize,
        /// The observation.
        entry: Intersection,
    },
    /// An observation of a lazy image.
    Image {
        /// Image index in document order.
        index: usize,
        /// The observation.
        entry: Intersection,
    },
    /// A lazy image fired `load`.
    ImageLoaded {
        /// Image index in document order.
        index: usize,
    },
}

impl PageEvent<'_> {
    /// Short name used in traces.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OpenModal => "open-modal",
            Self::CloseModal => "close-modal",
            Self::Key(_) => "key",
            Self::ScrollToFeatures => "scroll-to-features",
            Self::NavClick { .. } => "nav-click",
            Self::TabClick { .. } => "tab-click",
            Self::Hover { .. } => "hover",
            Self::NextSlide => "next-slide",
            Self::PreviousSlide => "previous-slide",
            Self::DotClick { .. } => "dot-click",
            Self::Header(_) => "header-intersection",
            Self::Section { .. } => "section-intersection",
            Self::Image { .. } => "image-intersection",
            Self::ImageLoaded { .. } => "image-loaded",
        }
    }
}

/// Where a smooth scroll should go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The configured features section.
    Features,
    /// The element with this id (a link fragment without its `#`).
    Section(String),
}

/// The visible effects of one dispatch.
///
/// Boolean fields mean "re-project this group from the page state"; the
/// index lists name the individual entities that transitioned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageChanges {
    /// The DOM event's default action must be suppressed.
    pub prevent_default: bool,
    /// Modal visibility changed.
    pub modal: bool,
    /// Scroll smoothly to this target.
    pub scroll: Option<ScrollTarget>,
    /// The active tab was (re)selected.
    pub tabs: bool,
    /// The carousel must be re-rendered.
    pub slides: bool,
    /// Link and logo opacities to apply.
    pub highlight: Option<Highlight>,
    /// The sticky marker flipped.
    pub sticky: bool,
    /// Sections that start observation hidden.
    pub concealed: Vec<usize>,
    /// Sections revealed; they must no longer be observed.
    pub revealed: Vec<usize>,
    /// Images whose real source must be assigned; they must no longer be
    /// observed.
    pub swapped: Vec<usize>,
    /// Images whose placeholder marker must be cleared.
    pub loaded: Vec<usize>,
}

impl PageChanges {
    /// Whether applying these changes would do nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// State of every behavior group on the page.
#[derive(Clone, Debug)]
pub struct Page {
    watch: WatchConfig,
    modal: Modal,
    carousel: Carousel,
    tabs: TabSwitcher,
    sticky: StickyNav,
    sections: RevealSet,
    images: LazyImageSet,
    seq: u64,
}

impl Page {
    /// Builds the page state for a mounted document.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::EmptyCarousel`] when the layout has no slides.
    pub fn new(layout: PageLayout, watch: WatchConfig) -> Result<Self, PageError> {
        Ok(Self {
            watch,
            modal: Modal::new(),
            carousel: Carousel::new(layout.slide_count)?,
            tabs: TabSwitcher::new(layout.tabs, layout.panels, layout.initial_tab),
            sticky: StickyNav::default(),
            sections: RevealSet::new(layout.section_count),
            images: LazyImageSet::new(layout.image_count),
            seq: 0,
        })
    }

    /// Shows slide 0 with dot 0 active. Call once the dots exist.
    pub fn initialize(&mut self) -> PageChanges {
        self.carousel.reset();
        PageChanges {
            slides: true,
            ..PageChanges::default()
        }
    }

    /// Changes that hide every pending section as observation starts.
    #[must_use]
    pub fn start_watching(&self) -> PageChanges {
        PageChanges {
            concealed: self.sections.pending().collect(),
            ..PageChanges::default()
        }
    }

    /// Changes that show every section still pending, for when observation
    /// cannot start after [`start_watching`](Self::start_watching) concealed
    /// them. Section state is left untouched.
    #[must_use]
    pub fn stop_watching(&self) -> PageChanges {
        PageChanges {
            revealed: self.sections.pending().collect(),
            ..PageChanges::default()
        }
    }

    /// Watcher tuning.
    #[must_use]
    pub fn watch_config(&self) -> &WatchConfig {
        &self.watch
    }

    /// The modal state.
    #[must_use]
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// The carousel state.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// The tab state.
    #[must_use]
    pub fn tabs(&self) -> &TabSwitcher {
        &self.tabs
    }

    /// The sticky-nav state.
    #[must_use]
    pub fn sticky(&self) -> &StickyNav {
        &self.sticky
    }

    /// The section reveal state.
    #[must_use]
    pub fn sections(&self) -> &RevealSet {
        &self.sections
    }

    /// The lazy image state.
    #[must_use]
    pub fn images(&self) -> &LazyImageSet {
        &self.images
    }

    /// Sequence number of the most recent dispatch.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Applies one event and returns what became visible.
    pub fn dispatch(&mut self, event: PageEvent<'_>, tracer: &mut Tracer<'_>) -> PageChanges {
        self.seq += 1;
        let seq = self.seq;
        tracer.dispatch(&DispatchEvent {
            seq,
            event: event.name(),
        });

        let mut changes = PageChanges::default();
        let result = self.apply_event(event, &mut changes);
        if let Err(error) = result {
            tracer.rejected(seq, &error);
            return PageChanges {
                prevent_default: changes.prevent_default,
                ..PageChanges::default()
            };
        }
        self.trace_changes(&changes, tracer);
        changes
    }

    fn apply_event(
        &mut self,
        event: PageEvent<'_>,
        changes: &mut PageChanges,
    ) -> Result<(), PageError> {
        match event {
            PageEvent::OpenModal => {
                changes.prevent_default = true;
                changes.modal = self.modal.open();
            }
            PageEvent::CloseModal => changes.modal = self.modal.close(),
            PageEvent::Key(key) => {
                changes.modal = self.modal.on_key(key);
                match key {
                    Key::ArrowRight => {
                        self.carousel.next();
                        changes.slides = true;
                    }
                    Key::ArrowLeft => {
                        self.carousel.previous();
                        changes.slides = true;
                    }
                    Key::Escape | Key::Other => {}
                }
            }
            PageEvent::ScrollToFeatures => changes.scroll = Some(ScrollTarget::Features),
            PageEvent::NavClick { href } => {
                changes.prevent_default = true;
                if let Some(href) = href {
                    let id = href
                        .strip_prefix('#')
                        .filter(|id| !id.is_empty())
                        .ok_or_else(|| PageError::UnresolvedFragment(href.into()))?;
                    changes.scroll = Some(ScrollTarget::Section(id.into()));
                }
            }
            PageEvent::TabClick { tab } => {
                if let Some(tab) = tab {
                    self.tabs.select(tab)?;
                    changes.tabs = true;
                }
            }
            PageEvent::Hover { link, phase } => {
                changes.highlight = link.map(|hovered| Highlight { hovered, phase });
            }
            PageEvent::NextSlide => {
                self.carousel.next();
                changes.slides = true;
            }
            PageEvent::PreviousSlide => {
                self.carousel.previous();
                changes.slides = true;
            }
            PageEvent::DotClick { slide } => {
                if let Some(raw) = slide {
                    self.carousel.go_to_attribute(raw)?;
                    changes.slides = true;
                }
            }
            PageEvent::Header(entry) => changes.sticky = self.sticky.observe(entry).is_some(),
            PageEvent::Section { index, entry } => {
                if self
                    .sections
                    .observe(index, entry, self.watch.reveal_threshold)
                {
                    changes.revealed.push(index);
                }
            }
            PageEvent::Image { index, entry } => {
                if self.images.observe(index, entry) {
                    changes.swapped.push(index);
                }
            }
            PageEvent::ImageLoaded { index } => {
                if self.images.loaded(index) {
                    changes.loaded.push(index);
                }
            }
        }
        Ok(())
    }

    fn trace_changes(&self, changes: &PageChanges, tracer: &mut Tracer<'_>) {
        let seq = self.seq;
        if changes.modal {
            tracer.modal(&ModalEvent {
                seq,
                visible: self.modal.is_visible(),
            });
        }
        if changes.slides {
            tracer.slide(&SlideEvent {
                seq,
                index: self.carousel.current(),
                slide_count: self.carousel.slide_count(),
            });
        }
        if changes.tabs
            && let Some(index) = self.tabs.active()
        {
            tracer.tab(&TabEvent { seq, index });
        }
        if changes.sticky {
            tracer.sticky(&StickyEvent {
                seq,
                sticky: self.sticky.is_sticky(),
            });
        }
        for &section in &changes.revealed {
            tracer.reveal(&RevealEvent { seq, section });
        }
        for &image in &changes.swapped {
            tracer.image(&ImageEvent {
                seq,
                image,
                stage: ImageStage::Swapped,
            });
        }
        for &image in &changes.loaded {
            tracer.image(&ImageEvent {
                seq,
                image,
                stage: ImageStage::Loaded,
            });
        }
    }
}
