// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invariants checked over arbitrary event sequences, using a presenter
//! double that keeps marker state the way the DOM would.

use proptest::prelude::*;

use vitrine_core::backend::Presenter;
use vitrine_core::config::PageConfig;
use vitrine_core::error::PageError;
use vitrine_core::hover::HoverPhase;
use vitrine_core::input::Key;
use vitrine_core::page::{Page, PageChanges, PageEvent, PageLayout, ScrollTarget};
use vitrine_core::trace::Tracer;
use vitrine_core::watch::Intersection;

/// Marker state of a fake document.
#[derive(Debug, Default)]
struct Markup {
    dialog_hidden: bool,
    overlay_hidden: bool,
    slide_offsets: Vec<isize>,
    dots: Vec<bool>,
    tabs: Vec<bool>,
    panels: Vec<bool>,
    section_hidden: Vec<bool>,
    reveal_count: Vec<u32>,
    image_src_swaps: Vec<u32>,
    image_placeholder: Vec<bool>,
}

impl Markup {
    fn new(page: &Page) -> Self {
        Self {
            dialog_hidden: true,
            overlay_hidden: true,
            slide_offsets: vec![0; page.carousel().slide_count()],
            dots: vec![false; page.carousel().slide_count()],
            tabs: page.tabs().tab_markers().collect(),
            panels: page.tabs().panel_markers().collect(),
            section_hidden: vec![false; page.sections().len()],
            reveal_count: vec![0; page.sections().len()],
            image_src_swaps: vec![0; page.images().len()],
            image_placeholder: vec![true; page.images().len()],
        }
    }
}

impl Presenter for Markup {
    fn apply(&mut self, page: &Page, changes: &PageChanges) -> Result<(), PageError> {
        if changes.modal {
            let hidden = !page.modal().is_visible();
            self.dialog_hidden = hidden;
            self.overlay_hidden = hidden;
        }
        if changes.slides {
            self.slide_offsets = page.carousel().offsets().collect();
            self.dots = page.carousel().dots().collect();
        }
        if changes.tabs {
            self.tabs = page.tabs().tab_markers().collect();
            self.panels = page.tabs().panel_markers().collect();
        }
        for &i in &changes.concealed {
            self.section_hidden[i] = true;
        }
        for &i in &changes.revealed {
            self.section_hidden[i] = false;
            self.reveal_count[i] += 1;
        }
        for &i in &changes.swapped {
            self.image_src_swaps[i] += 1;
        }
        for &i in &changes.loaded {
            assert_eq!(self.image_src_swaps[i], 1, "placeholder cleared before swap");
            self.image_placeholder[i] = false;
        }
        Ok(())
    }
}

fn layout(slides: usize) -> PageLayout {
    PageLayout {
        slide_count: slides,
        tabs: vec!["1".into(), "2".into(), "3".into()],
        panels: vec!["1".into(), "2".into(), "3".into()],
        initial_tab: Some(0),
        section_count: 3,
        image_count: 3,
    }
}

#[derive(Clone, Debug)]
enum Op {
    Open,
    Close,
    Key(Key),
    Next,
    Previous,
    Dot(String),
    Tab(Option<String>),
    ScrollToFeatures,
    Hover(Option<usize>, HoverPhase),
    Section(usize, bool, f64),
    Image(usize, bool),
    Loaded(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Open),
        Just(Op::Close),
        prop_oneof![
            Just(Key::Escape),
            Just(Key::ArrowLeft),
            Just(Key::ArrowRight),
            Just(Key::Other),
        ]
        .prop_map(Op::Key),
        Just(Op::Next),
        Just(Op::Previous),
        "[0-9]{1,2}".prop_map(Op::Dot),
        proptest::option::of("[0-4]").prop_map(Op::Tab),
        Just(Op::ScrollToFeatures),
        (
            proptest::option::of(0_usize..4),
            prop_oneof![Just(HoverPhase::Enter), Just(HoverPhase::Leave)],
        )
            .prop_map(|(link, phase)| Op::Hover(link, phase)),
        (0_usize..4, any::<bool>(), 0.0_f64..=1.0).prop_map(|(i, v, r)| Op::Section(i, v, r)),
        (0_usize..4, any::<bool>()).prop_map(|(i, v)| Op::Image(i, v)),
        (0_usize..4).prop_map(Op::Loaded),
    ]
}

fn event(op: &Op) -> PageEvent<'_> {
    match op {
        Op::Open => PageEvent::OpenModal,
        Op::Close => PageEvent::CloseModal,
        Op::Key(key) => PageEvent::Key(*key),
        Op::Next => PageEvent::NextSlide,
        Op::Previous => PageEvent::PreviousSlide,
        Op::Dot(raw) => PageEvent::DotClick {
            slide: Some(raw.as_str()),
        },
        Op::Tab(tab) => PageEvent::TabClick {
            tab: tab.as_deref(),
        },
        Op::ScrollToFeatures => PageEvent::ScrollToFeatures,
        Op::Hover(link, phase) => PageEvent::Hover {
            link: *link,
            phase: *phase,
        },
        Op::Section(index, visible, ratio) => PageEvent::Section {
            index: *index,
            entry: Intersection::new(*visible, *ratio),
        },
        Op::Image(index, visible) => PageEvent::Image {
            index: *index,
            entry: Intersection::new(*visible, 1.0),
        },
        Op::Loaded(index) => PageEvent::ImageLoaded { index: *index },
    }
}

proptest! {
    #[test]
    fn stepping_tracks_net_offset(slides in 1_usize..8, steps in prop::collection::vec(any::<bool>(), 0..64)) {
        let mut page = Page::new(layout(slides), PageConfig::bankist().watch).unwrap();
        page.initialize();
        let modulus = i64::try_from(slides).unwrap();
        let mut net: i64 = 0;
        for forward in steps {
            let event = if forward { PageEvent::NextSlide } else { PageEvent::PreviousSlide };
            page.dispatch(event, &mut Tracer::none());
            net += if forward { 1 } else { -1 };
            let expected = usize::try_from(net.rem_euclid(modulus)).unwrap();
            prop_assert_eq!(page.carousel().current(), expected);
        }
    }

    #[test]
    fn markers_stay_consistent(slides in 1_usize..6, ops in prop::collection::vec(op(), 0..80)) {
        let mut page = Page::new(layout(slides), PageConfig::bankist().watch).unwrap();
        let mut markup = Markup::new(&page);
        let init = page.initialize();
        markup.apply(&page, &init).unwrap();
        let watching = page.start_watching();
        markup.apply(&page, &watching).unwrap();

        for op in &ops {
            let changes = page.dispatch(event(op), &mut Tracer::none());
            markup.apply(&page, &changes).unwrap();

            match op {
                Op::ScrollToFeatures => prop_assert_eq!(
                    &changes,
                    &PageChanges {
                        scroll: Some(ScrollTarget::Features),
                        ..PageChanges::default()
                    }
                ),
                Op::Hover(..) => {
                    prop_assert!(!changes.prevent_default);
                    prop_assert!(changes.scroll.is_none());
                }
                _ => prop_assert!(changes.scroll.is_none()),
            }

            prop_assert_eq!(markup.dialog_hidden, markup.overlay_hidden);
            prop_assert_eq!(markup.dialog_hidden, !page.modal().is_visible());

            let current = page.carousel().current();
            prop_assert!(current < slides);
            prop_assert_eq!(markup.dots.iter().filter(|d| **d).count(), 1);
            prop_assert!(markup.dots[current]);
            prop_assert_eq!(markup.slide_offsets.iter().filter(|o| **o == 0).count(), 1);
            prop_assert_eq!(markup.slide_offsets[current], 0);

            prop_assert_eq!(markup.tabs.iter().filter(|t| **t).count(), 1);
            prop_assert_eq!(markup.panels.iter().filter(|p| **p).count(), 1);
            prop_assert_eq!(
                markup.tabs.iter().position(|t| *t),
                markup.panels.iter().position(|p| *p)
            );

            prop_assert!(markup.reveal_count.iter().all(|c| *c <= 1));
            prop_assert!(markup.image_src_swaps.iter().all(|c| *c <= 1));
            for (placeholder, swaps) in markup.image_placeholder.iter().zip(&markup.image_src_swaps) {
                prop_assert!(*placeholder || *swaps == 1);
            }
        }
    }
}

#[test]
fn previous_from_first_of_four() {
    let mut page = Page::new(layout(4), PageConfig::bankist().watch).unwrap();
    let mut markup = Markup::new(&page);
    let init = page.initialize();
    markup.apply(&page, &init).unwrap();

    let changes = page.dispatch(PageEvent::PreviousSlide, &mut Tracer::none());
    markup.apply(&page, &changes).unwrap();

    assert_eq!(page.carousel().current(), 3);
    assert_eq!(markup.dots, [false, false, false, true]);
    assert_eq!(markup.slide_offsets, [-300, -200, -100, 0]);
}

#[test]
fn revealed_section_is_never_hidden_again() {
    let mut page = Page::new(layout(1), PageConfig::bankist().watch).unwrap();
    let mut markup = Markup::new(&page);
    let watching = page.start_watching();
    markup.apply(&page, &watching).unwrap();
    assert!(markup.section_hidden.iter().all(|h| *h), "sections start hidden");

    let seen = Intersection::new(true, 0.5);
    for _ in 0..3 {
        let changes = page.dispatch(PageEvent::Section { index: 0, entry: seen }, &mut Tracer::none());
        markup.apply(&page, &changes).unwrap();
        let away = page.dispatch(
            PageEvent::Section {
                index: 0,
                entry: Intersection::default(),
            },
            &mut Tracer::none(),
        );
        markup.apply(&page, &away).unwrap();
    }
    assert!(!markup.section_hidden[0]);
    assert_eq!(markup.reveal_count[0], 1);
    assert!(page.start_watching().concealed.iter().all(|i| *i != 0));
}
