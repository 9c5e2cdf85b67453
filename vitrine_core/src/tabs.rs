// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive selection over a fixed set of tabs and content panels.
//!
//! Tabs and panels are linked by a *discriminator*: the tab carries it as a
//! data attribute, the panel as the suffix of a class name (see
//! [`Markers::content_class`]). [`TabSwitcher`] holds the active tab as an
//! explicit index; the backend projects it onto both collections with
//! [`TabSwitcher::tab_markers`] and [`TabSwitcher::panel_markers`].
//!
//! [`Markers::content_class`]: crate::config::Markers::content_class

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::Markers;
use crate::error::PageError;

/// Extracts a panel's discriminator from its class list.
///
/// Returns the suffix of the first class starting with
/// [`Markers::content_prefix`] that is not the active marker itself.
pub fn panel_discriminator<'a>(
    classes: impl IntoIterator<Item = &'a str>,
    markers: &Markers,
) -> Option<&'a str> {
    classes
        .into_iter()
        .filter(|class| *class != markers.content_active)
        .find_map(|class| class.strip_prefix(markers.content_prefix))
        .filter(|suffix| !suffix.is_empty())
}

/// Active-tab state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSwitcher {
    tabs: Vec<String>,
    panels: Vec<String>,
    active: Option<usize>,
}

impl TabSwitcher {
    /// Creates a switcher over tab and panel discriminators, in document
    /// order.
    ///
    /// `initial` is the tab the markup marks active; it is ignored when out
    /// of range.
    #[must_use]
    pub fn new(tabs: Vec<String>, panels: Vec<String>, initial: Option<usize>) -> Self {
        let active = initial.filter(|&i| i < tabs.len());
        Self {
            tabs,
            panels,
            active,
        }
    }

    /// Index of the active tab, if any.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Discriminator of the active tab, if any.
    #[must_use]
    pub fn active_discriminator(&self) -> Option<&str> {
        self.active.map(|i| self.tabs[i].as_str())
    }

    /// Activates the tab with `discriminator` and its panel.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::UnknownTab`] when no tab or no panel carries the
    /// discriminator. The active pair is left unchanged.
    pub fn select(&mut self, discriminator: &str) -> Result<usize, PageError> {
        let tab = self.tabs.iter().position(|t| t == discriminator);
        let has_panel = self.panels.iter().any(|p| p == discriminator);
        match tab {
            Some(index) if has_panel => {
                self.active = Some(index);
                Ok(index)
            }
            _ => Err(PageError::UnknownTab(discriminator.into())),
        }
    }

    /// Active flag of every tab, in document order.
    pub fn tab_markers(&self) -> impl Iterator<Item = bool> + '_ {
        let active = self.active;
        (0..self.tabs.len()).map(move |i| Some(i) == active)
    }

    /// Active flag of every panel, in document order.
    ///
    /// At most one panel is active, even if the markup repeats a
    /// discriminator.
    pub fn panel_markers(&self) -> impl Iterator<Item = bool> + '_ {
        let active = self.active_discriminator();
        let first = active.and_then(|d| self.panels.iter().position(|p| p == d));
        (0..self.panels.len()).map(move |i| Some(i) == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use alloc::vec;

    fn switcher() -> TabSwitcher {
        let ids = || vec!["1".into(), "2".into(), "3".into()];
        TabSwitcher::new(ids(), ids(), Some(0))
    }

    #[test]
    fn select_moves_both_markers() {
        let mut tabs = switcher();
        assert_eq!(tabs.select("3"), Ok(2));
        assert_eq!(tabs.tab_markers().collect::<Vec<_>>(), [false, false, true]);
        assert_eq!(tabs.panel_markers().collect::<Vec<_>>(), [false, false, true]);
    }

    #[test]
    fn unknown_tab_keeps_prior_pair() {
        let mut tabs = switcher();
        tabs.select("2").unwrap();
        assert_eq!(tabs.select("9"), Err(PageError::UnknownTab("9".into())));
        assert_eq!(tabs.active(), Some(1));
    }

    #[test]
    fn tab_without_panel_is_unknown() {
        let mut tabs = TabSwitcher::new(vec!["1".into(), "2".into()], vec!["1".into()], Some(0));
        assert!(tabs.select("2").is_err(), "panel for tab 2 is missing");
        assert_eq!(tabs.active_discriminator(), Some("1"));
    }

    #[test]
    fn out_of_range_initial_leaves_nothing_active() {
        let tabs = TabSwitcher::new(vec!["1".into()], vec!["1".into()], Some(4));
        assert_eq!(tabs.active(), None);
        assert!(tabs.panel_markers().all(|active| !active), "no panel should be active");
    }

    #[test]
    fn panel_discriminator_skips_active_marker() {
        let markers = PageConfig::bankist().markers;
        let classes = [
            "operations__content",
            "operations__content--active",
            "operations__content--2",
        ];
        assert_eq!(panel_discriminator(classes, &markers), Some("2"));
        assert_eq!(panel_discriminator(["operations__content"], &markers), None);
    }
}
