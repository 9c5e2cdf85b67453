// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the core controllers and the backends.
//!
//! Mount-time variants ([`PageError::MissingElement`],
//! [`PageError::EmptyCarousel`]) abort mounting. The remaining variants are
//! produced while dispatching events; [`Page::dispatch`] turns them into
//! no-ops and reports them through the trace sink.
//!
//! [`Page::dispatch`]: crate::page::Page::dispatch

use alloc::string::String;
use core::fmt;

/// Errors from resolving the document structure or dispatching events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageError {
    /// A required element matched no node in the document.
    MissingElement(&'static str),
    /// The carousel was mounted with zero slides.
    EmptyCarousel,
    /// A tab discriminator has no matching tab or content panel.
    UnknownTab(String),
    /// A navigation link's `href` did not resolve to a section.
    UnresolvedFragment(String),
    /// A dot's slide attribute is not a valid slide index.
    InvalidSlide(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(selector) => {
                write!(f, "no element matches required selector `{selector}`")
            }
            Self::EmptyCarousel => f.write_str("carousel has no slides"),
            Self::UnknownTab(tab) => write!(f, "no tab or content panel for `{tab}`"),
            Self::UnresolvedFragment(href) => {
                write!(f, "link target `{href}` does not resolve to a section")
            }
            Self::InvalidSlide(raw) => write!(f, "`{raw}` is not a valid slide index"),
        }
    }
}

impl core::error::Error for PageError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn display_names_the_offending_value() {
        assert_eq!(
            PageError::MissingElement(".modal").to_string(),
            "no element matches required selector `.modal`"
        );
        assert_eq!(
            PageError::InvalidSlide("seven".into()).to_string(),
            "`seven` is not a valid slide index"
        );
    }
}
