// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection geometry.
//!
//! [`intersect`] reproduces the `IntersectionObserver` computation for a
//! single target against the viewport, so backends without the native API
//! can feed the same [`Intersection`] entries to the watchers.

use kurbo::Rect;

use crate::watch::Intersection;

/// Computes the intersection of `target` with `root` grown by `root_margin`
/// pixels on every side.
///
/// A negative margin shrinks the root. Edge-adjacent rectangles count as
/// intersecting, as in the DOM API. A zero-area target that touches the root
/// has ratio `1.0`. The entry's reach is measured against the grown root.
#[must_use]
pub fn intersect(target: Rect, root: Rect, root_margin: f64) -> Intersection {
    let root = root.inflate(root_margin, root_margin);
    if root.x1 < root.x0 || root.y1 < root.y0 {
        return Intersection::default();
    }
    let target = target.abs();
    let reach = reach(target, root);

    let touching = target.x0 <= root.x1
        && target.x1 >= root.x0
        && target.y0 <= root.y1
        && target.y1 >= root.y0;
    if !touching {
        return Intersection::default().with_reach(reach);
    }

    let area = target.area();
    let ratio = if area > 0.0 {
        (target.intersect(root).area() / area).clamp(0.0, 1.0)
    } else {
        1.0
    };
    Intersection::new(true, ratio).with_reach(reach)
}

/// Largest fraction of `target` that can ever lie inside `root`.
///
/// This is `1.0` when the target fits inside the root, and smaller when the
/// target is taller or wider. A zero-area target has reach `1.0`.
#[must_use]
pub fn reach(target: Rect, root: Rect) -> f64 {
    let (target, root) = (target.abs(), root.abs());
    let area = target.area();
    if area <= 0.0 {
        return 1.0;
    }
    let width = target.width().min(root.width());
    let height = target.height().min(root.height());
    (width * height / area).clamp(0.0, 1.0)
}
