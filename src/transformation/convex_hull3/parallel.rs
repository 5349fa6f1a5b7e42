use super::convex_hull::ConvexHull;
use super::quickhull::QuickHull;
use super::settings::QuickHullSettings;
use crate::math::{Point, Real};
use alloc::vec::Vec;
use rayon::prelude::*;

/// Computes the convex hulls of several point clouds in parallel.
///
/// Each rayon worker reuses its own [`QuickHull`] engine. The hulls are returned in the
/// same order as `clouds`. This function is enabled by the `parallel` feature flag.
pub fn par_convex_hulls<'a>(
    clouds: &[&'a [Point<Real>]],
    settings: &QuickHullSettings,
) -> Vec<ConvexHull<'a>> {
    clouds
        .par_iter()
        .map_init(QuickHull::new, |engine, points| engine.convex_hull(*points, settings))
        .collect()
}
