//! Shared test helpers for template tests

use crate::region::{Region, RegionMap};

/// Region map with one short fragment per region
pub(super) fn filled_regions() -> RegionMap {
    let mut regions = RegionMap::new();
    regions.append(Region::TikzHeader, "% header");
    regions.append(Region::TikzFooter, "% tikz footer");
    regions.append(Region::TikzOptions, "scale=2, ");
    regions.append(Region::AxisOptions, "xlabel={t}, ");
    regions.append(Region::Contents, "\\addplot+");
    regions.append(Region::Footer, "% footer");
    regions
}
