//! Named regions of the document template
//!
//! A region is one placeholder in the output template together with the
//! ordered list of fragments accumulated for it. The set of regions is closed,
//! so an unknown region can only come from text (config files, CLI) and is
//! rejected at that boundary.

use crate::error::{PgfError, Result};
use std::fmt;
use std::str::FromStr;

/// Placeholder regions of the pgfplots template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Preamble lines between the package setup and `\begin{document}`
    TikzHeader,
    /// Lines after `\end{axis}`, still inside the tikzpicture
    TikzFooter,
    /// Options of the `tikzpicture` environment
    TikzOptions,
    /// Options of the `axis` environment
    AxisOptions,
    /// Plot commands
    Contents,
    /// Lines at the end of the axis body
    Footer,
}

impl Region {
    /// All regions, in template declaration order
    pub const ALL: [Region; 6] = [
        Region::TikzHeader,
        Region::TikzFooter,
        Region::TikzOptions,
        Region::AxisOptions,
        Region::Contents,
        Region::Footer,
    ];

    /// Placeholder name used in templates
    pub fn name(self) -> &'static str {
        match self {
            Region::TikzHeader => "tikz_header",
            Region::TikzFooter => "tikz_footer",
            Region::TikzOptions => "tikz_options",
            Region::AxisOptions => "axis_options",
            Region::Contents => "_contents",
            Region::Footer => "footer",
        }
    }

    pub fn from_name(name: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|region| region.name() == name)
    }

    /// Whether entries of this region are `key=value` options that get a
    /// trailing separator when rendered
    pub fn is_option_list(self) -> bool {
        matches!(self, Region::TikzOptions | Region::AxisOptions)
    }

    fn index(self) -> usize {
        match self {
            Region::TikzHeader => 0,
            Region::TikzFooter => 1,
            Region::TikzOptions => 2,
            Region::AxisOptions => 3,
            Region::Contents => 4,
            Region::Footer => 5,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = PgfError;

    fn from_str(s: &str) -> Result<Self> {
        Region::from_name(s.trim()).ok_or_else(|| PgfError::UnknownRegion(s.to_string()))
    }
}

/// Ordered fragment buffers, one per region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMap {
    buffers: [Vec<String>; 6],
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: Region) -> &[String] {
        &self.buffers[region.index()]
    }

    pub fn get_mut(&mut self, region: Region) -> &mut Vec<String> {
        &mut self.buffers[region.index()]
    }

    /// Replace the contents of a region wholesale
    pub fn set(&mut self, region: Region, fragments: Vec<String>) {
        self.buffers[region.index()] = fragments;
    }

    pub fn append(&mut self, region: Region, fragment: impl Into<String>) {
        self.get_mut(region).push(fragment.into());
    }

    pub fn extend<I, S>(&mut self, region: Region, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.get_mut(region)
            .extend(fragments.into_iter().map(Into::into));
    }

    /// Fragments of a region joined with newlines
    pub fn joined(&self, region: Region) -> String {
        self.get(region).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_names_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_name(region.name()), Some(region));
        }
    }

    #[test]
    fn test_unknown_region_name_is_rejected() {
        let err = "legend".parse::<Region>().unwrap_err();
        assert!(matches!(err, PgfError::UnknownRegion(ref name) if name == "legend"));
        assert!(err.to_string().starts_with("UNKNOWN_REGION"));
    }

    #[test]
    fn test_only_option_regions_take_separators() {
        let option_regions: Vec<Region> = Region::ALL
            .into_iter()
            .filter(|r| r.is_option_list())
            .collect();
        assert_eq!(option_regions, vec![Region::TikzOptions, Region::AxisOptions]);
    }

    #[test]
    fn test_append_and_extend_preserve_order() {
        let mut map = RegionMap::new();
        map.append(Region::Contents, "a");
        map.extend(Region::Contents, ["b", "c"]);
        map.append(Region::Contents, "a");
        assert_eq!(map.get(Region::Contents), ["a", "b", "c", "a"]);
        assert!(map.get(Region::Footer).is_empty());
    }

    #[test]
    fn test_set_replaces_region() {
        let mut map = RegionMap::new();
        map.extend(Region::AxisOptions, ["grid=major"]);
        map.set(Region::AxisOptions, vec!["xmode=log".to_string()]);
        assert_eq!(map.get(Region::AxisOptions), ["xmode=log"]);
    }

    #[test]
    fn test_joined_uses_newlines() {
        let mut map = RegionMap::new();
        map.extend(Region::TikzHeader, ["\\usetikzlibrary{calc}", "% header"]);
        assert_eq!(
            map.joined(Region::TikzHeader),
            "\\usetikzlibrary{calc}\n% header"
        );
        assert_eq!(map.joined(Region::Footer), "");
    }
}
