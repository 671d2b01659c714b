//! Plot description files
//!
//! A plot description is a TOML file that drives a [`DocumentBuilder`]
//! without writing Rust:
//!
//! ```toml
//! [axis]
//! xlabel = "time"
//! ylabel = "value"
//! options = ["grid=major"]
//!
//! [[series]]
//! x = [1, 2, 3]
//! y = [4, 5, 6]
//! legend = "measured"
//! ```

use crate::builder::{BoundingBox, DocumentBuilder, PlotSeries};
use crate::error::{PgfError, Result};
use crate::region::Region;
use crate::template::Template;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Custom document template, relative to the working directory
    #[serde(default)]
    pub template: Option<PathBuf>,
    #[serde(default)]
    pub axis: AxisConfig,
    #[serde(default)]
    pub tikz: TikzConfig,
    /// Extra raw fragments keyed by region name
    #[serde(default)]
    pub regions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
    #[serde(default)]
    pub graphics: Vec<GraphicsConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub latex: LatexConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default)]
    pub xlabel: String,
    #[serde(default)]
    pub ylabel: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TikzConfig {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub footer: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub x: Vec<Coordinate>,
    pub y: Vec<Coordinate>,
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub force_options: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphicsConfig {
    pub name: String,
    pub bounding_box: [f64; 4],
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file stem; the `.tex` extension is added on save
    #[serde(default)]
    pub name: Option<String>,
}

/// Settings for the LaTeX typesetter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexConfig {
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    /// Program used to open the produced PDF
    #[serde(default)]
    pub viewer: Option<String>,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            args: default_args(),
            viewer: None,
        }
    }
}

fn default_engine() -> String {
    "pdflatex".to_string()
}

fn default_args() -> Vec<String> {
    vec![
        "-interaction=nonstopmode".to_string(),
        "-halt-on-error".to_string(),
    ]
}

/// A data value as written in the plot description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Integer(i) => write!(f, "{}", i),
            Coordinate::Float(x) => write!(f, "{}", x),
            Coordinate::Text(s) => f.write_str(s),
        }
    }
}

impl From<&SeriesConfig> for PlotSeries {
    fn from(series: &SeriesConfig) -> Self {
        let mut plot = PlotSeries::new(&series.x, &series.y)
            .options(series.options.iter().cloned())
            .force_options(series.force_options);
        if let Some(legend) = &series.legend {
            plot = plot.legend(legend.clone());
        }
        plot
    }
}

impl PlotConfig {
    /// Read a plot description from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PgfError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        content.parse()
    }

    /// Replay the description onto a fresh builder
    ///
    /// Tikz-level and raw region fragments go in first, then series and
    /// graphics in file order (all series before all graphics).
    pub fn to_builder(&self) -> Result<DocumentBuilder> {
        let mut builder = DocumentBuilder::new(
            &self.axis.xlabel,
            &self.axis.ylabel,
            self.axis.options.clone(),
        );

        if let Some(path) = &self.template {
            let source = std::fs::read_to_string(path).map_err(|e| PgfError::ConfigRead {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let template = Template::parse(&source);
            if !template.regions().any(|region| region == Region::Contents) {
                tracing::warn!(
                    "Template {} has no ${} placeholder, plots will not appear",
                    path.display(),
                    Region::Contents
                );
            }
            builder = builder.with_template(template);
        }

        builder.extend(Region::TikzOptions, self.tikz.options.iter().cloned());
        builder.extend(Region::TikzHeader, self.tikz.header.iter().cloned());
        builder.extend(Region::TikzFooter, self.tikz.footer.iter().cloned());

        for (name, fragments) in &self.regions {
            let region: Region = name.parse()?;
            builder.extend(region, fragments.iter().cloned());
        }

        for series in &self.series {
            builder.add_series(&PlotSeries::from(series))?;
        }

        for graphic in &self.graphics {
            let options = (!graphic.options.is_empty()).then_some(graphic.options.as_slice());
            builder.graphics(&graphic.name, BoundingBox::from(graphic.bounding_box), options);
        }

        tracing::debug!(
            "Built document from description: {} series, {} graphics",
            self.series.len(),
            self.graphics.len()
        );
        Ok(builder)
    }
}

impl std::str::FromStr for PlotConfig {
    type Err = PgfError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_uses_defaults() {
        let config: PlotConfig = "".parse().unwrap();
        assert!(config.series.is_empty());
        assert_eq!(config.latex, LatexConfig::default());
        assert_eq!(config.latex.engine, "pdflatex");
        assert!(config.output.name.is_none());
    }

    #[test]
    fn test_coordinates_keep_their_text_form() {
        let config: PlotConfig = r#"
[[series]]
x = [1, 2.5, "a"]
y = [-3, 0.125, "b"]
"#
        .parse()
        .unwrap();
        let builder = config.to_builder().unwrap();
        assert_eq!(
            builder.region(Region::Contents)[1],
            "coordinates {(1, -3)(2.5, 0.125)(a, b)};\n"
        );
    }

    #[test]
    fn test_full_description_order() {
        let config: PlotConfig = r#"
[axis]
xlabel = "t"
ylabel = "v"
options = ["grid=major"]

[tikz]
options = ["scale=2"]
header = ["\\usepgfplotslibrary{fillbetween}"]

[regions]
footer = ["% generated"]

[[series]]
x = [1]
y = [2]
legend = "one"
options = ["red"]

[[graphics]]
name = "bg.png"
bounding_box = [0, 1, 0, 2]
"#
        .parse()
        .unwrap();

        let builder = config.to_builder().unwrap();
        assert_eq!(
            builder.region(Region::AxisOptions),
            ["grid=major", "xlabel={t}", "ylabel={v}"]
        );
        assert_eq!(builder.region(Region::TikzOptions), ["scale=2"]);
        assert_eq!(builder.region(Region::Footer), ["% generated"]);
        assert_eq!(builder.legend(), ["one"]);
        assert_eq!(
            builder.region(Region::Contents),
            [
                r"\addplot+",
                "[",
                "red, ",
                "]",
                "coordinates {(1, 2)};\n",
                r"\addplot",
                "graphics",
                "[xmin=0,xmax=1,ymin=0,ymax=2]",
                "{bg.png};"
            ]
        );
    }

    #[test]
    fn test_unknown_region_key_is_rejected() {
        let config: PlotConfig = "[regions]\nbody = [\"x\"]\n".parse().unwrap();
        let err = config.to_builder().unwrap_err();
        assert!(matches!(err, PgfError::UnknownRegion(ref name) if name == "body"));
    }

    #[test]
    fn test_series_length_mismatch_surfaces() {
        let config: PlotConfig = "[[series]]\nx = [1, 2]\ny = [1]\n".parse().unwrap();
        assert!(matches!(
            config.to_builder(),
            Err(PgfError::LengthMismatch { x_len: 2, y_len: 1 })
        ));
    }

    #[test]
    fn test_missing_template_file() {
        let config: PlotConfig = "template = \"/nonexistent/pgfkit/tpl.tex\"\n".parse().unwrap();
        assert!(matches!(config.to_builder(), Err(PgfError::ConfigRead { .. })));
    }

    #[test]
    fn test_malformed_toml_is_config_invalid() {
        let err = "[[series]\nx = ".parse::<PlotConfig>().unwrap_err();
        assert!(matches!(err, PgfError::ConfigInvalid(_)));
    }

    #[test]
    fn test_bounding_box_requires_four_values() {
        let err = "[[graphics]]\nname = \"a\"\nbounding_box = [0, 1, 2]\n"
            .parse::<PlotConfig>()
            .unwrap_err();
        assert!(matches!(err, PgfError::ConfigInvalid(_)));
    }
}
