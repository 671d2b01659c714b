//! Accumulate-then-substitute pgfplots document builder

use crate::error::{PgfError, Result};
use crate::region::{Region, RegionMap};
use crate::template::Template;
use crate::typeset::{Typesetter, TypesetterFactory};
use std::fmt;
use std::path::{Path, PathBuf};

/// File stem used by [`DocumentBuilder::save`] when no name is given
pub const DEFAULT_NAME: &str = ".tmp_plot";

/// Extension of saved documents
pub const TEX_EXTENSION: &str = "tex";

/// Separator appended to every option entry when rendering
const OPTION_SEPARATOR: &str = ", ";

/// Crop region of an embedded graphic, in axis coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([xmin, xmax, ymin, ymax]: [f64; 4]) -> Self {
        Self::new(xmin, xmax, ymin, ymax)
    }
}

impl From<(f64, f64, f64, f64)> for BoundingBox {
    fn from((xmin, xmax, ymin, ymax): (f64, f64, f64, f64)) -> Self {
        Self::new(xmin, xmax, ymin, ymax)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[xmin={},xmax={},ymin={},ymax={}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}

/// One data series with its optional decorations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSeries {
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub legend: Option<String>,
    pub options: Vec<String>,
    /// Use the replacing `\addplot` instead of the additive `\addplot+`
    pub force_options: bool,
}

impl PlotSeries {
    pub fn new<X: fmt::Display, Y: fmt::Display>(x: &[X], y: &[Y]) -> Self {
        Self {
            x: x.iter().map(ToString::to_string).collect(),
            y: y.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn force_options(mut self, force: bool) -> Self {
        self.force_options = force;
        self
    }
}

/// Builds one pgfplots document
///
/// Content-adding calls append fragments to named regions in call order;
/// [`render`](Self::render) joins them and fills the template.
pub struct DocumentBuilder {
    template: Template,
    regions: RegionMap,
    legend: Vec<String>,
    file_stem: Option<PathBuf>,
    typesetter: Option<TypesetterFactory>,
}

impl fmt::Debug for DocumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentBuilder")
            .field("regions", &self.regions)
            .field("legend", &self.legend)
            .field("file_stem", &self.file_stem)
            .field("has_typesetter", &self.typesetter.is_some())
            .finish()
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new("", "", None)
    }
}

impl DocumentBuilder {
    /// Create a builder with axis labels and optional axis options
    ///
    /// The generated `xlabel={..}` and `ylabel={..}` options always follow
    /// the caller's options.
    pub fn new(xlabel: &str, ylabel: &str, options: Option<Vec<String>>) -> Self {
        let mut regions = RegionMap::new();
        if let Some(options) = options {
            regions.set(Region::AxisOptions, options);
        }
        regions.extend(
            Region::AxisOptions,
            [format!("xlabel={{{}}}", xlabel), format!("ylabel={{{}}}", ylabel)],
        );

        Self {
            template: Template::default(),
            regions,
            legend: Vec::new(),
            file_stem: None,
            typesetter: None,
        }
    }

    /// Replace the document skeleton
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Attach the factory used by [`typeset`](Self::typeset)
    pub fn with_typesetter<F, T>(mut self, factory: F) -> Self
    where
        F: Fn() -> T + 'static,
        T: Typesetter + 'static,
    {
        self.typesetter = Some(Box::new(move || Box::new(factory()) as Box<dyn Typesetter>));
        self
    }

    pub fn region(&self, region: Region) -> &[String] {
        self.regions.get(region)
    }

    /// Look up a region by its placeholder name
    pub fn region_by_name(&self, name: &str) -> Result<&[String]> {
        let region: Region = name.parse()?;
        Ok(self.regions.get(region))
    }

    pub fn set_region(&mut self, region: Region, fragments: Vec<String>) {
        self.regions.set(region, fragments);
    }

    pub fn append(&mut self, region: Region, fragment: impl Into<String>) {
        self.regions.append(region, fragment);
    }

    pub fn extend<I, S>(&mut self, region: Region, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions.extend(region, fragments);
    }

    /// Legend labels recorded so far, in call order
    pub fn legend(&self) -> &[String] {
        &self.legend
    }

    /// Path of the last saved document, without extension
    pub fn file_stem(&self) -> Option<&Path> {
        self.file_stem.as_deref()
    }

    /// Add an external, already trimmed graphic spanning `bounding_box`
    pub fn graphics(
        &mut self,
        name: &str,
        bounding_box: impl Into<BoundingBox>,
        options: Option<&[String]>,
    ) {
        let bounding_box = bounding_box.into();
        tracing::debug!("Adding graphics '{}' at {}", name, bounding_box);

        self.append(Region::Contents, r"\addplot");
        self.write_options(options.unwrap_or_default());
        self.append(Region::Contents, "graphics");
        self.append(Region::Contents, bounding_box.to_string());
        self.append(Region::Contents, format!("{{{}}};", name));
    }

    /// Plot `y` against `x`
    ///
    /// `force_options` selects the plain `\addplot`, which replaces the cycle
    /// list style; otherwise `\addplot+` adds to it.
    pub fn plot<X, Y>(
        &mut self,
        x: &[X],
        y: &[Y],
        legend: Option<&str>,
        options: Option<&[String]>,
        force_options: bool,
    ) -> Result<()>
    where
        X: fmt::Display,
        Y: fmt::Display,
    {
        if x.len() != y.len() {
            return Err(PgfError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let coordinates: String = x
            .iter()
            .zip(y)
            .map(|(u, v)| format!("({}, {})", u, v))
            .collect();
        tracing::debug!("Adding plot with {} points", x.len());

        let command = if force_options { r"\addplot" } else { r"\addplot+" };
        self.append(Region::Contents, command);
        self.write_options(options.unwrap_or_default());
        self.append(Region::Contents, format!("coordinates {{{}}};\n", coordinates));

        if let Some(legend) = legend {
            self.legend.push(legend.to_string());
        }
        Ok(())
    }

    /// Plot a prepared series
    pub fn add_series(&mut self, series: &PlotSeries) -> Result<()> {
        let options = (!series.options.is_empty()).then_some(series.options.as_slice());
        self.plot(
            &series.x,
            &series.y,
            series.legend.as_deref(),
            options,
            series.force_options,
        )
    }

    /// Produce the LaTeX source
    ///
    /// Option separators and the legend command are applied to a copy of the
    /// regions, so rendering twice yields the same text.
    pub fn render(&self) -> String {
        let mut regions = self.regions.clone();

        for region in Region::ALL.into_iter().filter(|r| r.is_option_list()) {
            for option in regions.get_mut(region) {
                option.push_str(OPTION_SEPARATOR);
            }
        }

        if !self.legend.is_empty() {
            regions.append(
                Region::Contents,
                format!(r"\legend{{{}}}", self.legend.join(",")),
            );
        }

        tracing::debug!("Rendering document with {} legend entries", self.legend.len());
        self.template.render(&regions)
    }

    /// Write the document to `<name>.tex`
    ///
    /// Without a name the document goes to [`DEFAULT_NAME`] and is typeset
    /// and opened right away. Returns the written path.
    pub fn save(&mut self, name: Option<&str>) -> Result<PathBuf> {
        let stem = PathBuf::from(name.unwrap_or(DEFAULT_NAME));
        let path = tex_path(&stem);

        std::fs::write(&path, self.render())?;
        tracing::info!("Saved {}", path.display());
        self.file_stem = Some(stem);

        if name.is_none() {
            self.typeset(true)?;
        }
        Ok(path)
    }

    /// Typeset the last saved document with the attached typesetter
    pub fn typeset(&self, show: bool) -> Result<()> {
        let stem = self.file_stem.as_deref().ok_or(PgfError::NotSaved)?;
        let factory = self.typesetter.as_ref().ok_or(PgfError::NoTypesetter)?;

        let mut typesetter = factory();
        typesetter.set_open_pdf(show);
        tracing::info!("Typesetting {} (open: {})", stem.display(), show);
        typesetter.typeset_file(stem)
    }

    fn write_options(&mut self, options: &[String]) {
        if options.is_empty() {
            return;
        }
        self.append(Region::Contents, "[");
        for option in options {
            self.append(Region::Contents, format!("{}{}", option, OPTION_SEPARATOR));
        }
        self.append(Region::Contents, "]");
    }
}

/// `<stem>.tex`, keeping any dots already in the stem
pub fn tex_path(stem: &Path) -> PathBuf {
    let mut path = stem.as_os_str().to_owned();
    path.push(".");
    path.push(TEX_EXTENSION);
    PathBuf::from(path)
}
