//! Template module - named-region substitution for document skeletons
//!
//! A template is plain LaTeX with `$region` holes. It is parsed once into
//! text and region slots, so rendering itself cannot fail.
//!
//! ## Syntax
//!
//! - Placeholders: `$region` or `${region}` (braces separate a name from
//!   following letters)
//! - `$$` renders as a single `$`
//! - Everything else is literal text: `$` not followed by a region name,
//!   braces and backslashes are kept exactly as written
//! - Substituted text is inserted verbatim, no escaping is applied

mod tokenize;

#[cfg(test)]
mod tests;

use crate::region::{Region, RegionMap};
use tokenize::{TokenKind, tokenize};

/// The standalone pgfplots document every builder starts from
pub const DEFAULT_TEMPLATE: &str = r"
\documentclass{standalone}
\usepackage{pgfplots}
\pgfplotsset{compat=1.5.1}
$tikz_header
\begin{document}
\begin{tikzpicture}
[$tikz_options
]
\begin{axis}
[$axis_options
]
$_contents

$footer

\end{axis}
$tikz_footer
\end{tikzpicture}
\end{document}
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Region),
}

/// A parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text
    ///
    /// Never fails: text that is not a known placeholder is kept as-is.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut cursor = 0;

        for token in tokenize(source) {
            text.push_str(&source[cursor..token.start]);
            match token.kind {
                TokenKind::Dollar => text.push('$'),
                TokenKind::Placeholder(region) => {
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    segments.push(Segment::Slot(region));
                }
            }
            cursor = token.start + token.length;
        }

        text.push_str(&source[cursor..]);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Self { segments }
    }

    /// Regions referenced by this template, in order of appearance
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(region) => Some(*region),
            Segment::Text(_) => None,
        })
    }

    /// Substitute each region's newline-joined fragments
    pub fn render(&self, regions: &RegionMap) -> String {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Slot(region) => output.push_str(&regions.joined(*region)),
            }
        }
        output
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}
