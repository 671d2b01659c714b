//! Typesetting collaborator seam
//!
//! The builder never runs LaTeX itself. It asks a [`TypesetterFactory`] for a
//! fresh [`Typesetter`], sets whether the result should be opened, and hands
//! over the path of the saved document without its extension.

use crate::error::Result;
use std::path::Path;

/// Something that turns a saved `.tex` file into a viewable document
pub trait Typesetter {
    /// Whether the produced document is opened once typesetting finishes
    fn open_pdf(&self) -> bool;

    fn set_open_pdf(&mut self, open: bool);

    /// Typeset `<stem>.tex`
    ///
    /// Errors are returned to the caller untouched.
    fn typeset_file(&mut self, stem: &Path) -> Result<()>;
}

/// Constructs a typesetter with no arguments
pub type TypesetterFactory = Box<dyn Fn() -> Box<dyn Typesetter>>;
