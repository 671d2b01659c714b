use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSource {
    /// `PGFKIT_LATEX` environment variable
    Env,
    /// Path given in the `[latex]` config
    Configured,
    /// Found on the system PATH
    System,
}

impl fmt::Display for EngineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSource::Env => write!(f, "PGFKIT_LATEX"),
            EngineSource::Configured => write!(f, "config path"),
            EngineSource::System => write!(f, "system PATH"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    pub name: String,
    pub source: EngineSource,
    pub path: PathBuf,
}
