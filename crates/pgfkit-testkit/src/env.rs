//! Environment isolation for tests that resolve the LaTeX engine

use std::path::Path;
use std::sync::Mutex;

/// Serializes tests that modify process environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

const OVERRIDES: [&str; 3] = ["PGFKIT_LATEX", "PGFKIT_VIEWER", "PATH"];

/// Run `f` with `PGFKIT_LATEX` pointing at `latex_binary` (or unset), an
/// empty `PATH`, and no viewer override
///
/// The previous values are restored afterwards, even if `f` panics.
pub fn with_isolated_latex_env<F, R>(latex_binary: Option<&Path>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = Restore::capture();

    // SAFETY: ENV_LOCK is held, so no other test touches the environment
    unsafe {
        std::env::set_var("PATH", "");
        std::env::remove_var("PGFKIT_VIEWER");
        match latex_binary {
            Some(binary) => std::env::set_var("PGFKIT_LATEX", binary),
            None => std::env::remove_var("PGFKIT_LATEX"),
        }
    }

    f()
}

struct Restore {
    saved: Vec<(&'static str, Option<std::ffi::OsString>)>,
}

impl Restore {
    fn capture() -> Self {
        Self {
            saved: OVERRIDES
                .iter()
                .map(|key| (*key, std::env::var_os(key)))
                .collect(),
        }
    }
}

impl Drop for Restore {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            // SAFETY: dropped while ENV_LOCK is still held
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
