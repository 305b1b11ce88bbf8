//! Discovery of the external ffmpeg/ffprobe executables.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SplitError};

/// Locate an external executable by name.
///
/// Looks in `PATH` first, then falls back to a bundled copy under `./bin`.
pub fn resolve_tool(name: &str) -> Result<PathBuf> {
    if let Ok(path) = which::which(name) {
        debug!("found {} at {}", name, path.display());
        return Ok(path);
    }

    let bundled = Path::new("bin").join(name);
    if let Ok(path) = which::which(&bundled) {
        debug!("using bundled {} at {}", name, path.display());
        return Ok(path);
    }

    Err(SplitError::ToolNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_reported() {
        let err = resolve_tool("clipsplit-no-such-tool").unwrap_err();
        assert!(matches!(err, SplitError::ToolNotFound(_)));
        assert!(err.to_string().contains("clipsplit-no-such-tool"));
    }
}
