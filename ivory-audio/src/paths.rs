use std::path::{Path, PathBuf};

use ivory_types::NoteName;

/// File extension of note samples.
pub const SAMPLE_EXTENSION: &str = "wav";

/// Resolve the note samples directory.
///
/// Fallback chain:
/// 1. `configured` (from `[audio] sounds_dir` in config.toml)
/// 2. `IVORY_SOUNDS_DIR` env var (runtime override)
/// 3. `CARGO_MANIFEST_DIR/../sounds` (compile-time, resolves to the workspace root)
/// 4. `./sounds` relative to CWD
pub fn sounds_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }

    if let Ok(dir) = std::env::var("IVORY_SOUNDS_DIR") {
        return PathBuf::from(dir);
    }

    let compile_time = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../sounds"));
    if compile_time.exists() {
        return compile_time;
    }

    PathBuf::from("sounds")
}

/// `<dir>/<note>.wav`, e.g. `sounds/C#.wav`.
pub fn sample_path(dir: &Path, note: NoteName) -> PathBuf {
    dir.join(format!("{}.{}", note.name(), SAMPLE_EXTENSION))
}
