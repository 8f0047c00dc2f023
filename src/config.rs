use std::path::PathBuf;

/// Spaces substituted per tab when no usable width argument is given.
pub const DEFAULT_WIDTH: usize = 4;

/// The file-name suffix that selects files during directory traversal.
pub const TARGET_SUFFIX: &str = ".go";

/// Immutable per-run settings, built once from the command line and handed
/// to the resolver and rewriter.
#[derive(Debug, Clone)]
pub struct Config {
    /// The file or directory to convert.
    pub path: PathBuf,
    /// Spaces written in place of each tab byte.
    pub width: usize,
}

impl Config {
    /// Builds a `Config`, applying the width fallback rule: an absent,
    /// non-numeric, or zero width argument falls back to `DEFAULT_WIDTH`.
    pub fn new(path: PathBuf, width_arg: Option<&str>) -> Self {
        let width = width_arg
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|&w| w != 0)
            .unwrap_or(DEFAULT_WIDTH);

        Self { path, width }
    }
}
