use clap::Parser;
use std::path::PathBuf;

/// Replace hard tabs with spaces, in one file or a whole directory tree.
///
/// USAGE:
///   detab <FILE | DIR>           # convert with the default width (4 spaces)
///   detab <FILE | DIR> <WIDTH>   # convert with a custom width
///   detab v                      # print the version string
///
/// A directory is walked recursively and every `.go` file found in it is
/// converted. A file named directly is converted whatever its suffix.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replace hard tabs with spaces in a file or all .go files in a directory"
)]
pub struct Args {
    /// The file or directory to convert.
    pub path: PathBuf,

    /// Spaces to write per tab. Non-numeric or zero values fall back to 4.
    ///
    /// Kept as a raw string so a bad value can fall back to the default
    /// instead of failing the parse.
    pub width: Option<String>,
}

/// Parses command-line arguments and returns the populated `Args` struct.
pub fn parse_args() -> Args {
    Args::parse()
}
