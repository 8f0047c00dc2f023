use crate::config::Config;
use crate::errors::{Error, Result};
use crate::resolver;
use std::fs::File;
use std::io::{Read, Write};
use std::iter;
use std::path::Path;

const TAB: u8 = b'\t';
const SPACE: u8 = b' ';

/// The terminal state of rewriting a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Tabs were found and the file was rewritten in place.
    Rewritten,
    /// The file contained no tabs and was left untouched on disk.
    NoTabs,
}

/// Core engine for expanding tab bytes into runs of spaces.
///
/// A `Rewriter` carries the configured width and the running 1-based count
/// of files rewritten so far in this process; the count only advances when a
/// file is actually written back.
pub struct Rewriter {
    width: usize,
    rewritten: usize,
}

impl Rewriter {
    /// Creates a new `Rewriter` that writes `width` spaces per tab.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rewritten: 0,
        }
    }

    /// The number of files rewritten so far.
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    /// Processes a single file, replacing every tab byte with spaces.
    ///
    /// The file is read fully into memory as raw bytes; content never has to
    /// be valid UTF-8. If no tab is found the file is reported and left
    /// untouched. Otherwise the same path is reopened with truncation and
    /// every byte is written back in order, tabs expanded, everything else
    /// verbatim. A failure mid-write can leave the file torn; every error is
    /// fatal, so the run stops right there.
    pub fn rewrite(&mut self, path: &Path) -> Result<Outcome> {
        let content = read_bytes(path)?;

        let tab_count = content.iter().filter(|&&b| b == TAB).count();
        if tab_count == 0 {
            println!("file: {} No tab notation is included", path.display());
            return Ok(Outcome::NoTabs);
        }

        let expanded = expand_tabs(&content, tab_count, self.width);
        write_bytes(path, &expanded)?;

        self.rewritten += 1;
        println!("{} OK: {}", self.rewritten, path.display());
        Ok(Outcome::Rewritten)
    }
}

/// The main entry point for a conversion run.
///
/// Resolves the target path into a file list, then rewrites each file in
/// sequence. The first error aborts the whole run; an empty list (an empty
/// directory) completes without printing anything.
pub fn run_convert(config: &Config) -> Result<()> {
    let files = resolver::resolve(config)?;

    let mut rewriter = Rewriter::new(config.width);
    for file in &files {
        rewriter.rewrite(file)?;
    }

    Ok(())
}

/// Builds the output buffer: every tab becomes `width` spaces, all other
/// bytes keep their value and relative order.
fn expand_tabs(content: &[u8], tab_count: usize, width: usize) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(content.len() - tab_count + tab_count * width);
    for &byte in content {
        if byte == TAB {
            expanded.extend(iter::repeat(SPACE).take(width));
        } else {
            expanded.push(byte);
        }
    }
    expanded
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    Ok(content)
}

fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(content)?;
    file.flush()?;
    Ok(())
}
