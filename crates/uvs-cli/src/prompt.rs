//! Interactive choice of a recent project.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use uvs_core::RecentProjectSource;

/// List the editor's recent projects on stderr and read the user's pick.
pub fn ask_project(source: &dyn RecentProjectSource) -> Result<PathBuf> {
    let recents = source.recent_projects()?;
    let stdin = io::stdin();
    select_project(&recents, stdin.lock(), &mut io::stderr())
}

/// Print `recents` as a numbered menu to `output` and read an index from
/// `input`.
pub fn select_project<R: BufRead, W: Write>(
    recents: &[PathBuf],
    mut input: R,
    output: &mut W,
) -> Result<PathBuf> {
    for (i, path) in recents.iter().enumerate() {
        writeln!(output, "{} : {}", i, path.display())?;
    }
    write!(output, "\n> ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read user input")?;

    let index = parse_selection(&line, recents.len())?;
    Ok(recents[index].clone())
}

/// Parse a menu index, rejecting anything outside `0..len`.
pub fn parse_selection(input: &str, len: usize) -> Result<usize> {
    let input = input.trim();
    let index: i64 = input
        .parse()
        .with_context(|| format!("Invalid selection {:?}", input))?;

    if index < 0 || index as u64 >= len as u64 {
        bail!("The index is out of range");
    }
    Ok(index as usize)
}
