use std::io::{self, BufRead};
use std::os::fd::{AsFd, AsRawFd};

use anyhow::{Context, Result};
use nix::sys::stat::fstat;

/// Reports whether standard input is an interactive terminal.
pub trait Interactive {
    fn is_interactive(&self) -> io::Result<bool>;
}

/// Probes a real file descriptor. The stat call surfaces a broken stream
/// before the terminal check runs.
pub struct FdProbe<F>(pub F);

impl<F: AsFd + AsRawFd> Interactive for FdProbe<F> {
    fn is_interactive(&self) -> io::Result<bool> {
        let stat = fstat(self.0.as_fd()).map_err(io::Error::from)?;
        log::debug!("Input mode {:o}", stat.st_mode);
        Ok(termion::is_tty(&self.0))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("could not query standard input: {0}")]
    Query(#[source] io::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Collected {
    Lines(Vec<String>),
    /// Input is a terminal, nothing was read
    Interactive,
}

/// Reads every line of `reader` unless `probe` says it is a terminal.
/// A trailing line without a terminator is kept.
pub fn collect<P: Interactive, R: BufRead>(probe: &P, reader: R) -> Result<Collected> {
    if probe.is_interactive().map_err(InputError::Query)? {
        return Ok(Collected::Interactive);
    }

    let lines = reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read standard input")?;
    log::debug!("Read {} line(s)", lines.len());
    Ok(Collected::Lines(lines))
}
