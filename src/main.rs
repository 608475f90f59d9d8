#![cfg_attr(not(windows), allow(dead_code))]

pub mod app;
pub mod desktop;
pub mod error;
pub mod handle;
pub mod locator;
pub mod logger;
pub mod options;
#[cfg(windows)]
pub mod win32;
#[cfg(test)]
mod fake;

use std::{error::Error, process::ExitCode};
use clap::Parser;
use options::Options;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let opts = Options::parse();
    let subscriber = logger::build(opts.quiet, opts.log_file.as_deref())?;
    let code = tracing::subscriber::with_default(subscriber, || run(&opts))?;
    Ok(ExitCode::from(code))
}

#[cfg(windows)]
fn run(opts: &Options) -> error::Result<u8> {
    use app::App;
    use win32::Win32Desktop;

    tracing::debug!(?opts, "starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    App::new(opts.intent(), Win32Desktop::new()).run()
}

#[cfg(not(windows))]
fn run(_opts: &Options) -> error::Result<u8> {
    Err(error::OsdError::Unsupported)
}
