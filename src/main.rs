//! sinkgate - pipe text through the gating/sanitizing adapter
//!
//! Usage:
//!   some-tool 2>&1 | sinkgate              One record per input line
//!   some-tool 2>&1 | sinkgate --whole      All input as one record
//!   sinkgate --message "text" --level warn Single record
//!
//! Input is read as bytes; invalid UTF-8 becomes U+FFFD instead of ending
//! the stream.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use sinkgate::logging::{self, gate, LogRecord, Sink, SinkAdapter, WriterSink};
use sinkgate::AdapterError;
use std::io::{self, BufRead, Read};
use tracing::debug;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init_tracing(cli.verbose);

    let mut config = sinkgate::config::load(&cli.config)?;
    cli.apply(&mut config);
    config.validate()?;

    gate::set_debug(config.adapter.debug);
    debug!(
        "debug={} min_level={} tag={}",
        config.adapter.debug, config.adapter.min_level, config.adapter.tag
    );

    let adapter = SinkAdapter::new(
        WriterSink::stderr(config.adapter.min_level),
        &config.adapter.tag,
    );
    let emit = |message: &str| {
        adapter
            .emit(&LogRecord::new(cli.level, adapter.tag(), message))
            .context("Cannot write to stderr")
    };

    if let Some(message) = &cli.message {
        emit(message)?;
    } else if cli.whole {
        let input = read_whole(io::stdin().lock()).context("Cannot read stdin")?;
        emit(&input)?;
    } else {
        for_each_line(io::stdin().lock(), emit)?;
    }

    adapter.sink().flush();
    Ok(())
}

/// Read all of `reader`, replacing invalid UTF-8
fn read_whole(mut reader: impl Read) -> sinkgate::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(AdapterError::from)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Call `on_line` for each `\n`-terminated line, replacing invalid UTF-8
fn for_each_line(
    mut reader: impl BufRead,
    mut on_line: impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(AdapterError::from)
            .context("Cannot read stdin")?;
        if read == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        on_line(&String::from_utf8_lossy(&buf))?;
    }
}
