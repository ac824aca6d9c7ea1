use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use mineswep_core::Difficulty;
use mineswep_protocol::{Intent, Reply};

mod session;

/// Plays minesweeper over stdin/stdout: one JSON intent per input line, one
/// JSON reply per output line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Starting difficulty
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let mut session = session::Session::new(args.difficulty, seed)
        .with_context(|| format!("Could not start a {} game", args.difficulty))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_reply(&mut out, &session.state())?;

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Could not read intent")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match Intent::parse(&line) {
            Ok(intent) => session.handle(intent),
            Err(reason) => {
                log::warn!("Ignoring malformed line: {line}");
                Reply::Rejected { reason }
            }
        };
        write_reply(&mut out, &reply)?;
    }

    log::debug!("Input closed, exiting");
    Ok(())
}

fn write_reply(out: &mut impl Write, reply: &Reply) -> anyhow::Result<()> {
    let line = reply.to_line().context("Could not encode reply")?;
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
