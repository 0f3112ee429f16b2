//! Console runner for the sequence pipeline demo

use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    seqpipe_demo::run_demo(&mut out)?;
    out.flush()?;
    Ok(())
}
