use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use crate::search::engine::SearchEngine;

pub const PROMPT: &str = "Enter a query:";

/// Interactive loop: prompt, read a line, answer it, prompt again.
///
/// Lines are decoded lossily, so a line that is not valid UTF-8 still gets
/// an answer. Only end of input or a read/write failure stops the loop.
pub fn run_queries<R: BufRead, W: Write>(
    engine: &SearchEngine,
    mut input: R,
    mut out: W,
) -> io::Result<usize> {
    let mut buf = Vec::new();
    let mut answered = 0;

    writeln!(out, "{}", PROMPT)?;
    out.flush()?;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = decode_line(&buf);
        if matches!(line, Cow::Owned(_)) {
            debug!(bytes = buf.len(), "query line is not valid UTF-8");
        }

        writeln!(out, "{}", engine.respond(&line))?;
        writeln!(out, "{}", PROMPT)?;
        out.flush()?;
        answered += 1;
    }

    info!(answered, "input closed");
    Ok(answered)
}

/// Batch mode: one answer line per query, no prompts.
pub fn answer_queries<W: Write>(
    engine: &SearchEngine,
    queries: &[String],
    mut out: W,
) -> io::Result<()> {
    for query in queries {
        writeln!(out, "{}", engine.respond(query))?;
    }
    out.flush()
}

fn decode_line(buf: &[u8]) -> Cow<'_, str> {
    let mut end = buf.len();
    if buf[..end].ends_with(b"\n") {
        end -= 1;
    }
    if buf[..end].ends_with(b"\r") {
        end -= 1;
    }
    String::from_utf8_lossy(&buf[..end])
}
