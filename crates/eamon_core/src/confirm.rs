use std::io::{BufRead, Write};

use crate::error::DedupError;

pub const AFFIRMATIVE: &str = "yes";

/// Case-insensitive exact match on [`AFFIRMATIVE`], ignoring the line ending.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_end_matches(['\r', '\n'])
        .eq_ignore_ascii_case(AFFIRMATIVE)
}

/// Writes `prompt` and blocks for one line of input. End of input declines.
pub fn confirm<R, W>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool, DedupError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let prompted = write!(output, "{prompt}").and_then(|()| output.flush());
    prompted.map_err(DedupError::Confirmation)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(DedupError::Confirmation)?;
    Ok(read > 0 && is_affirmative(&line))
}
