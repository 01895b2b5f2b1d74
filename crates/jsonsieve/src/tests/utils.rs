use crate::{Match, SieveError, StreamingSieve, Value};

/// Decode a fixture with the host decoder.
pub fn value(json: &str) -> Value {
    serde_json::from_str(json).expect("test fixture is valid JSON")
}

pub fn run(input: &str, patterns: &[&str]) -> Vec<Match> {
    try_run(input, patterns).expect("input should parse")
}

pub fn try_run(input: &str, patterns: &[&str]) -> Result<Vec<Match>, SieveError> {
    let mut sieve = StreamingSieve::new(patterns)?;
    let mut out = sieve.feed(input.as_bytes())?;
    out.extend(sieve.finish()?);
    Ok(out)
}

/// Feed `input` in fixed-size byte chunks, splitting wherever the size
/// lands, including inside multi-byte scalars and escapes.
pub fn run_chunked(
    input: &[u8],
    chunk_size: usize,
    patterns: &[&str],
) -> Result<Vec<Match>, SieveError> {
    let mut sieve = StreamingSieve::new(patterns)?;
    let mut out = Vec::new();
    for piece in input.chunks(chunk_size.max(1)) {
        out.extend(sieve.feed(piece)?);
    }
    out.extend(sieve.finish()?);
    Ok(out)
}

pub fn paths(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.path.as_str()).collect()
}

pub fn matched(path: &str, json: &str) -> Match {
    Match {
        path: path.to_string(),
        value: value(json),
    }
}
