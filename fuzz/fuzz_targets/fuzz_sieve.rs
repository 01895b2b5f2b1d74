#![no_main]

use arbitrary::Arbitrary;
use jsonsieve::{produce_chunks, Match, SieveError, StreamingSieve};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    parts: u8,
}

fn run(chunks: &[&[u8]]) -> Result<Vec<Match>, SieveError> {
    let mut sieve = StreamingSieve::new(["$", "$.*", "$[*]"])?;
    let mut out = Vec::new();
    for chunk in chunks {
        out.extend(sieve.feed(chunk)?);
    }
    out.extend(sieve.finish()?);
    Ok(out)
}

// Arbitrary bytes must never panic the engine, and the outcome must not
// depend on how the bytes were partitioned into chunks.
fuzz_target!(|input: Input| {
    let parts = usize::from(input.parts % 8) + 1;
    let whole = run(&[&input.bytes[..]]);
    let chunked = run(&produce_chunks(&input.bytes, parts));
    assert_eq!(whole, chunked);
});
