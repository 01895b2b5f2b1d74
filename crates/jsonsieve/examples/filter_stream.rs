//! Feed a document through the sieve in small chunks and print whatever the
//! patterns select.
//!
//! ```sh
//! cargo run --example filter_stream
//! ```

use jsonsieve::{produce_chunks, StreamingSieve};

const DOCUMENT: &[u8] = br#"{
  "service": "ingest",
  "stats": {"events": 10452, "errors": 3, "uptime_s": 86400.5},
  "events": [
    {"kind": "start", "at": 0},
    {"kind": "flush", "at": 13},
    {"kind": "stop", "at": 86400}
  ],
  "debug": {"huge": ["not", "interesting", {"at": "all"}]}
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut sieve = StreamingSieve::new(["$.events[*]", "$.stats.*"])?;

    let mut matches = Vec::new();
    for chunk in produce_chunks(DOCUMENT, 16) {
        matches.extend(sieve.feed(chunk)?);
    }
    matches.extend(sieve.finish()?);

    for m in matches {
        println!("{} = {}", m.path, m.value);
    }
    Ok(())
}
