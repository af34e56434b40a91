use serde_json::Value;

use crate::error::{Result, ViewerError};

/// Removes every comma that is followed (after optional whitespace) by a
/// closing `}` or `]`.
///
/// GameMaker's file writers leave trailing commas in `.yy` files, which a
/// strict JSON parser rejects. The whitespace itself is kept, so line/column
/// positions in later parse errors still line up with the original file.
pub fn clean_trailing_commas(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b',' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && (bytes[j] == b'}' || bytes[j] == b']') {
                i += 1;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    // Only ASCII commas were removed, so the result is still valid UTF-8.
    String::from_utf8(out).unwrap_or_else(|_| raw.to_string())
}

/// Parses the raw text of a `.yy` file after trailing-comma cleanup.
///
/// Missing fields are the summarizers' problem; the only failure here is
/// syntax that is still malformed once the trailing commas are gone.
pub fn load(raw: &str) -> Result<Value> {
    let cleaned = clean_trailing_commas(raw);
    serde_json::from_str(&cleaned).map_err(|e| ViewerError::Parse {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}
