//! JSON hand-off from the analysers.
//!
//! ```json
//! [
//!   { "static":  { "description": { "name": "add", "type": "int",
//!                                   "parameters": [{ "type": "int", "name": "a" }],
//!                                   "owner": "Calc" },
//!                  "comment": "Adds." },
//!     "dynamic": { "description": { ... },
//!                  "enter": ["a > 0"], "exit": ["result > 0"],
//!                  "exits": [{ "id": 1, "exits": ["result == a"] }] } }
//! ]
//! ```

use crate::error::Result;
use crate::model::MethodEntry;
use std::io::Read;

/// Read method entries, keeping their order.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<MethodEntry>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse method entries from a string.
pub fn parse_entries(json: &str) -> Result<Vec<MethodEntry>> {
    Ok(serde_json::from_str(json)?)
}
