//! On-disk representation shared by the enumerated kinds.
//!
//! Definition files may spell a kind either by name (`specific`) or by its
//! numeric code (`3`).

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum KindRepr {
    Code(u64),
    Name(String),
}
