use serde::{Deserialize, Serialize};

/// Top-level body of every api-sports.io response.
///
/// Only `response` is kept; `get`, `parameters`, `errors` and `paging` are
/// ignored. The payload stays untyped here so it can be cached verbatim.
#[derive(Serialize, Deserialize, Debug)]
pub struct StandingsEnvelope {
    pub response: serde_json::Value,
}
