//! Static payloads used across harnesses.
//!
//! Each payload is raw JSON text, exactly as an endpoint would serve it.

use serde_json::Value;

/// Three rows, one unfinished. Normalises to Zeta and Alpha.
pub const PAYLOAD_BASIC: &str = r#"[
  {"timestamp":"2023-05-01","show_name":"Zeta","review":"9","show_type":"Drama","finished":"yes"},
  {"timestamp":"2022-01-01","show_name":"Alpha","review":"7","show_type":"Comedy","finished":"yes"},
  {"timestamp":"2024-02-01","show_name":"Beta","review":"5","show_type":"Drama","finished":"no"}
]"#;

/// The same rows wrapped in a `data` field.
pub const PAYLOAD_WRAPPED: &str = r#"{"data":[
  {"timestamp":"2023-05-01","show_name":"Zeta","review":"9","show_type":"Drama","finished":"yes"},
  {"timestamp":"2022-01-01","show_name":"Alpha","review":"7","show_type":"Comedy","finished":"yes"},
  {"timestamp":"2024-02-01","show_name":"Beta","review":"5","show_type":"Drama","finished":"no"}
]}"#;

/// Rows with loosely-typed and missing fields.
pub const PAYLOAD_MESSY: &str = r#"[
  {"timestamp":"not-a-date","show_name":"  Padded  ","review":8.0,"finished":" YES "},
  {"timestamp":null,"show_name":42,"review":[1,2],"show_type":{"a":1},"finished":"Yes"},
  {"show_name":"Missing finished"},
  "not an object",
  null,
  {"timestamp":"2021-03-01","show_name":"Truthy","finished":true},
  {"timestamp":"2021-03-01","show_name":"Spelled","finished":"y"}
]"#;

/// Payloads that normalise to an empty set.
pub const PAYLOADS_EMPTY: &[&str] = &[
    "[]",
    "{}",
    r#"{"data":null}"#,
    r#"{"data":{"rows":[]}}"#,
    r#"{"items":[{"show_name":"X","finished":"yes"}]}"#,
    "null",
    "42",
    r#""a string""#,
    "true",
];

pub fn json(src: &str) -> Value {
    serde_json::from_str(src).expect("fixture must be valid JSON")
}
