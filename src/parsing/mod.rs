pub mod response_parser;

pub use response_parser::{extract_json_payload, parse_records};
