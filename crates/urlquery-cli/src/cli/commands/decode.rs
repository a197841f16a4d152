//! `urlquery decode` – list decoded pairs.

use anyhow::Result;
use serde::Serialize;
use urlquery_core::{DecodeError, OrderedMultiMap, QueryParams};

use super::parse_query;

#[derive(Serialize)]
struct DecodeReport<'a> {
    raw: &'a str,
    params: &'a OrderedMultiMap,
    error: Option<String>,
}

pub fn run_decode(raw: &str, json: bool, strict: bool) -> Result<()> {
    if json {
        // JSON carries the error itself, so strict mode only decides the exit status.
        let outcome = QueryParams::from_query_str(raw);
        println!("{}", render_json(&outcome.params, outcome.error.as_ref())?);
        if strict {
            outcome.into_result()?;
        }
        return Ok(());
    }
    let params = parse_query(raw, strict)?;
    print!("{}", render_decode(&params));
    Ok(())
}

/// One `key<TAB>value` line per pair.
pub(crate) fn render_decode(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}\t{value}\n"))
        .collect()
}

fn render_json(params: &QueryParams, error: Option<&DecodeError>) -> Result<String> {
    let report = DecodeReport {
        raw: params.original_raw_query(),
        params: params.as_map(),
        error: error.map(|e| e.to_string()),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_report_shape() {
        let outcome = QueryParams::from_query_str("a=1&b=%zz");
        let json = render_json(&outcome.params, outcome.error.as_ref()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["raw"], "a=1&b=%zz");
        assert_eq!(value["params"][0]["key"], "a");
        assert_eq!(value["params"][0]["value"], "1");
        assert_eq!(value["params"].as_array().unwrap().len(), 1);
        assert_eq!(value["error"], "invalid URL escape \"%zz\"");
    }

    #[test]
    fn json_report_without_error() {
        let outcome = QueryParams::from_query_str("");
        let json = render_json(&outcome.params, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["error"].is_null());
        assert!(value["params"].as_array().unwrap().is_empty());
    }
}
