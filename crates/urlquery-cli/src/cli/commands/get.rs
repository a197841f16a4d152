//! `urlquery get` – look up one key.

use anyhow::Result;
use urlquery_core::QueryParams;

use super::parse_query;

pub fn run_get(raw: &str, key: &str, all: bool, strict: bool) -> Result<()> {
    let params = parse_query(raw, strict)?;
    if !params.contains_key(key) {
        tracing::debug!(key, "key not present in query");
    }
    print!("{}", render_get(&params, key, all));
    Ok(())
}

/// First value (or every value when `all`), each on its own line.
/// An absent key prints an empty line without `all` and nothing with it.
pub(crate) fn render_get(params: &QueryParams, key: &str, all: bool) -> String {
    if all {
        params
            .get_all(key)
            .into_iter()
            .map(|value| format!("{value}\n"))
            .collect()
    } else {
        format!("{}\n", params.get(key))
    }
}
