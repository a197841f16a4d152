//! CLI command handlers, one per file.

mod decode;
mod encode;
mod escape;
mod get;
mod init_config;

pub use decode::run_decode;
pub use encode::run_encode;
pub use escape::run_escape;
pub use get::run_get;
pub use init_config::run_init_config;

#[cfg(test)]
pub(crate) use decode::render_decode;
#[cfg(test)]
pub(crate) use get::render_get;

use anyhow::{Context, Result};
use urlquery_core::QueryParams;

/// Parse `raw`, failing on a decode error in strict mode and warning otherwise.
pub(crate) fn parse_query(raw: &str, strict: bool) -> Result<QueryParams> {
    let outcome = QueryParams::from_query_str(raw);
    match outcome.error {
        Some(err) if strict => {
            Err(err).with_context(|| format!("query {:?} has undecodable segments", raw))
        }
        Some(err) => {
            tracing::warn!(query = raw, "skipped undecodable segment: {}", err);
            eprintln!("warning: {} (segment skipped)", err);
            Ok(outcome.params)
        }
        None => Ok(outcome.params),
    }
}
