//! `urlquery escape` – whole query escaped as one component.

use anyhow::Result;

use super::parse_query;

pub fn run_escape(raw: &str, strict: bool) -> Result<()> {
    let params = parse_query(raw, strict)?;
    println!("{}", params.escape());
    Ok(())
}
