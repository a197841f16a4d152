//! `urlquery encode` – canonical re-serialization.

use anyhow::Result;

use super::parse_query;

pub fn run_encode(raw: &str, strict: bool) -> Result<()> {
    let params = parse_query(raw, strict)?;
    println!("{}", params.encode());
    Ok(())
}
