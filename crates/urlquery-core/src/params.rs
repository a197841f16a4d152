//! Query parameters that remember the raw string they were parsed from.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::{ArityError, DecodeError};
use crate::multimap::{Iter, OrderedMultiMap};

/// Ordered query parameters, mirroring the usual `get`/`get_all` interface
/// while keeping pair order and duplicate keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    map: OrderedMultiMap,
    original_raw_query: String,
}

/// Result of parsing a raw query: the params that decoded, and the first
/// decode error if some segment did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub params: QueryParams,
    pub error: Option<DecodeError>,
}

impl ParseOutcome {
    /// Fails on any decode error, discarding the partial params.
    pub fn into_result(self) -> Result<QueryParams, DecodeError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.params),
        }
    }
}

impl QueryParams {
    /// Builds params from `[key, value]` pairs. Every pair must hold exactly
    /// two elements. The original raw query is left empty.
    pub fn new<I, P, S>(pairs: I) -> Result<Self, ArityError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[S]>,
        S: AsRef<str>,
    {
        Ok(Self {
            map: OrderedMultiMap::from_pairs(pairs)?,
            original_raw_query: String::new(),
        })
    }

    /// Parses a raw query string such as `"foo=bar&baz=taz"`.
    ///
    /// `raw` is kept verbatim (leading `?` and spaces included) and is
    /// available through [`original_raw_query`](Self::original_raw_query).
    /// Segments that fail to decode are dropped; the first such error is
    /// returned next to everything that did decode.
    pub fn from_query_str(raw: &str) -> ParseOutcome {
        let decoded = codec::decode(raw);
        let map = decoded.pairs.into_iter().collect();
        ParseOutcome {
            params: Self {
                map,
                original_raw_query: raw.to_string(),
            },
            error: decoded.error,
        }
    }

    /// `key=value&...` in insertion order, no escaping.
    pub fn encode(&self) -> String {
        codec::encode(&self.map)
    }

    /// The encoded query escaped as one query component (`=` and `&` included).
    pub fn escape(&self) -> String {
        codec::escape(&self.map)
    }

    /// The raw string given to [`from_query_str`](Self::from_query_str), or `""`
    /// when built from pairs.
    pub fn original_raw_query(&self) -> &str {
        &self.original_raw_query
    }

    pub fn get(&self, key: &str) -> &str {
        self.map.get(key)
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.map.get_all(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.append(key, value);
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.set(key, value);
    }

    pub fn remove(&mut self, key: &str) -> Vec<String> {
        self.map.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.map.iter()
    }

    pub fn as_map(&self) -> &OrderedMultiMap {
        &self.map
    }

    pub fn into_map(self) -> OrderedMultiMap {
        self.map
    }
}

impl From<OrderedMultiMap> for QueryParams {
    fn from(map: OrderedMultiMap) -> Self {
        Self {
            map,
            original_raw_query: String::new(),
        }
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.map, f)
    }
}

/// Strict parse: any decode error fails the whole conversion.
impl FromStr for QueryParams {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_query_str(s).into_result()
    }
}
