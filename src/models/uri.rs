use std::fmt;
use url::Url;

use super::query::QueryParams;
use crate::error::SignatureError;

/// An absolute URI whose query parameters can be rewritten
///
/// The scheme, authority and path are kept exactly as the caller wrote
/// them. Only the query is re-encoded, so `https://thing.com?a=1` stays
/// free of the trailing `/` a normalizing serializer would add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignableUri {
    prefix: String,
    params: QueryParams,
    fragment: Option<String>,
}

impl SignableUri {
    /// Parse an absolute URI, rejecting anything the WHATWG URL parser rejects.
    ///
    /// Leading and trailing C0 controls and spaces, and tabs or newlines
    /// anywhere, are dropped the same way the URL parser drops them, so the
    /// kept prefix is the text that was actually validated.
    pub fn parse(input: &str) -> Result<Self, SignatureError> {
        let parsed = Url::parse(input).map_err(|source| SignatureError::Parse {
            uri: input.to_string(),
            source,
        })?;

        let cleaned: String = input
            .trim_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect();

        let (rest, fragment) = match cleaned.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (cleaned.as_str(), None),
        };

        let (prefix, query) = match rest.split_once('?') {
            Some((prefix, query)) => (prefix, Some(query)),
            None => (rest, None),
        };

        let plus_as_space = matches!(parsed.scheme(), "http" | "https");
        let params = query
            .map(|q| QueryParams::parse(q, plus_as_space))
            .unwrap_or_default();

        Ok(Self {
            prefix: prefix.to_string(),
            params,
            fragment,
        })
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut QueryParams {
        &mut self.params
    }

    /// Put the query parameters into canonical order.
    pub fn canonicalize(&mut self) {
        self.params.canonicalize();
    }
}

impl fmt::Display for SignableUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        if !self.params.is_empty() {
            write!(f, "?{}", self.params.encode())?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
