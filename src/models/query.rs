use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything outside the RFC 3986 unreserved set is percent-encoded.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Insertion-ordered query parameters, one logical value per key
///
/// Keys and values hold the decoded bytes, which need not be UTF-8: `%FF`
/// decodes to the byte 0xFF and encodes back to `%FF`. A key parsed without
/// `=` holds no value and serializes as the bare key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(Vec<u8>, Option<Vec<u8>>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw query string (without the leading `?`).
    ///
    /// Repeated keys collapse: the last value wins and the key keeps the
    /// position of its first occurrence. `plus_as_space` turns `+` into a
    /// space in values, which is what HTML forms mean by it on http(s) URIs.
    pub fn parse(query: &str, plus_as_space: bool) -> Self {
        let mut params = Self::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (pair, None),
            };

            let value = value.map(|v| {
                if plus_as_space {
                    decode(&v.replace('+', " "))
                } else {
                    decode(v)
                }
            });

            params.put(decode(key), value);
        }

        params
    }

    /// Insert a parameter, overwriting any existing value for `key` in place.
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) {
        self.put(key.as_ref().to_vec(), Some(value.as_ref().to_vec()));
    }

    fn put(&mut self, key: Vec<u8>, value: Option<Vec<u8>>) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Value for `key`; `None` when absent or when the key carries no value.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key.as_bytes())
            .and_then(|(_, v)| v.as_deref())
    }

    /// Remove `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key.as_bytes());
        self.pairs.len() != before
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sort into canonical order: byte-wise ascending by key, stable for ties.
    pub fn canonicalize(&mut self) {
        self.pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    /// Serialize in current order as `key=value` pairs joined by `&`.
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            buffer.extend(percent_encode(key, QUERY_COMPONENT));
            if let Some(value) = value {
                buffer.push('=');
                buffer.extend(percent_encode(value, QUERY_COMPONENT));
            }
        }
        buffer
    }
}

fn decode(component: &str) -> Vec<u8> {
    percent_decode_str(component).collect()
}
