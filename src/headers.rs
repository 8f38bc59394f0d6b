use crate::constants::field;
use indexmap::IndexMap;
use std::borrow::Cow;

/// Fields whose values merge by appending rather than replacing.
const APPEND_FIELDS: &[&str] = &[field::VARY];

fn is_append_field(name: &str) -> bool {
    APPEND_FIELDS
        .iter()
        .any(|field| name.eq_ignore_ascii_case(field))
}

fn wire_name(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|byte| byte.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Case-insensitive header collection with HTTP multi-value semantics.
///
/// Field names are stored in their lowercase wire form; insertion order is
/// preserved.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    fields: IndexMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(wire_name(name).as_ref())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(wire_name(name).as_ref())
    }

    /// Replaces any prior value stored under `name`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields
            .insert(wire_name(name).into_owned(), value.into());
    }

    /// Adds `value` under `name`, comma-joining with any prior value.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        let key = wire_name(name).into_owned();
        let value = value.into();
        match self.fields.get_mut(&key) {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => {
                self.fields.insert(key, value);
            }
        }
    }

    /// Comma-joins `value` under `name`, skipping entries the field already
    /// carries when compared case-insensitively. Entries are trimmed and
    /// empty ones dropped, so repeated application never grows the field.
    pub fn append_distinct(&mut self, name: &str, value: &str) {
        let key = wire_name(name).into_owned();
        let mut entries: Vec<String> = self
            .fields
            .get(&key)
            .map(|existing| {
                existing
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let incoming = value.trim();
        if !incoming.is_empty() {
            entries.push(incoming.to_string());
        }

        if entries.is_empty() {
            self.fields.shift_remove(&key);
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if deduped.iter().any(|seen| seen.eq_ignore_ascii_case(&entry)) {
                continue;
            }
            deduped.push(entry);
        }

        self.fields.insert(key, deduped.join(", "));
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.shift_remove(wire_name(name).as_ref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Folds `other` in field by field: append-mode fields comma-join onto
    /// what is already there, every other field replaces it.
    pub fn extend(&mut self, other: Headers) {
        for (name, value) in other.fields {
            if is_append_field(&name) {
                self.append_distinct(&name, &value);
            } else {
                self.fields.insert(name, value);
            }
        }
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.append(name.as_ref(), value);
        }
        headers
    }
}

/// Produces a new collection holding every field of `base`, then every field
/// of `additions` under `extend` semantics: a downstream `vary` survives
/// beside an injected one, while any other repeated field is superseded.
pub fn merge_headers(base: &Headers, additions: Headers) -> Headers {
    let mut merged = base.clone();
    merged.extend(additions);
    merged
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
