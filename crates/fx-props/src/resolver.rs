//! Label to native-key resolution.

use crate::error::{PropertyError, PropertyResult};

/// Resolves caller-facing property labels to an object's native keys.
///
/// The alias table maps native key to display label (`PROP_MS_0` to
/// `Temperature`) and is supplied by the host, usually from the simulator's
/// resource tables. Entries keep the order they were supplied in.
#[derive(Debug, Clone, Default)]
pub struct PropertyResolver {
    aliases: Vec<(String, String)>,
}

impl PropertyResolver {
    /// Create from `(native key, label)` pairs, in lookup order.
    pub fn new<I, K, L>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            aliases: aliases
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
        }
    }

    /// Resolver with no aliases; only direct key matches succeed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Resolve `label` against the keys an object exposes.
    ///
    /// A key equal to `label` wins. Otherwise the first alias entry whose label
    /// is `label` and whose key is available is used.
    pub fn resolve_key<'k, S>(&self, label: &str, available: &'k [S]) -> Option<&'k str>
    where
        S: AsRef<str>,
    {
        let keys = || available.iter().map(|k| k.as_ref());
        if let Some(key) = keys().find(|k| *k == label) {
            return Some(key);
        }
        self.aliases
            .iter()
            .filter(|(_, alias_label)| alias_label == label)
            .find_map(|(alias_key, _)| keys().find(|k| *k == alias_key.as_str()))
    }

    /// [`Self::resolve_key`], failing with `UnrecognizedProperty` on `object`.
    pub fn require_key<'k, S>(
        &self,
        label: &str,
        available: &'k [S],
        object: &str,
    ) -> PropertyResult<&'k str>
    where
        S: AsRef<str>,
    {
        self.resolve_key(label, available)
            .ok_or_else(|| PropertyError::UnrecognizedProperty {
                label: label.to_string(),
                object: object.to_string(),
            })
    }

    /// Display label of a native key, if the table has one.
    pub fn label_for(&self, key: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    /// Display label of a native key, falling back to the key itself.
    pub fn display_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.label_for(key).unwrap_or(key)
    }
}

impl<K, L> FromIterator<(K, L)> for PropertyResolver
where
    K: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
