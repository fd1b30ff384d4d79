//! Static catalog of known model families for the searchable picker.
//!
//! The catalog is advisory: it feeds the picker and nothing else. A family
//! typed directly by the user does not have to appear here to resolve.

/// One selectable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub family: &'static str,
    pub channel: &'static str,
}

impl ModelDescriptor {
    /// The value shown to (and typed by) the user: `family/channel`.
    pub fn display_value(&self) -> String {
        format!("{}/{}", self.family, self.channel)
    }
}

/// Known families with their release channels, in declaration order.
const FAMILIES: &[(&str, &[&str])] = &[
    ("yandexgpt-lite", &["latest", "rc", "deprecated"]),
    ("yandexgpt", &["latest", "rc", "deprecated"]),
    ("yandexgpt-32k", &["latest", "rc"]),
    ("llama-lite", &["latest"]),
    ("llama", &["latest"]),
];

/// List catalog entries whose display value contains `query`, case
/// insensitively. An empty query returns the full catalog, in declaration
/// order (family first, then channel). Never fails.
pub fn list(query: &str) -> Vec<ModelDescriptor> {
    let needle = query.to_lowercase();
    FAMILIES
        .iter()
        .flat_map(|&(family, channels)| {
            channels
                .iter()
                .map(move |&channel| ModelDescriptor { family, channel })
        })
        .filter(|descriptor| descriptor.display_value().to_lowercase().contains(&needle))
        .collect()
}
