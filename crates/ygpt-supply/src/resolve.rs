//! Resolution of user-entered model identifiers into canonical resource URIs.

use std::fmt;

/// A fully qualified model resource URI, `scheme://tenant/family[/channel]`.
///
/// Construction goes through [`resolve`], so the client factory only ever
/// sees a qualified URI. Nothing here checks that the target exists; a
/// nonsense identifier produces a nonsense URI that fails at the client
/// layer instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelUri(String);

impl ModelUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModelUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// URI prefixes the completion service understands.
const QUALIFIED_PREFIXES: &[&str] = &["gpt://", "ds://"];

/// Turn a user-entered value into a [`ModelUri`].
///
/// Already-qualified URIs pass through unchanged, keeping whatever tenant
/// they name — an explicit URI overrides the credential's folder. Anything
/// else is treated as a short catalog form and prefixed with
/// `gpt://{folder_id}/`.
///
/// Short forms always get the `gpt` scheme, so `ds`-only models are
/// reachable only by typing the full URI.
pub fn resolve(raw: &str, folder_id: &str) -> ModelUri {
    if QUALIFIED_PREFIXES
        .iter()
        .any(|prefix| raw.starts_with(prefix))
    {
        ModelUri(raw.to_string())
    } else {
        ModelUri(format!("gpt://{folder_id}/{raw}"))
    }
}
