//! Best-effort site icons derived from an entry's host.

use url::Url;

/// Default icon edge length requested from the favicon service.
pub const DEFAULT_ICON_SIZE: u16 = 64;

/// Maps an entry URL to an icon image address.
///
/// Implementations must never fail loudly: an address they cannot handle maps to `None`
/// and the card is drawn without an icon.
pub trait IconProvider: Send + Sync {
    /// Return the icon address for `url`, if one can be derived.
    fn icon_for(&self, url: &str) -> Option<String>;
}

/// Icon lookup through the public Google favicon endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaviconService {
    /// Requested icon size in pixels.
    pub size: u16,
}

impl Default for FaviconService {
    fn default() -> Self {
        Self {
            size: DEFAULT_ICON_SIZE,
        }
    }
}

impl IconProvider for FaviconService {
    fn icon_for(&self, url: &str) -> Option<String> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str().filter(|h| !h.is_empty())?;
        Some(format!(
            "https://www.google.com/s2/favicons?sz={}&domain={host}",
            self.size
        ))
    }
}

/// Provider that never yields an icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoIcons;

impl IconProvider for NoIcons {
    fn icon_for(&self, _url: &str) -> Option<String> {
        None
    }
}
