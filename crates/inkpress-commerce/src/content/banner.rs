//! Promotional banners with liveness windows.

use crate::ids::BannerId;
use serde::{Deserialize, Serialize};

/// A promotional banner shown on the home page.
///
/// `starts_at`/`ends_at` are unix seconds; either bound may be absent for
/// an open-ended window. Liveness is computed against a caller-supplied
/// clock so the same logic runs on wasm and in native tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Banner {
    /// Unique banner identifier.
    pub id: BannerId,
    /// Banner title (used as alt text).
    pub title: String,
    /// Banner artwork URL.
    pub image_url: String,
    /// Destination when the banner is clicked.
    #[serde(default)]
    pub link_url: Option<String>,
    /// Sort order position.
    #[serde(default)]
    pub position: i32,
    /// Whether the banner is enabled at all.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Window start, unix seconds.
    #[serde(default)]
    pub starts_at: Option<i64>,
    /// Window end, unix seconds.
    #[serde(default)]
    pub ends_at: Option<i64>,
}

fn default_active() -> bool {
    true
}

impl Banner {
    /// Whether the banner should be shown at time `now` (unix seconds).
    pub fn is_live(&self, now: i64) -> bool {
        self.active
            && self.starts_at.map_or(true, |start| start <= now)
            && self.ends_at.map_or(true, |end| now < end)
    }
}

/// Banners live at `now`, in position order.
pub fn live_banners(items: &[Banner], now: i64) -> Vec<&Banner> {
    let mut live: Vec<&Banner> = items.iter().filter(|b| b.is_live(now)).collect();
    live.sort_by_key(|b| b.position);
    live
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(id: &str, active: bool, starts_at: Option<i64>, ends_at: Option<i64>) -> Banner {
        Banner {
            id: BannerId::new(id),
            title: "Monsoon Sale".to_string(),
            image_url: "https://cdn.example.com/monsoon.jpg".to_string(),
            link_url: None,
            position: 0,
            active,
            starts_at,
            ends_at,
        }
    }

    #[test]
    fn test_open_ended_banner_is_live() {
        assert!(banner("b1", true, None, None).is_live(1_000));
    }

    #[test]
    fn test_inactive_banner_never_live() {
        assert!(!banner("b1", false, None, None).is_live(1_000));
    }

    #[test]
    fn test_window_bounds() {
        let b = banner("b1", true, Some(100), Some(200));
        assert!(!b.is_live(99));
        assert!(b.is_live(100));
        assert!(b.is_live(199));
        // End is exclusive.
        assert!(!b.is_live(200));
    }

    #[test]
    fn test_live_banners_sorted() {
        let mut late = banner("b2", true, None, None);
        late.position = 2;
        let mut early = banner("b1", true, None, None);
        early.position = 1;
        let expired = banner("b3", true, None, Some(50));

        let items = vec![late, expired, early];
        let live = live_banners(&items, 1_000);
        let ids: Vec<_> = live.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2"]);
    }
}
