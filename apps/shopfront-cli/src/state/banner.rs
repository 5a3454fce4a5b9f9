//! Short-lived notice shown above the product list after an add.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use shopfront_core::Clock;

/// How long a notice stays visible.
pub const BANNER_DURATION_SECS: i64 = 2;

pub const ADDED_TO_CART: &str = "Product added to cart!";

#[derive(Debug, Clone)]
struct Notice {
    message: String,
    expires_at: DateTime<Utc>,
}

/// App-managed banner state. Expiry is checked on read.
pub struct BannerState {
    clock: Arc<dyn Clock>,
    ttl: Duration,
    current: Mutex<Option<Notice>>,
}

impl BannerState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        BannerState {
            clock,
            ttl: Duration::seconds(BANNER_DURATION_SECS),
            current: Mutex::new(None),
        }
    }

    /// Shows `message`, replacing any notice still on screen.
    pub fn show(&self, message: impl Into<String>) {
        let notice = Notice {
            message: message.into(),
            expires_at: self.clock.now() + self.ttl,
        };
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(notice);
    }

    /// The visible notice, if it has not expired yet.
    pub fn current(&self) -> Option<String> {
        let now = self.clock.now();
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        match current.as_ref() {
            Some(notice) if now < notice.expires_at => Some(notice.message.clone()),
            Some(_) => {
                *current = None;
                None
            }
            None => None,
        }
    }
}

impl std::fmt::Debug for BannerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BannerState")
            .field("ttl", &self.ttl)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shopfront_core::ManualClock;

    #[test]
    fn test_banner_expires_after_two_seconds() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
        ));
        let banner = BannerState::new(clock.clone());
        assert_eq!(banner.current(), None);

        banner.show(ADDED_TO_CART);
        assert_eq!(banner.current().as_deref(), Some(ADDED_TO_CART));

        clock.advance(Duration::milliseconds(1999));
        assert!(banner.current().is_some());

        clock.advance(Duration::milliseconds(1));
        assert_eq!(banner.current(), None);
    }

    #[test]
    fn test_new_notice_restarts_the_timer() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
        ));
        let banner = BannerState::new(clock.clone());

        banner.show("first");
        clock.advance(Duration::milliseconds(1500));
        banner.show("second");
        clock.advance(Duration::milliseconds(1500));

        assert_eq!(banner.current().as_deref(), Some("second"));
    }
}
