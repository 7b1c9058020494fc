//! Cart events published to UI layers
//!
//! ```text
//! CartEvent
//! ├── BadgeChanged: new badge count / visibility / bounce
//! ├── Rendered: sidebar contents re-rendered from a fetch
//! └── VisibilityChanged: sidebar opened or closed
//! ```

use crate::view::{BadgeDisplay, RenderedCart};

/// Default capacity for the cart event channel
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Change to what the cart UI shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    BadgeChanged(BadgeDisplay),
    Rendered(RenderedCart),
    VisibilityChanged {
        open: bool,
        scroll_locked: bool,
    },
}

impl CartEvent {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            CartEvent::BadgeChanged(_) => "badge",
            CartEvent::Rendered(_) => "rendered",
            CartEvent::VisibilityChanged { .. } => "visibility",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kinds() {
        assert_eq!(CartEvent::BadgeChanged(BadgeDisplay::default()).kind(), "badge");
        assert_eq!(
            CartEvent::VisibilityChanged {
                open: true,
                scroll_locked: true
            }
            .kind(),
            "visibility"
        );
    }
}
