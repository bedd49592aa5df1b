//! User-facing notices for rejected cart operations.
//!
//! Cart operations return errors; a [`Notifier`] is how a presentation
//! layer turns them into toasts, banners or log lines.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CartError, CartErrorKind};

/// Presentation locale for notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese.
    #[default]
    #[serde(rename = "pt-BR", alias = "pt")]
    PtBr,
    /// English.
    #[serde(rename = "en", alias = "en-US")]
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PtBr => write!(f, "pt-BR"),
            Self::En => write!(f, "en"),
        }
    }
}

/// A localized message for one rejected operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    #[serde(skip)]
    pub kind: CartErrorKind,
    pub message: String,
}

impl Notice {
    /// Build the notice for `error` in `locale`.
    pub fn from_error(error: &CartError, locale: Locale) -> Self {
        Self {
            kind: error.kind(),
            message: error.message(locale).to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Fire-and-forget sink for notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Emits notices as `warn` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        warn!(kind = ?notice.kind, "{}", notice.message);
    }
}

/// Buffers notices until the presentation layer drains them.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: Mutex<VecDeque<Notice>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notice, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        match self.pending.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().map(|p| p.is_empty()).unwrap_or(true)
    }
}

impl Notifier for NoticeQueue {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push_back(notice.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_locale_config_names() {
        let locale: Locale = serde_json::from_str(r#""pt-BR""#).unwrap();
        assert_eq!(locale, Locale::PtBr);
        let locale: Locale = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(locale, Locale::En);
        assert_eq!(Locale::default().to_string(), "pt-BR");
    }

    #[test]
    fn test_queue_drains_in_order() {
        let queue = NoticeQueue::new();
        let first = CartError::NotInCart(ProductId::new(1));
        let second = CartError::OutOfStock {
            product_id: ProductId::new(2),
            requested: 1,
            available: 0,
        };

        queue.notify(&Notice::from_error(&first, Locale::En));
        queue.notify(&Notice::from_error(&second, Locale::En));

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "Error removing product");
        assert_eq!(drained[1].kind, CartErrorKind::OutOfStock);
        assert!(queue.is_empty());
    }
}
