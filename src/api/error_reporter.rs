use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::error::SliderErrorKind;

/// Host callback receiving every non-fatal constraint violation.
pub type SliderErrorHandlerFn = Arc<dyn Fn(SliderErrorKind, &str) + Send + Sync + 'static>;

/// Single sink for constraint violations.
///
/// Every report is logged; the host handler, when installed, sees the same
/// kind and message.
#[derive(Clone, Default)]
pub(super) struct ErrorReporter {
    handler: Option<SliderErrorHandlerFn>,
}

impl ErrorReporter {
    pub(super) fn with_handler(handler: SliderErrorHandlerFn) -> Self {
        Self {
            handler: Some(handler),
        }
    }

    pub(super) fn set_handler(&mut self, handler: Option<SliderErrorHandlerFn>) {
        self.handler = handler;
    }

    pub(super) fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub(super) fn report(&self, kind: SliderErrorKind) {
        let message = kind.message();
        warn!(code = kind.code(), kind = ?kind, "{message}");
        if let Some(handler) = &self.handler {
            handler(kind, message);
        }
    }
}

impl fmt::Debug for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorReporter")
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
