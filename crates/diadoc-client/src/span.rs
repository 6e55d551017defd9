//! Parent selection for component spans.

use tracing::{Id, Span};

/// The injected span if one was given, otherwise the caller's current span.
pub(crate) fn parent(injected: &Span) -> Option<Id> {
    injected.id().or_else(|| Span::current().id())
}
