//! Logging notifier for event observation.

use herald_core::{BoxError, Event, Notifier};

/// A notifier that logs events for debugging/observation.
///
/// Never fails. Without the `tracing` feature it does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn notify(&self, event: &dyn Event) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(event_type = event.event_name(), ?event, "event raised");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = event; // Suppress unused warning
        }
        Ok(())
    }
}
