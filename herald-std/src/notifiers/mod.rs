//! Standard notifier implementations.

pub mod filter;
pub mod logging;
pub mod typed;

pub use filter::FilterNotifier;
pub use logging::LoggingNotifier;
pub use typed::{TypedNotifier, typed};
