//! # TileSwitch CDP
//!
//! Remote-evaluation channel into the conferencing page.
//!
//! The desktop client must be started with remote debugging enabled:
//!
//! ```bash
//! discord --remote-debugging-port=9222
//! ```
//!
//! [`CdpEvaluator`] opens a fresh DevTools connection for every expression and
//! drops it afterwards. The adapters in [`page`] turn evaluations into the
//! engine's `TileSource`, `FocusActivator` and `PageHook` seams.

mod client;
mod error;
mod evaluator;
pub mod page;
mod protocol;
mod session;

pub use client::CdpClient;
pub use error::{CdpError, REMOTE_DEBUGGING_HINT};
pub use evaluator::{CdpEvaluator, RemoteEvaluator};
pub use page::{PageActivator, PageSelectors, PageShortcutHook, PageTileSource};
pub use protocol::{BrowserVersion, CdpRequest, CdpResponse, PageInfo};
pub use session::PageSession;

#[cfg(test)]
mod testing;
