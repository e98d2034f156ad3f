//! Configuration relay subsystem.
//!
//! # Data Flow
//! ```text
//! GET /xxxxxxxx/clash?url=...
//!     → handler.rs (extract and check `url`)
//!     → fetch.rs (single GET, User-Agent: clash)
//!     → document.rs (YAML bytes → ordered mapping)
//!     → merge.rs (append proxy, prepend rules; contents from preset.rs)
//!     → document.rs (mapping → YAML text)
//!     → 200 application/x-yaml
//! ```
//!
//! Any failure short-circuits into a [`RelayError`] response; no partial
//! output is ever written.

pub mod document;
pub mod error;
pub mod fetch;
pub mod handler;
pub mod merge;
pub mod preset;

pub use error::{RelayError, RelayResult};
pub use fetch::UpstreamClient;
pub use handler::relay_handler;
