//! # Optional Examples
//!
//! Handling possibly-absent values without a sentinel null.
//!
//! ## Patterns Covered
//!
//! 1. **Nullable container** (`nullable`)
//!    - Factories: `present`, `try_present`, `empty`, `from_nullable`
//!    - Combinators: `map`, `map_nullable`, `and_then`, `filter`
//!    - Extraction: eager `get_or_else`, lazy `get_or_else_compute`,
//!      `get_or_throw`, checked `get`, and `if_present`
//!
//! 2. **Sequence pipelines** (`pipeline`)
//!    - Wrapping raw entries lazily
//!    - Formatting only what is present
//!    - Dropping absent entries vs resolving them with a fallback
//!
//! 3. **Named example routines** (`demos`)
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run                 # main pipeline
//! cargo run -- ex03         # eager fallback
//! cargo run -- all          # every routine in order
//! cargo run -- ex04 --config settings.toml
//! ```

pub mod demos;
pub mod error;
pub mod nullable;
pub mod pipeline;
pub mod settings;
pub mod trace;

pub use demos::Demo;
pub use error::{Error, Result};
pub use nullable::Nullable;
pub use pipeline::ExtractMode;
pub use settings::Settings;
pub use trace::Trace;
