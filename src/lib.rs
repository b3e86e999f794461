//! # stash
//!
//! A local flat-file secret store for shell-environment bootstrapping, with:
//! - Arbitrary byte-string keys and values (binary-safe, newline-safe)
//! - A human-inspectable line-oriented store file
//! - Atomic full-file rewrites on every mutation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  CLI (stash)                    │
//! │          set / get / del / list / dump          │
//! └────────────────────────┬────────────────────────┘
//!                          │
//! ┌────────────────────────▼────────────────────────┐
//! │                     Store                       │
//! │        read → filter/insert → rewrite           │
//! └───────┬────────────────┬────────────────┬───────┘
//!         │                │                │
//!         ▼                ▼                ▼
//!  ┌────────────┐   ┌────────────┐   ┌────────────┐
//!  │   Reader   │   │   Query    │   │   Writer   │
//!  └──────┬─────┘   └────────────┘   └──────┬─────┘
//!         │                                 │
//!         ▼                                 ▼
//!  ┌─────────────────────────────────────────────┐
//!  │        Record ⇄ line (percent + quote)      │
//!  └─────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod record;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{Result, StashError};
pub use record::Record;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of stash
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
