// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based driver tests.
//!
//! - `common/` - Shared fixtures
//! - `resolve/` - Symbol resolution through `execute_pass`
//! - `optimize/` - Optimization phases and removed code recovery
//! - `pipeline/` - Whole frontend runs and session isolation
//!
//! ```bash
//! cargo test -p snex_compiler --test phases
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/resolve/mod.rs"]
mod resolve;

#[path = "phases/optimize/mod.rs"]
mod optimize;

#[path = "phases/pipeline/mod.rs"]
mod pipeline;
