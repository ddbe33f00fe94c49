//! # Bifrost Docs Test Suite
//!
//! Cross-crate flows that no single crate can test on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Render pass benchmarks (criterion)
//! └── src/integration/  # bd-01 + bd-02 + bd-03 together
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bd-tests
//! cargo bench -p bd-tests
//! ```

pub mod integration;
