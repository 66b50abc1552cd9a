//! Benchmark support crate for Strata.
//!
//! Holds no library code of its own — the bench targets under
//! `benches/` depend on the workspace crates directly. The crate
//! exists so the benchmarks version together with the rest of the
//! workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]
