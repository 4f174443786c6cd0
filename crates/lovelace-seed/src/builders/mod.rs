//! Seed generation pipeline.
//!
//! [`SeedRun`] wires the loader, renderer and writer together for one run.

mod seed_run;

pub use seed_run::{SeedMetrics, SeedResult, SeedRun};
