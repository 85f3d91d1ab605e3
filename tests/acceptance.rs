//! Acceptance test entry point for sdsgroup
//!
//! These tests drive the `sdsgroup` binary against the real Datadog API and
//! create, modify and destroy scanning groups in the target organization.
//!
//! # Running Tests
//!
//! ```bash
//! DD_API_KEY=... DD_APP_KEY=... cargo test --features acceptance-tests --test acceptance
//! ```
//!
//! Set `DD_HOST` to target a site other than US1. Groups are named
//! `sdsgroup-acctest-*` so leftovers from aborted runs are easy to find.
//!
//! The harness helpers are unit tested on every run; only the tests that call
//! the API are ignored without the feature.

#[path = "acceptance/mod.rs"]
mod acceptance_harness;

pub use acceptance_harness::*;
