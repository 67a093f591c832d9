// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Curious Corner blog domain.
//!
//! Everything here is host-agnostic and runs natively under `cargo test`:
//!
//! - [`routes`]: the static fragment → page table.
//! - [`session`]: the three persisted values (selected post, comments, likes).
//! - [`core`] and [`ui_state`]: application state and the pure `reduce` step.
//! - [`ui_effects`] and [`app`]: the effect-runner port and the driver that ties
//!   the reducer to a concrete host (browser, tests).

pub mod app;
pub mod comments;
pub mod config;
pub mod core;
pub mod model;
pub mod pagination;
pub mod routes;
pub mod session;
pub mod ui_effects;
pub mod ui_state;
