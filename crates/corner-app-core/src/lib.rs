// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for the Curious Corner blog (config store, JSON service).
//! Keeps browser/runtime adapters thin and framework-agnostic.

pub mod config;
pub mod memory;
