// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core types for Benchbook.
//!
//! This crate holds the benchmark result data model shared by the store
//! implementations, the query engine, the HTTP service and the clients:
//!
//! - [`record`] - [`BenchmarkResult`] and its replaceable [`BenchmarkFields`]
//! - [`wire`] - conversion to and from the snake_case wire/storage rows
//! - [`registry`] - the [`OptionRegistry`] of selectable field values
//! - [`vocab`] - seed vocabularies and the sample dataset
//! - [`error`] - the shared [`Error`] type

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod record;
pub mod registry;
pub mod vocab;
pub mod wire;

pub use error::{Error, Result};
pub use record::{BenchmarkFields, BenchmarkResult, Direction, Field, MAX_RESULT, NOT_AVAILABLE};
pub use registry::{derive_options, OptionRegistry};
pub use wire::{BenchmarkPayload, StoredRow};
