// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Client-side SDK for Benchbook.
//!
//! - [`ApiClient`] talks to a running benchmarks API and implements
//!   [`RecordStore`](benchbook_storage::RecordStore), so it can stand in for a
//!   local store anywhere one is accepted.
//! - [`Workbench`] keeps the state a results UI works with on top of any store.
//!
//! ```no_run
//! use benchbook_sdk::{ApiClient, Workbench};
//!
//! # async fn example() -> benchbook_core::Result<()> {
//! let client = ApiClient::new("http://localhost:3000")?;
//! let mut bench = Workbench::new(client);
//! bench.load().await?;
//! println!("{} results, mean {:.2}", bench.visible().len(), bench.summary().mean);
//! # Ok(())
//! # }
//! ```

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod client;
pub mod workbench;

pub use client::ApiClient;
pub use workbench::Workbench;
