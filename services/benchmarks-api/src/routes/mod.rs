// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod benchmarks;
pub mod health;
