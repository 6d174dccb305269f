// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod request_context;

pub use request_context::{
    request_context_middleware, ReqContext, RequestContext, RequestContextConfig, X_REQUEST_ID,
};
