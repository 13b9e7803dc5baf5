// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Core components for signing REST API requests with a shared secret.
//!
//! This crate provides the building blocks used by the restsign signers:
//!
//! - [`ParameterList`]: ordered name/value pairs rendered as query strings or header maps
//! - [`PathBuilder`]: joins request path segments
//! - [`Env`]: environment access used to load configuration
//! - [`Error`]: the error type shared by every restsign crate
//!
//! ## Example
//!
//! ```
//! use restsign_core::{ParameterList, PathBuilder};
//!
//! let mut query = ParameterList::new();
//! query.add("page", 2).add("tags", vec!["a", "b"]);
//! assert_eq!(query.to_query_string(), "page=2&tags=a,b");
//!
//! let mut path = PathBuilder::new();
//! path.with_segment("files").with_segment("").with_segment("42");
//! assert_eq!(path.to_string(), "files/42");
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod params;
pub use params::{ParamValue, Parameter, ParameterList, ParameterMap};
mod path;
pub use path::PathBuilder;
