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

//! Shared-secret HMAC signing for REST API requests.
//!
//! [`RequestBuilder`] collects the verb, path, query parameters, headers and
//! body of one request, builds a deterministic string to sign, signs it with
//! the configured [`SignatureScheme`] and places the signature in a header or
//! in the query string.
//!
//! ## Example
//!
//! ```
//! use restsign_hmac::RequestBuilder;
//!
//! let opts = RequestBuilder::new("http://test.com", "GET", "/api/v1/test", "123456789")
//!     .as_headers("x-test-")
//!     .with_header("x-test-1", "1")
//!     .with_header("x-test-2", "2")
//!     .with_header("x-test-3", "3")
//!     .to_https_options("signature");
//!
//! assert_eq!(
//!     opts.header("signature").map(|v| v.to_string()).as_deref(),
//!     Some("aSt651CHcZHEJx8iZkJcIGp6hCu_Mh0Rd_08NfqQ3Q4")
//! );
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;
pub use constants::{
    HMAC_SCHEMA, PAD_B64, PATH_PRIORITY, TRAILING_NEWLINE, WEBSAFE_B64, WITH_PARAM_VALUES,
};

mod config;
pub use config::{Config, SigningOption};

mod scheme;
pub use scheme::{sign_data, SignatureScheme};

mod descriptor;
pub use descriptor::HttpsOptions;

mod builder;
pub use builder::{Placement, RequestBuilder};

pub use restsign_core::hash::to_websafe_base64;
