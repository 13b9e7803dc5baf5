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

use http::header::HeaderName;
use http::HeaderValue;
use http::Method;
use restsign_core::Error;
use restsign_core::ParamValue;
use restsign_core::ParameterMap;
use restsign_core::Result;
use serde::Serialize;

/// A signed, ready to send request descriptor.
///
/// Performing the request is left to whatever http client consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpsOptions {
    /// Host (or base url) the request goes to.
    pub host: String,
    /// Request path, including the query string if any.
    pub path: String,
    /// HTTP verb.
    pub method: String,
    /// Every accumulated header, body headers and, in header mode, the
    /// signature.
    pub headers: ParameterMap,
    /// JSON payload to transmit, if a body was attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl HttpsOptions {
    /// Get a header value by name.
    pub fn header(&self, name: &str) -> Option<&ParamValue> {
        self.headers.get(name)
    }

    /// Build an `http::Request` from this descriptor.
    ///
    /// `host` without a scheme is sent over https.
    pub fn into_request(self) -> Result<http::Request<String>> {
        let method = Method::from_bytes(self.method.as_bytes()).map_err(|e| {
            Error::request_invalid(format!("invalid method: {}", self.method)).with_source(e)
        })?;

        let uri = if self.host.contains("://") {
            format!("{}{}", self.host.trim_end_matches('/'), self.path)
        } else {
            format!("https://{}{}", self.host.trim_end_matches('/'), self.path)
        };

        let mut req = http::Request::builder().method(method).uri(uri);
        for (name, value) in &self.headers {
            req = req.header(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(&value.to_string())?,
            );
        }

        Ok(req.body(self.body.unwrap_or_default())?)
    }
}
