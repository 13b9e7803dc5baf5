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

//! Builder for HMAC signed REST requests.

use std::fmt::Debug;
use std::fmt::Formatter;

use log::debug;
use percent_encoding::percent_encode_byte;
use restsign_core::utils::Redact;
use restsign_core::ParamValue;
use restsign_core::ParameterList;
use restsign_core::PathBuilder;
use restsign_core::Result;
use serde_json::Value;

use crate::constants::*;
use crate::scheme::sign_data;
use crate::Config;
use crate::HttpsOptions;
use crate::SigningOption;

/// Where the signature ends up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Signature goes into a header. Only headers matching `prefix` are
    /// signed.
    Header {
        /// Prefix selecting the signed headers.
        prefix: String,
    },
    /// Signature goes into the query string. Every header is signed.
    #[default]
    Query,
}

/// RequestBuilder accumulates one request and signs it.
///
/// Create one builder per request. Finalization ([`RequestBuilder::calculate_signature`],
/// [`RequestBuilder::to_https_options`]) never mutates the builder, so calling
/// it again without reconfiguring yields the same result.
///
/// ## String to sign
///
/// ```text
/// VERB + "\n" +
/// [PATH + "\n"]              (path first)
/// PARAMETERS sorted by name, joined by "\n"
/// ["\n" + BODY]
/// ["\n" + PATH]              (path last)
/// ["\n"]                     (trailing newline)
/// ```
#[derive(Clone)]
pub struct RequestBuilder {
    host: String,
    verb: String,
    path: String,
    key: Vec<u8>,

    paths: PathBuilder,
    headers: ParameterList,
    query: ParameterList,
    body: Option<Value>,
    placement: Placement,
    config: Config,
}

impl Debug for RequestBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let key = String::from_utf8_lossy(&self.key);
        f.debug_struct("RequestBuilder")
            .field("host", &self.host)
            .field("verb", &self.verb)
            .field("path", &self.path)
            .field("key", &Redact::from(&*key))
            .field("paths", &self.paths)
            .field("headers", &self.headers)
            .field("query", &self.query)
            .field("body", &self.body)
            .field("placement", &self.placement)
            .field("config", &self.config)
            .finish()
    }
}

/// Headers derived from the builder for one finalization.
struct Headers {
    /// Headers that take part in the string to sign.
    signing: ParameterList,
    /// Headers sent with the request.
    all: ParameterList,
}

impl RequestBuilder {
    /// Create a builder with the default [`Config`].
    pub fn new(
        host: impl Into<String>,
        verb: impl Into<String>,
        path: impl Into<String>,
        key: impl AsRef<[u8]>,
    ) -> Self {
        Self {
            host: host.into(),
            verb: verb.into(),
            path: path.into(),
            key: key.as_ref().to_vec(),

            paths: PathBuilder::new(),
            headers: ParameterList::new(),
            query: ParameterList::new(),
            body: None,
            placement: Placement::default(),
            config: Config::default(),
        }
    }

    /// Replace the whole config.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Apply a typed option.
    pub fn with_option(mut self, option: SigningOption) -> Self {
        self.config.apply(option);
        self
    }

    /// Apply an option by its key, see [`Config::set`].
    ///
    /// Fails on an unknown signature scheme.
    pub fn try_with_option(mut self, key: &str, value: &str) -> Result<Self> {
        self.config.set(key, value)?;
        Ok(self)
    }

    /// Attach a JSON body. `Value::Null` removes the body.
    pub fn with_post_data(mut self, body: impl Into<Value>) -> Self {
        self.body = match body.into() {
            Value::Null => None,
            v => Some(v),
        };
        self
    }

    /// Send the signature as a header and sign only headers matching `prefix`.
    pub fn as_headers(mut self, prefix: impl Into<String>) -> Self {
        self.placement = Placement::Header {
            prefix: prefix.into(),
        };
        self
    }

    /// Send the signature as a query parameter.
    pub fn as_query_params(mut self) -> Self {
        self.placement = Placement::Query;
        self
    }

    /// Append a path segment, empty segments are skipped.
    pub fn with_path_segment(mut self, segment: impl AsRef<str>) -> Self {
        self.paths.with_segment(segment);
        self
    }

    /// Append a query parameter.
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.query.add(name, value);
        self
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Current config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current signature placement.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    fn split_headers(&self) -> Headers {
        let signing = match &self.placement {
            Placement::Header { prefix } => self.headers.with_prefix_filter(prefix),
            Placement::Query => self.headers.clone(),
        };

        let mut all = self.headers.clone();
        if let Some(body) = &self.body {
            all.add(CONTENT_LENGTH, body.to_string().len())
                .add(CONTENT_TYPE, APPLICATION_JSON);
        }

        Headers { signing, all }
    }

    /// Path used in the string to sign: base path plus segments, parsed as
    /// a url path.
    fn request_path(&self) -> String {
        resolve_path(&format!("{}{}", self.path, self.paths))
    }

    /// Body as it appears in the string to sign.
    ///
    /// Empty strings, zero, and `false` are left out.
    fn signing_body(&self) -> Option<String> {
        match self.body.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            v => Some(v.to_string()),
        }
    }

    /// Build the string to sign.
    pub fn string_to_sign(&self) -> String {
        let mut params = self.query.clone();
        params.add_all(self.split_headers().signing);
        params.sort_by_name();
        debug!("signing {} parameters", params.len());

        let path = self.request_path();

        let mut s = String::with_capacity(64);
        s.push_str(&self.verb);
        s.push('\n');
        if self.config.path_first {
            s.push_str(&path);
            s.push('\n');
        }

        let rendered = if self.config.with_parameter_values {
            params
                .iter()
                .map(|p| format!("{}:{}", p.name, p.value))
                .collect::<Vec<_>>()
        } else {
            params
                .iter()
                .map(|p| p.value.to_string())
                .collect::<Vec<_>>()
        };
        s.push_str(&rendered.join("\n"));

        if let Some(body) = self.signing_body() {
            s.push('\n');
            s.push_str(&body);
        }
        if !self.config.path_first {
            s.push('\n');
            s.push_str(&path);
        }
        if self.config.trailing_newline {
            s.push('\n');
        }

        debug!("string to sign: {s:?}");
        s
    }

    /// Sign the request and return the encoded signature.
    pub fn calculate_signature(&self) -> String {
        let mut signature = sign_data(
            self.config.signature_scheme,
            &self.key,
            self.string_to_sign().as_bytes(),
            self.config.websafe_base64,
        );

        // Only the first `=` is removed.
        if !self.config.pad_base64 {
            if let Some(idx) = signature.find('=') {
                signature.remove(idx);
            }
        }

        signature
    }

    /// Sign the request and build the descriptor, placing the signature under
    /// `signature_param`.
    pub fn to_https_options(&self, signature_param: &str) -> HttpsOptions {
        let signature = self.calculate_signature();
        let Headers { mut all, .. } = self.split_headers();
        let mut query = self.query.clone();

        match self.placement {
            Placement::Header { .. } => all.add(signature_param, signature),
            Placement::Query => query.add(signature_param, signature),
        };

        let mut path = format!("{}{}", self.path, self.paths);
        if query.has_entries() {
            path.push('?');
            path.push_str(&query.to_query_string());
        }

        HttpsOptions {
            host: self.host.clone(),
            path,
            method: self.verb.clone(),
            headers: all.to_header_map().unwrap_or_default(),
            body: self.body.as_ref().map(Value::to_string),
        }
    }
}

/// Parse `raw` like a url and keep only its path.
///
/// Backslashes before the query turn into `/`. A simple absolute path
/// (`/...` without whitespace or fragment) is only cut at `?`. Anything else
/// drops a leading `scheme://authority`, percent encodes the
/// [`PATH_AUTO_ESCAPE`] characters and is cut at the first `?` or `#`.
fn resolve_path(raw: &str) -> String {
    let raw = raw.trim();
    let query_start = raw.find(&['?', '#'][..]).unwrap_or(raw.len());
    let rest = format!(
        "{}{}",
        raw[..query_start].replace('\\', "/"),
        &raw[query_start..]
    );

    if is_simple_path(&rest) {
        let end = rest.find('?').unwrap_or(rest.len());
        return rest[..end].to_string();
    }

    let mut rest = rest.as_str();
    let mut absolute = false;
    if let Some(idx) = rest.find("://") {
        let scheme = &rest[..idx];
        let valid_scheme = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if valid_scheme {
            let after = &rest[idx + 3..];
            let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
            rest = &after[end..];
            absolute = true;
        }
    }

    let end = rest.find(&['?', '#'][..]).unwrap_or(rest.len());
    let path = &rest[..end];
    if path.is_empty() && absolute {
        return "/".to_string();
    }

    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if PATH_AUTO_ESCAPE.contains(&c) {
            // Auto escaped characters are all ASCII.
            out.push_str(percent_encode_byte(c as u8));
        } else {
            out.push(c);
        }
    }
    out
}

/// `/` or `//` not followed by another `/`, without whitespace or `#`.
fn is_simple_path(s: &str) -> bool {
    let Some(body) = s.strip_prefix("//").or_else(|| s.strip_prefix('/')) else {
        return false;
    };

    !body.starts_with('/') && !s.contains('#') && !s.chars().any(char::is_whitespace)
}
