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

use log::debug;
use restsign_core::Env;
use restsign_core::Error;
use restsign_core::Result;
use serde::Deserialize;

use crate::constants::*;
use crate::SignatureScheme;

/// Config controls how the string to sign is built and how the signature is
/// encoded.
///
/// Deserializing accepts the option bag keys (`withParameterValues`,
/// `pathPriority`, `hmacSchema`, `websafeBase64`, `padB64`,
/// `trailingNewline`). Missing keys take their defaults and unknown keys are
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render parameters as `name:value` instead of bare values.
    ///
    /// Default: `false`
    #[serde(rename = "withParameterValues")]
    pub with_parameter_values: bool,
    /// Put the path right after the verb. When `false` the path goes last.
    ///
    /// Default: `true`
    #[serde(rename = "pathPriority")]
    pub path_first: bool,
    /// Keyed-hash algorithm.
    ///
    /// Default: [`SignatureScheme::Sha256`]
    #[serde(rename = "hmacSchema")]
    pub signature_scheme: SignatureScheme,
    /// Replace `+` with `-` and `/` with `_` in the signature.
    ///
    /// Default: `true`
    #[serde(rename = "websafeBase64")]
    pub websafe_base64: bool,
    /// Keep base64 padding. When `false` a single `=` is removed.
    ///
    /// Default: `false`
    #[serde(rename = "padB64")]
    pub pad_base64: bool,
    /// End the string to sign with a newline.
    ///
    /// Default: `false`
    #[serde(rename = "trailingNewline")]
    pub trailing_newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            with_parameter_values: false,
            path_first: true,
            signature_scheme: SignatureScheme::Sha256,
            websafe_base64: true,
            pad_base64: false,
            trailing_newline: false,
        }
    }
}

/// A single typed update to [`Config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SigningOption {
    /// See [`Config::with_parameter_values`].
    WithParameterValues(bool),
    /// See [`Config::path_first`].
    PathPriority(bool),
    /// See [`Config::signature_scheme`].
    HmacSchema(SignatureScheme),
    /// See [`Config::websafe_base64`].
    WebsafeBase64(bool),
    /// See [`Config::pad_base64`].
    PadBase64(bool),
    /// See [`Config::trailing_newline`].
    TrailingNewline(bool),
}

impl Config {
    /// Apply a typed option.
    pub fn apply(&mut self, option: SigningOption) {
        match option {
            SigningOption::WithParameterValues(v) => self.with_parameter_values = v,
            SigningOption::PathPriority(v) => self.path_first = v,
            SigningOption::HmacSchema(v) => self.signature_scheme = v,
            SigningOption::WebsafeBase64(v) => self.websafe_base64 = v,
            SigningOption::PadBase64(v) => self.pad_base64 = v,
            SigningOption::TrailingNewline(v) => self.trailing_newline = v,
        }
    }

    /// Set an option by its key.
    ///
    /// Unknown keys are ignored. Returns a config error if `hmacSchema` names
    /// an unknown scheme or a boolean option gets something other than
    /// `true`/`false`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let option = match key {
            WITH_PARAM_VALUES => SigningOption::WithParameterValues(parse_bool(key, value)?),
            PATH_PRIORITY => SigningOption::PathPriority(parse_bool(key, value)?),
            HMAC_SCHEMA => SigningOption::HmacSchema(value.parse()?),
            WEBSAFE_B64 => SigningOption::WebsafeBase64(parse_bool(key, value)?),
            PAD_B64 => SigningOption::PadBase64(parse_bool(key, value)?),
            TRAILING_NEWLINE => SigningOption::TrailingNewline(parse_bool(key, value)?),
            _ => {
                debug!("ignore unknown signing option: {key}");
                return Ok(());
            }
        };

        self.apply(option);
        Ok(())
    }

    /// Load config from environment variables, starting from the defaults.
    pub fn from_env(env: &dyn Env) -> Result<Self> {
        let mut config = Self::default();
        for (var, key) in [
            (RESTSIGN_WITH_PARAMETER_VALUES, WITH_PARAM_VALUES),
            (RESTSIGN_PATH_PRIORITY, PATH_PRIORITY),
            (RESTSIGN_HMAC_SCHEMA, HMAC_SCHEMA),
            (RESTSIGN_WEBSAFE_BASE64, WEBSAFE_B64),
            (RESTSIGN_PAD_B64, PAD_B64),
            (RESTSIGN_TRAILING_NEWLINE, TRAILING_NEWLINE),
        ] {
            if let Some(value) = env.var(var) {
                config.set(key, &value)?;
            }
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(Error::config_invalid(format!(
            "option {key} expects true or false, got: {value}"
        ))),
    }
}
