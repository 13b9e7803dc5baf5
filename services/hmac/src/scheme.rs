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

use std::fmt;
use std::str::FromStr;

use restsign_core::hash::base64_hmac_sha1;
use restsign_core::hash::base64_hmac_sha256;
use restsign_core::hash::to_websafe_base64;
use restsign_core::Error;
use serde::Deserialize;
use serde::Serialize;

/// Keyed-hash algorithm used to sign the string to sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SignatureScheme {
    /// HMAC-SHA256
    #[default]
    Sha256,
    /// HMAC-SHA1
    Sha1,
}

impl SignatureScheme {
    /// Algorithm identifier, as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureScheme::Sha256 => "sha256",
            SignatureScheme::Sha1 => "sha1",
        }
    }

    /// Sign `content` with `key`, returning standard padded base64.
    pub fn sign(&self, key: &[u8], content: &[u8]) -> String {
        match self {
            SignatureScheme::Sha256 => base64_hmac_sha256(key, content),
            SignatureScheme::Sha1 => base64_hmac_sha1(key, content),
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(SignatureScheme::Sha256),
            "sha1" | "sha-1" => Ok(SignatureScheme::Sha1),
            _ => Err(Error::config_invalid(format!("bad hmac scheme: {s}"))),
        }
    }
}

impl TryFrom<String> for SignatureScheme {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SignatureScheme> for String {
    fn from(value: SignatureScheme) -> Self {
        value.as_str().to_string()
    }
}

/// Sign `data` with `key` using `scheme`, optionally rewriting the base64
/// output into the url safe alphabet.
///
/// Padding is kept; callers decide whether to strip it.
pub fn sign_data(scheme: SignatureScheme, key: &[u8], data: &[u8], websafe: bool) -> String {
    let signature = scheme.sign(key, data);
    if websafe {
        to_websafe_base64(&signature)
    } else {
        signature
    }
}
