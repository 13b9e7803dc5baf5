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

/// Option key: include parameter names next to values in the string to sign.
pub const WITH_PARAM_VALUES: &str = "withParameterValues";
/// Option key: place the path before the parameters in the string to sign.
pub const PATH_PRIORITY: &str = "pathPriority";
/// Option key: signature scheme.
pub const HMAC_SCHEMA: &str = "hmacSchema";
/// Option key: url safe base64 alphabet for the signature.
pub const WEBSAFE_B64: &str = "websafeBase64";
/// Option key: keep base64 padding on the signature.
pub const PAD_B64: &str = "padB64";
/// Option key: end the string to sign with a newline.
pub const TRAILING_NEWLINE: &str = "trailingNewline";

// Env values used to load `Config`.
pub const RESTSIGN_WITH_PARAMETER_VALUES: &str = "RESTSIGN_WITH_PARAMETER_VALUES";
pub const RESTSIGN_PATH_PRIORITY: &str = "RESTSIGN_PATH_PRIORITY";
pub const RESTSIGN_HMAC_SCHEMA: &str = "RESTSIGN_HMAC_SCHEMA";
pub const RESTSIGN_WEBSAFE_BASE64: &str = "RESTSIGN_WEBSAFE_BASE64";
pub const RESTSIGN_PAD_B64: &str = "RESTSIGN_PAD_B64";
pub const RESTSIGN_TRAILING_NEWLINE: &str = "RESTSIGN_TRAILING_NEWLINE";

// Headers added for request bodies.
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Characters percent encoded in paths that are not simple absolute paths.
///
/// Everything else, non-ASCII included, is kept verbatim.
pub const PATH_AUTO_ESCAPE: &[char] = &[
    '{', '}', '|', '\\', '^', '`', '<', '>', '"', ' ', '\r', '\n', '\t', '\'',
];
