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

use super::{header_request, header_str};
use anyhow::Result;
use pretty_assertions::assert_eq;
use restsign_hmac::{SignatureScheme, SigningOption, PAD_B64, WEBSAFE_B64, WITH_PARAM_VALUES};

#[test]
fn test_header_mode_default_options() {
    let opts = header_request().to_https_options("signature");

    for name in ["x-test-1", "x-test-2", "x-test-3", "signature"] {
        assert!(opts.header(name).is_some(), "header {name} must exist");
    }
    assert_eq!(
        header_str(&opts, "signature").as_deref(),
        Some("aSt651CHcZHEJx8iZkJcIGp6hCu_Mh0Rd_08NfqQ3Q4")
    );
}

#[test]
fn test_header_mode_with_values() {
    let opts = header_request()
        .with_option(SigningOption::WithParameterValues(true))
        .to_https_options("signature");

    assert_eq!(
        header_str(&opts, "signature").as_deref(),
        Some("HBfQJRskh8J4PZDopdGaGbBcRz5Vs8nM28k_PMLsPC4")
    );
}

#[test]
fn test_header_mode_standard_padded() -> Result<()> {
    let opts = header_request()
        .try_with_option(WEBSAFE_B64, "false")?
        .try_with_option(PAD_B64, "true")?
        .to_https_options("signature");

    assert_eq!(
        header_str(&opts, "signature").as_deref(),
        Some("aSt651CHcZHEJx8iZkJcIGp6hCu/Mh0Rd/08NfqQ3Q4=")
    );
    Ok(())
}

#[test]
fn test_header_mode_with_values_standard_padded() -> Result<()> {
    let opts = header_request()
        .try_with_option(WITH_PARAM_VALUES, "true")?
        .try_with_option(WEBSAFE_B64, "false")?
        .try_with_option(PAD_B64, "true")?
        .to_https_options("signature");

    assert_eq!(
        header_str(&opts, "signature").as_deref(),
        Some("HBfQJRskh8J4PZDopdGaGbBcRz5Vs8nM28k/PMLsPC4=")
    );
    Ok(())
}

#[test]
fn test_header_mode_sha1() {
    let signature = header_request()
        .with_option(SigningOption::HmacSchema(SignatureScheme::Sha1))
        .calculate_signature();

    assert_eq!(signature, "PRc4Rnpw1dASQTSJV_1f0PMN6As");
}

#[test]
fn test_query_mode() {
    let builder = restsign_hmac::RequestBuilder::new("api.test.com", "GET", "/api/v1/items/", "secret")
        .as_query_params()
        .with_path_segment("42")
        .with_query_param("b", "2")
        .with_query_param("a", " 1 ")
        .with_header("x-custom", "h");

    assert_eq!(builder.string_to_sign(), "GET\n/api/v1/items/42\n1\n2\nh");

    let opts = builder.to_https_options("signature");
    assert_eq!(
        opts.path,
        "/api/v1/items/42?b=2&a=1&signature=kkCbx37wMuK2dqrPCrn6k4f9bFSteD-XsFOW8l0nz7M"
    );
    assert_eq!(header_str(&opts, "x-custom").as_deref(), Some("h"));
    assert_eq!(opts.header("signature"), None);

    let last = builder
        .with_option(SigningOption::PathPriority(false))
        .calculate_signature();
    assert_eq!(last, "F49V42GzUHdVmvTj5OPAo9D9Sh4hX9lctjaSp478gtg");
}

#[test]
fn test_post_with_body() {
    let opts = restsign_hmac::RequestBuilder::new("api.test.com", "POST", "/files", "secret")
        .as_headers("x-wix-")
        .with_header("x-wix-app-id", "app")
        .with_header("Accept", "json")
        .with_post_data(serde_json::json!({"name": "file"}))
        .with_option(SigningOption::WithParameterValues(true))
        .with_option(SigningOption::TrailingNewline(true))
        .to_https_options("x-wix-signature");

    assert_eq!(
        header_str(&opts, "x-wix-signature").as_deref(),
        Some("tDDg6v2rwzWTXnM-B_SDV65lfAiXbXocbKXB4k4SVDM")
    );
    assert_eq!(header_str(&opts, "Accept").as_deref(), Some("json"));
    assert_eq!(header_str(&opts, "Content-Length").as_deref(), Some("15"));
    assert_eq!(
        header_str(&opts, "Content-Type").as_deref(),
        Some("application/json")
    );
    assert_eq!(opts.path, "/files");
    assert_eq!(opts.method, "POST");
    assert_eq!(opts.host, "api.test.com");
}

#[test]
fn test_non_ascii_path_is_signed_verbatim() {
    let builder = restsign_hmac::RequestBuilder::new("h", "GET", "/files/é", "123456789")
        .with_query_param("a", "1");

    assert_eq!(builder.string_to_sign(), "GET\n/files/é\n1");
    assert_eq!(
        builder.calculate_signature(),
        "tAziLcFLjZp8oyrr8YcCcAmgGv2hMtfL-LBLc8TjcMY"
    );
}

#[test]
fn test_special_path_and_float_values() {
    let builder = restsign_hmac::RequestBuilder::new("h", "GET", "/a{b}|c", "123456789")
        .with_query_param("b", 1e21)
        .with_query_param("a", 1.5e-7);

    assert_eq!(builder.string_to_sign(), "GET\n/a{b}|c\n1.5e-7\n1e+21");
    assert_eq!(
        builder.calculate_signature(),
        "46Lzpvt0PBoMF2gmVynCMKH8W79IOPQcWd97zcAICNQ"
    );
}
