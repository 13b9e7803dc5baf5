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

use super::{header_str, init};
use pretty_assertions::assert_eq;
use restsign_hmac::{Placement, RequestBuilder, SigningOption};

fn signing_builder() -> RequestBuilder {
    init();

    RequestBuilder::new("test.com", "GET", "/p", "k")
        .with_option(SigningOption::WithParameterValues(true))
}

#[test]
fn test_placement_defaults_to_query() {
    let builder = signing_builder();
    assert_eq!(builder.placement(), &Placement::Query);

    let opts = builder.to_https_options("sig");
    assert!(opts.path.starts_with("/p?sig="));
}

#[test]
fn test_header_prefix_excludes_other_long_headers() {
    let builder = signing_builder()
        .as_headers("x-app-")
        .with_header("x-app-id", "1")
        .with_header("x-other-thing", "2")
        .with_header("x-app-", "3")
        .with_header("x-ap", "4");

    assert_eq!(
        builder.string_to_sign(),
        "GET\n/p\nx-ap:4\nx-app-:3\nx-app-id:1"
    );

    // Excluded headers are still sent.
    let opts = builder.to_https_options("x-app-signature");
    assert_eq!(header_str(&opts, "x-other-thing").as_deref(), Some("2"));
    assert!(opts.header("x-app-signature").is_some());
    assert_eq!(opts.path, "/p");
}

#[test]
fn test_query_mode_ignores_prefix() {
    let builder = signing_builder()
        .as_headers("x-app-")
        .with_header("x-other-thing", "2")
        .as_query_params();

    assert_eq!(builder.string_to_sign(), "GET\n/p\nx-other-thing:2");
}

#[test]
fn test_query_and_headers_share_sort_order() {
    let builder = signing_builder()
        .as_headers("x-")
        .with_query_param("x-b", "q")
        .with_header("x-a", "h")
        .with_query_param("c", "q2");

    assert_eq!(builder.string_to_sign(), "GET\n/p\nc:q2\nx-a:h\nx-b:q");
}

#[test]
fn test_sort_is_independent_of_insertion_order() {
    let forward = signing_builder()
        .with_query_param("a", "1")
        .with_query_param("b", "2")
        .with_header("c", "3");
    let backward = signing_builder()
        .with_header("c", "3")
        .with_query_param("b", "2")
        .with_query_param("a", "1");

    assert_eq!(forward.calculate_signature(), backward.calculate_signature());

    // Rendering keeps insertion order.
    assert!(forward.to_https_options("s").path.starts_with("/p?a=1&b=2&s="));
    assert!(backward.to_https_options("s").path.starts_with("/p?b=2&a=1&s="));
}

#[test]
fn test_values_only_drop_names() {
    let builder = RequestBuilder::new("test.com", "GET", "/p", "k")
        .with_query_param("z", "first")
        .with_query_param("a", vec!["x", "y"]);

    assert_eq!(builder.string_to_sign(), "GET\n/p\nx,y\nfirst");
}

#[test]
fn test_descriptor_path_keeps_raw_base_path() {
    let opts = RequestBuilder::new("test.com", "GET", "/api/", "k")
        .with_path_segment("a b")
        .with_path_segment("")
        .to_https_options("s");

    assert!(opts.path.starts_with("/api/a b?s="));
}
