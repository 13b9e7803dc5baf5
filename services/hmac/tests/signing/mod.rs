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

mod placement;
mod vectors;

use restsign_hmac::RequestBuilder;

/// Initialize test logging.
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Header mode request used by the published signature vectors.
pub fn header_request() -> RequestBuilder {
    init();

    RequestBuilder::new("http://test.com", "GET", "/api/v1/test", "123456789")
        .as_headers("x-test-")
        .with_header("x-test-1", "1")
        .with_header("x-test-2", "2")
        .with_header("x-test-3", "3")
}

/// Read a header of the descriptor as a string.
pub fn header_str(opts: &restsign_hmac::HttpsOptions, name: &str) -> Option<String> {
    opts.header(name).map(|v| v.to_string())
}
