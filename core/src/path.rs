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

/// Joins path segments with `/`, skipping empty ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathBuilder {
    segments: Vec<String>,
}

impl PathBuilder {
    /// Create a builder without segments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `segment` unless it is empty.
    pub fn with_segment(&mut self, segment: impl AsRef<str>) -> &mut Self {
        let segment = segment.as_ref();
        if !segment.is_empty() {
            self.segments.push(segment.to_string());
        }
        self
    }

    /// Retained segments in insertion order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx != 0 {
                f.write_str("/")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
