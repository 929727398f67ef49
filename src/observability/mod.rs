/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::time::Instant;

/// Times one construction and logs its outcome on a single line.
pub struct ConstructionMetrics {
    start_time: Instant,
    kind: String,
    name: String,
}

impl ConstructionMetrics {
    pub fn new(kind: &str, name: &str) -> Self {
        Self {
            start_time: Instant::now(),
            kind: kind.to_string(),
            name: name.to_string(),
        }
    }

    pub fn record_success(self) {
        let duration_ms = self.start_time.elapsed().as_millis();
        let timestamp = chrono::Utc::now().timestamp_millis();

        log::info!(
            "raml_construction kind=\"{}\" name=\"{}\" success=true duration_ms={} timestamp={}",
            self.kind,
            self.name,
            duration_ms,
            timestamp
        );
    }

    pub fn record_failure(self, error: String) {
        let duration_ms = self.start_time.elapsed().as_millis();
        let timestamp = chrono::Utc::now().timestamp_millis();

        log::warn!(
            "raml_construction kind=\"{}\" name=\"{}\" success=false duration_ms={} error=\"{}\" timestamp={}",
            self.kind,
            self.name,
            duration_ms,
            error,
            timestamp
        );
    }
}

/// Installs `env_logger`, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
