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

use thiserror::Error;

/// The HTTP verb of a method node is not one RAML supports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid method '{name}': expected one of options, get, head, post, put, delete, trace, connect, patch")]
pub struct InvalidMethod {
    pub name: String,
}

impl InvalidMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A property failed validation.
///
/// `path` is dotted and starts at the outermost key that was being
/// validated, e.g. `headers.Zencoder-Api-Key.type`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid property '{path}': {reason}")]
pub struct InvalidProperty {
    pub path: String,
    pub reason: String,
}

impl InvalidProperty {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Prefixes the path with the key of the entity that owns it.
    pub fn within(mut self, owner: &str) -> Self {
        self.path = if self.path.is_empty() {
            owner.to_string()
        } else {
            format!("{owner}.{}", self.path)
        };
        self
    }

    /// The innermost property name.
    pub fn property(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidMethod(#[from] InvalidMethod),
    #[error(transparent)]
    InvalidProperty(#[from] InvalidProperty),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
