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

//! Validates RAML method nodes and builds a typed model from them.
//!
//! ```
//! use raml_rs::model::Document;
//!
//! let method = raml_rs::model::Method::yaml("get", "description: List users").unwrap();
//! assert_eq!(method.description(), Some("List users"));
//! assert!(method.document().contains("List users"));
//! ```

pub mod error;
pub mod model;
pub mod observability;
pub mod validator;

pub use error::{Error, InvalidMethod, InvalidProperty, Result};
pub use model::Method;

/// Builds a [`Method`] named `name` from an already parsed property tree.
pub fn construct_method(name: &str, raw: &serde_yaml::Value) -> Result<Method> {
    Method::new(name, raw)
}
