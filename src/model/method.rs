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

use crate::error::{InvalidProperty, Result};
use crate::model::{Body, Entity, Header, QueryParameter, Response};
use crate::observability::ConstructionMetrics;
use crate::validator::identifier::{validate_method_name, HttpMethod};
use crate::validator::{schema, validate};
use serde::Serialize;
use serde_yaml::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Http,
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => f.write_str("HTTP"),
            Protocol::Https => f.write_str("HTTPS"),
        }
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HTTP" => Ok(Protocol::Http),
            "HTTPS" => Ok(Protocol::Https),
            _ => Err(format!("Invalid protocol: {}", s)),
        }
    }
}

/// One HTTP operation of a RAML resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    name: HttpMethod,
    description: Option<String>,
    headers: Vec<Header>,
    query_parameters: Vec<QueryParameter>,
    protocols: Vec<Protocol>,
    body: Vec<Body>,
    responses: Vec<Response>,
    #[serde(rename = "is")]
    traits: Vec<String>,
    secured_by: Vec<String>,
}

impl Method {
    pub fn new(name: &str, raw: &Value) -> Result<Self> {
        let metrics = ConstructionMetrics::new("method", name);

        match Self::build(name, raw) {
            Ok(method) => {
                metrics.record_success();
                Ok(method)
            }
            Err(e) => {
                metrics.record_failure(e.to_string());
                Err(e)
            }
        }
    }

    /// Parses a YAML method node and builds it.
    pub fn yaml(name: &str, contents: &str) -> anyhow::Result<Self> {
        let raw: Value = serde_yaml::from_str(contents)?;
        Ok(Self::new(name, &raw)?)
    }

    /// Parses a JSON method node and builds it.
    pub fn json(name: &str, contents: &str) -> anyhow::Result<Self> {
        let raw: Value = serde_json::from_str(contents)?;
        Ok(Self::new(name, &raw)?)
    }

    fn build(name: &str, raw: &Value) -> Result<Self> {
        let verb = validate_method_name(name)?;
        let mut properties = validate(name, raw, &schema::METHOD)?;

        let protocols = properties
            .take_strings("protocols")
            .unwrap_or_default()
            .iter()
            .map(|p| p.parse().map_err(|e: String| InvalidProperty::new("protocols", e)))
            .collect::<std::result::Result<Vec<Protocol>, _>>()?;

        Ok(Self {
            name: verb,
            description: properties.take_string("description"),
            headers: properties.take_entities("headers", Entity::into_header),
            query_parameters: properties
                .take_entities("queryParameters", Entity::into_query_parameter),
            protocols,
            body: properties.take_entities("body", Entity::into_body),
            responses: properties.take_entities("responses", Entity::into_response),
            traits: properties.take_strings("is").unwrap_or_default(),
            secured_by: properties.take_strings("securedBy").unwrap_or_default(),
        })
    }

    pub fn name(&self) -> HttpMethod {
        self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Resolves a concrete header name, preferring an exact declaration
    /// over a templated one.
    pub fn header(&self, key: &str) -> Option<&Header> {
        self.headers
            .iter()
            .find(|h| h.name() == key)
            .or_else(|| self.headers.iter().find(|h| h.matches(key)))
    }

    pub fn query_parameters(&self) -> &[QueryParameter] {
        &self.query_parameters
    }

    pub fn query_parameter(&self, name: &str) -> Option<&QueryParameter> {
        self.query_parameters.iter().find(|p| p.name() == name)
    }

    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }

    pub fn body(&self) -> &[Body] {
        &self.body
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn response(&self, code: u16) -> Option<&Response> {
        self.responses.iter().find(|r| r.code() == code)
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    pub fn secured_by(&self) -> &[String] {
        &self.secured_by
    }
}
