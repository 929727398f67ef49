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

mod method_test;

pub mod document;
pub mod method;
pub mod parameter;
pub mod response;

pub use document::Document;
pub use method::{Method, Protocol};
pub use parameter::{Header, ParameterAttributes, ParameterType, QueryParameter};
pub use response::{Body, Response};

use crate::error::InvalidProperty;
use serde::Serialize;
use serde_yaml::Value;

/// Entity kinds a property rule can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Method,
    Header,
    QueryParameter,
    Response,
    Body,
}

/// Any entity that can nest inside a method.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entity {
    Header(Header),
    QueryParameter(QueryParameter),
    Response(Response),
    Body(Body),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Header(_) => EntityKind::Header,
            Entity::QueryParameter(_) => EntityKind::QueryParameter,
            Entity::Response(_) => EntityKind::Response,
            Entity::Body(_) => EntityKind::Body,
        }
    }

    pub fn into_header(self) -> Option<Header> {
        match self {
            Entity::Header(header) => Some(header),
            _ => None,
        }
    }

    pub fn into_query_parameter(self) -> Option<QueryParameter> {
        match self {
            Entity::QueryParameter(parameter) => Some(parameter),
            _ => None,
        }
    }

    pub fn into_response(self) -> Option<Response> {
        match self {
            Entity::Response(response) => Some(response),
            _ => None,
        }
    }

    pub fn into_body(self) -> Option<Body> {
        match self {
            Entity::Body(body) => Some(body),
            _ => None,
        }
    }
}

/// Builds one nested entity of the given kind from its key and raw map.
///
/// Methods never nest, so asking for one is reported against `key`.
pub fn construct(kind: EntityKind, key: &str, raw: &Value) -> Result<Entity, InvalidProperty> {
    match kind {
        EntityKind::Header => Header::new(key, raw).map(Entity::Header),
        EntityKind::QueryParameter => QueryParameter::new(key, raw).map(Entity::QueryParameter),
        EntityKind::Response => Response::new(key, raw).map(Entity::Response),
        EntityKind::Body => Body::new(key, raw).map(Entity::Body),
        EntityKind::Method => Err(InvalidProperty::new(
            "",
            "a method cannot be nested inside another entity",
        )),
    }
}
