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

//! Property tables for every entity kind of a RAML method node.
//!
//! The tables are plain `static` data: the engine in [`crate::validator`]
//! walks them, and a rule can point at another entity kind, which is how
//! headers, parameters and responses nest inside a method.

use crate::model::EntityKind;
use crate::validator::identifier::HttpMethod;

/// Verbs a RAML method node may be named after (RFC 2616 and RFC 5789).
pub const SUPPORTED_METHODS: &[HttpMethod] = &[
    HttpMethod::Options,
    HttpMethod::Get,
    HttpMethod::Head,
    HttpMethod::Post,
    HttpMethod::Put,
    HttpMethod::Delete,
    HttpMethod::Trace,
    HttpMethod::Connect,
    HttpMethod::Patch,
];

pub const PROTOCOLS: EnumSet = EnumSet {
    values: &["HTTP", "HTTPS"],
    case_sensitive: false,
};

pub const PARAMETER_TYPES: EnumSet = EnumSet {
    values: &["string", "number", "integer", "date", "boolean", "file"],
    case_sensitive: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Integer,
    Number,
    Boolean,
    /// Any string, number or boolean, kept as written.
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumSet {
    pub values: &'static [&'static str],
    pub case_sensitive: bool,
}

impl EnumSet {
    pub fn lookup(&self, candidate: &str) -> Option<&'static str> {
        self.values.iter().copied().find(|value| {
            if self.case_sensitive {
                *value == candidate
            } else {
                value.eq_ignore_ascii_case(candidate)
            }
        })
    }
}

/// How the keys of a `Map` property are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Non-empty string without a `{*}` placeholder.
    Name,
    /// Non-empty string with at most one `{*}` placeholder.
    TemplatedName,
    /// HTTP status code, as an integer or a numeric string.
    StatusCode,
    /// `type/subtype`, optionally followed by parameters.
    MediaType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Scalar(ScalarType),
    Enum(EnumSet),
    List(ScalarType),
    EnumList(EnumSet),
    Nested(EntityKind),
    Map(EntityKind, KeyKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Boolean(bool),
    String(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRule {
    pub name: &'static str,
    pub required: bool,
    pub kind: Kind,
    pub default: Option<DefaultValue>,
}

impl PropertyRule {
    pub const fn optional(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            required: false,
            kind,
            default: None,
        }
    }

    pub const fn required(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            required: true,
            kind,
            default: None,
        }
    }

    pub const fn with_default(self, default: DefaultValue) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySchema {
    pub entity: &'static str,
    pub rules: &'static [PropertyRule],
}

impl PropertySchema {
    pub fn rule(&self, name: &str) -> Option<&PropertyRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}

pub static METHOD: PropertySchema = PropertySchema {
    entity: "method",
    rules: &[
        PropertyRule::optional("description", Kind::Scalar(ScalarType::String)),
        PropertyRule::optional(
            "headers",
            Kind::Map(EntityKind::Header, KeyKind::TemplatedName),
        ),
        PropertyRule::optional(
            "queryParameters",
            Kind::Map(EntityKind::QueryParameter, KeyKind::Name),
        ),
        PropertyRule::optional("protocols", Kind::EnumList(PROTOCOLS)),
        PropertyRule::optional("body", Kind::Map(EntityKind::Body, KeyKind::MediaType)),
        PropertyRule::optional(
            "responses",
            Kind::Map(EntityKind::Response, KeyKind::StatusCode),
        ),
        PropertyRule::optional("is", Kind::List(ScalarType::String)),
        PropertyRule::optional("securedBy", Kind::List(ScalarType::String)),
    ],
};

/// Shared by headers and query parameters.
pub static NAMED_PARAMETER: PropertySchema = PropertySchema {
    entity: "named parameter",
    rules: &[
        PropertyRule::optional("displayName", Kind::Scalar(ScalarType::String)),
        PropertyRule::optional("description", Kind::Scalar(ScalarType::String)),
        PropertyRule::optional("type", Kind::Enum(PARAMETER_TYPES))
            .with_default(DefaultValue::String("string")),
        PropertyRule::optional("enum", Kind::List(ScalarType::String)),
        PropertyRule::optional("pattern", Kind::Scalar(ScalarType::String)),
        PropertyRule::optional("minLength", Kind::Scalar(ScalarType::Integer)),
        PropertyRule::optional("maxLength", Kind::Scalar(ScalarType::Integer)),
        PropertyRule::optional("minimum", Kind::Scalar(ScalarType::Number)),
        PropertyRule::optional("maximum", Kind::Scalar(ScalarType::Number)),
        PropertyRule::optional("example", Kind::Scalar(ScalarType::Any)),
        PropertyRule::optional("default", Kind::Scalar(ScalarType::Any)),
        PropertyRule::optional("repeat", Kind::Scalar(ScalarType::Boolean))
            .with_default(DefaultValue::Boolean(false)),
        PropertyRule::optional("required", Kind::Scalar(ScalarType::Boolean))
            .with_default(DefaultValue::Boolean(false)),
    ],
};

pub static RESPONSE: PropertySchema = PropertySchema {
    entity: "response",
    rules: &[
        PropertyRule::optional("description", Kind::Scalar(ScalarType::String)),
        PropertyRule::optional(
            "headers",
            Kind::Map(EntityKind::Header, KeyKind::TemplatedName),
        ),
        PropertyRule::optional("body", Kind::Map(EntityKind::Body, KeyKind::MediaType)),
    ],
};

pub static BODY: PropertySchema = PropertySchema {
    entity: "body",
    rules: &[
        PropertyRule::optional("schema", Kind::Scalar(ScalarType::String)),
        PropertyRule::optional("example", Kind::Scalar(ScalarType::String)),
    ],
};

pub fn schema_for(kind: EntityKind) -> &'static PropertySchema {
    match kind {
        EntityKind::Method => &METHOD,
        EntityKind::Header | EntityKind::QueryParameter => &NAMED_PARAMETER,
        EntityKind::Response => &RESPONSE,
        EntityKind::Body => &BODY,
    }
}
