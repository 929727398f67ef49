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

use crate::error::InvalidMethod;
use crate::validator::scalar;
use crate::validator::schema::{KeyKind, SUPPORTED_METHODS};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use serde_yaml::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const WILDCARD: &str = "{*}";

/// Media types are matched case-insensitively (RFC 6838).
static MEDIA_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[A-Za-z0-9][-\w.+!#$&^]{0,126}/[A-Za-z0-9][-\w.+!#$&^]{0,126}(\s*;.*)?$")
        .size_limit(64 * (1 << 20))
        .build()
        .expect("media type pattern is a valid regular expression")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Options,
    Get,
    Head,
    Post,
    Put,
    Delete,
    Trace,
    Connect,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Options => "options",
            HttpMethod::Get => "get",
            HttpMethod::Head => "head",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Trace => "trace",
            HttpMethod::Connect => "connect",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method names are case-sensitive: `GET` is not a RAML method key.
impl FromStr for HttpMethod {
    type Err = InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_METHODS
            .iter()
            .copied()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| InvalidMethod::new(s))
    }
}

pub fn validate_method_name(name: &str) -> Result<HttpMethod, InvalidMethod> {
    name.parse()
}

/// A header or parameter name, optionally holding one `{*}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KeyPattern {
    prefix: String,
    suffix: Option<String>,
}

impl KeyPattern {
    pub fn parse(name: &str) -> Result<Self, String> {
        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }

        match name.split_once(WILDCARD) {
            None => Ok(Self {
                prefix: name.to_string(),
                suffix: None,
            }),
            Some((_, suffix)) if suffix.contains(WILDCARD) => Err(format!(
                "name '{}' holds more than one '{}' placeholder",
                name, WILDCARD
            )),
            Some((prefix, suffix)) => Ok(Self {
                prefix: prefix.to_string(),
                suffix: Some(suffix.to_string()),
            }),
        }
    }

    pub fn is_templated(&self) -> bool {
        self.suffix.is_some()
    }

    /// Literal names match themselves. Templated names match any key that
    /// keeps the fixed prefix and suffix and puts something in between.
    pub fn matches(&self, key: &str) -> bool {
        match &self.suffix {
            None => self.prefix == key,
            Some(suffix) => {
                key.len() > self.prefix.len() + suffix.len()
                    && key.starts_with(&self.prefix)
                    && key.ends_with(suffix.as_str())
            }
        }
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suffix {
            None => f.write_str(&self.prefix),
            Some(suffix) => write!(f, "{}{}{}", self.prefix, WILDCARD, suffix),
        }
    }
}

/// Checks a raw collection key and returns it in canonical string form.
pub fn entity_key(kind: KeyKind, raw: &Value) -> Result<String, String> {
    match kind {
        KeyKind::Name => {
            let name = string_key(raw)?;
            if name.contains(WILDCARD) {
                return Err(format!(
                    "key '{}' must not hold a '{}' placeholder",
                    name, WILDCARD
                ));
            }
            Ok(name.to_string())
        }
        KeyKind::TemplatedName => {
            let name = string_key(raw)?;
            KeyPattern::parse(name)?;
            Ok(name.to_string())
        }
        KeyKind::StatusCode => status_code(raw).map(|code| code.to_string()),
        KeyKind::MediaType => {
            let media_type = string_key(raw)?;
            validate_media_type(media_type)?;
            Ok(media_type.to_string())
        }
    }
}

pub fn status_code(raw: &Value) -> Result<u16, String> {
    let code = match raw {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match code {
        Some(code @ 100..=599) => Ok(code as u16),
        _ => Err(format!(
            "key {} is not an HTTP status code",
            scalar::render(raw)
        )),
    }
}

pub fn validate_media_type(media_type: &str) -> Result<(), String> {
    if !MEDIA_TYPE.is_match(media_type) {
        return Err(format!("key '{}' is not a media type", media_type));
    }
    Ok(())
}

fn string_key(raw: &Value) -> Result<&str, String> {
    match raw {
        Value::String(s) if !s.is_empty() => Ok(s),
        Value::String(_) => Err("key must not be empty".to_string()),
        other => Err(format!(
            "key {} must be a string, got {}",
            scalar::render(other),
            scalar::describe(other)
        )),
    }
}
