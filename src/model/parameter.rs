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

use crate::error::InvalidProperty;
use crate::validator::identifier::KeyPattern;
use crate::validator::{scalar, schema, validate, Properties};
use regex::Regex;
use serde::Serialize;
use serde_yaml::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    #[default]
    String,
    Number,
    Integer,
    Date,
    Boolean,
    File,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Integer => "integer",
            ParameterType::Date => "date",
            ParameterType::Boolean => "boolean",
            ParameterType::File => "file",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ParameterType::Number | ParameterType::Integer)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ParameterType::String),
            "number" => Ok(ParameterType::Number),
            "integer" => Ok(ParameterType::Integer),
            "date" => Ok(ParameterType::Date),
            "boolean" => Ok(ParameterType::Boolean),
            "file" => Ok(ParameterType::File),
            _ => Err(format!("Invalid parameter type: {}", s)),
        }
    }
}

/// Properties shared by every RAML named parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterAttributes {
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub r#type: ParameterType,
    #[serde(rename = "enum")]
    pub r#enum: Option<Vec<String>>,
    pub pattern: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub example: Option<Value>,
    pub default: Option<Value>,
    pub repeat: bool,
    pub required: bool,
}

impl ParameterAttributes {
    pub fn from_properties(mut properties: Properties) -> Result<Self, InvalidProperty> {
        let r#type = match properties.take_string("type") {
            Some(name) => name
                .parse()
                .map_err(|e: String| InvalidProperty::new("type", e))?,
            None => ParameterType::default(),
        };

        let attributes = Self {
            display_name: properties.take_string("displayName"),
            description: properties.take_string("description"),
            r#type,
            r#enum: properties.take_strings("enum"),
            pattern: properties.take_string("pattern"),
            min_length: length(&mut properties, "minLength")?,
            max_length: length(&mut properties, "maxLength")?,
            minimum: properties.take_number("minimum"),
            maximum: properties.take_number("maximum"),
            example: properties.take_scalar("example"),
            default: properties.take_scalar("default"),
            repeat: properties.take_bool("repeat").unwrap_or(false),
            required: properties.take_bool("required").unwrap_or(false),
        };

        let pattern = attributes.check_applicability()?;
        attributes.check_ranges()?;
        if let Some(example) = &attributes.example {
            attributes.check_value("example", example, pattern.as_ref())?;
        }
        if let Some(default) = &attributes.default {
            attributes.check_value("default", default, pattern.as_ref())?;
        }

        Ok(attributes)
    }

    /// Returns the compiled `pattern`, if one is declared.
    fn check_applicability(&self) -> Result<Option<Regex>, InvalidProperty> {
        let numeric_only = [
            ("minimum", self.minimum.is_some()),
            ("maximum", self.maximum.is_some()),
        ];
        if !self.r#type.is_numeric() {
            if let Some((name, _)) = numeric_only.iter().find(|(_, set)| *set) {
                return Err(not_applicable(name, self.r#type));
            }
        }

        let string_only = [
            ("enum", self.r#enum.is_some()),
            ("pattern", self.pattern.is_some()),
            ("minLength", self.min_length.is_some()),
            ("maxLength", self.max_length.is_some()),
        ];
        if self.r#type != ParameterType::String {
            if let Some((name, _)) = string_only.iter().find(|(_, set)| *set) {
                return Err(not_applicable(name, self.r#type));
            }
        }

        self.pattern
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    InvalidProperty::new("pattern", format!("not a valid regular expression: {e}"))
                })
            })
            .transpose()
    }

    fn check_ranges(&self) -> Result<(), InvalidProperty> {
        if let (Some(min), Some(max)) = (self.minimum, self.maximum) {
            if min > max {
                return Err(InvalidProperty::new(
                    "minimum",
                    format!("minimum {} is greater than maximum {}", min, max),
                ));
            }
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(InvalidProperty::new(
                    "minLength",
                    format!("minLength {} is greater than maxLength {}", min, max),
                ));
            }
        }

        Ok(())
    }

    /// `example` and `default` must be values the parameter would accept.
    fn check_value(
        &self,
        name: &str,
        value: &Value,
        pattern: Option<&Regex>,
    ) -> Result<(), InvalidProperty> {
        let invalid = |reason: String| InvalidProperty::new(name, reason);

        match self.r#type {
            ParameterType::String => match value {
                Value::String(text) => self.check_text(text, pattern).map_err(invalid),
                other => Err(invalid(type_mismatch(self.r#type, other))),
            },
            ParameterType::Integer => {
                let number = scalar::as_integer(value)
                    .ok_or_else(|| invalid(type_mismatch(self.r#type, value)))?;
                self.check_bounds(number as f64).map_err(invalid)
            }
            ParameterType::Number => {
                let number = scalar::as_number(value)
                    .ok_or_else(|| invalid(type_mismatch(self.r#type, value)))?;
                self.check_bounds(number).map_err(invalid)
            }
            ParameterType::Boolean => match value {
                Value::Bool(_) => Ok(()),
                other => Err(invalid(type_mismatch(self.r#type, other))),
            },
            ParameterType::Date => match value.as_str() {
                Some(date) if scalar::is_date(date) => Ok(()),
                _ => Err(invalid(type_mismatch(self.r#type, value))),
            },
            ParameterType::File => Ok(()),
        }
    }

    fn check_text(&self, text: &str, pattern: Option<&Regex>) -> Result<(), String> {
        if let Some(values) = &self.r#enum {
            if !values.iter().any(|v| v == text) {
                return Err(format!(
                    "value '{}' is not in allowed enum values: [{}]",
                    text,
                    values.join(", ")
                ));
            }
        }

        if let Some(re) = pattern {
            if !re.is_match(text) {
                return Err(format!(
                    "value '{}' does not match pattern '{}'",
                    text,
                    re.as_str()
                ));
            }
        }

        let length = text.chars().count() as u64;
        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!(
                    "value '{}' must be at least {} characters, but got {}",
                    text, min, length
                ));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!(
                    "value '{}' must be at most {} characters, but got {}",
                    text, max, length
                ));
            }
        }

        Ok(())
    }

    fn check_bounds(&self, value: f64) -> Result<(), String> {
        if let Some(min) = self.minimum {
            if value < min {
                return Err(format!("value must be >= {}, but got {}", min, value));
            }
        }
        if let Some(max) = self.maximum {
            if value > max {
                return Err(format!("value must be <= {}, but got {}", max, value));
            }
        }
        Ok(())
    }
}

fn length(properties: &mut Properties, name: &str) -> Result<Option<u64>, InvalidProperty> {
    properties
        .take_integer(name)
        .map(|value| {
            u64::try_from(value).map_err(|_| {
                InvalidProperty::new(name, format!("must not be negative, got {}", value))
            })
        })
        .transpose()
}

fn not_applicable(name: &str, r#type: ParameterType) -> InvalidProperty {
    InvalidProperty::new(
        name,
        format!("property does not apply to parameters of type {}", r#type),
    )
}

fn type_mismatch(r#type: ParameterType, value: &Value) -> String {
    format!(
        "'{}' is not a valid {} value",
        scalar::render(value),
        r#type
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    name: String,
    #[serde(skip)]
    pattern: KeyPattern,
    #[serde(flatten)]
    attributes: ParameterAttributes,
}

impl Header {
    pub fn new(name: &str, raw: &Value) -> Result<Self, InvalidProperty> {
        let pattern =
            KeyPattern::parse(name).map_err(|reason| InvalidProperty::new(name, reason))?;
        let properties = validate(name, raw, &schema::NAMED_PARAMETER)?;

        Ok(Self {
            name: name.to_string(),
            pattern,
            attributes: ParameterAttributes::from_properties(properties)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Falls back to the header name.
    pub fn display_name(&self) -> &str {
        self.attributes.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn description(&self) -> Option<&str> {
        self.attributes.description.as_deref()
    }

    pub fn attributes(&self) -> &ParameterAttributes {
        &self.attributes
    }

    pub fn is_templated(&self) -> bool {
        self.pattern.is_templated()
    }

    /// Whether a concrete header name is covered by this declaration.
    pub fn matches(&self, key: &str) -> bool {
        self.pattern.matches(key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryParameter {
    name: String,
    #[serde(flatten)]
    attributes: ParameterAttributes,
}

impl QueryParameter {
    pub fn new(name: &str, raw: &Value) -> Result<Self, InvalidProperty> {
        let properties = validate(name, raw, &schema::NAMED_PARAMETER)?;

        Ok(Self {
            name: name.to_string(),
            attributes: ParameterAttributes::from_properties(properties)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        self.attributes.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn description(&self) -> Option<&str> {
        self.attributes.description.as_deref()
    }

    pub fn r#type(&self) -> ParameterType {
        self.attributes.r#type
    }

    pub fn required(&self) -> bool {
        self.attributes.required
    }

    pub fn default(&self) -> Option<&Value> {
        self.attributes.default.as_ref()
    }

    pub fn example(&self) -> Option<&Value> {
        self.attributes.example.as_ref()
    }

    pub fn minimum(&self) -> Option<f64> {
        self.attributes.minimum
    }

    pub fn maximum(&self) -> Option<f64> {
        self.attributes.maximum
    }

    pub fn attributes(&self) -> &ParameterAttributes {
        &self.attributes
    }
}
