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

use crate::validator::schema::{EnumSet, ScalarType};
use crate::validator::TypedValue;
use chrono::DateTime;
use serde_yaml::Value;

pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a map",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Renders a scalar the way it was written in the source document.
pub fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => format!("{value:?}"),
    }
}

pub fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

pub fn coerce(expected: ScalarType, value: &Value) -> Result<TypedValue, String> {
    use ScalarType::*;

    match expected {
        String => match value {
            Value::String(s) => Ok(TypedValue::String(s.clone())),
            other => Err(mismatch("a String", other)),
        },
        Integer => as_integer(value)
            .map(TypedValue::Integer)
            .ok_or_else(|| mismatch("an Integer", value)),
        Number => as_number(value)
            .map(TypedValue::Number)
            .ok_or_else(|| mismatch("a Number", value)),
        Boolean => match value {
            Value::Bool(b) => Ok(TypedValue::Boolean(*b)),
            other => Err(mismatch("a Boolean", other)),
        },
        Any => {
            if is_scalar(value) {
                Ok(TypedValue::Scalar(value.clone()))
            } else {
                Err(mismatch("a scalar", value))
            }
        }
    }
}

/// Returns the canonical spelling of `value` within `set`.
pub fn enumerated(set: &EnumSet, value: &Value) -> Result<&'static str, String> {
    let candidate = value
        .as_str()
        .ok_or_else(|| mismatch("a String", value))?;

    set.lookup(candidate).ok_or_else(|| {
        format!(
            "value '{}' is not in allowed values: [{}]",
            candidate,
            set.values.join(", ")
        )
    })
}

pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// NaN and infinities are not numbers a range can be checked against.
pub fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// RAML dates follow RFC 2616, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn is_date(value: &str) -> bool {
    DateTime::parse_from_rfc2822(value).is_ok()
}

fn mismatch(expected: &str, actual: &Value) -> String {
    format!("the value must be {}, got {}", expected, describe(actual))
}
