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


pub mod identifier;
pub mod scalar;
pub mod schema;

use crate::error::InvalidProperty;
use crate::model::{self, Entity, EntityKind};
use schema::{DefaultValue, EnumSet, KeyKind, Kind, PropertyRule, PropertySchema};
use serde_yaml::{Mapping, Value};
use std::collections::{HashMap, HashSet};

/// A property value that passed its rule.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Scalar(Value),
    List(Vec<TypedValue>),
    Entity(Box<Entity>),
    Entities(Vec<Entity>),
}

impl From<DefaultValue> for TypedValue {
    fn from(default: DefaultValue) -> Self {
        match default {
            DefaultValue::Boolean(b) => TypedValue::Boolean(b),
            DefaultValue::String(s) => TypedValue::String(s.to_string()),
        }
    }
}

/// Validated properties of one entity, keyed by property name.
///
/// Entity constructors consume it with the `take_*` helpers. The helpers
/// return `None` when the property is absent; the schema guarantees the
/// variant of anything present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    values: HashMap<&'static str, TypedValue>,
}

impl Properties {
    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn take(&mut self, name: &str) -> Option<TypedValue> {
        self.values.remove(name)
    }

    pub fn take_string(&mut self, name: &str) -> Option<String> {
        match self.take(name) {
            Some(TypedValue::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn take_integer(&mut self, name: &str) -> Option<i64> {
        match self.take(name) {
            Some(TypedValue::Integer(i)) => Some(i),
            _ => None,
        }
    }

    pub fn take_number(&mut self, name: &str) -> Option<f64> {
        match self.take(name) {
            Some(TypedValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    pub fn take_bool(&mut self, name: &str) -> Option<bool> {
        match self.take(name) {
            Some(TypedValue::Boolean(b)) => Some(b),
            _ => None,
        }
    }

    pub fn take_scalar(&mut self, name: &str) -> Option<Value> {
        match self.take(name) {
            Some(TypedValue::Scalar(v)) => Some(v),
            _ => None,
        }
    }

    pub fn take_strings(&mut self, name: &str) -> Option<Vec<String>> {
        match self.take(name) {
            Some(TypedValue::List(items)) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        TypedValue::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn take_entity(&mut self, name: &str) -> Option<Entity> {
        match self.take(name) {
            Some(TypedValue::Entity(entity)) => Some(*entity),
            _ => None,
        }
    }

    pub fn take_entities<T>(&mut self, name: &str, pick: fn(Entity) -> Option<T>) -> Vec<T> {
        match self.take(name) {
            Some(TypedValue::Entities(entities)) => entities.into_iter().filter_map(pick).collect(),
            _ => Vec::new(),
        }
    }

    fn insert(&mut self, name: &'static str, value: TypedValue) {
        self.values.insert(name, value);
    }
}

/// Validates `raw` against a closed `schema`.
///
/// `owner` names the key `raw` was found under and only shows up when
/// `raw` is not a map at all. Every other error path is relative to `raw`.
/// `null` is read as an empty map.
pub fn validate(
    owner: &str,
    raw: &Value,
    schema: &PropertySchema,
) -> Result<Properties, InvalidProperty> {
    let empty = Mapping::new();
    let mapping = match raw {
        Value::Mapping(mapping) => mapping,
        Value::Null => &empty,
        other => {
            return Err(InvalidProperty::new(
                owner,
                format!(
                    "the {} must be a map, got {}",
                    schema.entity,
                    scalar::describe(other)
                ),
            ));
        }
    };

    for key in mapping.keys() {
        let known = key.as_str().and_then(|name| schema.rule(name)).is_some();
        if !known {
            return Err(InvalidProperty::new(
                scalar::render(key),
                format!("unknown property for a {}", schema.entity),
            ));
        }
    }

    let mut properties = Properties::default();

    for rule in schema.rules {
        if let Some(value) = mapping.get(rule.name) {
            properties.insert(rule.name, validate_property(rule, value)?);
        }
    }

    for rule in schema.rules {
        if properties.contains(rule.name) {
            continue;
        }
        if rule.required {
            return Err(InvalidProperty::new(
                rule.name,
                "required property missing",
            ));
        }
        if let Some(default) = rule.default {
            properties.insert(rule.name, default.into());
        }
    }

    log::trace!(
        "validated {} with {} properties",
        schema.entity,
        properties.len()
    );

    Ok(properties)
}

fn validate_property(rule: &PropertyRule, value: &Value) -> Result<TypedValue, InvalidProperty> {
    let at = |reason: String| InvalidProperty::new(rule.name, reason);

    match rule.kind {
        Kind::Scalar(expected) => scalar::coerce(expected, value).map_err(at),
        Kind::Enum(set) => scalar::enumerated(&set, value)
            .map(|canonical| TypedValue::String(canonical.to_string()))
            .map_err(at),
        Kind::List(expected) => validate_list(value, |item| scalar::coerce(expected, item))
            .map(TypedValue::List)
            .map_err(at),
        Kind::EnumList(set) => validate_enum_list(&set, value).map_err(at),
        Kind::Nested(kind) => validate_nested(rule.name, kind, value).map(TypedValue::Entity),
        Kind::Map(kind, keys) => {
            validate_collection(rule.name, kind, keys, value).map(TypedValue::Entities)
        }
    }
}

fn validate_list<T>(
    value: &Value,
    item: impl Fn(&Value) -> Result<T, String>,
) -> Result<Vec<T>, String> {
    let sequence = value.as_sequence().ok_or_else(|| {
        format!(
            "the value must be a sequence, got {}",
            scalar::describe(value)
        )
    })?;

    sequence
        .iter()
        .enumerate()
        .map(|(index, element)| item(element).map_err(|e| format!("item {index}: {e}")))
        .collect()
}

/// Duplicates collapse onto their first occurrence.
fn validate_enum_list(set: &EnumSet, value: &Value) -> Result<TypedValue, String> {
    let mut seen = HashSet::new();
    let items = validate_list(value, |item| scalar::enumerated(set, item))?;

    Ok(TypedValue::List(
        items
            .into_iter()
            .filter(|canonical| seen.insert(*canonical))
            .map(|canonical| TypedValue::String(canonical.to_string()))
            .collect(),
    ))
}

fn validate_nested(
    name: &str,
    kind: EntityKind,
    value: &Value,
) -> Result<Box<Entity>, InvalidProperty> {
    ensure_map(value).map_err(|reason| InvalidProperty::new(name, reason))?;

    log::debug!("constructing nested {:?} '{}'", kind, name);
    model::construct(kind, name, value)
        .map(Box::new)
        .map_err(|e| e.within(name))
}

fn validate_collection(
    name: &str,
    kind: EntityKind,
    keys: KeyKind,
    value: &Value,
) -> Result<Vec<Entity>, InvalidProperty> {
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(InvalidProperty::new(
                name,
                format!("the value must be a map, got {}", scalar::describe(other)),
            ));
        }
    };

    let mut seen = HashSet::new();
    let mut entities = Vec::with_capacity(mapping.len());

    for (raw_key, raw_value) in mapping {
        let key = identifier::entity_key(keys, raw_key)
            .map_err(|reason| InvalidProperty::new(name, reason))?;

        if !seen.insert(key.clone()) {
            return Err(InvalidProperty::new(
                name,
                format!("key '{}' is declared more than once", key),
            ));
        }

        ensure_map(raw_value).map_err(|reason| {
            InvalidProperty::new(name, format!("the value of '{}': {}", key, reason))
        })?;

        log::debug!("constructing {:?} '{}' in {}", kind, key, name);
        let entity = model::construct(kind, &key, raw_value)
            .map_err(|e| e.within(&key).within(name))?;
        entities.push(entity);
    }

    Ok(entities)
}

fn ensure_map(value: &Value) -> Result<(), String> {
    match value {
        Value::Mapping(_) | Value::Null => Ok(()),
        other => Err(format!(
            "the value must be a map, got {}",
            scalar::describe(other)
        )),
    }
}
