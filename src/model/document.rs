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

//! Plain-text documentation for constructed entities.

use crate::model::{Body, Header, Method, ParameterAttributes, QueryParameter, Response};
use crate::validator::scalar;

pub trait Document {
    fn document(&self) -> String;
}

impl Document for Method {
    fn document(&self) -> String {
        let mut lines = vec![self.name().as_str().to_uppercase()];

        if let Some(description) = self.description() {
            lines.push(description.trim_end().to_string());
        }
        if !self.protocols().is_empty() {
            let protocols: Vec<String> = self.protocols().iter().map(|p| p.to_string()).collect();
            lines.push(format!("Protocols: {}", protocols.join(", ")));
        }
        if !self.traits().is_empty() {
            lines.push(format!("Traits: {}", self.traits().join(", ")));
        }
        if !self.secured_by().is_empty() {
            lines.push(format!("Secured by: {}", self.secured_by().join(", ")));
        }

        section(&mut lines, "Headers", self.headers());
        section(&mut lines, "Query Parameters", self.query_parameters());
        section(&mut lines, "Body", self.body());
        section(&mut lines, "Responses", self.responses());

        lines.join("\n")
    }
}

impl Document for Header {
    fn document(&self) -> String {
        parameter(self.name(), self.display_name(), self.attributes())
    }
}

impl Document for QueryParameter {
    fn document(&self) -> String {
        parameter(self.name(), self.display_name(), self.attributes())
    }
}

impl Document for Response {
    fn document(&self) -> String {
        let mut lines = vec![self.code().to_string()];
        if let Some(description) = self.description() {
            lines.push(indent(description.trim_end(), 1));
        }
        let mut nested = Vec::new();
        section(&mut nested, "Headers", self.headers());
        section(&mut nested, "Body", self.body());
        lines.extend(nested.iter().map(|line| indent(line, 1)));
        lines.join("\n")
    }
}

impl Document for Body {
    fn document(&self) -> String {
        let mut lines = vec![self.media_type().to_string()];
        if let Some(schema) = self.schema() {
            lines.push(indent(&format!("schema: {}", schema.trim_end()), 1));
        }
        if let Some(example) = self.example() {
            lines.push(indent(&format!("example: {}", example.trim_end()), 1));
        }
        lines.join("\n")
    }
}

fn section<T: Document>(lines: &mut Vec<String>, title: &str, entries: &[T]) {
    if entries.is_empty() {
        return;
    }
    lines.push(title.to_string());
    for entry in entries {
        lines.push(indent(&entry.document(), 1));
    }
}

fn parameter(name: &str, display_name: &str, attributes: &ParameterAttributes) -> String {
    let mut lines = if display_name == name {
        vec![name.to_string()]
    } else {
        vec![format!("{} ({})", name, display_name)]
    };

    if let Some(description) = &attributes.description {
        lines.push(indent(description.trim_end(), 1));
    }

    let mut facts = vec![
        format!("type: {}", attributes.r#type),
        format!("required: {}", attributes.required),
    ];
    if attributes.repeat {
        facts.push("repeat: true".to_string());
    }
    if let Some(values) = &attributes.r#enum {
        facts.push(format!("enum: [{}]", values.join(", ")));
    }
    if let Some(pattern) = &attributes.pattern {
        facts.push(format!("pattern: {}", pattern));
    }
    if let Some(min) = attributes.min_length {
        facts.push(format!("minLength: {}", min));
    }
    if let Some(max) = attributes.max_length {
        facts.push(format!("maxLength: {}", max));
    }
    if let Some(min) = attributes.minimum {
        facts.push(format!("minimum: {}", min));
    }
    if let Some(max) = attributes.maximum {
        facts.push(format!("maximum: {}", max));
    }
    if let Some(default) = &attributes.default {
        facts.push(format!("default: {}", scalar::render(default)));
    }
    if let Some(example) = &attributes.example {
        facts.push(format!("example: {}", scalar::render(example)));
    }
    lines.push(indent(&facts.join(", "), 1));

    lines.join("\n")
}

fn indent(text: &str, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
