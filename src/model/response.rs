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
use crate::model::{Entity, Header};
use crate::validator::identifier::{status_code, validate_media_type};
use crate::validator::{schema, validate};
use serde::Serialize;
use serde_yaml::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    code: u16,
    description: Option<String>,
    headers: Vec<Header>,
    body: Vec<Body>,
}

impl Response {
    /// `code` is the status code as it appears in the `responses` map.
    pub fn new(code: &str, raw: &Value) -> Result<Self, InvalidProperty> {
        let code = status_code(&Value::from(code))
            .map_err(|reason| InvalidProperty::new(code, reason))?;
        let mut properties = validate(&code.to_string(), raw, &schema::RESPONSE)?;

        Ok(Self {
            code,
            description: properties.take_string("description"),
            headers: properties.take_entities("headers", Entity::into_header),
            body: properties.take_entities("body", Entity::into_body),
        })
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn body(&self) -> &[Body] {
        &self.body
    }

    pub fn body_for(&self, media_type: &str) -> Option<&Body> {
        self.body.iter().find(|b| b.media_type == media_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    media_type: String,
    schema: Option<String>,
    example: Option<String>,
}

impl Body {
    pub fn new(media_type: &str, raw: &Value) -> Result<Self, InvalidProperty> {
        validate_media_type(media_type)
            .map_err(|reason| InvalidProperty::new(media_type, reason))?;
        let mut properties = validate(media_type, raw, &schema::BODY)?;

        Ok(Self {
            media_type: media_type.to_string(),
            schema: properties.take_string("schema"),
            example: properties.take_string("example"),
        })
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }
}
