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

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::model::{Document, Header, Method, ParameterType, Protocol, QueryParameter};
    use serde_yaml::{Mapping, Value};

    const USERS: &str = r#"
description: Get a list of users
queryParameters:
  page:
    description: Specify the page that you want to retrieve
    type: integer
    required: true
    example: 1
  per_page:
    description: Specify the amount of items that will be retrieved per page
    type: integer
    minimum: 10
    maximum: 200
    default: 30
    example: 50
protocols: [ HTTP, HTTPS ]
responses:
  200:
    description: |
      The list of popular media.
"#;

    fn yaml(content: &str) -> Value {
        serde_yaml::from_str(content).expect("Failed to parse YAML content")
    }

    fn empty() -> Value {
        Value::Mapping(Mapping::new())
    }

    fn property_error(result: Result<Method, Error>, pattern: &str) {
        match result {
            Err(Error::InvalidProperty(e)) => {
                assert!(e.to_string().contains(pattern), "{} !~ {}", e, pattern)
            }
            other => panic!("expected InvalidProperty matching {}, got {:?}", pattern, other),
        }
    }

    #[test]
    fn test_users_method() {
        let method = Method::new("get", &yaml(USERS)).unwrap();

        assert_eq!(method.description(), Some("Get a list of users"));
        assert_eq!(method.protocols(), &[Protocol::Http, Protocol::Https]);

        let page = method.query_parameter("page").unwrap();
        assert_eq!(page.r#type(), ParameterType::Integer);
        assert!(page.required());
        assert_eq!(page.example(), Some(&Value::from(1)));

        let per_page = method.query_parameter("per_page").unwrap();
        assert!(!per_page.required());
        assert_eq!(per_page.minimum(), Some(10.0));
        assert_eq!(per_page.maximum(), Some(200.0));
        assert_eq!(per_page.default(), Some(&Value::from(30)));

        let names: Vec<&str> = method.query_parameters().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["page", "per_page"]);

        let ok = method.response(200).unwrap();
        assert_eq!(ok.description(), Some("The list of popular media.\n"));
    }

    #[test]
    fn test_supported_methods() {
        for name in [
            "options", "get", "head", "post", "put", "delete", "trace", "connect", "patch",
        ] {
            assert!(Method::new(name, &empty()).is_ok(), "{}", name);
            assert!(Method::new(name, &yaml(USERS)).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_unsupported_methods() {
        for name in ["propfind", "proppatch", "mkcol", "copy", "move", "lock", "unlock"] {
            match Method::new(name, &yaml(USERS)) {
                Err(Error::InvalidMethod(e)) => assert_eq!(e.name, name),
                other => panic!("expected InvalidMethod for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_description() {
        let method = Method::new("get", &empty()).unwrap();
        assert!(method.description().is_none());
        assert!(!method.document().is_empty());

        property_error(Method::new("get", &yaml("description: 1")), "description");

        let method = Method::new("get", &yaml("description: My Description")).unwrap();
        assert_eq!(method.description(), Some("My Description"));
        assert!(method.document().contains("My Description"));
    }

    #[test]
    fn test_unknown_property() {
        property_error(Method::new("get", &yaml("summary: nope")), "summary");
    }

    #[test]
    fn test_well_formed_headers() {
        let method = Method::new(
            "get",
            &yaml(
                r#"
headers:
  Zencoder-Api-Key:
    displayName: ZEncoder API Key
  x-Zencoder-job-metadata-{*}:
    displayName: Job Metadata
"#,
            ),
        )
        .unwrap();

        let headers: &[Header] = method.headers();
        let mut names: Vec<&str> = headers.iter().map(|h| h.name()).collect();
        names.sort();
        assert_eq!(names, vec!["Zencoder-Api-Key", "x-Zencoder-job-metadata-{*}"]);

        assert_eq!(
            method.header("Zencoder-Api-Key").unwrap().display_name(),
            "ZEncoder API Key"
        );
        let metadata = method.header("x-Zencoder-job-metadata-owner").unwrap();
        assert!(metadata.is_templated());
        assert_eq!(metadata.display_name(), "Job Metadata");
        assert!(method.header("x-Zencoder-other").is_none());
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let method = Method::new(
            "get",
            &yaml("headers:\n  X-A:\n    description: upper\n  x-a:\n    description: lower"),
        )
        .unwrap();

        assert_eq!(method.headers().len(), 2);
        assert_eq!(method.header("x-a").unwrap().description(), Some("lower"));
        assert_eq!(method.header("X-A").unwrap().description(), Some("upper"));
        assert!(method.header("x-A").is_none());

        let method =
            Method::new("get", &yaml("queryParameters:\n  Page: {}\n  page: {}")).unwrap();
        assert_eq!(method.query_parameters().len(), 2);
        assert_eq!(method.query_parameter("page").unwrap().name(), "page");
        assert!(method.query_parameter("PAGE").is_none());
    }

    #[test]
    fn test_malformed_headers() {
        property_error(Method::new("get", &yaml("headers: 1")), "headers");

        let mut headers = Mapping::new();
        headers.insert(Value::from(1), Value::Mapping(Mapping::new()));
        let mut raw = Mapping::new();
        raw.insert(Value::from("headers"), Value::Mapping(headers));
        property_error(Method::new("get", &Value::Mapping(raw)), "headers");

        let mut headers = Mapping::new();
        headers.insert(Value::from("1"), Value::from("x"));
        let mut raw = Mapping::new();
        raw.insert(Value::from("headers"), Value::Mapping(headers));
        property_error(Method::new("get", &Value::Mapping(raw)), "headers");

        property_error(
            Method::new("get", &yaml("headers:\n  x-{*}-{*}: {}")),
            "headers",
        );
    }

    #[test]
    fn test_query_parameter_constraints() {
        struct Tests {
            content: &'static str,
            pattern: &'static str,
        }

        let tests = vec![
            Tests {
                content: "type: integer\nminimum: 10\nmaximum: 5",
                pattern: "minimum",
            },
            Tests {
                content: "type: string\nminimum: 1",
                pattern: "minimum",
            },
            Tests {
                content: "type: integer\npattern: '^a'",
                pattern: "pattern",
            },
            Tests {
                content: "pattern: '[unclosed'",
                pattern: "pattern",
            },
            Tests {
                content: "minLength: 4\nmaxLength: 2",
                pattern: "minLength",
            },
            Tests {
                content: "minLength: -1",
                pattern: "minLength",
            },
            Tests {
                content: "type: integer\nexample: ten",
                pattern: "example",
            },
            Tests {
                content: "type: integer\nmaximum: 20\ndefault: 30",
                pattern: "default",
            },
            Tests {
                content: "enum: [asc, desc]\ndefault: up",
                pattern: "default",
            },
            Tests {
                content: "type: date\nexample: yesterday",
                pattern: "example",
            },
            Tests {
                content: "type: boolean\ndefault: 'true'",
                pattern: "default",
            },
            Tests {
                content: "type: String",
                pattern: "type",
            },
            Tests {
                content: "type: number\nminimum: 'NaN'\nmaximum: 'NaN'\ndefault: 7",
                pattern: "minimum",
            },
            Tests {
                content: "type: number\nmaximum: .inf",
                pattern: "maximum",
            },
            Tests {
                content: "type: number\nexample: .nan",
                pattern: "example",
            },
            Tests {
                content: "type: string\nexample: 123",
                pattern: "example",
            },
            Tests {
                content: "default: true",
                pattern: "default",
            },
            Tests {
                content: "pattern: '^[0-9]+$'\nexample: abc",
                pattern: "example",
            },
        ];

        for test in tests {
            let content = format!(
                "queryParameters:\n  sort:\n{}",
                test.content
                    .lines()
                    .map(|line| format!("    {line}\n"))
                    .collect::<String>()
            );
            property_error(Method::new("get", &yaml(&content)), test.pattern);
        }
    }

    #[test]
    fn test_query_parameter_defaults() {
        let parameter = QueryParameter::new("q", &Value::Null).unwrap();
        assert_eq!(parameter.r#type(), ParameterType::String);
        assert!(!parameter.required());
        assert!(!parameter.attributes().repeat);
        assert_eq!(parameter.display_name(), "q");

        let parameter = QueryParameter::new(
            "since",
            &yaml("type: date\nexample: Sun, 06 Nov 1994 08:49:37 GMT"),
        )
        .unwrap();
        assert_eq!(parameter.r#type(), ParameterType::Date);

        let parameter = QueryParameter::new(
            "sort",
            &yaml("enum: [asc, desc]\npattern: '^[a-z]+$'\ndefault: asc"),
        )
        .unwrap();
        assert_eq!(
            parameter.attributes().r#enum,
            Some(vec!["asc".to_string(), "desc".to_string()])
        );
    }

    #[test]
    fn test_query_parameter_names_are_literal() {
        property_error(
            Method::new("get", &yaml("queryParameters:\n  page-{*}: {}")),
            "queryParameters",
        );
    }

    #[test]
    fn test_body_and_responses() {
        let method = Method::new(
            "post",
            &yaml(
                r#"
body:
  application/json:
    schema: user
    example: '{"name": "alice"}'
responses:
  201:
    description: Created
    headers:
      Location:
        description: URL of the new user
  '400':
    body:
      application/json:
        schema: error
is: [ secured ]
securedBy: [ oauth_2_0 ]
"#,
            ),
        )
        .unwrap();

        assert_eq!(method.body()[0].media_type(), "application/json");
        assert_eq!(method.body()[0].schema(), Some("user"));

        let created = method.response(201).unwrap();
        assert_eq!(created.headers()[0].name(), "Location");
        let bad_request = method.response(400).unwrap();
        assert_eq!(
            bad_request.body_for("application/json").unwrap().schema(),
            Some("error")
        );
        assert_eq!(method.traits(), &["secured".to_string()]);
        assert_eq!(method.secured_by(), &["oauth_2_0".to_string()]);

        let document = method.document();
        assert!(document.starts_with("POST"));
        assert!(document.contains("URL of the new user"));
        assert!(document.contains("schema: error"));

        property_error(
            Method::new("get", &yaml("responses:\n  200:\n    description: 1")),
            "responses.200.description",
        );
        property_error(
            Method::new("get", &yaml("body:\n  json: {}")),
            "body",
        );
    }

    #[test]
    fn test_construction_is_idempotent() {
        let raw = yaml(USERS);
        let first = Method::new("get", &raw).unwrap();
        let second = Method::new("get", &raw).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.document(), second.document());
    }

    #[test]
    fn test_documentation_lists_parameters() {
        let method = Method::new("get", &yaml(USERS)).unwrap();
        let document = method.document();

        assert!(document.starts_with("GET\nGet a list of users"));
        assert!(document.contains("Protocols: HTTP, HTTPS"));
        assert!(document.contains("Specify the page that you want to retrieve"));
        assert!(document.contains("type: integer, required: false, minimum: 10, maximum: 200, default: 30, example: 50"));
        assert!(document.contains("The list of popular media."));
    }
}
