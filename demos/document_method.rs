use anyhow::Result;
use raml_rs::model::{Document, Method};
use raml_rs::observability::init_logger;

fn main() -> Result<()> {
    init_logger();

    let content = r#"
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

    let method = Method::yaml("get", content)?;
    println!("{}", method.document());

    match Method::yaml("propfind", content) {
        Ok(_) => println!("propfind unexpectedly accepted"),
        Err(e) => println!("rejected: {e}"),
    }

    Ok(())
}
