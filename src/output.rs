//! Rendering and writing generated bodies.

use anyhow::Context;
use api_schema::{EndpointSummary, GeneratedValue};
use std::path::Path;

/// Render bodies as JSON.
///
/// A single body is printed as-is; several are wrapped in a JSON array.
pub fn render(mut bodies: Vec<GeneratedValue>, compact: bool) -> anyhow::Result<String> {
    let value = if bodies.len() == 1 {
        bodies.remove(0)
    } else {
        GeneratedValue::Array(bodies)
    };
    let rendered = if compact {
        value.to_json_string()
    } else {
        value.to_json_string_pretty()
    };
    rendered.context("Failed to serialize generated body")
}

/// Write rendered output to a file, or to stdout when no path is given.
pub fn write_output(rendered: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write output file: {path:?}"))?;
            tracing::info!("Wrote body to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Format the endpoint listing, one operation per line.
pub fn format_endpoints(endpoints: &[EndpointSummary]) -> String {
    endpoints
        .iter()
        .map(|e| {
            let mut line = format!("{:<7} {}", e.method.to_string(), e.path);
            if let Some(summary) = &e.summary {
                line.push_str(&format!(" - {summary}"));
            }
            if e.has_json_body {
                line.push_str(" [json body]");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_schema::HttpMethod;

    fn body(id: i64) -> GeneratedValue {
        GeneratedValue::Object([("id".to_string(), GeneratedValue::Int64(id))].into_iter().collect())
    }

    #[test]
    fn test_render_single_body() {
        assert_eq!(render(vec![body(1)], true).unwrap(), r#"{"id":1}"#);
        assert_eq!(render(vec![body(1)], false).unwrap(), "{\n  \"id\": 1\n}");
    }

    #[test]
    fn test_render_many_bodies_as_array() {
        assert_eq!(
            render(vec![body(1), body(2)], true).unwrap(),
            r#"[{"id":1},{"id":2}]"#
        );
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.json");

        write_output(r#"{"id":1}"#, Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"id\":1}\n");
    }

    #[test]
    fn test_write_output_bad_path() {
        let err = write_output("{}", Some(Path::new("/no/such/dir/body.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to write output file"));
    }

    #[test]
    fn test_format_endpoints() {
        let endpoints = vec![
            EndpointSummary {
                path: "/pet".to_string(),
                method: HttpMethod::Post,
                summary: Some("Add a new pet".to_string()),
                has_json_body: true,
            },
            EndpointSummary {
                path: "/pet".to_string(),
                method: HttpMethod::Get,
                summary: None,
                has_json_body: false,
            },
        ];

        assert_eq!(
            format_endpoints(&endpoints),
            "POST    /pet - Add a new pet [json body]\nGET     /pet"
        );
    }
}
