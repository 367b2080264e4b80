//! `curl` rendering of a command plan.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

use super::{ApiCall, CommandPlan};

const HEADER: &str = "Generated API calls:";
const HEADER_RULE: &str = "-------------------";
const ASSIGN_SECTION: &str = "# Assign products to categories";

/// Single-line JSON with a space after `:` and `,`.
///
/// Produces bodies like `{"name": "Electronics", "description": "..."}`.
struct InlineFormatter;

impl Formatter for InlineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` as inline JSON.
fn to_inline_json<T: Serialize>(value: &T) -> io::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, InlineFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Wrap `s` in single quotes for a POSIX shell.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Keep a comment on one line.
fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

fn write_call<W: Write>(writer: &mut W, call: &ApiCall) -> io::Result<()> {
    writeln!(writer, "# {}", single_line(&call.comment))?;
    writeln!(writer, "curl -X {} {} \\", call.method, shell_quote(&call.url))?;
    writeln!(writer, "  -H 'Content-Type: application/json' \\")?;
    writeln!(writer, "  -d {}", shell_quote(&to_inline_json(&call.body)?))?;
    writeln!(writer)
}

/// Write the plan as `curl` commands.
///
/// Creation commands come first, then an `# Assign products to categories`
/// marker followed by the assignment commands. With `header`, the output
/// starts with a two-line banner.
pub fn render_curl<W: Write>(plan: &CommandPlan, writer: &mut W, header: bool) -> io::Result<()> {
    if header {
        writeln!(writer, "{}", HEADER)?;
        writeln!(writer, "{}", HEADER_RULE)?;
    }

    for call in plan.creations() {
        write_call(writer, call)?;
    }

    writeln!(writer, "{}", ASSIGN_SECTION)?;
    for call in plan.assignments() {
        write_call(writer, call)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_products, Product};
    use crate::emit::{OutputFormat, RequestBody};

    fn render(products: &[Product], header: bool) -> String {
        let mut out = Vec::new();
        CommandPlan::build(products)
            .render(&mut out, OutputFormat::Curl, header)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_inline_json_spacing() {
        let body = RequestBody::Category {
            name: "Electronics".to_string(),
            description: "Electronics products".to_string(),
        };
        assert_eq!(
            to_inline_json(&body).unwrap(),
            r#"{"name": "Electronics", "description": "Electronics products"}"#
        );
    }

    #[test]
    fn test_inline_json_escapes_quotes() {
        let body = RequestBody::CategoryPath {
            category_path: "Other/\"Quoted\"".to_string(),
        };
        assert_eq!(
            to_inline_json(&body).unwrap(),
            r#"{"categoryPath": "Other/\"Quoted\""}"#
        );
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("plain"), "'plain'");
        assert_eq!(shell_quote("Men's"), r"'Men'\''s'");
    }

    #[test]
    fn test_iphone_end_to_end() {
        let output = render(&[Product::new("688da20eeeee72acc43a2f48", "iPhone 15 Pro", None)], false);

        let expected = "\
# Create parent category: Electronics
curl -X POST 'http://192.168.1.210:8080/api/categories' \\
  -H 'Content-Type: application/json' \\
  -d '{\"name\": \"Electronics\", \"description\": \"Electronics products\"}'

# Create subcategory: Generic under Electronics
curl -X POST 'http://192.168.1.210:8080/api/categories' \\
  -H 'Content-Type: application/json' \\
  -d '{\"name\": \"Generic\", \"description\": \"Generic Electronics\"}'

# Assign products to categories
# Assign iPhone 15 Pro to Electronics/Generic
curl -X PUT 'http://192.168.1.210:8080/api/products/688da20eeeee72acc43a2f48/categories' \\
  -H 'Content-Type: application/json' \\
  -d '{\"categoryPath\": \"Electronics/Generic\"}'

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_kaiak_is_filed_under_other() {
        let output = render(
            &[Product::new("688d8aea3054eeaac26b0ad6", "Kaiak Oceano Masculino 100 ml", Some("Kaiak"))],
            false,
        );
        assert!(output.contains(r#""categoryPath": "Other/Kaiak""#));
        assert!(output.contains("# Create parent category: Other"));
    }

    #[test]
    fn test_header_is_optional() {
        let with_header = render(&sample_products(), true);
        let without_header = render(&sample_products(), false);

        assert!(with_header.starts_with("Generated API calls:\n-------------------\n"));
        assert!(!without_header.contains("Generated API calls:"));
        assert!(with_header.ends_with(&without_header));
    }

    #[test]
    fn test_apostrophe_in_body_is_shell_escaped() {
        let output = render(&[Product::new("p1", "Men's T-Shirt", Some("O'Neill"))], false);
        assert!(output.contains(r#"-d '{"name": "O'\''Neill", "description": "O'\''Neill Clothing"}'"#));
        assert!(output.contains("# Assign Men's T-Shirt to Clothing/O'Neill"));
    }

    #[test]
    fn test_newline_in_name_stays_in_comment() {
        let output = render(&[Product::new("p1", "Crema\nrm -rf", None)], false);
        assert!(output.contains("# Assign Crema rm -rf to Cosmetics/Generic"));
        assert!(!output.lines().any(|line| line == "rm -rf to Cosmetics/Generic"));
    }

    #[test]
    fn test_sample_output_counts() {
        let output = render(&sample_products(), true);

        assert_eq!(output.matches("curl -X POST").count(), 15);
        assert_eq!(output.matches("curl -X PUT").count(), 10);
        assert_eq!(output.matches("# Assign products to categories").count(), 1);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let products = sample_products();
        assert_eq!(render(&products, true), render(&products, true));
    }

    #[test]
    fn test_empty_catalog_prints_only_markers() {
        assert_eq!(
            render(&[], true),
            "Generated API calls:\n-------------------\n# Assign products to categories\n"
        );
    }
}
