//! Attribute renderer.
//!
//! Turns one instance's attribute map into the `<tr>` rows of a two-column
//! table. The `Attribute`/`Value` header row is the assembler's job, once per
//! instance.
//!
//! Values are inserted verbatim, without HTML escaping. State files produced
//! by Terraform itself are well-behaved, but a value containing `<` or `&`
//! will corrupt the surrounding markup.

use indexmap::IndexMap;

use crate::terraform::AttributeValue;

/// Render every attribute of one instance, in map order. Each key is
/// dispatched exactly once; only disqualified sequence elements are skipped.
pub fn attribute_rows(attributes: &IndexMap<String, AttributeValue>) -> String {
    let mut out = String::new();
    for (key, value) in attributes {
        match value {
            // A sequence contributes one row per nested-object element, the
            // key repeated on each. Scalar or deeper-nested elements are
            // skipped rather than guessed at.
            AttributeValue::Sequence(items) => {
                for item in items {
                    if let Some(map) = item.as_object() {
                        out.push_str(&nested_row(key, map));
                    }
                }
            }
            AttributeValue::Object(map) => out.push_str(&nested_row(key, map)),
            scalar => {
                out.push_str(&format!(
                    "<tr><td>{key}</td><td>{}</td></tr>",
                    scalar.display()
                ));
            }
        }
    }
    out
}

/// One outer row whose value cell is an inner table of the nested map. Only
/// this single level is expanded; deeper structure flattens to JSON text.
fn nested_row(key: &str, map: &IndexMap<String, AttributeValue>) -> String {
    let mut row = format!("<tr><td>{key}</td><td><table>");
    for (nested_key, nested_value) in map {
        row.push_str(&format!(
            "<tr><td>{nested_key}</td><td>{}</td></tr>",
            nested_value.display()
        ));
    }
    row.push_str("</table></td></tr>");
    row
}
