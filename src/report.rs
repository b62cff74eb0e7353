//! Report assembler.
//!
//! Wraps the per-instance tables from [`crate::render`] in a self-contained
//! HTML page: inline stylesheet, report title, Terraform version line, then
//! one type-labeled section per resource instance in document order.

use std::path::Path;

use crate::error::TfdocError;
use crate::render;
use crate::terraform::{Instance, StateDocument};

const STYLE: &str = r#"
table, th, td {
  border-collapse: collapse;
  width: 100%;
  border: 2px solid rgb(200, 200, 200);
  letter-spacing: 1px;
  font-family: sans-serif;
  font-size: .8rem;
}
th, td {
  padding: 5px;
  text-align: left;
  background-color: rgb(235, 235, 235);
  width: 50%;
}
caption {
  text-align: left;
  font-weight: bold;
}
tr:nth-child(even) td {
  background-color: rgb(250, 250, 250);
}
tr:nth-child(odd) td {
  background-color: rgb(240, 240, 240);
}
.table-header {
  font-family: sans-serif;
  font-size: 1.0rem;
}
h1 {
  font-family: sans-serif;
}
"#;

/// Render the complete HTML document for one state snapshot.
pub fn render_document(state: &StateDocument, title: &str) -> String {
    let mut sections = String::new();
    for resource in &state.resources {
        for instance in &resource.instances {
            sections.push_str(&render_instance(&resource.resource_type, instance));
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Terraform State Output - {title}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Terraform State Output - {title}</h1>
<br><div class="table-header">Built with Terraform: {version}</div><br>
{sections}</body>
</html>
"#,
        version = state.terraform_version,
    )
}

/// One type-labeled block: resource type header, then the attribute table
/// with its `Attribute`/`Value` header row.
fn render_instance(resource_type: &str, instance: &Instance) -> String {
    format!(
        "<br><br><b><div class=\"table-header\">{resource_type}</div></b>\n\
         <table>\n<tr><th>Attribute</th><th>Value</th></tr>\n{rows}</table>\n",
        rows = render::attribute_rows(&instance.attributes),
    )
}

/// Render and write the report. The whole document is assembled in memory
/// and written in one shot, so a failed run never leaves a half-open handle.
pub fn write_report(state: &StateDocument, title: &str, path: &Path) -> Result<(), TfdocError> {
    let html = render_document(state, title);
    std::fs::write(path, &html).map_err(|source| TfdocError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = html.len(), "report written");
    Ok(())
}
