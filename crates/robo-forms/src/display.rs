//! Form summary table
//!
//! `Display` for [`Form`] prints the action, method and a pipe table of the
//! named, visible fields.

use std::fmt;

use crate::form::Form;

/// Longest value shown before truncating with `...`
const MAX_VALUE_LENGTH: usize = 10;

const HEADERS: [&str; 4] = ["Tag Type", "Name", "Label", "Value"];

impl Form {
    /// Summary table, optionally listing hidden fields
    pub fn summary(&self, show_hidden: bool) -> String {
        let mut out = String::from("Form Object:\n");
        out.push_str(&format!("      .action: {:?}\n", self.action()));
        out.push_str(&format!("      .method: {}\n", self.method().as_str()));
        out.push_str("   \n");

        let mut hidden = 0;
        let mut rows: Vec<[String; 4]> = Vec::new();
        for field in self.fields() {
            let show = if field.is_hidden() {
                hidden += 1;
                show_hidden
            } else {
                field.name().is_some()
            };
            if show {
                rows.push([
                    field.tag_type(),
                    field.name().unwrap_or_default().to_string(),
                    field.label().to_string(),
                    truncate(&field.value().to_string()),
                ]);
            }
        }

        if !rows.is_empty() {
            out.push_str(&pipe_table(&rows));
        } else if hidden > 0 {
            out.push_str("    Only hidden fields present in the form\n");
        } else {
            out.push_str("    No fields present in the form\n");
        }
        out
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(false))
    }
}

fn truncate(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_LENGTH {
        let head: String = value.chars().take(MAX_VALUE_LENGTH - 3).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}

/// Left-aligned markdown-style table
fn pipe_table(rows: &[[String; 4]]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 4]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {cell:<width$} "))
            .collect();
        format!("|{}|\n", padded.join("|"))
    };

    let mut out = line(HEADERS);
    let rule: Vec<String> = widths.iter().map(|w| format!(":{}", "-".repeat(w + 1))).collect();
    out.push_str(&format!("|{}|\n", rule.join("|")));
    for row in rows {
        out.push_str(&line([row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("\"john\""), "\"john\"");
        assert_eq!(truncate("\"abcdefghijk\""), "\"abcdef...");
        assert_eq!(truncate("\"abcdefghijk\"").chars().count(), MAX_VALUE_LENGTH);
    }

    #[test]
    fn test_pipe_table_alignment() {
        let rows = vec![[
            "<textarea".to_string(),
            "comment".to_string(),
            String::new(),
            "\"\"".to_string(),
        ]];
        let table = pipe_table(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "| Tag Type  | Name    | Label | Value |");
        assert_eq!(lines[1], "|:----------|:--------|:------|:------|");
        assert_eq!(lines[2], "| <textarea | comment |       | \"\"    |");
    }
}
