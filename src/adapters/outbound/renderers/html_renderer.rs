use crate::audit_report::domain::{AuditEntry, AuditEvent, ErrorReportData, ReportData};
use crate::ports::outbound::ReportRenderer;
use crate::shared::Result;

const STYLE: &str = "body { font-family: Arial, Helvetica, sans-serif; margin: 24px; }
h1 { font-size: 1.4em; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #c8c8c8; padding: 6px; vertical-align: middle; }
th { background: #f0f0f0; text-align: center; }
.report-footer { margin-top: 24px; color: #666; font-size: 0.85em; }
.report-errors li { color: #a00000; }
";

/// HtmlReportRenderer adapter producing a standalone HTML page
///
/// One table row per recorded event. The project column is only present when
/// the report covers more than one project.
pub struct HtmlReportRenderer;

impl HtmlReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Escapes text for use in element content and attribute values
    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    fn link(href: &str, text: &str) -> String {
        format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            Self::escape(href),
            Self::escape(text)
        )
    }

    fn render_head(output: &mut String, report_name: &str) {
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(&format!(
            "<title>{}</title>\n",
            Self::escape(&report_name.to_uppercase())
        ));
        output.push_str("<style>\n");
        output.push_str(STYLE);
        output.push_str("</style>\n</head>\n<body>\n");
    }

    fn render_footer(output: &mut String, report_time_stamp: &str) {
        output.push_str("<div class=\"report-footer\">\n");
        output.push_str(&format!(
            "  <div>Generated on {}</div>\n",
            Self::escape(report_time_stamp)
        ));
        output.push_str(&format!(
            "  <div>inventory-license-audit {}</div>\n",
            env!("CARGO_PKG_VERSION")
        ));
        output.push_str("</div>\n</body>\n</html>\n");
    }

    fn render_table_header(output: &mut String, with_project_column: bool) {
        output.push_str("<table id=\"audit-history\">\n<thead>\n<tr>\n");
        if with_project_column {
            output.push_str("  <th>PROJECT</th>\n");
        }
        for heading in [
            "INVENTORY ITEM",
            "DATE",
            "USER",
            "ORIGINAL VALUE",
            "NEW VALUE",
        ] {
            output.push_str(&format!("  <th>{}</th>\n", heading));
        }
        output.push_str("</tr>\n</thead>\n<tbody>\n");
    }

    fn render_event_row(
        output: &mut String,
        entry: &AuditEntry,
        event: &AuditEvent,
        with_project_column: bool,
    ) {
        output.push_str("<tr>\n");
        if with_project_column {
            output.push_str(&format!(
                "  <td>{}</td>\n",
                Self::link(&entry.project_link, &entry.project)
            ));
        }
        output.push_str(&format!(
            "  <td>{}</td>\n",
            Self::link(&entry.inventory_item_link, &entry.inventory_item_name)
        ));
        output.push_str(&format!("  <td>{}</td>\n", Self::escape(&event.date)));
        output.push_str(&format!(
            "  <td title=\"{}\">{}</td>\n",
            Self::escape(&event.user_email),
            Self::escape(&event.user)
        ));
        output.push_str(&format!("  <td>{}</td>\n", Self::escape(&event.old_value)));
        output.push_str(&format!("  <td>{}</td>\n", Self::escape(&event.new_value)));
        output.push_str("</tr>\n");
    }
}

impl Default for HtmlReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for HtmlReportRenderer {
    fn render(&self, data: &ReportData) -> Result<String> {
        let with_project_column = data.project_list.has_children();
        let mut output = String::new();

        Self::render_head(&mut output, &data.report_name);
        output.push_str(&format!("<h1>{}</h1>\n", Self::escape(&data.report_name)));

        let root_link = data
            .project_list
            .root()
            .map(|root| root.project_link.as_str())
            .unwrap_or_default();
        output.push_str(&format!(
            "<p>Project: {}</p>\n",
            Self::link(root_link, &data.project_name)
        ));

        if data.audit_history.is_empty() {
            output.push_str("<p>No license changes were found.</p>\n");
        } else {
            Self::render_table_header(&mut output, with_project_column);
            for entry in data.audit_history.iter() {
                for event in &entry.events {
                    Self::render_event_row(&mut output, entry, event, with_project_column);
                }
            }
            output.push_str("</tbody>\n</table>\n");
        }

        Self::render_footer(&mut output, &data.timestamp.report_time_stamp);
        Ok(output)
    }

    fn render_error(&self, data: &ErrorReportData) -> Result<String> {
        let mut output = String::new();

        Self::render_head(&mut output, &data.report_name);
        output.push_str(&format!("<h1>{}</h1>\n", Self::escape(&data.report_name)));
        output.push_str("<p>The report could not be created:</p>\n");
        output.push_str("<ul class=\"report-errors\">\n");
        for error in &data.errors {
            output.push_str(&format!("  <li>{}</li>\n", Self::escape(error)));
        }
        output.push_str("</ul>\n");

        Self::render_footer(&mut output, &data.timestamp.report_time_stamp);
        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}
