//! Print/export: renders a preview document to plain text or standalone HTML.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::preview::document::{PreviewDocument, PreviewEntry, PreviewSection, SectionBody};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Text,
    Html,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub format: ExportFormat,
    pub generated_at: DateTime<Utc>,
    pub body: String,
}

pub fn export(doc: &PreviewDocument, format: ExportFormat) -> ExportedDocument {
    let generated_at = Utc::now();
    let body = match format {
        ExportFormat::Text => render_text(doc, generated_at),
        ExportFormat::Html => render_html(doc, generated_at),
    };
    ExportedDocument {
        format,
        generated_at,
        body,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Plain text
// ────────────────────────────────────────────────────────────────────────────

fn render_text(doc: &PreviewDocument, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&doc.header.name);
    out.push('\n');

    let contact = contact_line(doc, " · ");
    if !contact.is_empty() {
        out.push_str(&contact);
        out.push('\n');
    }

    for section in &doc.sections {
        out.push('\n');
        out.push_str(&section.title.to_uppercase());
        out.push('\n');
        match &section.body {
            SectionBody::Placeholder(msg) => {
                out.push_str(msg);
                out.push('\n');
            }
            SectionBody::Entries(entries) => {
                for entry in entries {
                    out.push_str("- ");
                    out.push_str(&entry.headline());
                    out.push('\n');
                    if let PreviewEntry::Timeline(t) = entry {
                        if let Some(desc) = t.description.as_deref().filter(|d| !d.is_empty()) {
                            out.push_str("  ");
                            out.push_str(desc);
                            out.push('\n');
                        }
                    }
                }
            }
        }
    }

    out.push_str(&format!("\nGenerated {}\n", generated_at.format("%Y-%m-%d %H:%M UTC")));
    out
}

fn contact_line(doc: &PreviewDocument, separator: &str) -> String {
    let header = &doc.header;
    if header.contact_separator {
        format!("{}{separator}{}", header.email, header.linkedin)
    } else {
        format!("{}{}", header.email, header.linkedin)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTML
// ────────────────────────────────────────────────────────────────────────────

fn render_html(doc: &PreviewDocument, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>");
    out.push_str(&escape_html(&doc.header.name));
    out.push_str("</title></head>\n<body class=\"cv-preview-container\">\n");

    out.push_str("<div class=\"cv-header\">\n");
    out.push_str(&format!(
        "<h1 class=\"cv-name\">{}</h1>\n",
        escape_html(&doc.header.name)
    ));
    out.push_str("<div class=\"contact-info\">");
    out.push_str(&format!(
        "<p class=\"cv-contact\">{}</p>",
        escape_html(&doc.header.email)
    ));
    if doc.header.contact_separator {
        out.push_str("<span class=\"separator\">&middot;</span>");
    }
    out.push_str(&format!(
        "<p class=\"cv-contact linkedin\">{}</p>",
        escape_html(&doc.header.linkedin)
    ));
    out.push_str("</div>\n</div>\n");

    for section in &doc.sections {
        render_html_section(&mut out, section);
    }

    out.push_str(&format!(
        "<footer>Generated {}</footer>\n</body>\n</html>\n",
        generated_at.to_rfc3339()
    ));
    out
}

fn render_html_section(out: &mut String, section: &PreviewSection) {
    out.push_str("<section class=\"cv-section\">\n");
    out.push_str(&format!(
        "<h2 class=\"cv-section-title\">{}</h2>\n",
        escape_html(section.title)
    ));
    match &section.body {
        SectionBody::Placeholder(msg) => {
            out.push_str(&format!(
                "<p class=\"section-empty-message\">{}</p>\n",
                escape_html(msg)
            ));
        }
        SectionBody::Entries(entries) => {
            out.push_str("<div class=\"section-content\">\n");
            for entry in entries {
                match entry {
                    PreviewEntry::Timeline(t) => {
                        out.push_str("<div class=\"cv-item\"><div class=\"item-details\">");
                        out.push_str(&format!(
                            "<strong class=\"item-title\">{}</strong><div class=\"item-subtitle\">{}</div>",
                            escape_html(&t.title),
                            escape_html(&t.subtitle)
                        ));
                        if let Some(desc) = &t.description {
                            out.push_str(&format!(
                                "<p class=\"item-description\">{}</p>",
                                escape_html(desc)
                            ));
                        }
                        out.push_str(&format!(
                            "</div><div class=\"item-date\">{}</div></div>\n",
                            escape_html(&t.dates)
                        ));
                    }
                    PreviewEntry::Skill(s) => {
                        let class = match &s.level_class {
                            Some(c) => format!("skill-level {}", escape_html(c)),
                            None => "skill-level".to_string(),
                        };
                        out.push_str(&format!(
                            "<div class=\"skill-tag\"><strong class=\"skill-name\">{}:</strong> <span class=\"{class}\">{}</span></div>\n",
                            escape_html(&s.name),
                            escape_html(&s.level)
                        ));
                    }
                }
            }
            out.push_str("</div>\n");
        }
    }
    out.push_str("</section>\n");
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
