// src/domain/post/rich_text.rs

/// Closed set of rich-text nodes a post body can contain. The CMS adapter
/// maps unknown node kinds away before this type is constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum RichTextNode {
    Paragraph { text: String },
    Heading { level: u8, text: String },
    ListItem { text: String },
    Image { url: String, alt: Option<String> },
    Link { url: String, text: String },
}

impl RichTextNode {
    /// Plain-text rendering used by read-time estimation. Images contribute
    /// their alt text only.
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Paragraph { text }
            | Self::Heading { text, .. }
            | Self::ListItem { text }
            | Self::Link { text, .. } => text,
            Self::Image { alt, .. } => alt.as_deref().unwrap_or(""),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::Paragraph { text } => format!("<p>{}</p>", escape_html(text)),
            Self::Heading { level, text } => {
                let level = (*level).clamp(1, 6);
                format!("<h{level}>{}</h{level}>", escape_html(text))
            }
            Self::ListItem { text } => format!("<li>{}</li>", escape_html(text)),
            Self::Image { url, alt } => format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(url),
                escape_html(alt.as_deref().unwrap_or(""))
            ),
            Self::Link { url, text } => format!(
                "<a href=\"{}\">{}</a>",
                escape_html(url),
                escape_html(text)
            ),
        }
    }
}

/// Render a body to HTML, preserving node order.
pub fn body_to_html(body: &[RichTextNode]) -> String {
    body.iter()
        .map(RichTextNode::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
