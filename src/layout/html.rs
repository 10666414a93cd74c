//! HTML rendering of the layout tree.

use std::fmt::Write;

use super::{Node, SelectOption, PAGE_TITLE};

pub const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const APP_JS: &str = "/static/app.js";

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn attr(out: &mut String, name: &str, value: &str) {
    // Writing to a String never fails.
    let _ = write!(out, " {}=\"{}\"", name, escape(value));
}

fn render_options(out: &mut String, options: &[SelectOption]) {
    for option in options {
        out.push_str("<option");
        attr(out, "value", &option.value.to_string());
        out.push('>');
        out.push_str(&escape(&option.label));
        out.push_str("</option>");
    }
}

/// Append the HTML for `node` and its children to `out`.
pub fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Container {
            id,
            class_name,
            hidden,
            children,
        } => {
            out.push_str("<div");
            if let Some(id) = id {
                attr(out, "id", id);
            }
            if !class_name.is_empty() {
                attr(out, "class", class_name);
            }
            if *hidden {
                attr(out, "style", "display: none");
            }
            out.push('>');
            for child in children {
                render_node(child, out);
            }
            out.push_str("</div>");
        }
        Node::Heading { text, class_name } => {
            out.push_str("<h1");
            attr(out, "class", class_name);
            out.push('>');
            out.push_str(&escape(text));
            out.push_str("</h1>");
        }
        Node::Label { text, html_for } => {
            out.push_str("<label class=\"form-label\"");
            attr(out, "for", html_for);
            out.push('>');
            out.push_str(&escape(text));
            out.push_str("</label>");
        }
        Node::RadioItems { id, options, value } => {
            out.push_str("<div class=\"form-check mb-3 radio-group\"");
            attr(out, "id", id);
            out.push('>');
            for option in options {
                let option_value = option.value.to_string();
                let input_id = format!("{}-{}", id, option_value);
                out.push_str("<div><input class=\"form-check-input\" type=\"radio\"");
                attr(out, "id", &input_id);
                attr(out, "name", id);
                attr(out, "value", &option_value);
                if option_value == *value {
                    out.push_str(" checked");
                }
                out.push_str("><label class=\"form-check-label\"");
                attr(out, "for", &input_id);
                out.push('>');
                out.push_str(&escape(&option.label));
                out.push_str("</label></div>");
            }
            out.push_str("</div>");
        }
        Node::Dropdown { id, options } => {
            out.push_str("<select class=\"form-select mb-2\"");
            attr(out, "id", id);
            out.push_str("><option value=\"\">Select...</option>");
            render_options(out, options);
            out.push_str("</select>");
        }
        Node::Graph { id, height } => {
            out.push_str("<div");
            attr(out, "id", id);
            attr(out, "style", &format!("height: {}", height));
            out.push_str("></div>");
        }
    }
}

/// Render a complete HTML document around the layout tree.
pub fn render_page(root: &Node) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    let _ = write!(out, "<title>{}</title>", escape(PAGE_TITLE));
    let _ = write!(out, "<link rel=\"stylesheet\" href=\"{}\">", BOOTSTRAP_CSS);
    let _ = write!(out, "<script src=\"{}\"></script>", PLOTLY_JS);
    out.push_str("</head><body>");
    render_node(root, &mut out);
    let _ = write!(out, "<script src=\"{}\"></script>", APP_JS);
    out.push_str("</body></html>");
    out
}
