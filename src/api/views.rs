// src/api/views.rs
use std::fmt::Write;

use crate::api::types::IndexPage;

const STYLE: &str = r#"
        body {
            font-family: sans-serif;
            max-width: 600px;
            margin: 50px auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.3);
        }
        h1 { color: #007bff; text-align: center; }
        label { display: block; margin: 10px 0; }
        .flash { padding: 10px; border-radius: 5px; margin-bottom: 10px; }
        .flash.error { background: #f8d7da; color: #721c24; }
        .flash.success { background: #d4edda; color: #155724; }
        .result, .stat {
            font-size: 1.2em;
            text-align: center;
            margin: 20px 0;
            padding: 20px;
            background: #f8f9fa;
            border-radius: 5px;
        }
        .password { font-family: monospace; word-break: break-all; }
        a { color: #007bff; text-decoration: none; }
        .button {
            display: inline-block;
            padding: 10px 20px;
            background: #28a745;
            color: white;
            border-radius: 5px;
            margin: 10px 5px;
        }
        .button:hover { background: #218838; }
"#;

/// Escape text for use inside HTML element content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    <title>{title}</title>\n    <style>{style}</style>\n</head>\n<body>\n    <div class=\"container\">\n{body}    </div>\n</body>\n</html>\n",
        title = escape_html(title),
        style = STYLE,
        body = body,
    )
}

pub fn render_index(page: &IndexPage) -> String {
    let mut body = String::new();
    body.push_str("        <h1>Password Generator</h1>\n");

    for flash in &page.flashes {
        let _ = writeln!(
            body,
            "        <div class=\"flash {}\">{}</div>",
            flash.category.css_class(),
            escape_html(&flash.message)
        );
    }

    let _ = write!(
        body,
        r#"        <form method="post" action="/">
            <label>Length <input type="number" name="length" min="1" value="{}"></label>
            <label><input type="checkbox" name="include_numbers"> Include numbers</label>
            <label><input type="checkbox" name="include_symbols"> Include symbols</label>
            <label><input type="checkbox" name="save_to_file"> Save to file</label>
            <button type="submit" class="button">Generate</button>
        </form>
"#,
        page.default_length
    );

    if let Some(result) = &page.result {
        let _ = writeln!(
            body,
            "        <div class=\"result\">\n            <div>Password: <span class=\"password\">{}</span></div>\n            <div>Strength: <strong>{}</strong></div>\n        </div>",
            escape_html(&result.password),
            result.strength
        );
        if result.saved {
            body.push_str("        <div class=\"saved\">Saved to file</div>\n");
        }
    }

    body.push_str("        <a href=\"/stats\">View stats</a>\n");

    layout("Password Generator", &body)
}

pub fn render_stats(count: u64) -> String {
    let body = format!(
        r#"        <h1>Password Generator Stats</h1>
        <div class="stat">Total generations today: <strong>{}</strong></div>
        <div style="text-align: center;">
            <a href="/stats/download" class="button">Download Stats JSON</a>
        </div>
        <a href="/">&larr; Back to Generator</a>
"#,
        count
    );

    layout("Password Generator Stats", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Flash, GeneratedPassword};
    use crate::models::StrengthLabel;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn index_shows_flashes_and_result() {
        let page = IndexPage {
            default_length: 12,
            flashes: vec![Flash::success("Saved <ok>")],
            result: Some(GeneratedPassword {
                password: "a<b>c&d".to_string(),
                strength: StrengthLabel::Medium,
                saved: true,
            }),
        };

        let html = render_index(&page);
        assert!(html.contains(r#"<div class="flash success">Saved &lt;ok&gt;</div>"#));
        assert!(html.contains("a&lt;b&gt;c&amp;d"));
        assert!(html.contains("<strong>Medium</strong>"));
        assert!(html.contains(r#"value="12""#));
        assert!(html.contains("Saved to file</div>"));
    }

    #[test]
    fn blank_index_has_form_only() {
        let page = IndexPage { default_length: 16, flashes: vec![], result: None };
        let html = render_index(&page);
        assert!(html.contains("<form"));
        assert!(!html.contains("class=\"result\""));
        assert!(!html.contains("class=\"flash"));
    }

    #[test]
    fn stats_page_shows_count() {
        let html = render_stats(42);
        assert!(html.contains("Total generations today: <strong>42</strong>"));
        assert!(html.contains(r#"href="/stats/download""#));
    }
}
