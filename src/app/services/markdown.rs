use pulldown_cmark::{Event, Options, Parser, Tag, html};

/// Scheme-like marker the preview puts in front of every link target, so a
/// followed link reaches the page as a `url:` notification instead of being
/// loaded by the preview widget.
pub const PREVIEW_LINK_PREFIX: &str = "url:";

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Render Markdown source to an HTML fragment.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, parser_options());
    let mut html_output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Like [`render_markdown`], but link targets (except in-page anchors) are
/// prefixed with [`PREVIEW_LINK_PREFIX`].
pub fn render_markdown_for_preview(text: &str) -> String {
    let parser = Parser::new_ext(text, parser_options()).map(|event| match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !dest_url.starts_with('#') => Event::Start(Tag::Link {
            link_type,
            dest_url: format!("{}{}", PREVIEW_LINK_PREFIX, dest_url).into(),
            title,
            id,
        }),
        other => other,
    });
    let mut html_output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Build the HTML for a document.
///
/// `preview` selects the flavour: the in-app preview widget only understands
/// HTML 3-era markup, so colours go on `<body>` and the font on a `<font>`
/// wrapper. Export output is a standalone HTML5 page with a stylesheet.
pub fn transform(title: &str, text: &str, preview: bool, dark: bool) -> String {
    if preview {
        preview_page(&render_markdown_for_preview(text), dark)
    } else {
        export_page(title, &render_markdown(text))
    }
}

fn preview_page(body: &str, dark: bool) -> String {
    let (bg, fg, link) = if dark {
        ("#1e1e1e", "#dcdcdc", "#6cb6ff")
    } else {
        ("#ffffff", "#202020", "#0645ad")
    };
    format!(
        "<html><body bgcolor=\"{bg}\" text=\"{fg}\" link=\"{link}\">\
         <font face=\"Helvetica\" size=\"4\">{body}</font></body></html>"
    )
}

fn export_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; line-height: 1.6; color: #202020; }}
pre, code {{ font-family: Consolas, "Courier New", monospace; background: #f4f4f4; }}
pre {{ padding: 0.8em; overflow-x: auto; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #ccc; padding: 0.3em 0.6em; }}
blockquote {{ border-left: 4px solid #ddd; margin-left: 0; padding-left: 1em; color: #555; }}
</style>
</head>
<body>
{body}</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
