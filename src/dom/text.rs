use scraper::ElementRef;

const SKIPPED: &[&str] = &["script", "style", "noscript", "template", "head"];

const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "dialog", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table", "tbody",
    "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Render an element the way a browser's `innerText` roughly does: inline
/// whitespace collapses, block boundaries and `<br>` become line breaks, and
/// non-rendered subtrees are skipped. Blank lines are dropped.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    render(element, &mut raw);
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Concatenate the element's trimmed, non-empty text nodes with `separator`.
pub fn joined_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn render(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if SKIPPED.contains(&name) {
        return;
    }
    if name == "br" {
        out.push('\n');
        return;
    }

    let block = BLOCK.contains(&name);
    if block {
        line_break(out);
    }
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            render(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
        }
    }
    if block {
        line_break(out);
    }
}

fn line_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
