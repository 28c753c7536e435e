use std::collections::{HashMap, HashSet};

/// How rich content is rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MarkdownMode {
    /// Question text: embedded task-list checkboxes stay clickable.
    Interactive,
    /// Answer text: read-only.
    Static,
}

impl MarkdownMode {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            MarkdownMode::Interactive => "markdown markdown--interactive",
            MarkdownMode::Static => "markdown",
        }
    }
}

#[must_use]
pub fn markdown_to_html(input: &str, mode: MarkdownMode) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html, mode)
}

#[must_use]
pub fn sanitize_html(html: &str, mode: MarkdownMode) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "del", "b", "i", "code", "pre", "blockquote",
        "ul", "ol", "li", "a", "h1", "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th",
        "td", "input",
    ]
    .into_iter()
    .collect();

    // Dropping `disabled` is what makes task-list boxes clickable.
    let input_attributes: &[&str] = match mode {
        MarkdownMode::Interactive => &["type", "checked"],
        MarkdownMode::Static => &["type", "checked", "disabled"],
    };

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("code", ["class"].into_iter().collect());
    attributes.insert("input", input_attributes.iter().copied().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}
