//! Textual cleanup applied to generated HTML before it is displayed.
//!
//! This is a fixed list of literal substitutions run in order, not an HTML
//! rewrite; later entries see the output of earlier ones.

/// Substitutions applied by [`apply`], in order
pub const REPLACEMENTS: &[(&str, &str)] = &[
    ("<pre><code><br/></code></pre>", "<p>"),
    ("<p><br/>", "<p>"),
    ("<br/><h1>", "\n<h1>"),
    ("<p><h1>", "\n<h1>"),
    ("<br/></h1>", "</h1>\n"),
    ("</h1><br/>", "</h1>\n"),
    ("<br/><h2>", "\n<h2>"),
    ("<p><h2>", "\n<h2>"),
    ("<br/></h2>", "</h2>\n"),
    ("</h2><br/>", "</h2>\n"),
    ("<br/><h3>", "\n<h3>"),
    ("<p><h3>", "\n<h3>"),
    ("<br/></h3>", "</h3>\n"),
    ("</h3><br/>", "</h3>\n"),
    ("<br/><h4>", "\n<h4>"),
    ("<p><h4>", "\n<h4>"),
    ("<br/></h4>", "</h4>\n"),
    ("</h4><br/>", "</h4>\n"),
    ("<br/>", "\n"),
    ("<p>", "\n<p>"),
];

/// Run every entry of [`REPLACEMENTS`] over `html`
#[must_use]
pub fn apply(html: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(html.to_string(), |acc, &(from, to)| {
            if acc.contains(from) {
                acc.replace(from, to)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_code_line_becomes_paragraph() {
        assert_eq!(apply("a<pre><code><br/></code></pre>b"), "a\n<p>b");
    }

    #[test]
    fn headings_get_their_own_line() {
        assert_eq!(
            apply("intro<br/><h1>Title</h1><br/>text"),
            "intro\n<h1>Title</h1>\ntext"
        );
        assert_eq!(apply("<h2>Title<br/></h2>x"), "<h2>Title</h2>\nx");
    }

    #[test]
    fn paragraph_before_heading_is_dropped() {
        assert_eq!(apply("a<p><h3>B</h3>"), "a\n<h3>B</h3>");
    }

    #[test]
    fn remaining_breaks_and_paragraphs() {
        assert_eq!(apply("a<br/>b<p>c"), "a\nb\n<p>c");
    }

    #[test]
    fn text_without_markers_is_unchanged() {
        assert_eq!(apply("<strong>plain</strong>"), "<strong>plain</strong>");
    }
}
