//! Property-based tests for the HTML and RTF renderers.
//!
//! Uses proptest to check structural invariants of the generated markup:
//! balanced groups and tags, color table coverage, escaping, nesting order
//! and repeatability.

use proptest::prelude::*;
use richtext::{Color, HtmlRichText, RichText, RichTextAttributes, StringRange, UnderlineStyle};

// ============================================================================
// Strategies
// ============================================================================

/// Text drawn from characters that need escaping in either format.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'b', ' ', '\n', '\r', '\\', '{', '}', '<', '>', '&', 'é', '😀',
        ]),
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn color_strategy() -> impl Strategy<Value = Color> {
    any::<u32>().prop_map(Color::from_argb)
}

fn attributes_strategy() -> impl Strategy<Value = RichTextAttributes> {
    (
        prop::sample::select(vec!["strong", "em", "code", "a", "h2", "keyword", "body"]),
        prop::option::of(prop::sample::select(vec!["Menlo", "Helvetica", "Times"])),
        prop::option::of(6u8..40),
        prop::option::of(color_strategy()),
        prop::option::of(color_strategy()),
        prop::option::of(color_strategy()),
        prop::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(class, font, size, fg, bg, ul, link)| RichTextAttributes {
            class_name: class.to_string(),
            font_name: font.map(str::to_string),
            font_size: size.map(f32::from),
            foreground: fg,
            background: bg,
            underline: if ul.is_some() {
                UnderlineStyle::Wavy
            } else {
                UnderlineStyle::None
            },
            underline_color: ul,
            link: link.map(|l| format!("https://{l}.test")),
        })
}

fn range_strategy() -> impl Strategy<Value = StringRange> {
    (0usize..45, 0usize..45).prop_map(|(location, length)| StringRange::new(location, length))
}

fn assignments_strategy(max: usize) -> impl Strategy<Value = Vec<(RichTextAttributes, StringRange)>> {
    prop::collection::vec((attributes_strategy(), range_strategy()), 0..=max)
}

// ============================================================================
// Helpers
// ============================================================================

fn rtf_body(rtf: &str) -> &str {
    let start = rtf.find(r"\pard ").expect("document has a \\pard") + r"\pard ".len();
    &rtf[start..rtf.len() - 1]
}

/// Depth after walking `rtf`, or `None` if a group closes that was never opened
fn rtf_group_depth(rtf: &str) -> Option<i64> {
    let mut depth = 0i64;
    let mut chars = rtf.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    Some(depth)
}

/// Characters written as `\{`, `\}` or `\\` in an RTF body
fn rtf_escaped_literals(body: &str) -> Vec<char> {
    let mut literals = Vec::new();
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\'
            && let Some(next) = chars.next()
            && matches!(next, '\\' | '{' | '}')
        {
            literals.push(next);
        }
    }
    literals
}

/// Plain text of an RTF body: control words dropped, `\par` read as a newline
fn rtf_text_content(body: &str) -> String {
    let mut text = String::new();
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(c) if c.is_ascii_alphabetic() => {
                    let mut word = String::from(c);
                    while let Some(&c) = chars.peek()
                        && c.is_ascii_alphabetic()
                    {
                        word.push(c);
                        chars.next();
                    }
                    while let Some(&c) = chars.peek()
                        && (c == '-' || c.is_ascii_digit())
                    {
                        chars.next();
                    }
                    if chars.peek() == Some(&' ') {
                        chars.next();
                    }
                    if word == "par" {
                        text.push('\n');
                    }
                }
                Some(c) => text.push(c),
                None => {}
            },
            '{' | '}' | '\n' => {}
            c => text.push(c),
        }
    }
    text
}

/// Tag names in document order, closing tags prefixed with `/`, `<br/>` skipped
fn html_tags(html: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        let end = start + rest[start..].find('>').expect("unterminated tag");
        let inner = &rest[start + 1..end];
        rest = &rest[end + 1..];
        if inner == "br/" {
            continue;
        }
        let name = inner.split(' ').next().unwrap_or_default();
        tags.push(name.to_string());
    }
    tags
}

fn html_text_content(html: &str) -> String {
    let with_breaks = html.replace("<br/>", "\n");
    let mut text = String::new();
    let mut in_tag = false;
    for ch in with_breaks.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn build_rich_text(text: &str, assignments: &[(RichTextAttributes, StringRange)]) -> RichText {
    let mut rich = RichText::new(text);
    for (style, range) in assignments {
        rich.add_attributes(style, *range)
            .expect("at most four assignments never exceed capacity");
    }
    rich
}

fn build_html<'a>(
    text: &'a str,
    assignments: &[(RichTextAttributes, StringRange)],
) -> HtmlRichText<'a> {
    let mut html = HtmlRichText::new(text);
    for (style, range) in assignments {
        html.add_attributes(style, *range);
    }
    html
}

// ============================================================================
// RTF Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every group opened in the document is closed, and never closed early.
    #[test]
    fn rtf_groups_balance(text in text_strategy(), assignments in assignments_strategy(4)) {
        let rtf = build_rich_text(&text, &assignments).to_rtf();
        prop_assert_eq!(rtf_group_depth(&rtf), Some(0), "unbalanced document: {}", rtf);
    }

    /// Every color referenced by a style covering some character has a color table entry.
    #[test]
    fn rtf_color_table_covers_styles(text in text_strategy(), assignments in assignments_strategy(4)) {
        let rtf = build_rich_text(&text, &assignments).to_rtf();
        let table_start = rtf.find(r"{\colortbl ;").expect("color table present");
        let table = &rtf[table_start..table_start + rtf[table_start..].find('}').unwrap()];
        let len = text.chars().count();

        for (style, _) in assignments.iter().filter(|(_, range)| !range.fit_in(len).is_empty()) {
            for color in style.colors() {
                let entry = format!(r"\red{}\green{}\blue{};", color.r, color.g, color.b);
                prop_assert!(table.contains(&entry), "missing {} in {}", entry, table);
            }
        }
    }

    /// Backslashes and braces in the text appear escaped in the body, in order.
    #[test]
    fn rtf_escapes_special_characters(text in text_strategy(), assignments in assignments_strategy(4)) {
        let rtf = build_rich_text(&text, &assignments).to_rtf();
        let expected: Vec<char> = text.chars().filter(|c| matches!(c, '\\' | '{' | '}')).collect();
        prop_assert_eq!(rtf_escaped_literals(rtf_body(&rtf)), expected);
    }

    /// A fifth class on a fully stacked character is always rejected.
    #[test]
    fn rtf_rejects_fifth_class(index in 0usize..10, style in attributes_strategy()) {
        let mut rich = RichText::new("0123456789");
        for i in 0..4 {
            let layer = RichTextAttributes::new(format!("layer{i}"));
            rich.add_attributes(&layer, StringRange::new(0, 10)).unwrap();
        }
        prop_assert!(rich.add_attributes(&style, StringRange::new(index, 1)).is_err());
    }

    /// Dropping control words and groups from the body gives back the text.
    #[test]
    fn rtf_preserves_text(text in text_strategy(), assignments in assignments_strategy(4)) {
        let rtf = build_rich_text(&text, &assignments).to_rtf();
        let mut expected: String = text.chars().filter(|&c| c != '\r').collect();
        if text.ends_with('\n') {
            expected.push('\n');
        }
        prop_assert_eq!(rtf_text_content(rtf_body(&rtf)), expected, "in {}", rtf);
    }

    #[test]
    fn rtf_is_repeatable(text in text_strategy(), assignments in assignments_strategy(4)) {
        let rich = build_rich_text(&text, &assignments);
        prop_assert_eq!(rich.to_rtf(), rich.to_rtf());
    }
}

// ============================================================================
// HTML Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every opening tag is matched by a closing tag of the same name in nesting order.
    #[test]
    fn html_tags_nest(text in text_strategy(), assignments in assignments_strategy(12)) {
        let html = build_html(&text, &assignments).html();
        let mut stack: Vec<String> = Vec::new();

        for tag in html_tags(&html) {
            if let Some(name) = tag.strip_prefix('/') {
                let open = stack.pop();
                prop_assert_eq!(open.as_deref(), Some(name), "bad nesting in {}", html);
            } else {
                stack.push(tag);
            }
        }
        prop_assert!(stack.is_empty(), "unclosed tags {:?} in {}", stack, html);
    }

    /// Removing markup and decoding entities gives back the original text.
    #[test]
    fn html_preserves_text(text in text_strategy(), assignments in assignments_strategy(12)) {
        let html = build_html(&text, &assignments).html();
        prop_assert_eq!(html_text_content(&html), text);
    }

    /// Of two spans sharing a start, the longer opens first and closes last.
    #[test]
    fn html_longer_span_is_outer(start in 0usize..10, short in 1usize..5, extra in 1usize..5) {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let mut html = HtmlRichText::new(text);
        html.add_attributes(&RichTextAttributes::new("em"), StringRange::new(start, short));
        html.add_attributes(&RichTextAttributes::new("strong"), StringRange::new(start, short + extra));

        let out = html.html();
        let strong_open = out.find("<strong>").unwrap();
        let em_open = out.find("<em>").unwrap();
        let strong_close = out.rfind("</strong>").unwrap();
        let em_close = out.rfind("</em>").unwrap();

        prop_assert!(strong_open < em_open, "{}", out);
        prop_assert!(em_close < strong_close, "{}", out);
    }

    #[test]
    fn html_is_repeatable(
        text in text_strategy(),
        assignments in assignments_strategy(12),
        presentation in any::<bool>(),
    ) {
        let html = build_html(&text, &assignments).with_presentation(presentation);
        prop_assert_eq!(html.html(), html.html());
    }
}
