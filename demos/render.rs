//! Demonstration of the rich text renderers
//!
//! This example shows how to:
//! 1. Define named classes in a style sheet
//! 2. Apply them to ranges of a text buffer
//! 3. Render the same annotations as HTML and as RTF

use richtext::{
    Color, HtmlRichText, RichText, RichTextAttributes, StringRange, StyleSheet, UnderlineStyle,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Rich Text Demo ===\n");

    let text = "Overview\nfn main() {}\nSee the docs for {details}.";

    let mut sheet = StyleSheet::new();
    sheet.insert(
        RichTextAttributes::new("h1")
            .with_font("Helvetica")
            .with_font_size(18.0),
    )?;
    sheet.insert(
        RichTextAttributes::new("code")
            .with_font("Menlo")
            .with_background(Color::from_hex("#F0F0F0")?),
    )?;
    sheet.insert(
        RichTextAttributes::new("a")
            .with_foreground(Color::rgb(0, 0, 238))
            .with_underline(UnderlineStyle::Single, None)
            .with_link("https://example.com/docs"),
    )?;
    sheet.insert(
        RichTextAttributes::new("keyword").with_foreground(Color::rgb(170, 13, 145)),
    )?;

    let ranges = [
        ("h1", StringRange::new(0, 8)),
        ("code", StringRange::new(9, 12)),
        ("keyword", StringRange::new(9, 2)),
        ("a", StringRange::new(30, 4)),
    ];

    let mut html = HtmlRichText::new(text);
    let mut rtf = RichText::new(text);
    for (class, range) in ranges {
        html.add_class(&sheet, class, range)?;
        rtf.add_class(&sheet, class, range)?;
    }

    println!("HTML:\n{}\n", html.html());
    println!("HTML (presentation):\n{}\n", html.with_presentation(true).html());
    println!("RTF:\n{}\n", rtf.to_rtf());

    Ok(())
}
