use super::range::StringRange;

/// A run of text carrying one or more classes and an optional link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: StringRange,
    class_names: String,
    pub url: Option<String>,
    /// Set during HTML emission when the span was wrapped in `<pre>`
    pub(crate) is_pre: bool,
}

impl Span {
    pub fn new(range: StringRange, class_name: &str, url: Option<String>) -> Self {
        let mut span = Self {
            range,
            class_names: String::new(),
            url,
            is_pre: false,
        };
        span.add_class(class_name);
        span
    }

    /// Add a class unless already present
    pub fn add_class(&mut self, class_name: &str) {
        for name in class_name.split_whitespace() {
            if self.has_class(name) {
                continue;
            }
            if !self.class_names.is_empty() {
                self.class_names.push(' ');
            }
            self.class_names.push_str(name);
        }
    }

    /// All classes, space-joined in the order they were added
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_names
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_names.split(' ').filter(|c| !c.is_empty())
    }

    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().any(|c| c == class_name)
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.class_names.contains("hidden")
    }

    #[must_use]
    pub fn is_code(&self) -> bool {
        self.class_names == "code"
    }

    #[must_use]
    pub fn is_xml(&self) -> bool {
        self.class_names.contains("xml")
    }

    #[must_use]
    pub const fn is_pre(&self) -> bool {
        self.is_pre
    }
}
