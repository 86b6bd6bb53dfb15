//! Label element: static text.

use super::kind::ElementKind;
use super::Element;
use crate::markup::escape_string;

/// A non-interactive text element. Styled on focus changes only.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
}

impl Label {
    /// Create a label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Element for Label {
    fn kind(&self) -> ElementKind {
        ElementKind::Label
    }

    fn fragment(&self, name: &str) -> String {
        format!(
            r##"Label {{
    objectName: "{name}"
    property string qmlType: "Label"
    text: "{text}"
    color: "#EEE"
}}"##,
            name = escape_string(name),
            text = escape_string(&self.text),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment() {
        let markup = Label::new("Olá").fragment("greeting");
        assert_eq!(
            markup,
            "Label {\n    objectName: \"greeting\"\n    property string qmlType: \"Label\"\n    text: \"Olá\"\n    color: \"#EEE\"\n}"
        );
    }

    #[test]
    fn kind_and_text() {
        let label = Label::new("Hello");
        assert_eq!(label.kind(), ElementKind::Label);
        assert_eq!(label.text(), "Hello");
    }
}
