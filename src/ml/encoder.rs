use crate::services::text::normalize_text;

/// Ordered category list mapping labels to numeric codes.
///
/// The code of a label is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub(crate) fn len(&self) -> usize {
        self.classes.len()
    }

    /// Code for an exact label
    pub fn encode(&self, label: &str) -> Option<u32> {
        self.classes
            .iter()
            .position(|class| class == label)
            .and_then(|index| u32::try_from(index).ok())
    }

    /// Stored label whose canonical text equals the canonical input
    pub fn resolve(&self, text: &str) -> Option<&str> {
        let wanted = normalize_text(text);
        self.classes
            .iter()
            .find(|class| normalize_text(class) == wanted)
            .map(String::as_str)
    }
}
