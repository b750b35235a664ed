use serde::{Deserialize, Serialize};

/// An image embedded as text: `data:<mime>;base64,<payload>`.
///
/// Produced 1:1 from a selected file by `encoding::encode` and never changed
/// afterwards. Serialized as a plain JSON string, which is what the student
/// endpoint expects in its `images` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub(crate) fn from_data_url(data_url: String) -> Self {
        Self(data_url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type declared in the data URL header.
    pub fn mime_type(&self) -> &str {
        self.header()
            .trim_start_matches("data:")
            .trim_end_matches(";base64")
    }

    /// Base64 payload after the header.
    pub fn payload(&self) -> &str {
        self.0.split_once(',').map(|(_, payload)| payload).unwrap_or_default()
    }

    fn header(&self) -> &str {
        self.0.split_once(',').map(|(header, _)| header).unwrap_or_default()
    }
}

impl From<EncodedImage> for String {
    fn from(image: EncodedImage) -> Self {
        image.0
    }
}
