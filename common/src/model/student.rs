use serde::{Deserialize, Serialize};

use crate::model::image::EncodedImage;

/// Body of `POST /student`.
///
/// `images` has one entry per selected file, in selection order. `roll` and
/// `batch` are sent as typed; the server owns their validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub roll: String,
    pub batch: String,
    pub images: Vec<EncodedImage>,
}
