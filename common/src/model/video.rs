/// Fields of the `POST /video` multipart body.
///
/// Generic over the platform file handle so the video is sent as the original
/// binary. `video` may be absent; the field is still sent in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoUploadPayload<F> {
    pub id: String,
    pub batch: String,
    pub video: Option<F>,
}
