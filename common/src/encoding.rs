//! FileEncoder: turns selected image files into data-URL text.
//!
//! Reads happen through `MediaSource`, which the browser build backs with a
//! `FileReader`. A batch starts every read at once and settles on the first
//! failure, so a student registration either carries every image or is not
//! sent at all.

use base64::{engine::general_purpose, Engine as _};
use futures::future::{try_join_all, LocalBoxFuture};

use crate::error::ReadError;
use crate::model::image::EncodedImage;

/// MIME used when a file does not declare one, same as the browser's reader.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// A locally selected file whose bytes can be read asynchronously.
pub trait MediaSource {
    fn file_name(&self) -> String;

    /// Declared MIME type; may be empty.
    fn mime_type(&self) -> String;

    fn read_bytes(&self) -> LocalBoxFuture<'_, Result<Vec<u8>, ReadError>>;
}

/// Builds the `data:<mime>;base64,<payload>` form of `bytes`.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> EncodedImage {
    let mime = match mime.trim() {
        "" => FALLBACK_MIME,
        declared => declared,
    };
    let payload = general_purpose::STANDARD.encode(bytes);
    EncodedImage::from_data_url(format!("data:{};base64,{}", mime, payload))
}

/// Reads one file and encodes it. Read failures are returned, never dropped.
pub async fn encode<S>(source: &S) -> Result<EncodedImage, ReadError>
where
    S: MediaSource + ?Sized,
{
    let bytes = source.read_bytes().await?;
    Ok(to_data_url(&source.mime_type(), &bytes))
}

/// Encodes every file concurrently, keeping selection order.
///
/// All-or-nothing: the first `ReadError` resolves the whole batch and the
/// images already encoded are discarded.
pub async fn encode_all<S>(sources: &[S]) -> Result<Vec<EncodedImage>, ReadError>
where
    S: MediaSource,
{
    try_join_all(sources.iter().map(|source| encode(source))).await
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::future::LocalBoxFuture;

    use super::MediaSource;
    use crate::error::ReadError;

    /// In-memory file. `fail` makes every read reject; `reads` counts reads
    /// that were started.
    #[derive(Clone)]
    pub struct MemoryFile {
        pub name: String,
        pub mime: String,
        pub bytes: Vec<u8>,
        pub fail: bool,
        pub reads: Rc<Cell<usize>>,
    }

    impl MemoryFile {
        pub fn new(name: &str, mime: &str, bytes: &[u8]) -> Self {
            Self {
                name: name.to_string(),
                mime: mime.to_string(),
                bytes: bytes.to_vec(),
                fail: false,
                reads: Rc::new(Cell::new(0)),
            }
        }

        pub fn broken(name: &str) -> Self {
            Self {
                fail: true,
                ..Self::new(name, "image/jpeg", b"")
            }
        }
    }

    impl MediaSource for MemoryFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }

        fn mime_type(&self) -> String {
            self.mime.clone()
        }

        fn read_bytes(&self) -> LocalBoxFuture<'_, Result<Vec<u8>, ReadError>> {
            self.reads.set(self.reads.get() + 1);
            Box::pin(async move {
                if self.fail {
                    Err(ReadError::new(self.name.clone(), "NotReadableError"))
                } else {
                    Ok(self.bytes.clone())
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::testing::MemoryFile;
    use super::*;

    #[test]
    fn data_url_carries_mime_and_base64_payload() {
        let image = to_data_url("image/png", b"hello");
        assert_eq!(image.as_str(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.payload(), "aGVsbG8=");
    }

    #[test]
    fn missing_mime_uses_octet_stream() {
        let image = to_data_url("", &[0xff, 0xd8]);
        assert_eq!(image.as_str(), "data:application/octet-stream;base64,/9g=");
    }

    #[test]
    fn empty_file_encodes_to_empty_payload() {
        let image = block_on(encode(&MemoryFile::new("empty.jpg", "image/jpeg", b""))).unwrap();
        assert_eq!(image.as_str(), "data:image/jpeg;base64,");
    }

    #[test]
    fn batch_preserves_selection_order() {
        let files: Vec<MemoryFile> = (0..5u8)
            .map(|i| MemoryFile::new(&format!("face{}.jpg", i), "image/jpeg", &[i; 3]))
            .collect();

        let images = block_on(encode_all(&files)).unwrap();

        assert_eq!(images.len(), files.len());
        for (file, image) in files.iter().zip(&images) {
            assert_eq!(image, &to_data_url("image/jpeg", &file.bytes));
        }
    }

    #[test]
    fn empty_selection_is_an_empty_batch() {
        let files: Vec<MemoryFile> = Vec::new();
        assert!(block_on(encode_all(&files)).unwrap().is_empty());
    }

    #[test]
    fn one_failed_read_fails_the_batch_wherever_it_sits() {
        let n = 4;
        for k in 0..n {
            let files: Vec<MemoryFile> = (0..n)
                .map(|i| {
                    if i == k {
                        MemoryFile::broken(&format!("face{}.jpg", i))
                    } else {
                        MemoryFile::new(&format!("face{}.jpg", i), "image/jpeg", b"ok")
                    }
                })
                .collect();

            let err = block_on(encode_all(&files)).unwrap_err();
            assert_eq!(err.file_name, format!("face{}.jpg", k));
            assert_eq!(err.reason, "NotReadableError");
        }
    }

    #[test]
    fn every_read_in_a_batch_is_started() {
        let files: Vec<MemoryFile> = (0..3)
            .map(|i| MemoryFile::new(&format!("{}.png", i), "image/png", b"x"))
            .collect();
        block_on(encode_all(&files)).unwrap();
        assert!(files.iter().all(|f| f.reads.get() == 1));
    }
}
