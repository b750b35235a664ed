//! Browser implementations of the pipeline seams: `BrowserFile` reads a
//! picked file through `FileReader`, `GlooTransport` sends requests with
//! `fetch`.
//!
//! Both futures abort their browser operation when dropped, so cancelling a
//! submission stops the read or the request instead of leaving it running.

use clara_common::api::ApiConfig;
use clara_common::encoding::MediaSource;
use clara_common::error::{ReadError, TransportError};
use clara_common::submission::{FormPart, OutboundRequest, RequestBody, ServerReply, Transport};
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use gloo_file::{callbacks::read_as_bytes, Blob};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, File, FormData, HtmlInputElement};

/// A file picked in an `<input type="file">`.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }
}

impl MediaSource for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn read_bytes(&self) -> LocalBoxFuture<'_, Result<Vec<u8>, ReadError>> {
        let blob = Blob::from(self.0.clone());
        let (tx, rx) = oneshot::channel();
        // Dropping the reader aborts the read.
        let reader = read_as_bytes(&blob, move |result| {
            let _ = tx.send(result);
        });
        Box::pin(async move {
            let result = rx.await;
            drop(reader);
            match result {
                Ok(read) => read.map_err(|err| ReadError::new(self.0.name(), err.to_string())),
                Err(oneshot::Canceled) => Err(ReadError::new(self.0.name(), "read aborted")),
            }
        })
    }
}

/// Files currently selected in `input`, in selection order.
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    match input.files() {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    }
}

/// Aborts the `fetch` it was handed to when dropped, including mid-flight.
struct AbortOnDrop(AbortController);

impl AbortOnDrop {
    fn new() -> Result<Self, TransportError> {
        AbortController::new().map(Self).map_err(js_error)
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

pub struct GlooTransport {
    api: ApiConfig,
}

impl GlooTransport {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

impl Transport for GlooTransport {
    type File = File;

    fn send(
        &self,
        request: OutboundRequest<File>,
    ) -> LocalBoxFuture<'_, Result<ServerReply, TransportError>> {
        let url = self.api.url(request.endpoint);
        Box::pin(async move {
            let abort = AbortOnDrop::new()?;
            let builder = Request::post(&url).abort_signal(Some(&abort.0.signal()));
            // The browser sets the multipart boundary header itself.
            let prepared = match request.body {
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
            };
            let response = prepared
                .map_err(gloo_error)?
                .send()
                .await
                .map_err(gloo_error)?;

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            // Aborting a finished request is a no-op.
            drop(abort);
            Ok(ServerReply { status, body })
        })
    }
}

fn form_data(parts: Vec<FormPart<File>>) -> Result<FormData, TransportError> {
    let data = FormData::new().map_err(js_error)?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => data.append_with_str(&name, &value),
            FormPart::File { name, file } => {
                data.append_with_blob_and_filename(&name, &file, &file.name())
            }
            FormPart::Empty { name } => data.append_with_str(&name, ""),
        }
        .map_err(js_error)?;
    }
    Ok(data)
}

fn gloo_error(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}

fn js_error(err: JsValue) -> TransportError {
    TransportError::new(format!("{:?}", err))
}
