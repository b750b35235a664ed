//! SubmissionCoordinator and request assembly.
//!
//! A form submission runs `Idle -> [Encoding ->] Sending -> Idle`, leaving a
//! terminal `Outcome` behind. The coordinator only tracks the state machine;
//! the `submit_*` flows do the work and are driven by whoever owns the
//! coordinator (a Yew component in the browser, `block_on` in tests).
//!
//! Only one submission per coordinator can be in flight. Each one gets a
//! `Ticket`, and results carrying an old ticket are ignored, so a cancelled
//! or superseded request can never overwrite the current state.

use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable, LocalBoxFuture};
use serde::Serialize;

use crate::api::Endpoint;
use crate::encoding::{self, MediaSource};
use crate::error::{SubmissionError, TransportError};
use crate::forms::FormRecord;
use crate::model::credentials::CredentialPayload;
use crate::model::student::RegistrationPayload;
use crate::model::teacher::TeacherPayload;
use crate::model::video::VideoUploadPayload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart<F> {
    Text { name: String, value: String },
    File { name: String, file: F },
    /// Field present with no content.
    Empty { name: String },
}

impl<F> FormPart<F> {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } | FormPart::Empty { name } => {
                name
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    Json(serde_json::Value),
    Multipart(Vec<FormPart<F>>),
}

/// One POST to the attendance server.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest<F> {
    pub endpoint: Endpoint,
    pub body: RequestBody<F>,
}

impl<F> OutboundRequest<F> {
    pub fn json<T: Serialize>(endpoint: Endpoint, payload: &T) -> Result<Self, SubmissionError> {
        Ok(Self {
            endpoint,
            body: RequestBody::Json(serde_json::to_value(payload)?),
        })
    }
}

/// Any response the server sent back, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReply {
    pub status: u16,
    pub body: String,
}

impl ServerReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `message` field of a JSON body, if there is one. Display only.
    pub fn message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        value.get("message")?.as_str().map(str::to_string)
    }
}

/// Sends requests. Implementations report transport failures only; status
/// handling is done by the flows below.
///
/// Dropping the future returned by `send` must abort the request on the
/// wire. `SubmissionCoordinator::cancel` relies on this: it aborts the work
/// future, which drops the pending send.
pub trait Transport {
    type File;

    fn send(
        &self,
        request: OutboundRequest<Self::File>,
    ) -> LocalBoxFuture<'_, Result<ServerReply, TransportError>>;
}

async fn send_checked<T: Transport>(
    transport: &T,
    request: OutboundRequest<T::File>,
) -> Result<ServerReply, SubmissionError> {
    let reply = transport.send(request).await?;
    if reply.is_success() {
        Ok(reply)
    } else {
        Err(SubmissionError::ServerRejection {
            status: reply.status,
            body: reply.body,
        })
    }
}

pub async fn submit_login<T: Transport>(
    transport: &T,
    payload: CredentialPayload,
) -> Result<ServerReply, SubmissionError> {
    send_checked(transport, OutboundRequest::json(Endpoint::Login, &payload)?).await
}

pub async fn submit_teacher<T: Transport>(
    transport: &T,
    payload: TeacherPayload,
) -> Result<ServerReply, SubmissionError> {
    send_checked(transport, OutboundRequest::json(Endpoint::Teacher, &payload)?).await
}

/// Encodes every image, calls `on_encoded`, then sends the registration.
///
/// Nothing is sent when any image fails to encode.
pub async fn submit_student<T, S>(
    transport: &T,
    roll: String,
    batch: String,
    files: Vec<S>,
    on_encoded: impl FnOnce(),
) -> Result<ServerReply, SubmissionError>
where
    T: Transport,
    S: MediaSource,
{
    let images = encoding::encode_all(&files).await?;
    drop(files);
    on_encoded();

    let payload = RegistrationPayload {
        roll,
        batch,
        images,
    };
    send_checked(transport, OutboundRequest::json(Endpoint::Student, &payload)?).await
}

/// Multipart parts for a video upload, always `id`, `batch`, `video`.
pub fn video_parts<F>(payload: VideoUploadPayload<F>) -> Vec<FormPart<F>> {
    let video = match payload.video {
        Some(file) => FormPart::File {
            name: "video".to_string(),
            file,
        },
        None => FormPart::Empty {
            name: "video".to_string(),
        },
    };
    vec![
        FormPart::Text {
            name: "id".to_string(),
            value: payload.id,
        },
        FormPart::Text {
            name: "batch".to_string(),
            value: payload.batch,
        },
        video,
    ]
}

pub async fn submit_video<T: Transport>(
    transport: &T,
    payload: VideoUploadPayload<T::File>,
) -> Result<ServerReply, SubmissionError> {
    let request = OutboundRequest {
        endpoint: Endpoint::Video,
        body: RequestBody::Multipart(video_parts(payload)),
    };
    send_checked(transport, request).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Encoding,
    Sending,
}

/// Whether a submission starts by encoding files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Plain,
    WithEncoding,
}

#[derive(Debug)]
pub enum Outcome {
    Succeeded(ServerReply),
    Failed(SubmissionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Handed out by `try_begin`. The registration ties the work future to the
/// coordinator's abort handle (see `abortable`).
#[derive(Debug)]
pub struct Started {
    pub ticket: Ticket,
    pub registration: AbortRegistration,
}

#[derive(Debug)]
pub struct SubmissionCoordinator {
    phase: Phase,
    next_ticket: u64,
    current: Option<(Ticket, AbortHandle)>,
    last_outcome: Option<Outcome>,
}

impl Default for SubmissionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionCoordinator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            next_ticket: 0,
            current: None,
            last_outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Starts a submission unless one is already running.
    pub fn try_begin(&mut self, kind: SubmissionKind) -> Option<Started> {
        if self.is_busy() {
            return None;
        }
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;

        let (handle, registration) = AbortHandle::new_pair();
        self.current = Some((ticket, handle));
        self.phase = match kind {
            SubmissionKind::Plain => Phase::Sending,
            SubmissionKind::WithEncoding => Phase::Encoding,
        };
        Some(Started {
            ticket,
            registration,
        })
    }

    /// Encoding finished, the request is going out.
    pub fn mark_sending(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) || self.phase != Phase::Encoding {
            return false;
        }
        self.phase = Phase::Sending;
        true
    }

    /// Records the result of `ticket` and returns to `Idle`. Results for a
    /// ticket that is no longer current are dropped and yield `None`.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        result: Result<ServerReply, SubmissionError>,
    ) -> Option<&Outcome> {
        if !self.is_current(ticket) {
            return None;
        }
        self.current = None;
        self.phase = Phase::Idle;
        let outcome = match result {
            Ok(reply) => Outcome::Succeeded(reply),
            Err(err) => Outcome::Failed(err),
        };
        Some(&*self.last_outcome.insert(outcome))
    }

    /// Like `settle`, and resets `form` when the submission succeeded. A
    /// failed submission leaves the form exactly as the user left it.
    pub fn settle_form<R: FormRecord>(
        &mut self,
        ticket: Ticket,
        result: Result<ServerReply, SubmissionError>,
        form: &mut R,
    ) -> Option<&Outcome> {
        let outcome = self.settle(ticket, result)?;
        if matches!(outcome, Outcome::Succeeded(_)) {
            form.reset();
        }
        Some(outcome)
    }

    /// Aborts the running submission, if any, and returns to `Idle`. The
    /// work future is dropped on its next poll, and with it any pending read
    /// or send.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some((_, handle)) => {
                handle.abort();
                self.phase = Phase::Idle;
                true
            }
            None => false,
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        matches!(self.current, Some((current, _)) if current == ticket)
    }
}

/// Runs `work` until it finishes or the coordinator cancels it; `None` means
/// it was cancelled.
pub async fn abortable<Fut>(registration: AbortRegistration, work: Fut) -> Option<Fut::Output>
where
    Fut: Future,
{
    Abortable::new(work, registration).await.ok()
}
