//! User feedback for submissions: toasts, the status line under each form,
//! and console diagnostics.

use clara_common::error::SubmissionError;
use clara_common::submission::{Outcome, Phase, SubmissionCoordinator};
use gloo_console::{error, log};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Shows `message` at the bottom of the page for a few seconds. Set as text,
/// not HTML, since messages can carry server-provided text.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Logs a settled submission and tells the user about it.
///
/// Success bodies are logged as-is; rejected bodies are logged but never
/// interpreted.
pub fn report(form: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Succeeded(reply) => {
            log!(format!("{}: {} {}", form, reply.status, reply.body));
            let message = reply
                .message()
                .unwrap_or_else(|| format!("{} submitted.", form));
            show_toast(&message);
        }
        Outcome::Failed(err) => {
            error!(format!("{} failed: {}", form, err));
            if let SubmissionError::ServerRejection { body, .. } = err {
                error!(format!("{} server response: {}", form, body));
            }
            show_toast(&format!("{} failed: {}", form, err));
        }
    }
}

/// Text for the status line, `None` before the first submission.
pub fn status_text(coordinator: &SubmissionCoordinator) -> Option<String> {
    match (coordinator.phase(), coordinator.last_outcome()) {
        (Phase::Encoding, _) => Some("Encoding images...".to_string()),
        (Phase::Sending, _) => Some("Sending...".to_string()),
        (Phase::Idle, Some(Outcome::Succeeded(reply))) => {
            Some(reply.message().unwrap_or_else(|| "Submitted.".to_string()))
        }
        (Phase::Idle, Some(Outcome::Failed(err))) => Some(format!("Failed: {}", err)),
        (Phase::Idle, None) => None,
    }
}

pub fn status_line(coordinator: &SubmissionCoordinator) -> Html {
    match status_text(coordinator) {
        Some(text) => html! { <p class="submission-status">{ text }</p> },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use clara_common::submission::{ServerReply, SubmissionKind};

    use super::*;

    #[test]
    fn status_follows_the_coordinator() {
        let mut coordinator = SubmissionCoordinator::new();
        assert_eq!(status_text(&coordinator), None);

        let started = coordinator.try_begin(SubmissionKind::WithEncoding).unwrap();
        assert_eq!(status_text(&coordinator).as_deref(), Some("Encoding images..."));

        coordinator.mark_sending(started.ticket);
        assert_eq!(status_text(&coordinator).as_deref(), Some("Sending..."));

        let reply = ServerReply {
            status: 200,
            body: r#"{"message":"Student 81e07 registered successfully"}"#.to_string(),
        };
        coordinator.settle(started.ticket, Ok(reply));
        assert_eq!(
            status_text(&coordinator).as_deref(),
            Some("Student 81e07 registered successfully")
        );
    }

    #[test]
    fn rejection_shows_status_code() {
        let mut coordinator = SubmissionCoordinator::new();
        let started = coordinator.try_begin(SubmissionKind::Plain).unwrap();
        let rejection = SubmissionError::ServerRejection {
            status: 404,
            body: r#"{"detail":"Teacher not found"}"#.to_string(),
        };
        coordinator.settle(started.ticket, Err(rejection));
        assert_eq!(
            status_text(&coordinator).as_deref(),
            Some("Failed: server rejected the request with status 404")
        );
    }
}
