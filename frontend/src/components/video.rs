use clara_common::error::SubmissionError;
use clara_common::forms::{VideoEdit, VideoForm};
use clara_common::submission::{
    abortable, submit_video, Outcome, ServerReply, SubmissionCoordinator, SubmissionKind, Ticket,
};
use web_sys::{File, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::feedback::{report, status_line};
use super::{clear_file_input, input_value};
use crate::config::api_config;
use crate::transport::{selected_files, GlooTransport};

pub enum Msg {
    Edit(VideoEdit<File>),
    Submit,
    Settled(Ticket, Result<ServerReply, SubmissionError>),
}

/// Classroom video upload. The file goes out untouched as a multipart part;
/// submitting without a file still sends an empty `video` field.
#[derive(Default)]
pub struct VideoComponent {
    form: VideoForm<File>,
    coordinator: SubmissionCoordinator,
    file_input_ref: NodeRef,
}

impl Component for VideoComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(edit) => self.form.apply(edit),
            Msg::Submit => {
                let Some(started) = self.coordinator.try_begin(SubmissionKind::Plain) else {
                    return false;
                };
                let payload = self.form.payload();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let transport = GlooTransport::new(api_config());
                    let work = submit_video(&transport, payload);
                    if let Some(result) = abortable(started.registration, work).await {
                        link.send_message(Msg::Settled(started.ticket, result));
                    }
                });
                true
            }
            Msg::Settled(ticket, result) => {
                let Some(outcome) =
                    self.coordinator.settle_form(ticket, result, &mut self.form)
                else {
                    return false;
                };
                report("Video upload", outcome);
                if matches!(outcome, Outcome::Succeeded(_)) {
                    clear_file_input(&self.file_input_ref);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_video = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Edit(VideoEdit::Video(selected_files(&input).into_iter().next()))
        });

        html! {
            <div class="form-page">
                <h2>{"Upload Video"}</h2>
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div>
                        <label>{"Teacher ID:"}</label>
                        <input
                            type="text"
                            value={self.form.id.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Edit(VideoEdit::Id(input_value(&e))))}
                        />
                    </div>
                    <div>
                        <label>{"Batch/Class:"}</label>
                        <input
                            type="text"
                            value={self.form.batch.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Edit(VideoEdit::Batch(input_value(&e))))}
                        />
                    </div>
                    <div>
                        <label>{"Upload Video (.mp4):"}</label>
                        <input
                            type="file"
                            accept="video/mp4"
                            ref={self.file_input_ref.clone()}
                            onchange={on_video}
                        />
                    </div>
                    <button type="submit" disabled={self.coordinator.is_busy()}>{"Upload"}</button>
                </form>
                { status_line(&self.coordinator) }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.coordinator.cancel();
    }
}
