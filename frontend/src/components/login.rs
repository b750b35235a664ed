//! Teacher login form.
//!
//! The response is shown and logged, nothing more: no session is kept and
//! later requests are sent without credentials.

use clara_common::error::SubmissionError;
use clara_common::forms::{LoginEdit, LoginForm};
use clara_common::submission::{
    abortable, submit_login, ServerReply, SubmissionCoordinator, SubmissionKind, Ticket,
};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::feedback::{report, status_line};
use super::input_value;
use crate::config::api_config;
use crate::transport::GlooTransport;

pub enum Msg {
    Edit(LoginEdit),
    Submit,
    Settled(Ticket, Result<ServerReply, SubmissionError>),
}

#[derive(Default)]
pub struct LoginComponent {
    form: LoginForm,
    coordinator: SubmissionCoordinator,
}

impl Component for LoginComponent {
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
                    let work = submit_login(&transport, payload);
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
                report("Login", outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="form-page">
                <h2>{"Teacher Login"}</h2>
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div>
                        <label>{"Username:"}</label>
                        <input
                            type="text"
                            value={self.form.username.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Edit(LoginEdit::Username(input_value(&e))))}
                        />
                    </div>
                    <div>
                        <label>{"Password:"}</label>
                        <input
                            type="password"
                            value={self.form.password.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::Edit(LoginEdit::Password(input_value(&e))))}
                        />
                    </div>
                    <button type="submit" disabled={self.coordinator.is_busy()}>{"Login"}</button>
                </form>
                { status_line(&self.coordinator) }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.coordinator.cancel();
    }
}
