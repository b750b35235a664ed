use clara_common::submission::{abortable, submit_student, Outcome, SubmissionKind};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::StudentComponent;
use crate::components::clear_file_input;
use crate::components::feedback::report;
use crate::config::api_config;
use crate::transport::GlooTransport;

pub fn update(component: &mut StudentComponent, ctx: &Context<StudentComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(edit) => component.form.apply(edit),
        Msg::Submit => {
            let Some(started) = component.coordinator.try_begin(SubmissionKind::WithEncoding) else {
                return false;
            };
            let ticket = started.ticket;
            let roll = component.form.roll.clone();
            let batch = component.form.batch.clone();
            let files = component.form.files.clone();
            let link = ctx.link().clone();

            spawn_local(async move {
                let transport = GlooTransport::new(api_config());
                let encoded_link = link.clone();
                let work = submit_student(&transport, roll, batch, files, move || {
                    encoded_link.send_message(Msg::Encoded(ticket))
                });
                if let Some(result) = abortable(started.registration, work).await {
                    link.send_message(Msg::Settled(ticket, result));
                }
            });
            true
        }
        Msg::Encoded(ticket) => component.coordinator.mark_sending(ticket),
        Msg::Settled(ticket, result) => {
            let Some(outcome) =
                component.coordinator.settle_form(ticket, result, &mut component.form)
            else {
                return false;
            };
            report("Student registration", outcome);
            if matches!(outcome, Outcome::Succeeded(_)) {
                clear_file_input(&component.file_input_ref);
            }
            true
        }
    }
}
