use clara_common::submission::{abortable, submit_teacher, SubmissionKind};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::TeacherComponent;
use crate::components::feedback::report;
use crate::config::api_config;
use crate::transport::GlooTransport;

pub fn update(component: &mut TeacherComponent, ctx: &Context<TeacherComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(edit) => component.form.apply(edit),
        Msg::Submit => {
            let Some(started) = component.coordinator.try_begin(SubmissionKind::Plain) else {
                return false;
            };
            let payload = component.form.payload();
            let link = ctx.link().clone();
            spawn_local(async move {
                let transport = GlooTransport::new(api_config());
                let work = submit_teacher(&transport, payload);
                if let Some(result) = abortable(started.registration, work).await {
                    link.send_message(Msg::Settled(started.ticket, result));
                }
            });
            true
        }
        Msg::Settled(ticket, result) => {
            let Some(outcome) =
                component.coordinator.settle_form(ticket, result, &mut component.form)
            else {
                return false;
            };
            report("Teacher registration", outcome);
            true
        }
    }
}
