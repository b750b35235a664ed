//! Teacher registration: id, name, password and the class-list editor.
//!
//! Class names are added with Enter in the class input. That keystroke is
//! consumed by the editor and never submits the form.

use clara_common::forms::TeacherForm;
use clara_common::submission::SubmissionCoordinator;
use yew::prelude::*;

mod messages;
mod update;
mod view;

pub use messages::Msg;

#[derive(Default)]
pub struct TeacherComponent {
    pub form: TeacherForm,
    pub coordinator: SubmissionCoordinator,
}

impl Component for TeacherComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.coordinator.cancel();
    }
}
