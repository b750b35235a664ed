use clara_common::forms::StudentEdit;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::StudentComponent;
use crate::components::feedback::status_line;
use crate::components::input_value;
use crate::transport::{selected_files, BrowserFile};

pub fn view(component: &StudentComponent, ctx: &Context<StudentComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    let on_files = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = selected_files(&input).into_iter().map(BrowserFile::new).collect();
        Msg::Edit(StudentEdit::Files(files))
    });

    html! {
        <div class="form-page">
            <h2>{"Register Student"}</h2>
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <div>
                    <label>{"Roll Number:"}</label>
                    <input
                        type="text"
                        value={form.roll.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(StudentEdit::Roll(input_value(&e))))}
                    />
                </div>
                <div>
                    <label>{"Batch/Class:"}</label>
                    <input
                        type="text"
                        value={form.batch.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(StudentEdit::Batch(input_value(&e))))}
                    />
                </div>
                <div>
                    <label>{"Upload Images:"}</label>
                    <input
                        type="file"
                        multiple={true}
                        accept="image/*"
                        ref={component.file_input_ref.clone()}
                        onchange={on_files}
                    />
                    <span class="selection-count">{ format!("{} selected", form.files.len()) }</span>
                </div>
                <button type="submit" disabled={component.coordinator.is_busy()}>{"Register"}</button>
            </form>
            { status_line(&component.coordinator) }
        </div>
    }
}
