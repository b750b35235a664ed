use clara_common::forms::TeacherEdit;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::TeacherComponent;
use crate::components::feedback::status_line;
use crate::components::input_value;

pub fn view(component: &TeacherComponent, ctx: &Context<TeacherComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    html! {
        <div class="form-page">
            <h2>{"Register Teacher"}</h2>
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <div>
                    <label>{"ID:"}</label>
                    <input
                        type="text"
                        value={form.id.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(TeacherEdit::Id(input_value(&e))))}
                    />
                </div>
                <div>
                    <label>{"Name:"}</label>
                    <input
                        type="text"
                        value={form.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(TeacherEdit::Name(input_value(&e))))}
                    />
                </div>
                <div>
                    <label>{"Password:"}</label>
                    <input
                        type="password"
                        value={form.password.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(TeacherEdit::Password(input_value(&e))))}
                    />
                </div>
                { class_editor(component, link) }
                <button type="submit" disabled={component.coordinator.is_busy()}>{"Register"}</button>
            </form>
            { status_line(&component.coordinator) }
        </div>
    }
}

fn class_editor(component: &TeacherComponent, link: &Scope<TeacherComponent>) -> Html {
    let classes = component.form.classes.classes();

    html! {
        <>
            <div>
                <label>{"Classes:"}</label>
                <input
                    type="text"
                    placeholder="Press Enter to add class"
                    value={component.form.classes.input().to_string()}
                    oninput={link.callback(|e: InputEvent| Msg::Edit(TeacherEdit::ClassInput(input_value(&e))))}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        if e.key() == "Enter" {
                            e.prevent_default();
                            Some(Msg::Edit(TeacherEdit::ConfirmClass))
                        } else {
                            None
                        }
                    })}
                />
            </div>
            <div>
                <label>{"Added Classes:"}</label>
                <ul>
                    { for classes.iter().enumerate().map(|(index, class_name)| html! {
                        <li key={index}>{ class_name.clone() }</li>
                    }) }
                </ul>
            </div>
        </>
    }
}
