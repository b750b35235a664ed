pub mod feedback;
pub mod login;
pub mod navigation;
pub mod student;
pub mod teacher;
pub mod video;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Current value of the `<input>` that fired `event`.
pub fn input_value(event: &InputEvent) -> String {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.value()
}

/// Clears a file picker after its form was reset.
pub fn clear_file_input(node_ref: &NodeRef) {
    if let Some(input) = node_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}
