use clara_common::forms::StudentForm;
use clara_common::submission::SubmissionCoordinator;
use yew::prelude::*;

use crate::transport::BrowserFile;

pub struct StudentComponent {
    pub form: StudentForm<BrowserFile>,

    pub coordinator: SubmissionCoordinator,

    /// The image picker, cleared when the form resets after a success.
    pub file_input_ref: NodeRef,
}

impl StudentComponent {
    pub fn new() -> Self {
        Self {
            form: StudentForm::default(),
            coordinator: SubmissionCoordinator::new(),
            file_input_ref: NodeRef::default(),
        }
    }
}
