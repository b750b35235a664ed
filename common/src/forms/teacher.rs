use crate::forms::{ClassListEditor, FormRecord};
use crate::model::teacher::TeacherPayload;

#[derive(Debug, Clone)]
pub enum TeacherEdit {
    Id(String),
    Name(String),
    Password(String),
    /// Text currently typed in the class input.
    ClassInput(String),
    /// The confirmation keystroke on the class input.
    ConfirmClass,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherForm {
    pub id: String,
    pub name: String,
    pub password: String,
    pub classes: ClassListEditor,
}

impl TeacherForm {
    pub fn apply(&mut self, edit: TeacherEdit) -> bool {
        match edit {
            TeacherEdit::Id(value) => super::replace(&mut self.id, value),
            TeacherEdit::Name(value) => super::replace(&mut self.name, value),
            TeacherEdit::Password(value) => super::replace(&mut self.password, value),
            TeacherEdit::ClassInput(value) => self.classes.set_input(value),
            TeacherEdit::ConfirmClass => self.classes.confirm(),
        }
    }

    /// The class input is not part of the payload; only confirmed entries are.
    pub fn payload(&self) -> TeacherPayload {
        TeacherPayload {
            id: self.id.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
            classes: self.classes.classes().to_vec(),
        }
    }

}

impl FormRecord for TeacherForm {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_takes_every_field_and_confirmed_classes_only() {
        let mut form = TeacherForm::default();
        form.apply(TeacherEdit::Id("t1".into()));
        form.apply(TeacherEdit::Name("Ms A".into()));
        form.apply(TeacherEdit::Password("x".into()));
        form.apply(TeacherEdit::ClassInput(" 10A ".into()));
        form.apply(TeacherEdit::ConfirmClass);
        form.apply(TeacherEdit::ClassInput("10B".into()));
        form.apply(TeacherEdit::ConfirmClass);
        form.apply(TeacherEdit::ClassInput("10C".into()));

        assert_eq!(
            form.payload(),
            TeacherPayload {
                id: "t1".into(),
                name: "Ms A".into(),
                password: "x".into(),
                classes: vec!["10A".into(), "10B".into()],
            }
        );
    }

    #[test]
    fn unchanged_edits_report_no_change() {
        let mut form = TeacherForm::default();
        assert!(form.apply(TeacherEdit::Id("t1".into())));
        assert!(!form.apply(TeacherEdit::Id("t1".into())));
        assert!(!form.apply(TeacherEdit::ConfirmClass));
    }

    #[test]
    fn reset_clears_classes() {
        let mut form = TeacherForm::default();
        form.apply(TeacherEdit::ClassInput("10A".into()));
        form.apply(TeacherEdit::ConfirmClass);
        form.reset();
        assert_eq!(form, TeacherForm::default());
    }
}
