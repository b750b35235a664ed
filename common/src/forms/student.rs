use crate::forms::FormRecord;

#[derive(Debug, Clone)]
pub enum StudentEdit<F> {
    Roll(String),
    Batch(String),
    /// New picker selection. Replaces the previous list as a whole.
    Files(Vec<F>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentForm<F> {
    pub roll: String,
    pub batch: String,
    pub files: Vec<F>,
}

impl<F> Default for StudentForm<F> {
    fn default() -> Self {
        Self {
            roll: String::new(),
            batch: String::new(),
            files: Vec::new(),
        }
    }
}

impl<F> StudentForm<F> {
    pub fn apply(&mut self, edit: StudentEdit<F>) -> bool {
        match edit {
            StudentEdit::Roll(value) => super::replace(&mut self.roll, value),
            StudentEdit::Batch(value) => super::replace(&mut self.batch, value),
            StudentEdit::Files(files) => {
                self.files = files;
                true
            }
        }
    }

}

impl<F> FormRecord for StudentForm<F> {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_selection_is_replaced_wholesale() {
        let mut form: StudentForm<&str> = StudentForm::default();
        form.apply(StudentEdit::Files(vec!["a.jpg", "b.jpg", "c.jpg"]));
        form.apply(StudentEdit::Files(vec!["d.jpg"]));
        assert_eq!(form.files, ["d.jpg"]);
    }

    #[test]
    fn roll_and_batch_are_free_text() {
        let mut form: StudentForm<&str> = StudentForm::default();
        form.apply(StudentEdit::Roll("  81e07 ".into()));
        form.apply(StudentEdit::Batch("".into()));
        assert_eq!(form.roll, "  81e07 ");
        assert_eq!(form.batch, "");
    }
}
