/// Append-only builder for the teacher's class names.
///
/// A confirmed entry is trimmed before it is stored; blank input is ignored
/// and left as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassListEditor {
    input: String,
    classes: Vec<String>,
}

impl ClassListEditor {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn set_input(&mut self, value: String) -> bool {
        super::replace(&mut self.input, value)
    }

    /// Appends the trimmed input and clears it. Returns `false` and changes
    /// nothing when the input is blank.
    pub fn confirm(&mut self) -> bool {
        let entry = self.input.trim();
        if entry.is_empty() {
            return false;
        }
        self.classes.push(entry.to_string());
        self.input.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm_all(editor: &mut ClassListEditor, entries: &[&str]) {
        for entry in entries {
            editor.set_input(entry.to_string());
            editor.confirm();
        }
    }

    #[test]
    fn confirmed_entries_are_trimmed_and_kept_in_order() {
        let mut editor = ClassListEditor::default();
        confirm_all(&mut editor, &["  10A", "10B  ", "\t9C\n"]);
        assert_eq!(editor.classes(), ["10A", "10B", "9C"]);
        assert_eq!(editor.input(), "");
    }

    #[test]
    fn blank_input_is_never_appended() {
        let mut editor = ClassListEditor::default();
        for blank in ["", " ", "\t", "  \n  "] {
            editor.set_input(blank.to_string());
            assert!(!editor.confirm());
            assert!(editor.classes().is_empty());
            assert_eq!(editor.input(), blank);
        }
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut editor = ClassListEditor::default();
        confirm_all(&mut editor, &["10A", "10A"]);
        assert_eq!(editor.classes(), ["10A", "10A"]);
    }

    #[test]
    fn blank_confirm_keeps_existing_classes() {
        let mut editor = ClassListEditor::default();
        confirm_all(&mut editor, &["10A"]);
        editor.set_input("   ".to_string());
        assert!(!editor.confirm());
        assert_eq!(editor.classes(), ["10A"]);
    }
}
