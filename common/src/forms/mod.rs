//! Form state records.
//!
//! Each form keeps its fields in one struct and changes them only through
//! `apply`, which returns whether anything changed so a component can skip
//! re-rendering. Payloads are built fresh from the record on every submit.

pub mod class_list;
pub mod login;
pub mod student;
pub mod teacher;
pub mod video;

pub use class_list::ClassListEditor;
pub use login::{LoginEdit, LoginForm};
pub use student::{StudentEdit, StudentForm};
pub use teacher::{TeacherEdit, TeacherForm};
pub use video::{VideoEdit, VideoForm};

/// A form state record that can go back to its initial state.
///
/// Only `SubmissionCoordinator::settle_form` calls this, and only after a
/// successful submission.
pub trait FormRecord {
    fn reset(&mut self);
}

/// Replaces `slot` with `value` and reports whether it differed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
