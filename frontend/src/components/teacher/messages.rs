use clara_common::error::SubmissionError;
use clara_common::forms::TeacherEdit;
use clara_common::submission::{ServerReply, Ticket};

pub enum Msg {
    Edit(TeacherEdit),
    Submit,
    Settled(Ticket, Result<ServerReply, SubmissionError>),
}
