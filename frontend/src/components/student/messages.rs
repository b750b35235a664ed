use clara_common::error::SubmissionError;
use clara_common::forms::StudentEdit;
use clara_common::submission::{ServerReply, Ticket};

use crate::transport::BrowserFile;

pub enum Msg {
    Edit(StudentEdit<BrowserFile>),
    Submit,
    /// Every image of the submission was encoded; the request is on its way.
    Encoded(Ticket),
    Settled(Ticket, Result<ServerReply, SubmissionError>),
}
