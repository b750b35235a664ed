use crate::forms::FormRecord;
use crate::model::credentials::CredentialPayload;

#[derive(Debug, Clone)]
pub enum LoginEdit {
    Username(String),
    Password(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn apply(&mut self, edit: LoginEdit) -> bool {
        match edit {
            LoginEdit::Username(value) => super::replace(&mut self.username, value),
            LoginEdit::Password(value) => super::replace(&mut self.password, value),
        }
    }

    pub fn payload(&self) -> CredentialPayload {
        CredentialPayload {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

}

impl FormRecord for LoginForm {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_username_and_password_as_typed() {
        let mut form = LoginForm::default();
        form.apply(LoginEdit::Username("t1".into()));
        form.apply(LoginEdit::Password(" secret ".into()));

        assert_eq!(
            form.payload(),
            CredentialPayload {
                username: "t1".into(),
                password: " secret ".into(),
            }
        );
    }

    #[test]
    fn reset_clears_credentials() {
        let mut form = LoginForm::default();
        form.apply(LoginEdit::Username("t1".into()));
        form.reset();
        assert_eq!(form, LoginForm::default());
    }
}
