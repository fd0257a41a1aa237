//! Local state of the sign-in form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lives only while the sign-in page is mounted. Each input event becomes a
//! [`FormInput`] applied to [`FormState`], so field updates stay independent.

#[cfg(test)]
#[path = "signin_form_test.rs"]
mod signin_form_test;

/// Current values of the sign-in form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// A single user edit to one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormInput {
    Email(String),
    Password(String),
    RememberMe(bool),
}

impl FormState {
    /// Apply one edit; every other field is left as it was.
    pub fn apply(&mut self, input: FormInput) {
        match input {
            FormInput::Email(value) => self.email = value,
            FormInput::Password(value) => self.password = value,
            FormInput::RememberMe(checked) => self.remember_me = checked,
        }
    }
}
