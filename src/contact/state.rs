use super::SUBMIT_FAILED_MESSAGE;

/// The form's editable fields
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The field's name in the submitted form
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// What the form shows while in this status
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Submitting => Some("Sending..."),
            SubmissionStatus::Success => {
                Some("Message sent successfully! I'll get back to you soon.")
            }
            SubmissionStatus::Error => Some(SUBMIT_FAILED_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: SubmissionStatus,
    pub error_message: Option<String>,
}

impl FormState {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Empties the four fields, leaving the status alone
    pub fn clear_fields(&mut self) {
        for field in Field::ALL {
            self.set_field(field, String::new());
        }
    }

    /// The line shown under the form, if any. An error shows its message.
    pub fn status_line(&self) -> Option<&str> {
        match (self.status, &self.error_message) {
            (SubmissionStatus::Error, Some(message)) => Some(message),
            (status, _) => status.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_set_and_cleared_independently_of_status() {
        let mut form = FormState::default();
        form.set_field(Field::Email, "ada@example.com".into());
        form.status = SubmissionStatus::Success;
        assert_eq!(form.field(Field::Email), "ada@example.com");
        assert_eq!(form.field(Field::Name), "");

        form.clear_fields();
        assert_eq!(form.field(Field::Email), "");
        assert_eq!(form.status, SubmissionStatus::Success);
    }

    #[test]
    fn status_lines() {
        let mut form = FormState::default();
        assert_eq!(form.status_line(), None);

        form.status = SubmissionStatus::Submitting;
        assert_eq!(form.status_line(), Some("Sending..."));

        form.status = SubmissionStatus::Error;
        form.error_message = Some("boom".into());
        assert_eq!(form.status_line(), Some("boom"));
    }
}
