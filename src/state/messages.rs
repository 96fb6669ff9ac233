//! User-facing outcome messages and the error/info slot pair.
//!
//! DESIGN
//! ======
//! Backend error identifiers are never shown directly; they are translated
//! through one global table in [`Message::from_error_id`]. Identifiers the
//! table does not know collapse to [`Message::SubmissionFailed`].
//!
//! The table is shared by every endpoint; an identifier means the same thing
//! whichever action produced it.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    /// Transport failure: no response was received.
    InternalError,
    /// Backend `internal_error`.
    SubscriptionInternalError,
    InvalidCredentials,
    InvalidData,
    UnableToSendConfirmationEmail,
    PasswordCheckFailed,
    CurrentPasswordIncorrect,
    NewPasswordTooShort,
    NotLoggedIn,
    SubmissionFailed,
    AddSubscriberSucceeded,
    PublishNewsletterSucceeded,
    ChangePasswordSucceeded,
}

impl Message {
    /// Translate a backend error identifier. `None` when unrecognized.
    pub fn from_error_id(error_id: &str) -> Option<Self> {
        match error_id {
            "invalid_credentials" => Some(Self::InvalidCredentials),
            "invalid_data" => Some(Self::InvalidData),
            "send_confirmation_email" => Some(Self::UnableToSendConfirmationEmail),
            "internal_error" => Some(Self::SubscriptionInternalError),
            "password_check_failed" => Some(Self::PasswordCheckFailed),
            "current_password_incorrect" => Some(Self::CurrentPasswordIncorrect),
            // TODO: read the minimum length from the error body once the backend sends it.
            "new_password_too_short" => Some(Self::NewPasswordTooShort),
            "not_logged_in" => Some(Self::NotLoggedIn),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InternalError => "An internal error occurred. Apologies for the inconvenience.",
            Self::SubscriptionInternalError => {
                "An internal error occurred, and we were unable to add you to our subscription list. Apologies for the inconvenience."
            }
            Self::InvalidCredentials => {
                "The username and password that you entered did not work. Try again with different credentials."
            }
            Self::InvalidData => "There was a problem with the form data you entered. Please try again.",
            Self::UnableToSendConfirmationEmail => "We were unable to send a confirmation email to that email address.",
            Self::PasswordCheckFailed => "The new passwords you entered do not match each other.",
            Self::CurrentPasswordIncorrect => "The current password you entered is incorrect.",
            Self::NewPasswordTooShort => {
                "The new password you have chosen is too short. Your new password must be at least 12 characters long."
            }
            Self::NotLoggedIn => "You need to log in before doing that.",
            Self::SubmissionFailed => "Submission failed",
            Self::AddSubscriberSucceeded => "You have subscribed to our newsletter. Stay tuned, you're going to love it!",
            Self::PublishNewsletterSucceeded => {
                "Your newsletter publish request has been accepted, and emails will go out shortly."
            }
            Self::ChangePasswordSucceeded => "Your password has been changed.",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error/info display pair for one form. At most one slot is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    pub error: Option<Message>,
    pub info: Option<Message>,
}

impl Messages {
    pub fn clear(&mut self) {
        self.error = None;
        self.info = None;
    }

    pub fn set_error(&mut self, message: Message) {
        self.error = Some(message);
        self.info = None;
    }

    /// Set the info slot, or leave both empty when `message` is `None`.
    pub fn set_info(&mut self, message: Option<Message>) {
        self.error = None;
        self.info = message;
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.info.is_none()
    }
}
