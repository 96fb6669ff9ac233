use super::*;

// =============================================================
// Error identifier table
// =============================================================

#[test]
fn invalid_credentials_maps_to_exact_text() {
    let message = Message::from_error_id("invalid_credentials").unwrap();
    assert_eq!(
        message.to_string(),
        "The username and password that you entered did not work. Try again with different credentials."
    );
}

#[test]
fn subscription_error_ids_map_to_exact_text() {
    assert_eq!(
        Message::from_error_id("invalid_data").map(Message::as_str),
        Some("There was a problem with the form data you entered. Please try again.")
    );
    assert_eq!(
        Message::from_error_id("send_confirmation_email").map(Message::as_str),
        Some("We were unable to send a confirmation email to that email address.")
    );
    assert_eq!(
        Message::from_error_id("internal_error").map(Message::as_str),
        Some(
            "An internal error occurred, and we were unable to add you to our subscription list. Apologies for the inconvenience."
        )
    );
}

#[test]
fn password_error_ids_are_recognized() {
    assert_eq!(Message::from_error_id("password_check_failed"), Some(Message::PasswordCheckFailed));
    assert_eq!(Message::from_error_id("current_password_incorrect"), Some(Message::CurrentPasswordIncorrect));
    assert_eq!(Message::from_error_id("new_password_too_short"), Some(Message::NewPasswordTooShort));
    assert_eq!(Message::from_error_id("not_logged_in"), Some(Message::NotLoggedIn));
}

#[test]
fn unknown_error_id_is_unrecognized() {
    assert_eq!(Message::from_error_id("unknown_xyz"), None);
    assert_eq!(Message::from_error_id(""), None);
}

#[test]
fn submission_failed_text() {
    assert_eq!(Message::SubmissionFailed.to_string(), "Submission failed");
}

#[test]
fn subscribe_success_text() {
    assert_eq!(
        Message::AddSubscriberSucceeded.as_str(),
        "You have subscribed to our newsletter. Stay tuned, you're going to love it!"
    );
}

// =============================================================
// Slot pair
// =============================================================

#[test]
fn messages_default_is_empty() {
    assert!(Messages::default().is_empty());
}

#[test]
fn set_error_clears_info() {
    let mut messages = Messages { error: None, info: Some(Message::AddSubscriberSucceeded) };
    messages.set_error(Message::InvalidData);
    assert_eq!(messages.error, Some(Message::InvalidData));
    assert_eq!(messages.info, None);
}

#[test]
fn set_info_clears_error() {
    let mut messages = Messages { error: Some(Message::InvalidData), info: None };
    messages.set_info(Some(Message::ChangePasswordSucceeded));
    assert_eq!(messages.error, None);
    assert_eq!(messages.info, Some(Message::ChangePasswordSucceeded));
}

#[test]
fn set_info_none_leaves_both_empty() {
    let mut messages = Messages { error: Some(Message::InvalidData), info: None };
    messages.set_info(None);
    assert!(messages.is_empty());
}

#[test]
fn clear_resets_both_slots() {
    let mut messages = Messages { error: Some(Message::InvalidData), info: Some(Message::AddSubscriberSucceeded) };
    messages.clear();
    assert!(messages.is_empty());
}
