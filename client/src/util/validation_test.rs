use super::*;

// =============================================================
// validate_email
// =============================================================

#[test]
fn validate_email_accepts_dotted_domain() {
    assert_eq!(validate_email("user@domain.tld"), Ok(()));
    assert_eq!(validate_email("test@example.com"), Ok(()));
    assert_eq!(validate_email("first.last+tag@mail.example.co.jp"), Ok(()));
}

#[test]
fn validate_email_rejects_missing_at() {
    assert_eq!(validate_email("invalid-email"), Err(EmailError::Malformed));
    assert_eq!(validate_email("user.domain.tld"), Err(EmailError::Malformed));
}

#[test]
fn validate_email_rejects_undotted_domain() {
    assert_eq!(validate_email("user@localhost"), Err(EmailError::Malformed));
}

#[test]
fn validate_email_rejects_empty_parts() {
    assert_eq!(validate_email(""), Err(EmailError::Malformed));
    assert_eq!(validate_email("@domain.tld"), Err(EmailError::Malformed));
    assert_eq!(validate_email("user@"), Err(EmailError::Malformed));
    assert_eq!(validate_email("user@.tld"), Err(EmailError::Malformed));
    assert_eq!(validate_email("user@domain."), Err(EmailError::Malformed));
}

#[test]
fn validate_email_rejects_whitespace_and_double_at() {
    assert_eq!(validate_email(" user@domain.tld"), Err(EmailError::Malformed));
    assert_eq!(validate_email("us er@domain.tld"), Err(EmailError::Malformed));
    assert_eq!(validate_email("a@b@domain.tld"), Err(EmailError::Malformed));
}

#[test]
fn email_error_message() {
    assert_eq!(EmailError::Malformed.to_string(), "must be a well-formed email address");
}

// =============================================================
// validate_password_strength
// =============================================================

#[test]
fn strong_password_has_no_warnings() {
    assert!(validate_password_strength("Password123").is_empty());
}

#[test]
fn short_password_warns_length_only_when_other_rules_pass() {
    assert_eq!(validate_password_strength("Short1"), vec![PasswordWarning::TooShort]);
}

#[test]
fn lowercase_password_warns_uppercase() {
    assert_eq!(
        validate_password_strength("password123"),
        vec![PasswordWarning::MissingUppercase]
    );
}

#[test]
fn password_without_digit_warns_digit() {
    assert_eq!(validate_password_strength("Password"), vec![PasswordWarning::MissingDigit]);
}

#[test]
fn warnings_accumulate_in_priority_order() {
    assert_eq!(
        validate_password_strength(""),
        vec![
            PasswordWarning::TooShort,
            PasswordWarning::MissingUppercase,
            PasswordWarning::MissingDigit,
        ]
    );
    assert_eq!(
        validate_password_strength("Short"),
        vec![PasswordWarning::TooShort, PasswordWarning::MissingDigit]
    );
}

#[test]
fn warnings_match_union_of_rules() {
    let samples = ["", "a", "A", "1", "abcdefgh", "ABCDEFGH", "12345678", "Abcdefg1", "Ab1", "ÄÖÜäöüß1"];
    for sample in samples {
        let mut expected = Vec::new();
        if sample.chars().count() < MIN_PASSWORD_LEN {
            expected.push(PasswordWarning::TooShort);
        }
        if !sample.chars().any(|c| c.is_ascii_uppercase()) {
            expected.push(PasswordWarning::MissingUppercase);
        }
        if !sample.chars().any(|c| c.is_ascii_digit()) {
            expected.push(PasswordWarning::MissingDigit);
        }
        assert_eq!(validate_password_strength(sample), expected, "sample {sample:?}");
    }
}

#[test]
fn length_counts_characters_not_bytes() {
    // Eight characters, more than eight bytes.
    assert!(!validate_password_strength("Pässwör1").contains(&PasswordWarning::TooShort));
}

#[test]
fn warning_messages() {
    assert_eq!(PasswordWarning::TooShort.to_string(), "must be at least 8 characters");
    assert_eq!(
        PasswordWarning::MissingUppercase.to_string(),
        "must contain at least one uppercase letter"
    );
    assert_eq!(PasswordWarning::MissingDigit.to_string(), "must contain at least one digit");
}
