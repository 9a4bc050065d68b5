use super::*;

#[test]
fn validate_login_input_trims_and_accepts_both_fields() {
    assert_eq!(
        validate_login_input("  diana@example.com  ", " secret "),
        Ok(("diana@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("diana@example.com", ""),
        Err("Enter both email and password.")
    );
}
