use super::*;

#[test]
fn validate_credentials_trims_email() {
    let creds = validate_credentials("  user@example.com  ", "secret").expect("valid");
    assert_eq!(creds.email, "user@example.com");
    assert_eq!(creds.password, "secret");
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let creds = validate_credentials("a@b.com", " pw ").expect("valid");
    assert_eq!(creds.password, " pw ");
}

#[test]
fn validate_credentials_requires_email() {
    assert_eq!(validate_credentials("   ", "pw"), Err(FormErrors::general(MISSING_FIELDS_MESSAGE)));
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(validate_credentials("a@b.com", ""), Err(FormErrors::general(MISSING_FIELDS_MESSAGE)));
}
