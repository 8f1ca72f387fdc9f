use super::*;

#[test]
fn validate_trims_email() {
    assert_eq!(
        validate_login_input("  admin@fleet.io ", "secret"),
        Ok(("admin@fleet.io".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_keeps_password_whitespace() {
    assert_eq!(validate_login_input("a@b.com", " pw "), Ok(("a@b.com".to_owned(), " pw ".to_owned())));
}

#[test]
fn validate_requires_email() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_FIELDS));
}

#[test]
fn validate_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err(MISSING_FIELDS));
}
