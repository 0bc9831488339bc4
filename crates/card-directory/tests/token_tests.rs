use card_directory::PublicKeyToken;

#[test]
fn test_embedded_name() {
    let token = PublicKeyToken::parse("alice:ABCD1234").unwrap();
    assert!(token.has_embedded_name());
    assert_eq!(token.embedded_name(), Some("alice"));
    assert_eq!(token.key(), "ABCD1234");
    assert_eq!(token.original_text(), "alice:ABCD1234");
}

#[test]
fn test_bare_key() {
    let token = PublicKeyToken::parse("ABCD1234").unwrap();
    assert!(!token.has_embedded_name());
    assert_eq!(token.embedded_name(), None);
    assert_eq!(token.key(), "ABCD1234");
}

#[test]
fn test_two_colons_is_not_an_embedded_name() {
    let token = PublicKeyToken::parse("a:b:c").unwrap();
    assert!(!token.has_embedded_name());
    assert_eq!(token.key(), "a:b:c");
}

#[test]
fn test_empty_name_segment_is_not_an_embedded_name() {
    let token = PublicKeyToken::parse(":ABCD1234").unwrap();
    assert!(!token.has_embedded_name());
    assert_eq!(token.key(), ":ABCD1234");
}

#[test]
fn test_empty_key_segment_is_not_an_embedded_name() {
    let token = PublicKeyToken::parse("alice:").unwrap();
    assert!(!token.has_embedded_name());
    assert_eq!(token.key(), "alice:");
}

#[test]
fn test_blank_input_yields_no_token() {
    assert_eq!(PublicKeyToken::parse(""), None);
    assert_eq!(PublicKeyToken::parse("   "), None);
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let token = PublicKeyToken::parse("  ABCD1234\n").unwrap();
    assert_eq!(token.key(), "ABCD1234");
}
