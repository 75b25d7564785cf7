use super::*;
use std::collections::HashSet;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::A0001.to_string(), "A0001");
    assert_eq!(ErrorCode::A0108.as_str(), "A0108");
}

#[test]
fn test_all_codes_are_unique() {
    let strings: HashSet<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    assert_eq!(strings.len(), ErrorCode::ALL.len());
}

#[test]
fn test_from_str_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("a0101".parse::<ErrorCode>(), Ok(ErrorCode::A0101));
    assert_eq!("A9999".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_families_share_a_prefix() {
    let (control, binary): (Vec<&ErrorCode>, Vec<&ErrorCode>) =
        ErrorCode::ALL.iter().partition(|code| code.as_str().starts_with("A00"));
    assert_eq!(control, vec![&ErrorCode::A0001, &ErrorCode::A0002, &ErrorCode::A0003]);
    assert_eq!(binary.len(), 8);
    assert!(binary.iter().all(|code| code.as_str().starts_with("A01")));
}
