use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2001.as_str(), "E2001");
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("e1002".parse::<ErrorCode>(), Ok(ErrorCode::E1002));
    assert_eq!("W3001".parse::<ErrorCode>(), Ok(ErrorCode::W3001));
    assert_eq!("E0000".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        let hits = [
            code.is_resolution_error(),
            code.is_template_error(),
            code.is_semantic_error(),
            code.is_internal_error(),
            code.is_warning(),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();
        assert_eq!(hits, 1, "{code} must belong to exactly one range");
    }
}

#[test]
fn test_all_codes_round_trip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}
