use cafe_api::cafes::{
    domain::model::{
        enums::cafe_domain_error::CafeDomainError,
        value_objects::{
            cafe_id::CafeId,
            truthy_flag::{parse_optional_truthy_flag, parse_truthy_flag},
        },
    },
    infrastructure::persistence::repositories::postgres::sqlx_cafe_repository_impl::escape_like_pattern,
};

#[test]
fn truthy_flag_accepts_exact_set_ignoring_case_and_whitespace() {
    for value in ["1", "yes", "Y", "TRUE", " t ", "Yes\n"] {
        assert!(parse_truthy_flag(value), "{value:?} should be truthy");
    }
}

#[test]
fn truthy_flag_rejects_everything_else() {
    for value in ["0", "no", "false", "", "on", "yess", "2"] {
        assert!(!parse_truthy_flag(value), "{value:?} should be falsy");
    }
    assert!(!parse_optional_truthy_flag(None));
}

#[test]
fn cafe_id_parses_positive_integers_only() {
    assert_eq!(CafeId::new(" 42 ".to_string()).expect("valid id").value(), 42);
    assert!(matches!(CafeId::new("0".to_string()), Err(CafeDomainError::NotFound)));
    assert!(matches!(CafeId::new("-3".to_string()), Err(CafeDomainError::NotFound)));
    assert!(matches!(CafeId::new("abc".to_string()), Err(CafeDomainError::NotFound)));
}

#[test]
fn like_pattern_escapes_wildcards() {
    assert_eq!(escape_like_pattern("London"), "London");
    assert_eq!(escape_like_pattern("100%_off\\"), "100\\%\\_off\\\\");
}
