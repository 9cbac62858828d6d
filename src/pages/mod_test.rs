use super::*;

#[test]
fn page_param_defaults_to_first_page() {
    assert_eq!(page_param(None), 1);
    assert_eq!(page_param(Some("")), 1);
    assert_eq!(page_param(Some("0")), 1);
    assert_eq!(page_param(Some("abc")), 1);
}

#[test]
fn page_param_parses_positive_numbers() {
    assert_eq!(page_param(Some("3")), 3);
    assert_eq!(page_param(Some(" 12 ")), 12);
}

#[test]
fn id_param_requires_number() {
    assert_eq!(id_param(Some("42")), Some(42));
    assert_eq!(id_param(Some("x/bank")), None);
    assert_eq!(id_param(None), None);
}
