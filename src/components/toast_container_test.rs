use super::*;

#[test]
fn toast_class_matches_kind() {
    assert_eq!(toast_class(ToastKind::Success), "toast toast--success");
    assert_eq!(toast_class(ToastKind::Error), "toast toast--error");
}
