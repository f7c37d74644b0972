/// The Persian word for "group" used in the page's group headings.
pub const LOCALIZED_GROUP: &'static str = "گروه";
pub const CANONICAL_GROUP: &'static str = "Group";

/// Turns a heading like "گروه A" into "Group A".
pub fn canonicalize(label: &str) -> String {
    label
        .trim()
        .replace(LOCALIZED_GROUP, CANONICAL_GROUP)
        .trim()
        .to_string()
}

#[test]
fn test_canonicalize() {
    assert_eq!(canonicalize("  گروه A "), "Group A");
    assert_eq!(canonicalize("Group B"), "Group B");
    assert_eq!(canonicalize(""), "");
}

#[test]
fn test_canonicalize_is_idempotent() {
    for label in ["گروه F", " گروه  C", "Group D", "گروهE", "Round of 16"] {
        let once = canonicalize(label);
        assert_eq!(canonicalize(&once), once);
    }
}
