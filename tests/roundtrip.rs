use namecard::{build_display_name, ProfileEntry};

#[test]
fn display_name_matches_demo_output() {
    assert_eq!(build_display_name("Bob", None), "Bob");
    assert_eq!(build_display_name("Bob", Some("Adams")), "Bob Adams");
}

#[test]
fn profile_round_trip() {
    let owner = ProfileEntry::new("Xcat Liu", 25);
    let raw = owner.to_json().unwrap();
    assert_eq!(raw, r#"["Xcat Liu",25]"#);
    assert_eq!(ProfileEntry::from_json(&raw).unwrap(), owner);
}

#[test]
fn profile_shape_is_enforced_at_the_boundary() {
    assert!(ProfileEntry::from_json(r#"["Xcat Liu", 25, true]"#).is_err());
}
