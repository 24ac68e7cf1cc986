use super::*;

#[test]
fn public_nav_links_point_at_landing_sections() {
    let targets: Vec<&str> = PUBLIC_NAV_LINKS.iter().map(|l| l.to).collect();
    assert_eq!(targets, ["/#features", "/#pricing", "/#faq"]);
}

#[test]
fn public_nav_links_have_labels() {
    assert!(PUBLIC_NAV_LINKS.iter().all(|l| !l.label.is_empty()));
}
