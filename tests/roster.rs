// tests/roster.rs
//
// Role ordering, grouping and contact labels.
//
use club_roster::roster::{
    pluralize, sort_officers, LabelScheme, OfficerRecord, Organization, Roster, ROLE_ORDER,
};

fn rec(org: &str, name: &str, role: &str) -> OfficerRecord {
    OfficerRecord {
        organization: org.to_string(),
        logo: format!("https://x/{org}.png"),
        org_url: format!("https://x/{org}"),
        name: name.to_string(),
        email: format!("{name}@usf.edu"),
        role: role.to_string(),
        photo: String::new(),
        default_photo: true,
    }
}

fn roles(officers: &[OfficerRecord]) -> Vec<&str> {
    officers.iter().map(|o| o.role.as_str()).collect()
}

#[test]
fn sort_reproduces_priority_list() {
    let mut officers: Vec<OfficerRecord> =
        ROLE_ORDER.iter().rev().enumerate().map(|(i, r)| rec("C", &format!("p{i}"), r)).collect();
    sort_officers(&mut officers);
    assert_eq!(roles(&officers), ROLE_ORDER.to_vec());
}

#[test]
fn custom_roles_sit_just_before_officer() {
    let mut officers = vec![
        rec("C", "a", "Officer"),
        rec("C", "b", "Historian"),
        rec("C", "c", "Secretary"),
        rec("C", "d", "officer"),
        rec("C", "e", "Social Chair"),
        rec("C", "f", "President"),
    ];
    sort_officers(&mut officers);
    assert_eq!(
        roles(&officers),
        vec!["President", "Secretary", "Historian", "Social Chair", "Officer", "officer"]
    );
}

#[test]
fn equal_ranks_keep_encounter_order() {
    let mut officers = vec![
        rec("C", "first", "Treasurer"),
        rec("C", "x", "President"),
        rec("C", "second", "Treasurer"),
        rec("C", "third", "Treasurer"),
    ];
    sort_officers(&mut officers);
    let names: Vec<&str> = officers.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["x", "first", "second", "third"]);
}

#[test]
fn standard_role_plurals() {
    assert_eq!(pluralize("Secretary"), "Secretaries");
    assert_eq!(pluralize("Treasurer"), "Treasurers");
    assert_eq!(pluralize("Advisor"), "Advisors");
    assert_eq!(pluralize("President"), "Presidents");
}

#[test]
fn labels_have_three_segments() {
    let scheme = LabelScheme::new("ES");
    assert_eq!(
        scheme.labels(&rec("Chess Club", "a", "Secretary")),
        "Chess Club Officers ::: ES Officers ::: ES Secretaries"
    );
    assert_eq!(
        scheme.labels(&rec("Chess Club", "a", "Vice-President")),
        "Chess Club Officers ::: ES Officers ::: ES Vice-Presidents"
    );
}

#[test]
fn non_standard_roles_use_catch_all() {
    let scheme = LabelScheme::new("ES");
    let labels = scheme.labels(&rec("Chess Club", "a", "Historian"));
    assert_eq!(labels, "Chess Club Officers ::: ES Officers ::: ES Other Officers");
    assert!(!labels.contains("Historian"));

    // Ranked for sorting, but not a label category of its own.
    assert_eq!(scheme.role_label("Vice President"), "ES Other Officers");
}

#[test]
fn grouping_keeps_first_seen_order_and_last_logo() {
    let mut roster = Roster::new();
    roster.add(rec("Beta", "b1", "Officer"));
    roster.add(rec("Alpha", "a1", "Treasurer"));
    roster.add(rec("Beta", "b2", "President"));
    roster.register(&Organization {
        name: "Alpha".into(),
        logo: "https://x/new-alpha.png".into(),
        page_url: "https://x/alpha-about".into(),
    });
    roster.sort();

    let names: Vec<&str> = roster.groups().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Alpha"]);
    assert_eq!(roles(&roster.get("Beta").unwrap().officers), vec!["President", "Officer"]);

    let alpha = roster.get("Alpha").unwrap();
    assert_eq!(alpha.logo, "https://x/new-alpha.png");
    assert_eq!(alpha.page_url, "https://x/alpha-about");
    assert_eq!(roster.officer_count(), 3);
}

#[test]
fn duplicates_are_not_merged() {
    let roster = Roster::from_records(vec![rec("C", "a", "President"), rec("C", "a", "President")]);
    assert_eq!(roster.officer_count(), 2);
}
