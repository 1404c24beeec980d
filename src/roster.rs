// src/roster.rs
// Officer records, grouping by organization, role ordering and contact labels.

use std::collections::HashMap;

use crate::config::consts::LABEL_SEP;

/// Canonical roles in display order. Anything else ranks after these,
/// and the literal "Officer" ranks last of all.
pub const ROLE_ORDER: [&str; 6] = [
    "President",
    "Vice-President",
    "Vice President",
    "Treasurer",
    "Secretary",
    "Advisor",
];

/// Roles that get their own board-wide label ("ES Treasurers").
pub const STANDARD_ROLES: [&str; 5] = ["President", "Vice-President", "Treasurer", "Secretary", "Advisor"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub logo: String,
    /// Organization detail page ("about" tab).
    pub page_url: String,
}

/// One roster entry as read from an organization page. Never mutated after
/// extraction; duplicates across pages are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OfficerRecord {
    pub organization: String,
    pub logo: String,
    pub org_url: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub photo: String,
    /// `photo` is the portal's default listing image, not the officer's own.
    pub default_photo: bool,
}

impl OfficerRecord {
    /// Split on the first space: "Mary Ann Smith" → ("Mary", "Ann Smith").
    pub fn first_last(&self) -> (&str, &str) {
        self.name.split_once(' ').unwrap_or((self.name.as_str(), ""))
    }
}

/* ---------------- Role priority ---------------- */

pub fn role_rank(role: &str) -> usize {
    if let Some(i) = ROLE_ORDER.iter().position(|r| *r == role) {
        i
    } else if role.eq_ignore_ascii_case("officer") {
        ROLE_ORDER.len() + 1
    } else {
        ROLE_ORDER.len()
    }
}

/// Stable: officers sharing a rank keep their encounter order.
pub fn sort_officers(officers: &mut [OfficerRecord]) {
    officers.sort_by_key(|o| role_rank(&o.role));
}

/* ---------------- Grouping ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganizationGroup {
    pub name: String,
    pub logo: String,
    pub page_url: String,
    pub officers: Vec<OfficerRecord>,
}

/// Organizations in first-seen order, each with its officers.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    groups: Vec<OrganizationGroup>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new() -> Self { Self::default() }

    /// Group records by organization and sort each group by role.
    pub fn from_records<I: IntoIterator<Item = OfficerRecord>>(records: I) -> Self {
        let mut roster = Self::new();
        for rec in records {
            roster.add(rec);
        }
        roster.sort();
        roster
    }

    /// Make sure the organization has a group; its logo and link replace
    /// whatever an earlier page with the same name reported.
    pub fn register(&mut self, org: &Organization) {
        let g = self.group_mut(&org.name);
        g.logo = org.logo.clone();
        g.page_url = org.page_url.clone();
    }

    pub fn add(&mut self, rec: OfficerRecord) {
        let g = self.group_mut(&rec.organization);
        g.logo = rec.logo.clone();
        g.page_url = rec.org_url.clone();
        g.officers.push(rec);
    }

    pub fn sort(&mut self) {
        for g in &mut self.groups {
            sort_officers(&mut g.officers);
        }
    }

    pub fn groups(&self) -> &[OrganizationGroup] { &self.groups }

    pub fn get(&self, name: &str) -> Option<&OrganizationGroup> {
        self.index.get(name).map(|&i| &self.groups[i])
    }

    pub fn officer_count(&self) -> usize {
        self.groups.iter().map(|g| g.officers.len()).sum()
    }

    fn group_mut(&mut self, name: &str) -> &mut OrganizationGroup {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.groups.push(OrganizationGroup {
                    name: s!(name),
                    logo: s!(),
                    page_url: s!(),
                    officers: Vec::new(),
                });
                self.index.insert(s!(name), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[i]
    }
}

/* ---------------- Labels ---------------- */

/// "Secretary" → "Secretaries", "Boss" → "Bosses", "Advisor" → "Advisors".
pub fn pluralize(role: &str) -> String {
    let role = role.trim();
    let lower = role.to_lowercase();
    if lower.ends_with('y') {
        join!(&role[..role.len() - 1], "ies")
    } else if lower.ends_with('s') {
        join!(role, "es")
    } else {
        join!(role, "s")
    }
}

pub fn is_standard_role(role: &str) -> bool {
    STANDARD_ROLES.contains(&role.trim())
}

/// Contact-manager labels for one officer:
/// `<Org> Officers ::: <Board> Officers ::: <Board> <Role plural | Other Officers>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelScheme {
    pub board: String,
}

impl LabelScheme {
    pub fn new(board: &str) -> Self { Self { board: s!(board) } }

    pub fn role_label(&self, role: &str) -> String {
        if is_standard_role(role) {
            format!("{} {}", self.board, pluralize(role))
        } else {
            format!("{} Other Officers", self.board)
        }
    }

    pub fn labels(&self, rec: &OfficerRecord) -> String {
        [
            format!("{} Officers", rec.organization),
            format!("{} Officers", self.board),
            self.role_label(&rec.role),
        ]
        .join(LABEL_SEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_of_officer_is_case_insensitive() {
        assert_eq!(role_rank("officer"), ROLE_ORDER.len() + 1);
        assert_eq!(role_rank("OFFICER"), ROLE_ORDER.len() + 1);
        assert_eq!(role_rank("president"), ROLE_ORDER.len()); // canonical match is exact
    }

    #[test]
    fn pluralize_handles_y_and_s_endings() {
        assert_eq!(pluralize("Secretary"), "Secretaries");
        assert_eq!(pluralize("Boss"), "Bosses");
        assert_eq!(pluralize(" Advisor "), "Advisors");
        assert_eq!(pluralize("DEPUTY"), "DEPUTies");
    }

    #[test]
    fn first_last_splits_on_first_space() {
        let mut rec = OfficerRecord {
            organization: s!("Chess Club"),
            logo: s!(),
            org_url: s!(),
            name: s!("Mary Ann Smith"),
            email: s!("m@usf.edu"),
            role: s!("President"),
            photo: s!(),
            default_photo: true,
        };
        assert_eq!(rec.first_last(), ("Mary", "Ann Smith"));
        rec.name = s!("Cher");
        assert_eq!(rec.first_last(), ("Cher", ""));
    }
}
