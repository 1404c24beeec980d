// src/html.rs
// The officers directory page: one section per organization, one card per
// officer, plus a button that downloads the contacts CSV from an inline Blob.

use std::fmt::Write;

use crate::config::consts::CONTACTS_IMPORT_URL;
use crate::core::html::escape_html as esc;
use crate::csv::embed_for_script;
use crate::roster::{OfficerRecord, OrganizationGroup, Roster};

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; background: #f9f9f9; padding: 20px; }
        h1 { text-align: center; }
        h2 { color: #00703C; border-bottom: 1px solid #ccc; padding-bottom: 5px; margin-top: 40px; display: flex; align-items: center; gap: 10px; }
        .logo { height: 2rem; width: 2rem; border-radius: 5px; background: white; }
        .grid { display: flex; flex-wrap: wrap; gap: 20px; justify-content: flex-start; }
        .card {
            background: white;
            border-radius: 10px;
            box-shadow: 0 4px 8px rgba(0,0,0,0.1);
            width: 250px;
            padding: 15px;
            text-align: center;
        }
        img.profile {
            width: 80px;
            height: 80px;
            border-radius: 50%;
            object-fit: cover;
            margin-bottom: 10px;
        }
        .name { font-weight: bold; font-size: 18px; }
        .position { color: #00703C; font-weight: 600; }
        .email { color: #444; font-size: 14px; }
        .email-link { color: #444; text-decoration: none; }
        .email-link:hover { text-decoration: underline; }
        .club-link { text-decoration: none; color: inherit; }
        .club-link:hover { text-decoration: underline; }
        .download { margin-bottom: 20px; padding: 10px 15px; background: #00703C; color: white; border: none; border-radius: 5px; cursor: pointer; }
        .hint { margin-top: 0; color: #444; font-size: 14px; }
"#;

/// Render the whole page. `csv` is the exact text written to `csv_name`.
pub fn render_page(roster: &Roster, csv: &str, csv_name: &str) -> String {
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"UTF-8\">\n");
    out.push_str("    <title>Officer Contacts</title>\n    <style>");
    out.push_str(STYLE);
    out.push_str("    </style>\n</head>\n<body>\n    <h1>Officer Contacts</h1>\n");

    push_download(&mut out, csv, csv_name);

    for group in roster.groups().iter().filter(|g| !g.officers.is_empty()) {
        push_group(&mut out, group);
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn push_download(out: &mut String, csv: &str, csv_name: &str) {
    let _ = write!(
        out,
        r#"    <button onclick="downloadCSV()" class="download">Download CSV</button>
    <p class="hint">This CSV is formatted for importing into Google Contacts</p>
    <script>
        function downloadCSV() {{
            const csvData = `{data}`;
            const blob = new Blob([csvData], {{ type: 'text/csv;charset=utf-8;' }});
            const url = URL.createObjectURL(blob);
            const link = document.createElement('a');
            link.setAttribute('href', url);
            link.setAttribute('download', '{name}');
            document.body.appendChild(link);
            link.click();
            document.body.removeChild(link);

            if (confirm("Would you like to open Google Contacts to import this CSV?")) {{
                window.open("{import_url}", "_blank");
            }}
        }}
    </script>
"#,
        data = embed_for_script(csv),
        name = csv_name.replace(['\'', '\\'], "_"),
        import_url = CONTACTS_IMPORT_URL,
    );
}

fn push_group(out: &mut String, group: &OrganizationGroup) {
    let name = esc(&group.name);
    let logo = if group.logo.is_empty() {
        s!()
    } else {
        format!(r#"<img src="{}" class="logo" alt="{} logo">"#, esc(&group.logo), name)
    };
    let href = if group.page_url.is_empty() { s!("#") } else { esc(&group.page_url) };

    let _ = writeln!(
        out,
        r#"    <h2><a href="{href}" target="_blank" class="club-link">{logo} {name}</a></h2>"#
    );
    out.push_str("    <div class=\"grid\">\n");
    for officer in &group.officers {
        push_card(out, officer);
    }
    out.push_str("    </div>\n");
}

fn push_card(out: &mut String, o: &OfficerRecord) {
    let _ = write!(
        out,
        r#"        <div class="card">
            <img src="{photo}" alt="{name}" class="profile">
            <div class="name">{name}</div>
            <div class="position">{role}</div>
            <div class="email">
                <a href="mailto:{email}" class="email-link">{email}</a>
            </div>
        </div>
"#,
        photo = esc(&o.photo),
        name = esc(&o.name),
        role = esc(&o.role),
        email = esc(&o.email),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Organization;

    fn officer(org: &str, name: &str, role: &str) -> OfficerRecord {
        OfficerRecord {
            organization: s!(org),
            logo: s!("https://x/logo.png"),
            org_url: s!("https://x/feeds?type=club&type_id=1&tab=about"),
            name: s!(name),
            email: format!("{}@usf.edu", name.to_lowercase().replace(' ', ".")),
            role: s!(role),
            photo: s!("https://x/p.jpg"),
            default_photo: false,
        }
    }

    #[test]
    fn empty_organizations_get_no_section() {
        let mut roster = Roster::new();
        roster.register(&Organization { name: s!("Ghost Club"), ..Default::default() });
        roster.add(officer("Chess Club", "Ann Lee", "President"));

        let page = render_page(&roster, "a,b\r\n", "club_contacts.csv");
        assert!(page.contains("Chess Club"));
        assert!(!page.contains("Ghost Club"));
        assert!(page.contains(r#"href="mailto:ann.lee@usf.edu""#));
    }

    #[test]
    fn officer_text_is_escaped() {
        let mut roster = Roster::new();
        roster.add(officer("R&D <Club>", "Ann Lee", "President"));
        let page = render_page(&roster, "", "club_contacts.csv");
        assert!(page.contains("R&amp;D &lt;Club&gt;"));
        assert!(!page.contains("<Club>"));
    }
}
