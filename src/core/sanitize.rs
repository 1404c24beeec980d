// src/core/sanitize.rs

/// Collapse runs of whitespace to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Make an arbitrary string (an email, usually) safe as a file stem.
/// Path separators, reserved characters and control chars become `_`.
pub fn sanitize_file_stem(name: &str) -> String {
    let out: String = name
        .trim()
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let out = out.trim_matches('.').to_string();
    if out.is_empty() { s!("unnamed") } else { out }
}
