// src/output/paths.rs
//! Filename generation for delivered documents. No I/O.

/// Make `name` safe to use as a file name on common filesystems.
pub fn sanitize_filename(name: &str) -> String {
    let mapped: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let mut safe_name = mapped.trim().trim_matches('.').to_string();
    if safe_name.chars().count() > 100 {
        safe_name = safe_name.chars().take(100).collect();
    }
    if safe_name.is_empty() {
        safe_name = "expose".to_string();
    }
    safe_name
}

/// File name used when neither an output file nor pipe mode is requested.
pub fn default_output_filename(title: &str, id: &str, extension: &str) -> String {
    let short_id = id.split('-').next().unwrap_or(id);
    format!("{}_{}.{}", sanitize_filename(title), sanitize_filename(short_id), extension)
}
