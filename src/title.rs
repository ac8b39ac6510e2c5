use regex::Regex;

/// Derives a display title from a video's canonical detail-page URL.
///
/// The slug sits in the second-to-last path segment, e.g.
/// `https://www.pexels.com/video/woman-stepping-in-the-sand-6473582/`.
/// The trailing numeric id is stripped, hyphens become spaces, and the
/// first character is uppercased.
pub fn extract_video_title_from_url(url: &str) -> String {
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() < 2 {
        return String::new();
    }
    let slug = parts[parts.len() - 2];

    let stripped = match Regex::new(r"-\d+$") {
        Ok(re) => re.replace(slug, "").into_owned(),
        Err(_) => String::from(slug),
    };
    let title = stripped.replace('-', " ");

    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => title,
    }
}
