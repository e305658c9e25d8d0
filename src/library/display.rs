use std::path::Path;

pub(super) fn make_details(artist: &str, title: &str, filename: &Path) -> String {
    format!("{artist}: {title}  (file: {})", filename.display())
}

/// Split a file name of the form `Artist-Title.ext` into `(artist, title)`.
///
/// Exactly one `-` is accepted; the title stops at its first `.`. Either half
/// being blank counts as no match.
pub(super) fn decode_filename(path: &Path) -> Option<(String, String)> {
    let name = path.file_name()?.to_str()?;

    let mut parts = name.split('-');
    let artist = parts.next()?.trim();
    let rest = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let title = rest.split('.').next().unwrap_or(rest).trim();
    if artist.is_empty() || title.is_empty() {
        return None;
    }
    Some((artist.to_string(), title.to_string()))
}
