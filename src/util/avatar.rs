/// Derives the placeholder-avatar URL for a display name.
///
/// Deterministic apart from the `background=random` query flag, which the
/// avatar provider resolves server-side.
pub fn derive_avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        urlencoding::encode(name)
    )
}

/// Whether an avatar value points at a real remote image rather than a
/// placeholder or a local fragment. Merge-updates regenerate the avatar when
/// this is false and the name changed.
pub fn is_remote_url(avatar: &str) -> bool {
    avatar.contains("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_in_names() {
        assert_eq!(
            derive_avatar_url("John Doe"),
            "https://ui-avatars.com/api/?name=John%20Doe&background=random"
        );
    }

    #[test]
    fn detects_remote_urls() {
        assert!(is_remote_url("https://picsum.photos/100/100"));
        assert!(is_remote_url("http://example.com/a.png"));
        assert!(!is_remote_url("avatar.png"));
        assert!(!is_remote_url(""));
    }
}
