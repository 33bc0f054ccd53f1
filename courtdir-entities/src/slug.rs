/// Derive a URL-safe identifier from a display name.
///
/// ASCII letters and digits are kept (lowercased), every run of other
/// characters collapses into a single `-`. Leading and trailing
/// separators are dropped, e.g. `"New Mexico"` becomes `"new-mexico"`.
pub fn derive_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// A slug is valid if it is non-empty and already in derived form.
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty() && derive_slug(s) == s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_slug_from_state_names() {
        assert_eq!("utah", derive_slug("Utah"));
        assert_eq!("new-mexico", derive_slug("New Mexico"));
        assert_eq!("district-of-columbia", derive_slug("  District of  Columbia "));
        assert_eq!("st-george-city-park", derive_slug("St. George / City Park"));
        assert_eq!("", derive_slug("---"));
    }

    #[test]
    fn derived_slugs_are_stable() {
        let once = derive_slug("Salt Lake City (Liberty Park)");
        assert_eq!("salt-lake-city-liberty-park", once);
        assert_eq!(once, derive_slug(&once));
        assert!(is_valid_slug(&once));
    }

    #[test]
    fn validate_slugs() {
        assert!(is_valid_slug("utah"));
        assert!(is_valid_slug("new-mexico"));
        assert!(!is_valid_slug("New-Mexico"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-utah"));
        assert!(!is_valid_slug("utah/x"));
    }
}
