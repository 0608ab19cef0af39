//! Input validation for allow-list entries
//!
//! Entries are matched as plain case-sensitive substrings of the cookie
//! domain, so a few shapes can never match anything useful. These checks
//! only produce warnings; the entry is still used as given.

/// Splits a comma-separated domain list, trimming entries and dropping
/// empty ones.
///
/// # Examples
///
/// ```
/// use cookie_filter::validators::split_domain_csv;
///
/// let domains: Vec<&str> = split_domain_csv(" youtube.com,,google.com ").collect();
/// assert_eq!(domains, ["youtube.com", "google.com"]);
/// ```
pub fn split_domain_csv(csv: &str) -> impl Iterator<Item = &str> {
    csv.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Checks an allow-list entry for shapes that will never match.
///
/// # Errors
///
/// Returns `Err` with a human-readable reason if:
/// - Entry contains whitespace (cookie domains never do)
/// - Entry contains uppercase ASCII (cookie domains are stored lowercase and
///   matching is case-sensitive)
/// - Entry starts with `.` (the leading dot is stripped from cookie domains
///   before matching, so `.example.com` misses `example.com` cookies)
pub fn check_domain_entry(entry: &str) -> Result<(), String> {
    if entry.chars().any(char::is_whitespace) {
        return Err(format!("'{entry}' contains whitespace and cannot match"));
    }

    if entry.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(format!(
            "'{entry}' contains uppercase letters; matching is case-sensitive"
        ));
    }

    if entry.starts_with('.') {
        return Err(format!(
            "'{entry}' starts with '.'; cookies for the bare domain will not match"
        ));
    }

    Ok(())
}
