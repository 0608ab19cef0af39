//! Line classification for Netscape cookie files
//!
//! Each line is either a directive (blank or `#`-prefixed), which always
//! passes through, or a tab-separated record whose domain column is checked
//! against the allow-list.

/// Minimum number of tab-separated columns in a Netscape cookie record:
/// domain, include-subdomains flag, path, secure flag, expiry, name, value.
pub const RECORD_FIELDS: usize = 7;

/// Domains kept when nothing else is configured.
pub const DEFAULT_DOMAINS: &[&str] = &[
    "youtube.com",
    "youtube-nocookie.com",
    "googlevideo.com",
    "google.com",
];

/// Outcome of classifying a single line
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum LineClass {
    /// Blank line or `#` comment
    Directive,
    /// Record whose domain matched the allow-list
    Matched,
    /// Record with fewer than [`RECORD_FIELDS`] columns
    Malformed,
    /// Well-formed record whose domain matched nothing
    Unmatched,
}

impl LineClass {
    pub fn is_kept(self) -> bool {
        matches!(self, Self::Directive | Self::Matched)
    }
}

/// Ordered list of domain substrings used as keep-filters.
///
/// Entries are trimmed and empty entries are discarded on construction.
/// Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainAllowList {
    domains: Vec<String>,
}

impl DomainAllowList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = entries
            .into_iter()
            .filter_map(|entry| {
                let trimmed = entry.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        Self { domains }
    }

    /// Parses a comma-separated list such as `"youtube.com, google.com"`.
    pub fn from_csv(csv: &str) -> Self {
        Self::new(crate::validators::split_domain_csv(csv))
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// Returns true if any entry occurs as a substring of `domain`.
    ///
    /// Matching is plain case-sensitive containment, not a suffix or label
    /// match: `notgooglevideo.com.evil.com` matches `googlevideo.com`.
    pub fn matches(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| domain.contains(d.as_str()))
    }
}

/// Builds the built-in allow-list from [`DEFAULT_DOMAINS`].
pub fn default_allow_list() -> DomainAllowList {
    DomainAllowList::new(DEFAULT_DOMAINS)
}

/// Classifies one line of a cookie file.
///
/// The line is trimmed for the decision only; callers keep the original text.
pub fn classify(line: &str, allow_list: &DomainAllowList) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return LineClass::Directive;
    }

    let mut fields = trimmed.split('\t');
    let Some(domain) = fields.next() else {
        return LineClass::Malformed;
    };
    if fields.count() + 1 < RECORD_FIELDS {
        return LineClass::Malformed;
    }

    // Netscape marks include-subdomain cookies with a single leading dot
    let domain = domain.strip_prefix('.').unwrap_or(domain);
    if allow_list.matches(domain) {
        LineClass::Matched
    } else {
        LineClass::Unmatched
    }
}

/// Returns true if `line` should be retained.
pub fn keep(line: &str, allow_list: &DomainAllowList) -> bool {
    classify(line, allow_list).is_kept()
}
