use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical matching key for a player's display name.
///
/// Lower-cases, strips accents by NFKD decomposition, maps `ø` to `o` (plain
/// decomposition leaves it alone) and drops spaces around periods so
/// `"J. T. Poston"` and `"J.T. Poston"` meet. Nothing else is touched.
///
/// # Panics
///
/// Will panic if the regex is invalid
#[must_use]
pub fn normalize_name(name: &str) -> String {
    static DOT_SPACING: OnceLock<Regex> = OnceLock::new();
    let re = DOT_SPACING.get_or_init(|| {
        Regex::new(r" *\. *").expect("Invalid regex pattern - this is a programming error")
    });

    // ø is mapped after decomposition since precomposed ǿ only yields it there
    let stripped: String = name
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .replace('ø', "o");

    re.replace_all(&stripped, ".").into_owned()
}
