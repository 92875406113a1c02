//! Common utility functions shared across the codebase.

/// Strips a leading UTF-8 byte order mark, if present.
///
/// Language files exported from Windows editors often start with one.
///
/// # Examples
///
/// ```
/// use i18n_dict::utils::strip_bom;
///
/// assert_eq!(strip_bom("\u{feff}{}"), "{}");
/// assert_eq!(strip_bom("key=value"), "key=value");
/// assert_eq!(strip_bom(""), "");
/// ```
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Case-insensitive lookup of `name` among `candidates`.
///
/// An exact match is preferred, so a directory holding both `en_us.json` and
/// `en_US.json` resolves deterministically.
///
/// # Examples
///
/// ```
/// use i18n_dict::utils::find_ignore_case;
///
/// let files = vec!["en_US.lang".to_string(), "zh_CN.lang".to_string()];
/// assert_eq!(find_ignore_case(&files, "zh_cn.lang"), Some("zh_CN.lang"));
/// assert_eq!(find_ignore_case(&files, "ja_jp.lang"), None);
/// ```
pub fn find_ignore_case<'a>(candidates: &'a [String], name: &str) -> Option<&'a str> {
    candidates
        .iter()
        .find(|c| c.as_str() == name)
        .or_else(|| candidates.iter().find(|c| c.eq_ignore_ascii_case(name)))
        .map(String::as_str)
}
