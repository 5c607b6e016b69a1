//! LaTeX special-character escaping

use phf::phf_map;

/// Special characters and their literal-safe LaTeX replacements
pub static LATEX_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '&' => "\\&",
    '%' => "\\%",
    '$' => "\\$",
    '#' => "\\#",
    '_' => "\\_",
    '{' => "\\{",
    '}' => "\\}",
    '~' => "\\textasciitilde{}",
    '^' => "\\textasciicircum{}",
    '\\' => "\\textbackslash{}",
    '[' => "\\[",
    ']' => "\\]",
};

/// Check whether a character needs escaping in LaTeX text
pub fn needs_escape(ch: char) -> bool {
    LATEX_ESCAPES.contains_key(&ch)
}

/// Escape special LaTeX characters in text
///
/// Every character of the input is looked up exactly once; replacement text
/// is written straight to the output and never scanned again, so the
/// backslashes and braces introduced by one replacement are not escaped a
/// second time.
pub fn escape_latex(text: &str) -> String {
    if !text.chars().any(needs_escape) {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + text.len() / 4);

    for ch in text.chars() {
        match LATEX_ESCAPES.get(&ch) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(ch),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_basic() {
        assert_eq!(escape_latex("a_b&c"), r"a\_b\&c");
        assert_eq!(escape_latex("100%"), r"100\%");
        assert_eq!(escape_latex("$5 #1"), r"\$5 \#1");
    }

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(
            escape_latex(r"&%$#_{}~^\[]"),
            r"\&\%\$\#\_\{\}\textasciitilde{}\textasciicircum{}\textbackslash{}\[\]"
        );
    }

    #[test]
    fn test_backslash_escaped_once() {
        // The braces of \textbackslash{} must not be escaped again
        assert_eq!(escape_latex(r"C:\temp"), r"C:\textbackslash{}temp");
        assert_eq!(escape_latex("~"), r"\textasciitilde{}");
    }

    #[test]
    fn test_escape_not_idempotent() {
        let once = escape_latex("a_b");
        let twice = escape_latex(&once);
        assert_eq!(once, r"a\_b");
        assert_eq!(twice, r"a\textbackslash{}\_b");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_latex("Hello, world!"), "Hello, world!");
        assert_eq!(escape_latex(""), "");
        assert_eq!(escape_latex("naïve café"), "naïve café");
    }

    #[test]
    fn test_needs_escape() {
        assert!(needs_escape('_'));
        assert!(needs_escape('\\'));
        assert!(!needs_escape('a'));
        assert!(!needs_escape('|'));
        assert_eq!(LATEX_ESCAPES.len(), 12);
    }
}
