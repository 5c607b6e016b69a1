//! Caption and label normalization
//!
//! Captions and labels are derived from short identifiers such as
//! `cpu_load` or a figure's file name. All helpers here are pure.

/// Title-case a string word by word
///
/// A letter is upper-cased when the character before it is not a letter and
/// lower-cased otherwise, so `"cpu load"` becomes `"Cpu Load"` and
/// `"2nd run"` becomes `"2Nd Run"`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(ch);
            prev_is_letter = false;
        }
    }

    result
}

/// Display caption: underscores become spaces, then title case
pub fn display_caption(raw: &str) -> String {
    title_case(&raw.replace('_', " "))
}

/// Label with spaces turned into escaped underscores (`cpu load` -> `cpu\_load`)
pub fn escaped_label(raw: &str) -> String {
    raw.replace(' ', "\\_")
}

/// Label with spaces turned into plain underscores (`cpu load` -> `cpu_load`)
pub fn plain_label(raw: &str) -> String {
    raw.replace(' ', "_")
}

/// Figure label taken from an image path
///
/// Uses the last `/`-separated segment, cut at its first `.`:
/// `plots/cpu_usage.png` -> `cpu_usage`, `out/run.v2.pdf` -> `run`.
pub fn file_label(image_path: &str) -> &str {
    let file_name = image_path.rsplit('/').next().unwrap_or(image_path);
    file_name.split('.').next().unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("cpu load"), "Cpu Load");
        assert_eq!(title_case("CPU LOAD"), "Cpu Load");
        assert_eq!(title_case("2nd run"), "2Nd Run");
        assert_eq!(title_case("mean-value"), "Mean-Value");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_display_caption() {
        assert_eq!(display_caption("cpu_load"), "Cpu Load");
        assert_eq!(display_caption("memory__peak"), "Memory  Peak");
    }

    #[test]
    fn test_labels() {
        assert_eq!(escaped_label("cpu load"), r"cpu\_load");
        assert_eq!(plain_label("cpu load"), "cpu_load");
        assert_eq!(escaped_label("already_fine"), "already_fine");
    }

    #[test]
    fn test_file_label() {
        assert_eq!(file_label("plots/cpu_usage.png"), "cpu_usage");
        assert_eq!(file_label("cpu_usage.png"), "cpu_usage");
        assert_eq!(file_label("a/b/run.v2.pdf"), "run");
        assert_eq!(file_label("figures/noext"), "noext");
        assert_eq!(file_label("dir/"), "");
    }
}
