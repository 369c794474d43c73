//! Text normalization shared by the classifiers and the checklist matcher.

/// Lowercase a filename and treat `_`, `-`, and `.` as word separators so
/// `Passport_2024.PDF`, `passport-2024.pdf`, and `PASSPORT.2024.PDF` all
/// normalize identically.
pub(crate) fn normalize_filename(value: &str) -> String {
    let separated = value.replace(['_', '-', '.'], " ");
    collapse(&separated)
}

/// Lowercase prose and collapse runs of whitespace.
pub(crate) fn normalize_text(value: &str) -> String {
    collapse(value)
}

/// Drop punctuation entirely, keeping alphanumerics and spaces. Used for the
/// exact-name containment check so "Certified Proof of ID!" still matches.
pub(crate) fn strip_punctuation(value: &str) -> String {
    let kept: String = value
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    collapse(&kept)
}

/// Filename tokens considered by the fuzzy tier; short fragments like "of"
/// or "v2" carry no signal.
pub(crate) fn filename_tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().filter(|t| t.len() >= 4).collect()
}

/// Significant words of a requirement name (length above three).
pub(crate) fn significant_words(stripped: &str) -> Vec<&str> {
    stripped.split_whitespace().filter(|w| w.len() > 3).collect()
}

fn collapse(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_separators_become_spaces() {
        assert_eq!(normalize_filename("Share_Charge-ABC.pdf"), "share charge abc pdf");
        assert_eq!(normalize_filename("PASSPORT.2024.PDF"), "passport 2024 pdf");
    }

    #[test]
    fn punctuation_is_stripped_for_name_containment() {
        assert_eq!(strip_punctuation("Certified Proof of ID (2024)!"), "certified proof of id 2024");
    }

    #[test]
    fn tokenizers_apply_length_floors() {
        let normalized = normalize_filename("deed_of_guarantee_v2.pdf");
        assert_eq!(filename_tokens(&normalized), vec!["deed", "guarantee"]);
        assert_eq!(significant_words("deed of guarantee"), vec!["deed", "guarantee"]);
    }

    #[test]
    fn unicode_filenames_survive_normalization() {
        let normalized = normalize_filename("Überweisung_Passeport.PDF");
        assert!(normalized.contains("passeport"));
    }
}
