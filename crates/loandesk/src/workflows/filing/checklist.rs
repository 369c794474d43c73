//! Checklist requirement matching: a cascade of four heuristics ordered by
//! precision, each with a fixed score ceiling (0.9 / 0.85 / 0.8 / 0.6).
//!
//! A later tier can only raise a requirement's score, never lower it, and a
//! tier is skipped once the running score has reached that tier's ceiling.
//! The tier that produced the final score is recorded so reviewers can audit
//! why a document was proposed against a requirement.

use super::catalog::filename_alias_patterns;
use super::domain::{ChecklistRequirement, FilenameMatchResult, MatchTier};
use super::normalizer::{
    filename_tokens, normalize_filename, normalize_text, significant_words, strip_punctuation,
};

/// Score every checklist requirement against a filename. Only requirements
/// with a positive score are returned, sorted descending by score.
pub fn match_checklist(
    file_name: &str,
    items: &[ChecklistRequirement],
) -> Vec<FilenameMatchResult> {
    let normalized = normalize_filename(file_name);
    let stripped = strip_punctuation(&normalized);

    let mut results: Vec<FilenameMatchResult> = items
        .iter()
        .filter_map(|item| score_requirement(&normalized, &stripped, item))
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results
}

fn score_requirement(
    normalized: &str,
    stripped: &str,
    item: &ChecklistRequirement,
) -> Option<FilenameMatchResult> {
    let mut score = 0.0_f64;
    let mut tier = MatchTier::WordOverlap;
    let mut reason = String::new();

    // Tier 1: the filename spells out the requirement name.
    let stripped_name = strip_punctuation(&item.name);
    if !stripped_name.is_empty() && stripped.contains(&stripped_name) {
        score = MatchTier::ExactName.ceiling();
        tier = MatchTier::ExactName;
        reason = format!("filename contains requirement name '{}'", item.name);
    }

    // Tier 2: the filename names one of the acceptable document types.
    if score < MatchTier::AcceptableType.ceiling() {
        for accepted in &item.matching_document_types {
            let normalized_type = normalize_text(accepted);
            if !normalized_type.is_empty() && normalized.contains(&normalized_type) {
                score = MatchTier::AcceptableType.ceiling();
                tier = MatchTier::AcceptableType;
                reason = format!("filename contains acceptable type '{accepted}'");
                break;
            }
        }
    }

    // Tier 3: semantic alias patterns. A pattern relates to a requirement
    // when the pattern key's first word appears in the requirement's name or
    // accepted types.
    if score < MatchTier::AliasPattern.ceiling() {
        if let Some((key, alias)) = alias_pattern_hit(normalized, item) {
            score = MatchTier::AliasPattern.ceiling();
            tier = MatchTier::AliasPattern;
            reason = format!("filename alias '{alias}' matches pattern '{key}'");
        }
    }

    // Tier 4: loose word overlap between the requirement name and filename
    // tokens, attempted only while the score is still below its ceiling.
    if score < MatchTier::WordOverlap.ceiling() {
        if let Some(overlap) = word_overlap_hit(normalized, &stripped_name) {
            score = MatchTier::WordOverlap.ceiling();
            tier = MatchTier::WordOverlap;
            reason = format!("{overlap} word(s) of requirement name appear in filename");
        }
    }

    if score > 0.0 {
        Some(FilenameMatchResult {
            requirement_id: item.id.clone(),
            score,
            tier,
            reason,
        })
    } else {
        None
    }
}

fn alias_pattern_hit(
    normalized: &str,
    item: &ChecklistRequirement,
) -> Option<(&'static str, &'static str)> {
    let name = normalize_text(&item.name);
    let types: Vec<String> = item.matching_document_types.iter().map(|t| normalize_text(t)).collect();

    for pattern in filename_alias_patterns() {
        let first_word = pattern.key.split_whitespace().next().unwrap_or(pattern.key);
        let related =
            name.contains(first_word) || types.iter().any(|t| t.contains(first_word));
        if !related {
            continue;
        }

        for alias in pattern.aliases {
            if normalized.contains(alias) {
                return Some((pattern.key, alias));
            }
        }
    }

    None
}

fn word_overlap_hit(normalized: &str, stripped_name: &str) -> Option<usize> {
    let words = significant_words(stripped_name);
    if words.is_empty() {
        return None;
    }
    let tokens = filename_tokens(normalized);

    let matched = words
        .iter()
        .filter(|word| tokens.iter().any(|token| fuzzy_word_match(word, token)))
        .count();

    if matched >= 2 || (matched >= 1 && words.len() <= 2) {
        Some(matched)
    } else {
        None
    }
}

// Containment counts only when the contained word has four or more
// characters, so fragments like "tax" never match inside longer words.
fn fuzzy_word_match(word: &str, token: &str) -> bool {
    if word == token {
        return true;
    }
    let (shorter, longer) = if word.len() <= token.len() { (word, token) } else { (token, word) };
    shorter.len() >= 4 && longer.contains(shorter)
}
