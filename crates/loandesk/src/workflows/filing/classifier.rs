//! The two classification strategies over the pattern catalog.
//!
//! Filename classification is first-match-wins: filenames are terse, so the
//! catalog encodes specificity through declaration order. Content
//! classification is best-score-wins: prose carries many weak signals, so
//! additive weighted scoring across every rule is more robust. The two
//! strategies are deliberately not unified.

use super::catalog::{
    assignment_for_type, checklist_ids_for_type, document_type_patterns, folder_keys,
};
use super::domain::{ClassificationDecision, ClassificationHint, FolderLevel, RequirementId};
use super::normalizer::{normalize_filename, normalize_text};

/// Confidence attached to any filename-pattern hit; a single keyword match
/// on a curated catalog is strong but never certain.
const FILENAME_CONFIDENCE: f64 = 0.85;

/// Amplification applied when a rule keyword matches the caller-supplied
/// keyword list rather than appearing incidentally in prose.
const EXPLICIT_KEYWORD_FACTOR: f64 = 1.5;

/// Classify a bare filename against the catalog. Returns the first rule, in
/// authored order, with any keyword found as a substring of the normalized
/// filename; `None` when nothing matches.
pub fn classify_filename(file_name: &str) -> Option<ClassificationHint> {
    let normalized = normalize_filename(file_name);
    if normalized.is_empty() {
        return None;
    }

    for pattern in document_type_patterns() {
        for keyword in pattern.keywords {
            if normalized.contains(keyword) {
                return Some(ClassificationHint {
                    file_type: pattern.file_type.to_string(),
                    category: pattern.category.to_string(),
                    folder: pattern.folder.to_string(),
                    confidence: FILENAME_CONFIDENCE,
                });
            }
        }
    }

    None
}

/// Classify extracted content plus an auxiliary keyword list. Every rule is
/// scored; the strictly highest cumulative score wins and ties keep the
/// first rule encountered. Returns `None` when no rule scores above zero.
pub fn classify_content(summary: &str, keywords: &[String]) -> Option<ClassificationDecision> {
    let normalized_summary = normalize_text(summary);
    let normalized_keywords: Vec<String> =
        keywords.iter().map(|k| normalize_text(k)).filter(|k| !k.is_empty()).collect();

    let mut best: Option<(&'static str, f64)> = None;

    for pattern in document_type_patterns() {
        let mut score = 0.0_f64;

        for rule_keyword in pattern.keywords {
            if !normalized_summary.is_empty() && normalized_summary.contains(rule_keyword) {
                score += pattern.weight as f64;
            }

            let explicit_hit = normalized_keywords.iter().any(|provided| {
                provided == rule_keyword
                    || provided.contains(rule_keyword)
                    || rule_keyword.contains(provided.as_str())
            });
            if explicit_hit {
                score += pattern.weight as f64 * EXPLICIT_KEYWORD_FACTOR;
            }
        }

        match best {
            Some((_, best_score)) if score > best_score => {
                best = Some((pattern.file_type, score));
            }
            None if score > 0.0 => {
                best = Some((pattern.file_type, score));
            }
            _ => {}
        }
    }

    let (file_type, score) = best?;

    let assignment = assignment_for_type(file_type);
    let category = assignment.map(|a| a.category).unwrap_or("Other");
    let (folder, level) = assignment
        .map(|a| (a.folder, a.level))
        .unwrap_or((folder_keys::MISCELLANEOUS, FolderLevel::Client));

    let checklist_matches = checklist_ids_for_type(file_type)
        .iter()
        .map(|id| RequirementId(id.to_string()))
        .collect();

    Some(ClassificationDecision {
        file_type: file_type.to_string(),
        category: category.to_string(),
        suggested_folder: folder.to_string(),
        target_level: level,
        confidence: content_confidence(score),
        checklist_matches,
    })
}

/// Saturating linear mapping from raw score to confidence; raw scores never
/// report full certainty.
fn content_confidence(score: f64) -> f64 {
    (0.5 + score * 0.02).min(0.95)
}
