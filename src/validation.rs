//! Answer validation: case-insensitive exact matching for word-pair quizzes.
//!
//! The comparison lowercases both sides (Unicode-aware, since vocabulary
//! carries diacritics like ä/ö/ü) and then requires exact string equality.
//! There is deliberately no typo tolerance, no synonym handling, and no
//! whitespace trimming: an answer with stray leading or trailing whitespace
//! is wrong. The untrimmed comparison matches how the curation side has
//! always graded; see DESIGN.md before "fixing" it.

/// Judge a submitted answer against the expected one.
pub fn validate_answer(submitted: &str, expected: &str) -> bool {
  submitted.to_lowercase() == expected.to_lowercase()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_exact_match() {
    assert!(validate_answer("koira", "koira"));
    assert!(validate_answer("Hund", "Hund"));
  }

  #[test]
  fn test_case_insensitive() {
    assert!(validate_answer("Koira", "koira"));
    assert!(validate_answer("KOIRA", "koira"));
    assert!(validate_answer("kOiRa", "koira"));
    assert!(validate_answer("hund", "Hund"));
  }

  #[test]
  fn test_unicode_lowercasing() {
    // Diacritics must survive and fold correctly
    assert!(validate_answer("YSTÄVÄ", "ystävä"));
    assert!(validate_answer("Äiti", "äiti"));
    assert!(validate_answer("Straße", "straße"));
    assert!(validate_answer("ÉLÈVE", "élève"));
  }

  #[test]
  fn test_incorrect() {
    assert!(!validate_answer("kissa", "koira"));
    assert!(!validate_answer("koiraa", "koira"));
    assert!(!validate_answer("", "koira"));
  }

  #[test]
  fn test_whitespace_is_not_trimmed() {
    assert!(!validate_answer("koira ", "koira"));
    assert!(!validate_answer(" koira", "koira"));
    assert!(!validate_answer("koira\n", "koira"));
    assert!(!validate_answer("koi ra", "koira"));
  }

  #[test]
  fn test_empty_expected() {
    assert!(validate_answer("", ""));
    assert!(!validate_answer("koira", ""));
  }
}
