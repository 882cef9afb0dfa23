// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Password strength scoring: one point per satisfied complexity rule,
//! recomputed from scratch on every keystroke.

/// Scores at or above this are accepted by the field validator.
pub const MIN_ACCEPTED_SCORE: u8 = 3;

/// Ordered strength labels addressed directly by score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Direct indexing into the five-entry label table. Scores without a
    /// table entry (0, or all five rules satisfied) land on the weakest
    /// label.
    pub fn from_score(score: u8) -> Self {
        match score {
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Medium,
            3 => StrengthLevel::Strong,
            4 => StrengthLevel::VeryStrong,
            _ => StrengthLevel::VeryWeak,
        }
    }

    /// Human-readable label for the meter.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "very weak",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very strong",
        }
    }
}

/// Computed strength of a password string. Derived purely from the input;
/// nothing is stored between calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    /// Count of satisfied rules, 0 through 5.
    pub score: u8,
    /// Display label derived from the score.
    pub level: StrengthLevel,
    /// Hints for each unsatisfied rule, in rule order.
    pub missing: Vec<&'static str>,
}

impl PasswordStrength {
    /// Whether the score clears the acceptance floor used by validation.
    pub fn is_acceptable(&self) -> bool {
        self.score >= MIN_ACCEPTED_SCORE
    }

    /// Meter fill as a fraction: a quarter per point, capped at full.
    pub fn meter_fraction(&self) -> f32 {
        (f32::from(self.score) * 0.25).min(1.0)
    }
}

/// Score a password against the five complexity rules: length of at least
/// eight, a lowercase letter, an uppercase letter, a digit, and a symbol.
pub fn password_strength(password: &str) -> PasswordStrength {
    let rules: [(bool, &'static str); 5] = [
        (password.chars().count() >= 8, "at least 8 characters"),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "a lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "an uppercase letter",
        ),
        (password.chars().any(|c| c.is_ascii_digit()), "a digit"),
        (
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
            "a symbol",
        ),
    ];

    let mut score = 0;
    let mut missing = Vec::new();
    for (satisfied, hint) in rules {
        if satisfied {
            score += 1;
        } else {
            missing.push(hint);
        }
    }

    PasswordStrength {
        score,
        level: StrengthLevel::from_score(score),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_only_scores_one() {
        let strength = password_strength("abc");
        assert_eq!(strength.score, 1);
        assert_eq!(strength.level, StrengthLevel::Weak);
        assert!(!strength.is_acceptable());
    }

    #[test]
    fn mixed_case_with_digits_scores_four() {
        let strength = password_strength("Abcdef12");
        assert_eq!(strength.score, 4);
        assert_eq!(strength.level, StrengthLevel::VeryStrong);
        assert!(strength.is_acceptable());
        assert_eq!(strength.missing, vec!["a symbol"]);
    }

    #[test]
    fn empty_password_scores_zero() {
        let strength = password_strength("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.level, StrengthLevel::VeryWeak);
        assert_eq!(strength.missing.len(), 5);
    }

    // The label table has five entries; a full score of five has no entry
    // and falls back to the weakest label.
    #[test]
    fn full_score_falls_back_to_weakest_label() {
        let strength = password_strength("Abcdef1!");
        assert_eq!(strength.score, 5);
        assert_eq!(strength.level, StrengthLevel::VeryWeak);
        assert!(strength.is_acceptable(), "score still clears the floor");
        assert!(strength.missing.is_empty());
    }

    #[test]
    fn score_counts_each_rule_once() {
        // Long, lowercase, digits: three rules.
        let strength = password_strength("abcdefgh12");
        assert_eq!(strength.score, 3);
        assert_eq!(strength.level, StrengthLevel::Strong);
        assert_eq!(
            strength.missing,
            vec!["an uppercase letter", "a symbol"]
        );
    }

    #[test]
    fn meter_fraction_caps_at_full() {
        assert_eq!(password_strength("").meter_fraction(), 0.0);
        assert_eq!(password_strength("Abcdef12").meter_fraction(), 1.0);
        assert_eq!(password_strength("Abcdef1!").meter_fraction(), 1.0);
        assert_eq!(password_strength("abc").meter_fraction(), 0.25);
    }
}
