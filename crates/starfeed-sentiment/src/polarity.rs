//! Lexicon polarity scoring for customer review text.

/// Review-domain word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The summed polarity is clamped to
/// `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("amazing", 0.8),
    ("awesome", 0.8),
    ("excellent", 0.9),
    ("fantastic", 0.9),
    ("great", 0.8),
    ("good", 0.5),
    ("love", 0.7),
    ("loved", 0.7),
    ("perfect", 0.9),
    ("nice", 0.4),
    ("helpful", 0.5),
    ("friendly", 0.5),
    ("fast", 0.4),
    ("easy", 0.4),
    ("recommend", 0.6),
    ("recommended", 0.6),
    ("best", 0.8),
    ("happy", 0.6),
    ("thanks", 0.4),
    ("smooth", 0.4),
    // Negative signals
    ("awful", -0.9),
    ("terrible", -0.9),
    ("horrible", -0.9),
    ("worst", -0.9),
    ("bad", -0.5),
    ("poor", -0.6),
    ("slow", -0.4),
    ("broken", -0.6),
    ("late", -0.4),
    ("rude", -0.7),
    ("scam", -1.0),
    ("fraud", -1.0),
    ("refund", -0.4),
    ("disappointed", -0.7),
    ("disappointing", -0.7),
    ("useless", -0.8),
    ("waste", -0.7),
    ("avoid", -0.7),
];

/// Score review text using the domain lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn polarity(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

/// Fold a polarity onto the 1-5 star scale.
///
/// The polarity is clamped to `[-0.5, 0.5]` first, so even extreme text
/// maps into the scale rather than past it: `-0.5` becomes 1 star, `0.0`
/// becomes 3, `0.5` becomes 5.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rating_from_polarity(polarity: f32) -> u8 {
    (polarity.clamp(-0.5, 0.5) * 4.0 + 3.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(polarity(""), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(polarity("the package arrived on a tuesday"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = polarity("the support team was helpful");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = polarity("delivery was slow and the box was broken");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn mixed_text_sums_weights() {
        // good (+0.5) + slow (-0.4) = 0.1
        let score = polarity("good but slow");
        assert!(
            (score - 0.1).abs() < 1e-6,
            "expected score near 0.1, got {score}"
        );
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let score = polarity("great service, would recommend");
        assert_eq!(score, 1.0, "expected score clamped to 1.0, got {score}");
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let score = polarity("terrible scam, avoid");
        assert_eq!(score, -1.0, "expected score clamped to -1.0, got {score}");
    }

    #[test]
    fn punctuation_stripped_from_words() {
        // "great!" should match "great"
        let score = polarity("great!");
        assert!(
            score > 0.0,
            "expected positive score for 'great!', got {score}"
        );
    }

    #[test]
    fn uppercase_words_match() {
        let score = polarity("GREAT");
        assert!(score > 0.0, "expected positive score for 'GREAT', got {score}");
    }

    #[test]
    fn neutral_polarity_is_three_stars() {
        assert_eq!(rating_from_polarity(0.0), 3);
    }

    #[test]
    fn half_polarity_hits_scale_ends() {
        assert_eq!(rating_from_polarity(0.5), 5);
        assert_eq!(rating_from_polarity(-0.5), 1);
    }

    #[test]
    fn extreme_polarity_clamps_to_scale_ends() {
        assert_eq!(rating_from_polarity(1.0), 5);
        assert_eq!(rating_from_polarity(-1.0), 1);
        assert_eq!(rating_from_polarity(7.5), 5);
        assert_eq!(rating_from_polarity(-7.5), 1);
    }

    #[test]
    fn intermediate_polarity_rounds_to_nearest_star() {
        assert_eq!(rating_from_polarity(0.3), 4); // 4.2
        assert_eq!(rating_from_polarity(0.1), 3); // 3.4
        assert_eq!(rating_from_polarity(-0.2), 2); // 2.2
        assert_eq!(rating_from_polarity(-0.3), 2); // 1.8
    }
}
