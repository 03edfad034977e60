//! Quiz answer aggregation.
//!
//! Turns the raw answer tokens of one quiz submission into a [`ScoreVector`]
//! and picks the dominant stream used to look up suggestion text.

use crate::{AnswerCategory, Error, Result, ScoreVector};

/// Number of questions in a complete quiz
pub const QUIZ_LENGTH: usize = 5;

/// Count answers per stream.
///
/// Fails with [`Error::WrongAnswerCount`] unless exactly [`QUIZ_LENGTH`]
/// answers are given, and with [`Error::InvalidAnswerToken`] on the first
/// token that is not `science`, `arts` or `commerce`.
pub fn aggregate<S: AsRef<str>>(answers: &[S]) -> Result<ScoreVector> {
    if answers.len() != QUIZ_LENGTH {
        return Err(Error::WrongAnswerCount {
            expected: QUIZ_LENGTH,
            actual: answers.len(),
        });
    }

    let mut scores = ScoreVector::default();
    for answer in answers {
        let category: AnswerCategory = answer.as_ref().parse()?;
        scores.increment(category);
    }

    Ok(scores)
}

/// Stream with the highest count.
///
/// Ties go to the first tied stream in science, arts, commerce order.
pub fn dominant(scores: &ScoreVector) -> AnswerCategory {
    let mut best = AnswerCategory::Science;
    for category in AnswerCategory::ALL {
        if scores.get(category) > scores.get(best) {
            best = category;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAMS: [&str; 3] = ["science", "arts", "commerce"];

    #[test]
    fn test_aggregate_counts() {
        let scores = aggregate(&["science", "science", "science", "arts", "commerce"]).unwrap();
        assert_eq!(scores, ScoreVector::new(3, 1, 1));
        assert_eq!(dominant(&scores), AnswerCategory::Science);

        let scores = aggregate(&["commerce"; 5]).unwrap();
        assert_eq!(scores, ScoreVector::new(0, 0, 5));
        assert_eq!(dominant(&scores), AnswerCategory::Commerce);
    }

    #[test]
    fn test_every_valid_quiz_sums_to_five() {
        let mut answers = [""; QUIZ_LENGTH];
        for n in 0..3usize.pow(QUIZ_LENGTH as u32) {
            let mut rest = n;
            for slot in answers.iter_mut() {
                *slot = STREAMS[rest % 3];
                rest /= 3;
            }
            let scores = aggregate(&answers).unwrap();
            assert_eq!(scores.total(), QUIZ_LENGTH as u64);
        }
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = aggregate(&["arts", "science", "commerce", "arts", "science"]).unwrap();
        let b = aggregate(&["science", "science", "arts", "arts", "commerce"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrong_answer_count() {
        for len in [0, 1, 4, 6, 10] {
            let answers = vec!["science"; len];
            match aggregate(&answers) {
                Err(Error::WrongAnswerCount { expected, actual }) => {
                    assert_eq!(expected, 5);
                    assert_eq!(actual, len);
                }
                other => panic!("unexpected: {:?}", other),
            }
        }
    }

    #[test]
    fn test_length_checked_before_tokens() {
        assert!(matches!(
            aggregate(&["history", "geography"]),
            Err(Error::WrongAnswerCount { .. })
        ));
    }

    #[test]
    fn test_invalid_token_fails_fast() {
        match aggregate(&["science", "arts", "history", "commerce", "music"]) {
            Err(Error::InvalidAnswerToken(token)) => assert_eq!(token, "history"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            aggregate(&["science", "ARTS", "arts", "arts", "arts"]),
            Err(Error::InvalidAnswerToken(_))
        ));
    }

    #[test]
    fn test_dominant_ties_follow_enumeration_order() {
        assert_eq!(dominant(&ScoreVector::new(2, 2, 1)), AnswerCategory::Science);
        assert_eq!(dominant(&ScoreVector::new(1, 2, 2)), AnswerCategory::Arts);
        assert_eq!(dominant(&ScoreVector::new(2, 1, 2)), AnswerCategory::Science);
        assert_eq!(dominant(&ScoreVector::new(0, 0, 0)), AnswerCategory::Science);
        assert_eq!(dominant(&ScoreVector::new(1, 1, 3)), AnswerCategory::Commerce);
    }
}
