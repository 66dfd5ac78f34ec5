use rand::Rng;

use quiz_core::model::{Question, QuestionBank, QuestionError};

use crate::randomizer::shuffle_with;

/// Question set for one session: a private, reordered copy of the bank.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub questions: Vec<Question>,
}

impl SessionPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }
}

/// Builds a session plan from the template bank.
pub struct SessionBuilder<'a> {
    bank: &'a QuestionBank,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Shuffle the question order, then shuffle each question's options on its own.
    ///
    /// Every question and option list is rebuilt in a new container, so the bank
    /// is never shared with or changed by the session.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a reordered question fails validation, which
    /// only happens for a bank that bypassed validation.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Result<SessionPlan, QuestionError> {
        let ordered = shuffle_with(self.bank.questions(), rng);

        let mut questions = Vec::with_capacity(ordered.len());
        for question in &ordered {
            let options = shuffle_with(question.options(), rng);
            questions.push(question.with_options(options)?);
        }

        Ok(SessionPlan { questions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> QuestionBank {
        QuestionBank::builtin().unwrap()
    }

    #[test]
    fn plan_contains_every_question_once() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        let plan = SessionBuilder::new(&bank).build(&mut rng).unwrap();

        assert_eq!(plan.total(), bank.len());
        let mut ids: Vec<_> = plan.questions.iter().map(Question::id).collect();
        ids.sort();
        let mut expected: Vec<_> = bank.questions().iter().map(Question::id).collect();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn options_keep_their_contents() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(11);
        let plan = SessionBuilder::new(&bank).build(&mut rng).unwrap();

        for question in &plan.questions {
            let original = bank
                .questions()
                .iter()
                .find(|q| q.id() == question.id())
                .unwrap();
            assert_eq!(question.options().len(), original.options().len());
            for option in question.options() {
                assert!(original.options().contains(option));
            }
            assert_eq!(
                question.correct_option().unwrap(),
                original.correct_option().unwrap()
            );
        }
    }

    #[test]
    fn bank_is_left_untouched() {
        let bank = bank();
        let before = bank.clone();
        let mut rng = StdRng::seed_from_u64(3);
        let _ = SessionBuilder::new(&bank).build(&mut rng).unwrap();
        assert_eq!(bank, before);
    }

    #[test]
    fn question_order_actually_changes_across_seeds() {
        let bank = bank();
        let original: Vec<_> = bank.questions().iter().map(Question::id).collect();
        let reordered = (0..16).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = SessionBuilder::new(&bank).build(&mut rng).unwrap();
            plan.questions.iter().map(Question::id).collect::<Vec<_>>() != original
        });
        assert!(reordered);
    }
}
