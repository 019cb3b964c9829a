use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rng, rngs::StdRng};
use std::collections::HashSet;

use study_core::model::{Question, QuestionId};

/// Draws the question set for a new quiz.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionSampler {
    seed: Option<u64>,
}

impl QuestionSampler {
    #[must_use]
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Use a fixed seed so every draw is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pick `min(size, available)` distinct questions in random order.
    ///
    /// Rows that repeat an already seen identity are dropped before drawing.
    #[must_use]
    pub fn sample(&self, questions: Vec<Question>, size: usize) -> Vec<Question> {
        match self.seed {
            Some(seed) => draw(questions, size, &mut StdRng::seed_from_u64(seed)),
            None => draw(questions, size, &mut rng()),
        }
    }
}

fn draw<R: Rng + ?Sized>(questions: Vec<Question>, size: usize, rng: &mut R) -> Vec<Question> {
    let mut seen: HashSet<QuestionId> = HashSet::with_capacity(questions.len());
    let mut pool: Vec<Question> = questions
        .into_iter()
        .filter(|q| seen.insert(q.id()))
        .collect();

    pool.as_mut_slice().shuffle(rng);
    pool.truncate(size);
    pool
}
