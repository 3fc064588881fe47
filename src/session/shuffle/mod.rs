use rand::Rng;

use crate::quiz::Question;


/// Uniform in-place permutation: walking down from the last slot, swap each
/// slot with a random slot at or before it.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0, i + 1);
        items.swap(i, j);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ShuffledAnswer {
    text: String,
    original_index: usize,
}

/// The answers of one question in display order. Each answer keeps the index
/// it had in the quiz definition, so the correct slot is known even when two
/// answers share the same text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShuffledAnswers {
    answers: Vec<ShuffledAnswer>,
    correct_position: usize,
}

impl ShuffledAnswers {
    pub fn new<R: Rng>(question: &Question, rng: &mut R) -> Self {
        let mut answers: Vec<ShuffledAnswer> = question
            .answers()
            .iter()
            .enumerate()
            .map(|(original_index, text)| ShuffledAnswer {
                text: text.clone(),
                original_index,
            })
            .collect();
        shuffle(&mut answers, rng);
        let correct_position = answers
            .iter()
            .position(|a| a.original_index == 0)
            .unwrap_or_default();
        ShuffledAnswers {
            answers,
            correct_position,
        }
    }

    pub fn correct_position(&self) -> usize {
        self.correct_position
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn texts(&self) -> Vec<String> {
        self.answers.iter().map(|a| a.text.clone()).collect()
    }

    #[cfg(test)]
    pub fn original_indices(&self) -> Vec<usize> {
        self.answers.iter().map(|a| a.original_index).collect()
    }
}
