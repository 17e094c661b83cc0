//! Word ladders: change one letter at a time, staying inside a dictionary.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

/// Step from `from` to `to` one letter at a time.
///
/// Every intermediate word must be in the dictionary. All states of one
/// ladder share the same dictionary.
#[derive(Debug, Clone)]
pub struct WordLadder {
    from: String,
    to: String,
    words: Rc<HashSet<String>>,
}

impl WordLadder {
    /// Build a ladder. Dictionary entries that are not lowercase words of
    /// the right length can never be reached and are dropped.
    pub fn new<I>(from: impl Into<String>, to: impl Into<String>, words: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let from = from.into();
        let to = to.into();
        for word in [&from, &to] {
            if !is_word(word) {
                return Err(PuzzleError::InvalidWord { word: word.clone() });
            }
        }
        if from.len() != to.len() {
            return Err(PuzzleError::WordLengthMismatch { from, to });
        }

        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| word.len() == from.len() && is_word(word))
            .collect();

        Ok(Self {
            from,
            to,
            words: Rc::new(words),
        })
    }

    pub fn from_word(&self) -> &str {
        &self.from
    }

    pub fn to_word(&self) -> &str {
        &self.to
    }

    /// Number of usable dictionary words.
    pub fn dictionary_size(&self) -> usize {
        self.words.len()
    }

    fn step_to(&self, word: &str) -> Self {
        Self {
            from: word.to_string(),
            to: self.to.clone(),
            words: Rc::clone(&self.words),
        }
    }
}

fn is_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

impl PartialEq for WordLadder {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && (Rc::ptr_eq(&self.words, &other.words) || self.words == other.words)
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl Puzzle for WordLadder {
    /// Positions left to right, replacement letters `a` to `z`.
    fn extensions(&self) -> Vec<Self> {
        let mut next = Vec::new();
        let mut candidate = self.from.clone().into_bytes();

        for i in 0..candidate.len() {
            let original = candidate[i];
            for letter in b'a'..=b'z' {
                if letter == original {
                    continue;
                }
                candidate[i] = letter;
                if let Ok(word) = std::str::from_utf8(&candidate) {
                    if self.words.contains(word) {
                        next.push(self.step_to(word));
                    }
                }
            }
            candidate[i] = original;
        }

        next
    }

    fn is_solved(&self) -> bool {
        self.from == self.to
    }

    fn signature(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::breadth_first_solve;
    use crate::dfs::depth_first_solve;

    fn ladder(from: &str, to: &str, words: &[&str]) -> WordLadder {
        WordLadder::new(from, to, words.iter().copied()).unwrap()
    }

    fn words_of(path: &crate::node::SolutionPath<WordLadder>) -> Vec<&str> {
        path.states().map(|state| state.from_word()).collect()
    }

    #[test]
    fn test_extensions_change_one_letter() {
        let puzzle = ladder("same", "cost", &["same", "some", "came", "sane", "cost", "sam"]);

        let next: Vec<String> = puzzle
            .extensions()
            .iter()
            .map(|p| p.from_word().to_string())
            .collect();

        assert_eq!(next, vec!["came", "some", "sane"]);
        assert!(puzzle.extensions().iter().all(|p| p.to_word() == "cost"));
    }

    #[test]
    fn test_extensions_are_repeatable() {
        let puzzle = ladder("same", "cost", &["same", "some", "came"]);
        assert_eq!(puzzle.extensions(), puzzle.extensions());
    }

    #[test]
    fn test_equality_and_display() {
        let a = ladder("on", "no", &["on", "no", "oo"]);
        let b = ladder("on", "no", &["on", "oo", "no"]);
        let c = ladder("no", "on", &["on", "no", "oo"]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "on -> no");
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_is_solved() {
        assert!(ladder("cost", "cost", &[]).is_solved());
        assert!(!ladder("same", "cost", &[]).is_solved());
    }

    #[test]
    fn test_rejects_inconsistent_words() {
        assert_eq!(
            WordLadder::new("same", "costs", Vec::<String>::new()),
            Err(PuzzleError::WordLengthMismatch {
                from: "same".to_string(),
                to: "costs".to_string()
            })
        );
        assert!(matches!(
            WordLadder::new("Same", "cost", Vec::<String>::new()),
            Err(PuzzleError::InvalidWord { .. })
        ));
        assert!(matches!(
            WordLadder::new("", "", Vec::<String>::new()),
            Err(PuzzleError::InvalidWord { .. })
        ));
    }

    #[test]
    fn test_dictionary_drops_unusable_words() {
        let puzzle = ladder("same", "cost", &["same", "cost", "costs", "Some", "so me"]);
        assert_eq!(puzzle.dictionary_size(), 2);
    }

    #[test]
    fn test_same_to_cost_through_dictionary() {
        let words = ["case", "same", "some", "rome", "rose", "rost", "cost"];

        let bfs = breadth_first_solve(ladder("same", "cost", &words)).expect("reachable");
        assert_eq!(
            words_of(&bfs),
            vec!["same", "some", "rome", "rose", "rost", "cost"]
        );

        let dfs = depth_first_solve(ladder("same", "cost", &words)).expect("reachable");
        assert_eq!(dfs.solved_state().from_word(), "cost");
    }

    #[test]
    fn test_two_step_ladder() {
        let words = ["same", "some", "sore"];

        let bfs = breadth_first_solve(ladder("same", "sore", &words)).expect("reachable");
        assert_eq!(words_of(&bfs), vec!["same", "some", "sore"]);
        assert_eq!(bfs.transitions(), 2);

        let dfs = depth_first_solve(ladder("same", "sore", &words)).expect("reachable");
        assert_eq!(dfs.solved_state().from_word(), "sore");
    }

    #[test]
    fn test_no_single_letter_route_is_exhausted() {
        // "some" and "cost" differ in two letters
        let words = ["same", "some", "cost"];

        assert!(breadth_first_solve(ladder("same", "cost", &words)).is_none());
        assert!(depth_first_solve(ladder("same", "cost", &words)).is_none());
    }

    #[test]
    fn test_depth_first_is_not_always_shortest() {
        let words = ["cat", "bat", "bot", "bog", "dog", "cot", "cog"];

        let bfs = breadth_first_solve(ladder("cat", "dog", &words)).expect("reachable");
        let dfs = depth_first_solve(ladder("cat", "dog", &words)).expect("reachable");

        assert_eq!(words_of(&bfs), vec!["cat", "cot", "cog", "dog"]);
        assert_eq!(
            words_of(&dfs),
            vec!["cat", "bat", "bot", "cot", "cog", "bog", "dog"]
        );
    }
}
