const ALPHABET_LEN: usize = 26;

/// Per-letter counts for `a..=z`, case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterTally {
    counts: [u64; ALPHABET_LEN],
}

impl LetterTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every ASCII letter of `text`; anything else is skipped.
    pub fn add_str(mut self, text: &str) -> Self {
        for slot in text.chars().filter_map(letter_slot) {
            self.counts[slot] += 1;
        }
        self
    }

    pub fn count(&self, letter: char) -> u64 {
        letter_slot(letter).map_or(0, |slot| self.counts[slot])
    }

    /// Letters that were seen at least once, in alphabet order.
    pub fn seen(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(slot, &count)| (slot_letter(slot), count))
            .filter(|&(_, count)| count > 0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Letter with the highest count. Ties go to the letter closest to `a`.
    /// `None` when nothing was counted.
    pub fn most_common(&self) -> Option<char> {
        let (slot, max) = self
            .counts
            .iter()
            .enumerate()
            .fold((0, 0), |best, (slot, &count)| {
                if count > best.1 {
                    (slot, count)
                } else {
                    best
                }
            });
        (max > 0).then(|| slot_letter(slot))
    }
}

fn letter_slot(c: char) -> Option<usize> {
    c.is_ascii_alphabetic()
        .then(|| (c.to_ascii_lowercase() as u8 - b'a') as usize)
}

fn slot_letter(slot: usize) -> char {
    (b'a' + slot as u8) as char
}

/// Folds every string into one [`LetterTally`].
pub fn tally_letters<S: AsRef<str>>(texts: &[S]) -> LetterTally {
    texts
        .iter()
        .fold(LetterTally::new(), |tally, text| tally.add_str(text.as_ref()))
}

/// Most frequent ASCII letter across all `texts`, or `None` if they hold no letters.
pub fn most_common_letter<S: AsRef<str>>(texts: &[S]) -> Option<char> {
    tally_letters(texts).most_common()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_common_sample() {
        let words = ["hello", "how are you", "not bad", "foo", "bar", "summary"];
        assert_eq!(most_common_letter(&words), Some('o'));
        assert_eq!(tally_letters(&words).count('o'), 6);
    }

    #[test]
    fn test_case_insensitive() {
        let tally = tally_letters(&["AAA", "aaa"]);
        assert_eq!(tally.count('a'), 6);
        assert_eq!(tally.count('A'), 6);
        assert_eq!(tally.total(), 6);
        assert_eq!(tally.most_common(), Some('a'));
    }

    #[test]
    fn test_tie_goes_to_earliest_letter() {
        assert_eq!(most_common_letter(&["zyx", "xyz"]), Some('x'));
        assert_eq!(most_common_letter(&["ba"]), Some('a'));
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(most_common_letter(&empty), None);
        assert_eq!(most_common_letter(&[""]), None);
    }

    #[test]
    fn test_non_alphabetic_only() {
        assert_eq!(most_common_letter(&["123 !?", "  ", "éü"]), None);
        assert_eq!(tally_letters(&["a-b c!"]).total(), 3);
    }

    #[test]
    fn test_seen_letters_in_order() {
        let seen: Vec<(char, u64)> = tally_letters(&["Cab", "a"]).seen().collect();
        assert_eq!(seen, vec![('a', 2), ('b', 1), ('c', 1)]);
    }

    #[test]
    fn test_count_ignores_non_letters() {
        assert_eq!(LetterTally::new().add_str("zz9").count('9'), 0);
    }
}
