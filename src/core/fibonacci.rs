/// Lazy Fibonacci sequence seeded with `(1, 1)`.
///
/// Every step yields the sum of the current pair and then slides the pair
/// forward, so the default sequence is `2, 3, 5, 8, 13, ...`. The iterator
/// ends at the first sum that does not fit in a `u64` and stays ended.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    state: Option<(u64, u64)>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::starting_at(1, 1)
    }

    pub fn starting_at(first: u64, second: u64) -> Self {
        Self {
            state: Some((first, second)),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let (i, j) = self.state?;
        match i.checked_add(j) {
            Some(k) => {
                self.state = Some((j, k));
                Some(k)
            }
            None => {
                tracing::debug!("Fibonacci sequence exhausted after {}", j);
                self.state = None;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Fibonacci {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_values() {
        let values: Vec<u64> = Fibonacci::new().take(6).collect();
        assert_eq!(values, vec![2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn test_next_on_each_call() {
        let mut fib_gen = Fibonacci::new();
        assert_eq!(fib_gen.next(), Some(2));
        assert_eq!(fib_gen.next(), Some(3));
        assert_eq!(fib_gen.next(), Some(5));
    }

    #[test]
    fn test_custom_seed() {
        let values: Vec<u64> = Fibonacci::starting_at(0, 1).take(5).collect();
        assert_eq!(values, vec![1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_stops_before_overflow() {
        let mut fib_gen = Fibonacci::new();
        let count = fib_gen.by_ref().count();
        // F(3)..=F(93) fit in u64, F(94) does not.
        assert_eq!(count, 91);
        assert_eq!(fib_gen.next(), None);
        assert_eq!(fib_gen.next(), None);
    }
}
