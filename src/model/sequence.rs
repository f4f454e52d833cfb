use crate::model::hole::{ALL_HOLES, HOLES_IN_ROUND, HOLES_PER_NINE, Hole};

/// Order in which the 18 holes are played for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaySequence([Hole; HOLES_IN_ROUND]);

impl PlaySequence {
    #[must_use]
    pub fn holes(&self) -> &[Hole] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<Hole> {
        self.0.get(position).copied()
    }
}

/// Builds the circular play order from a starting hole.
///
/// The front nine always comes first, walked from `((start - 1) % 9) + 1`,
/// then the back nine walked from the matching back-nine hole. A back-nine
/// start therefore still opens on the front nine (start 14 opens on 5).
#[must_use]
pub fn play_sequence(start: Hole) -> PlaySequence {
    let s = usize::from(start.number());
    let mut holes = [start; HOLES_IN_ROUND];

    for i in 0..HOLES_PER_NINE {
        // front: ((s - 1 + i) % 9) + 1, back: ((s + 9 - 10 + i) % 9) + 10
        let offset = (s - 1 + i) % HOLES_PER_NINE;
        holes[i] = ALL_HOLES[offset];
        holes[HOLES_PER_NINE + i] = ALL_HOLES[HOLES_PER_NINE + offset];
    }

    PlaySequence(holes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(seq: &PlaySequence) -> Vec<u8> {
        seq.holes().iter().map(|h| h.number()).collect()
    }

    #[test]
    fn start_on_one_is_straight_through() {
        let seq = play_sequence(Hole::new(1).unwrap());
        assert_eq!(numbers(&seq), (1..=18).collect::<Vec<u8>>());
    }

    #[test]
    fn start_on_five_wraps_each_nine() {
        let seq = play_sequence(Hole::new(5).unwrap());
        assert_eq!(
            numbers(&seq),
            vec![5, 6, 7, 8, 9, 1, 2, 3, 4, 14, 15, 16, 17, 18, 10, 11, 12, 13]
        );
    }

    #[test]
    fn back_nine_start_still_opens_on_front() {
        let seq = play_sequence(Hole::new(14).unwrap());
        assert_eq!(seq.get(0).unwrap().number(), 5);
        assert_eq!(seq.get(9).unwrap().number(), 14);
    }

    #[test]
    fn every_start_is_a_permutation() {
        for start in Hole::all() {
            let mut got = numbers(&play_sequence(start));
            got.sort_unstable();
            assert_eq!(got, (1..=18).collect::<Vec<u8>>(), "start {start}");
        }
    }

    #[test]
    fn start_on_nine_wraps_immediately() {
        let seq = play_sequence(Hole::new(9).unwrap());
        assert_eq!(numbers(&seq)[..2], [9, 1]);
        assert_eq!(numbers(&seq)[9..11], [18, 10]);
    }
}
