//! Braid words and the weave algebra.
//!
//! A weave is a compact braid on three strands: a list of signed powers that
//! alternate between σ₁ and σ₂, plus an optional extra exchange at either end
//! selected by the strand the weave starts or ends on (±1 → σ₁, ±3 → σ₂).
//! [`describe`] expands it into unit steps and tracks which strand position
//! the woven strand occupies before each step. [`uncouple`] then replaces the
//! woven strand by a group of physical strands, and [`uncouple_all`] does the
//! same for a fixed four-anyon layout.

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::{BraidError, Result};

/// A sequence of generator applications, first step first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WordParts")]
pub struct BraidWord {
    sigma: Vec<usize>,
    power: Vec<i32>,
}

#[derive(Deserialize)]
struct WordParts {
    sigma: Vec<usize>,
    power: Vec<i32>,
}

impl TryFrom<WordParts> for BraidWord {
    type Error = BraidError;

    fn try_from(parts: WordParts) -> Result<Self> {
        BraidWord::new(parts.sigma, parts.power)
    }
}

impl BraidWord {
    pub fn new(sigma: Vec<usize>, power: Vec<i32>) -> Result<Self> {
        if sigma.len() != power.len() {
            return Err(BraidError::WordLengthMismatch { sigma: sigma.len(), power: power.len() });
        }
        Ok(Self { sigma, power })
    }

    /// Generator indices, in application order.
    pub fn sigma(&self) -> &[usize] {
        &self.sigma
    }

    pub fn power(&self) -> &[i32] {
        &self.power
    }

    pub fn len(&self) -> usize {
        self.sigma.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sigma.is_empty()
    }

    /// (index, power) pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.sigma.iter().copied().zip(self.power.iter().copied())
    }

    /// Largest generator index used, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.sigma.iter().copied().max()
    }

    /// `self` followed by `other`.
    pub fn concat(&self, other: &BraidWord) -> BraidWord {
        self.iter().chain(other.iter()).collect()
    }

    /// The same word acting `by` strands further right.
    pub fn shifted(&self, by: usize) -> BraidWord {
        self.iter().map(|(index, power)| (index + by, power)).collect()
    }

    /// The inverse word: reversed order, every power negated.
    pub fn time_mirror(&self) -> BraidWord {
        BraidWord {
            sigma: self.sigma.iter().rev().copied().collect(),
            power: self.power.iter().rev().map(|p| -p).collect(),
        }
    }
}

impl FromIterator<(usize, i32)> for BraidWord {
    fn from_iter<T: IntoIterator<Item = (usize, i32)>>(iter: T) -> Self {
        let (sigma, power) = iter.into_iter().unzip();
        Self { sigma, power }
    }
}

/// Braid-word inverse.
pub fn time_mirror(word: &BraidWord) -> BraidWord {
    word.time_mirror()
}

/// A described weave: the word plus the position of the woven strand.
///
/// `strand_rank[k]` is the position before step k; the extra last entry is
/// the final strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribedWeave {
    pub word: BraidWord,
    pub strand_rank: Vec<usize>,
}

impl DescribedWeave {
    pub fn time_mirror(&self) -> DescribedWeave {
        DescribedWeave {
            word: self.word.time_mirror(),
            strand_rank: self.strand_rank.iter().rev().copied().collect(),
        }
    }
}

fn boundary_step(strand: i32) -> Option<(usize, i32)> {
    let sign = if strand > 0 { 1 } else { -1 };
    match strand.abs() {
        1 => Some((1, sign)),
        3 => Some((2, sign)),
        _ => None,
    }
}

/// Expand a weave into unit steps over σ₁ and σ₂.
///
/// `weave` alternates generators starting at `s0`; a zero power still
/// switches the generator.
pub fn describe(weave: &[i32], s0: usize, init_strand: i32, final_strand: i32) -> Result<DescribedWeave> {
    if weave.len() <= 1 {
        return Err(BraidError::MalformedWeave(format!(
            "a weave needs at least two powers, got {}",
            weave.len()
        )));
    }
    if s0 != 1 && s0 != 2 {
        return Err(BraidError::MalformedWeave(format!("weave must start on sigma_1 or sigma_2, got sigma_{}", s0)));
    }

    let mut steps: Vec<(usize, i32)> = Vec::new();
    steps.extend(boundary_step(init_strand));
    let mut current = s0;
    for &power in weave {
        let sign = if power > 0 { 1 } else { -1 };
        steps.extend(std::iter::repeat((current, sign)).take(power.unsigned_abs() as usize));
        current = 3 - current;
    }
    steps.extend(boundary_step(final_strand));

    let mut strand_rank = Vec::with_capacity(steps.len() + 1);
    let mut rank = init_strand.unsigned_abs() as usize;
    for &(sigma, _) in &steps {
        strand_rank.push(rank);
        rank = match (rank, sigma) {
            (1 | 3, _) => 2,
            (_, 1) => 1,
            _ => 3,
        };
    }
    strand_rank.push(final_strand.unsigned_abs() as usize);

    Ok(DescribedWeave { word: steps.into_iter().collect(), strand_rank })
}

fn strand_run(rank: usize, sigma: usize, n: usize) -> Vec<usize> {
    match (rank, sigma) {
        (3, _) => (2..2 + n).collect(),
        (1, _) => (1..=n).rev().collect(),
        (_, 1) => (1..=n).collect(),
        _ => (2..=n + 1).rev().collect(),
    }
}

/// Re-express a weave with the woven strand split into `n_coupled_strands`.
///
/// Each unit step becomes a run of exchanges through the strand group,
/// chosen by where the woven strand sits; every index is then raised by
/// `rank_increment`. With `inv` the described weave is mirrored first.
pub fn uncouple(
    weave: &[i32],
    s0: usize,
    init_strand: i32,
    final_strand: i32,
    rank_increment: usize,
    n_coupled_strands: usize,
    inv: bool,
) -> Result<BraidWord> {
    if n_coupled_strands == 0 {
        return Err(BraidError::MalformedWeave("cannot split a strand into zero strands".into()));
    }
    let mut described = describe(weave, s0, init_strand, final_strand)?;
    if inv {
        described = described.time_mirror();
    }

    let mut steps = Vec::new();
    for (k, (sigma, power)) in described.word.iter().enumerate() {
        let rank = described.strand_rank[k];
        for index in strand_run(rank, sigma, n_coupled_strands) {
            steps.push((index + rank_increment, power));
        }
    }
    Ok(steps.into_iter().collect())
}

/// Four-exchange expansion of every step: σ₁ → σ₂σ₁σ₃σ₂, σ₂ → σ₄σ₃σ₅σ₄.
pub fn uncouple_all(
    weave: &[i32],
    s0: usize,
    init_strand: i32,
    final_strand: i32,
    rank_increment: usize,
    inv: bool,
) -> Result<BraidWord> {
    let mut described = describe(weave, s0, init_strand, final_strand)?;
    if inv {
        described = described.time_mirror();
    }
    expand_pairs(&described.word, rank_increment)
}

fn expand_pairs(word: &BraidWord, rank_increment: usize) -> Result<BraidWord> {
    let mut steps = Vec::with_capacity(4 * word.len());
    for (sigma, power) in word.iter() {
        let run = match sigma {
            1 => [2, 1, 3, 2],
            2 => [4, 3, 5, 4],
            other => {
                error!("uncouple_all met sigma_{} in a two-generator weave", other);
                return Err(BraidError::UnexpectedGenerator(other));
            }
        };
        steps.extend(run.iter().map(|&index| (index + rank_increment, power)));
    }
    Ok(steps.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(sigma: &[usize], power: &[i32]) -> BraidWord {
        BraidWord::new(sigma.to_vec(), power.to_vec()).unwrap()
    }

    #[test]
    fn test_describe() {
        let d = describe(&[2, 2], 1, 1, 1).unwrap();
        assert_eq!(d.word.sigma(), &[1, 1, 1, 2, 2, 1]);
        assert_eq!(d.word.power(), &[1; 6]);
        assert_eq!(d.strand_rank, vec![1, 2, 1, 2, 3, 2, 1]);

        let d = describe(&[2, 2], 1, 1, 3).unwrap();
        assert_eq!(d.word.sigma(), &[1, 1, 1, 2, 2, 2]);
        assert_eq!(d.word.power(), &[1; 6]);
        assert_eq!(d.strand_rank, vec![1, 2, 1, 2, 3, 2, 3]);

        let d = describe(&[2, 2], 1, -3, 3).unwrap();
        assert_eq!(d.word.sigma(), &[2, 1, 1, 2, 2, 2]);
        assert_eq!(d.word.power(), &[-1, 1, 1, 1, 1, 1]);
        assert_eq!(d.strand_rank, vec![3, 2, 1, 2, 3, 2, 3]);
    }

    #[test]
    fn test_describe_without_boundary_step() {
        assert_eq!(describe(&[2, 2], 1, 1, 2).unwrap(), describe(&[2, 2], 1, 1, -2).unwrap());
        let d = describe(&[2, 2], 1, 1, 2).unwrap();
        assert_eq!(d.word.len(), 5);
        assert_eq!(d.strand_rank.last(), Some(&2));
    }

    #[test]
    fn test_describe_zero_and_negative_powers() {
        let d = describe(&[2, -1, 0, 3], 2, -1, -3).unwrap();
        assert_eq!(d.word.sigma(), &[1, 2, 2, 1, 1, 1, 1, 2]);
        assert_eq!(d.word.power(), &[-1, 1, 1, -1, 1, 1, 1, -1]);
        assert_eq!(d.strand_rank, vec![1, 2, 3, 2, 1, 2, 1, 2, 3]);
    }

    #[test]
    fn test_describe_rejects_malformed() {
        assert!(matches!(describe(&[2], 1, 1, 1), Err(BraidError::MalformedWeave(_))));
        assert!(matches!(describe(&[], 1, 1, 1), Err(BraidError::MalformedWeave(_))));
        assert!(matches!(describe(&[2, 2], 3, 1, 1), Err(BraidError::MalformedWeave(_))));
        assert!(matches!(uncouple(&[2, 2], 1, 1, 1, 0, 0, false), Err(BraidError::MalformedWeave(_))));
    }

    #[test]
    fn test_uncouple_two_strands() {
        let w = uncouple(&[2, 2], 1, 1, 1, 0, 2, false).unwrap();
        assert_eq!(w, word(&[2, 1, 1, 2, 2, 1, 3, 2, 2, 3, 1, 2], &[1; 12]));

        let w = uncouple(&[2, 2], 1, 1, 3, 0, 2, false).unwrap();
        assert_eq!(w, word(&[2, 1, 1, 2, 2, 1, 3, 2, 2, 3, 3, 2], &[1; 12]));

        let w = uncouple(&[2, 2], 1, -3, 3, 0, 2, false).unwrap();
        let mut power = vec![-1, -1];
        power.extend([1; 10]);
        assert_eq!(w, word(&[2, 3, 1, 2, 2, 1, 3, 2, 2, 3, 3, 2], &power));

        let w = uncouple(&[2, 2], 1, 1, 2, 0, 2, false).unwrap();
        assert_eq!(w, word(&[2, 1, 1, 2, 2, 1, 3, 2, 2, 3], &[1; 10]));
    }

    #[test]
    fn test_uncouple_rank_increment() {
        let w = uncouple(&[2, 2], 1, 1, 2, 1, 2, false).unwrap();
        assert_eq!(w, word(&[3, 2, 2, 3, 3, 2, 4, 3, 3, 4], &[1; 10]));
        assert_eq!(w, uncouple(&[2, 2], 1, 1, 2, 0, 2, false).unwrap().shifted(1));
    }

    #[test]
    fn test_uncouple_three_strands() {
        let w = uncouple(&[2, 2], 1, 1, 2, 0, 3, false).unwrap();
        assert_eq!(w, word(&[3, 2, 1, 1, 2, 3, 3, 2, 1, 4, 3, 2, 2, 3, 4], &[1; 15]));
    }

    #[test]
    fn test_uncouple_inverted() {
        let w = uncouple(&[2, 2, -2], 1, 1, 1, 0, 2, true).unwrap();
        assert_eq!(w.sigma(), &[2, 1, 1, 2, 2, 1, 3, 2, 2, 3, 1, 2, 2, 1, 1, 2]);
        assert_eq!(w.power(), &[-1, -1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1]);
    }

    #[test]
    fn test_uncouple_all() {
        let mut sigma = [2, 1, 3, 2].repeat(3);
        sigma.extend([4, 3, 5, 4].repeat(2));
        let w = uncouple_all(&[2, 2], 1, 1, 2, 0, false).unwrap();
        assert_eq!(w, word(&sigma, &[1; 20]));

        sigma.extend([2, 1, 3, 2]);
        let w = uncouple_all(&[2, 2], 1, 1, 1, 0, false).unwrap();
        assert_eq!(w, word(&sigma, &[1; 24]));

        let shifted = uncouple_all(&[2, 2], 1, 1, 1, 2, false).unwrap();
        assert_eq!(shifted, w.shifted(2));
    }

    #[test]
    fn test_uncouple_all_rejects_foreign_generator() {
        let w = word(&[1, 3], &[1, 1]);
        assert_eq!(expand_pairs(&w, 0), Err(BraidError::UnexpectedGenerator(3)));
    }

    #[test]
    fn test_time_mirror() {
        let w = word(&[1, 2, 1, 2], &[2, 2, 2, 2]);
        assert_eq!(time_mirror(&w), word(&[2, 1, 2, 1], &[-2, -2, -2, -2]));

        let w = uncouple(&[2, -1, 3], 2, -3, 1, 1, 3, false).unwrap();
        assert_eq!(time_mirror(&time_mirror(&w)), w);
        assert_eq!(time_mirror(&BraidWord::default()), BraidWord::default());
    }

    #[test]
    fn test_described_time_mirror() {
        let d = describe(&[2, 2], 1, 1, 3).unwrap();
        let m = d.time_mirror();
        assert_eq!(m.word.sigma(), &[2, 2, 2, 1, 1, 1]);
        assert_eq!(m.word.power(), &[-1; 6]);
        assert_eq!(m.strand_rank, vec![3, 2, 3, 2, 1, 2, 1]);
        assert_eq!(m.time_mirror(), d);
    }

    #[test]
    fn test_word_construction() {
        assert_eq!(
            BraidWord::new(vec![1, 2], vec![1]),
            Err(BraidError::WordLengthMismatch { sigma: 2, power: 1 })
        );
        let a = word(&[1, 2], &[1, -1]);
        let b = word(&[3], &[1]);
        let ab = a.concat(&b);
        assert_eq!(ab, word(&[1, 2, 3], &[1, -1, 1]));
        assert_eq!(ab.max_index(), Some(3));
        assert_eq!(ab.iter().collect::<Vec<_>>(), vec![(1, 1), (2, -1), (3, 1)]);
        assert!(BraidWord::default().is_empty());
        assert_eq!(BraidWord::default().max_index(), None);
    }
}
