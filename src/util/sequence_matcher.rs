//! Ratcliff/Obershelp sequence matching over characters.
//!
//! The matcher finds the longest contiguous matching block, then recurses on
//! the pieces to its left and right. The similarity ratio is `2 * M / T`,
//! where `M` is the total length of all matching blocks and `T` the combined
//! length of both strings.
//!
//! When the second string is at least 200 characters long, characters that
//! occur more than `len / 100 + 1` times in it are "popular" and are never
//! used to seed a match. They can still extend a match that was seeded by
//! another character.
//!
//! # Examples
//!
//! ```
//! use talentscout::util::sequence_matcher::{SequenceMatcher, ratio};
//!
//! assert_eq!(ratio("abcd", "bcde"), 0.75);
//!
//! let matcher = SequenceMatcher::new("qabxcd", "abycdf");
//! assert_eq!(matcher.matching_blocks(), vec![(1, 0, 2), (4, 3, 2)]);
//! ```

use ahash::{AHashMap, AHashSet};

/// Minimum length of the second sequence before popular characters are
/// excluded from seeding matches.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block `(i, j, size)`: `a[i..i + size] == b[j..j + size]`.
pub type MatchingBlock = (usize, usize, usize);

/// Sequence matcher comparing two strings character by character.
#[derive(Clone, Debug)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each non-popular character in `b`
    b2j: AHashMap<char, Vec<usize>>,
    popular: AHashSet<char>,
}

impl SequenceMatcher {
    /// Create a matcher for the pair `(a, b)`.
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: AHashMap<char, Vec<usize>> = AHashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        let mut popular = AHashSet::new();
        if b.len() >= AUTOJUNK_MIN_LEN {
            let threshold = b.len() / 100 + 1;
            b2j.retain(|&c, positions| {
                if positions.len() > threshold {
                    popular.insert(c);
                    false
                } else {
                    true
                }
            });
        }

        SequenceMatcher { a, b, b2j, popular }
    }

    /// Characters of `b` excluded from seeding matches.
    pub fn popular(&self) -> &AHashSet<char> {
        &self.popular
    }

    /// Find the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a`, and then
    /// earliest in `b`, is returned. A block of size 0 means no match.
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the longest match ending at a[i - 1] and b[j]
        let mut j2len: AHashMap<usize, usize> = AHashMap::new();
        for i in alo..ahi {
            let mut new_j2len = AHashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Popular characters never seed a match but may extend one.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }

    /// All matching blocks, sorted, with adjacent blocks merged.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            blocks.push((i, j, k));
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }
        blocks.sort_unstable();

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());
        for (i, j, k) in blocks {
            match merged.last_mut() {
                Some((i1, j1, k1)) if *i1 + *k1 == i && *j1 + *k1 == j => *k1 += k,
                _ => merged.push((i, j, k)),
            }
        }
        merged
    }

    /// Similarity ratio in `[0, 1]`; two empty strings are identical.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|&(_, _, k)| k).sum();
        2.0 * matches as f64 / total as f64
    }
}

/// Similarity ratio of two strings.
pub fn ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}
