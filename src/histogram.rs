//! Frequency histograms over closed card enumerations.

use core::iter::FusedIterator;
use core::marker::PhantomData;

/// A closed enumeration with `N` ordinary members and one wildcard member.
///
/// Each ordinary member owns one histogram slot; the wildcard owns none.
pub trait Ordinary<const N: usize>: Copy {
    /// The ordinary members in declaration order.
    const MEMBERS: [Self; N];

    /// Returns the slot of the member, or `None` for the wildcard.
    fn slot(self) -> Option<usize>;
}

/// Counts of every ordinary member of `T`.
///
/// Members that never occur keep a count of zero. Wildcard members are left
/// out of the keyspace entirely. A single count saturates at [`u8::MAX`];
/// sums over several members are widened to `u32`.
///
/// # Example
///
/// ```
/// use jokerpoker::{Histogram, Rank};
///
/// let hist: Histogram<Rank, 13> = Histogram::new([Rank::Ace, Rank::Ace, Rank::Wildcard]);
/// assert_eq!(hist.count(Rank::Ace), 2);
/// assert_eq!(hist.count(Rank::King), 0);
/// assert_eq!(hist.total(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Histogram<T, const N: usize> {
    counts: [u8; N],
    marker: PhantomData<T>,
}

impl<T: Ordinary<N>, const N: usize> Histogram<T, N> {
    /// Builds a histogram from the given members, skipping wildcards.
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut counts = [0u8; N];
        for slot in members.into_iter().filter_map(|member| member.slot()) {
            counts[slot] = counts[slot].saturating_add(1);
        }

        Self {
            counts,
            marker: PhantomData,
        }
    }

    /// Returns the count of a member. The wildcard always counts zero.
    #[must_use]
    pub fn count(&self, member: T) -> u8 {
        member.slot().map_or(0, |slot| self.counts[slot])
    }

    /// Returns whether some member has exactly `count` occurrences.
    #[must_use]
    pub fn contains(&self, count: u8) -> bool {
        self.counts.contains(&count)
    }

    /// Returns the number of members that never occur.
    #[must_use]
    pub fn zeros(&self) -> usize {
        self.counts.iter().filter(|&&count| count == 0).count()
    }

    /// Returns the number of members that occur at least once.
    #[must_use]
    pub fn distinct(&self) -> usize {
        N - self.zeros()
    }

    /// Returns the highest count.
    #[must_use]
    pub fn max(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&count| u32::from(count)).sum()
    }

    /// Returns the summed counts of the given members.
    #[must_use]
    pub fn sum_over(&self, members: &[T]) -> u32 {
        members
            .iter()
            .map(|&member| u32::from(self.count(member)))
            .sum()
    }

    /// Returns the summed counts of every run of `width` consecutive
    /// members, in declaration order, without wrapping around.
    #[must_use]
    pub fn windows(&self, width: usize) -> Windows<'_> {
        Windows {
            counts: &self.counts,
            width,
            start: 0,
            sum: 0,
        }
    }

    /// Iterates over every ordinary member with its count.
    pub fn iter(&self) -> impl Iterator<Item = (T, u8)> + '_ {
        T::MEMBERS.into_iter().zip(self.counts.iter().copied())
    }
}

/// Sliding window sums over a histogram, see [`Histogram::windows`].
///
/// Each step subtracts the member leaving the window and adds the member
/// entering it.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    counts: &'a [u8],
    width: usize,
    start: usize,
    sum: u32,
}

impl Iterator for Windows<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let end = self.start + self.width;
        if self.width == 0 || end > self.counts.len() {
            return None;
        }

        self.sum = if self.start == 0 {
            self.counts[..end].iter().map(|&count| u32::from(count)).sum()
        } else {
            self.sum + u32::from(self.counts[end - 1]) - u32::from(self.counts[self.start - 1])
        };
        self.start += 1;

        Some(self.sum)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.width == 0 {
            0
        } else {
            (self.counts.len() + 1).saturating_sub(self.start + self.width)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}

impl FusedIterator for Windows<'_> {}
