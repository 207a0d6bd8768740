//! Histogram tests.

use jokerpoker::{Histogram, Rank, Suit};

#[test]
fn counts_skip_wildcards() {
    let hist: Histogram<Suit, 4> =
        Histogram::new([Suit::Heart, Suit::Wildcard, Suit::Heart, Suit::Club]);

    assert_eq!(hist.count(Suit::Heart), 2);
    assert_eq!(hist.count(Suit::Wildcard), 0);
    assert_eq!(hist.distinct(), 2);
    assert_eq!(hist.zeros(), 2);
    assert_eq!(hist.max(), 2);
    assert!(hist.contains(1));
    assert_eq!(
        hist.iter().collect::<Vec<_>>(),
        [
            (Suit::Spade, 0),
            (Suit::Heart, 2),
            (Suit::Club, 1),
            (Suit::Diamond, 0)
        ]
    );
}

#[test]
fn windows_slide_over_ranks_in_order() {
    let hist: Histogram<Rank, 13> = Histogram::new([Rank::Ace, Rank::King, Rank::Ten, Rank::Two]);
    let windows = hist.windows(5);

    assert_eq!(windows.len(), 9);
    assert_eq!(windows.collect::<Vec<_>>(), [3, 2, 1, 1, 1, 0, 0, 0, 1]);
    assert_eq!(hist.windows(0).count(), 0);
    assert_eq!(hist.windows(14).count(), 0);
    assert_eq!(hist.sum_over(&Rank::ROYAL), 3);
}

#[test]
fn large_counts_saturate_and_sums_widen() {
    let hist: Histogram<Rank, 13> = Histogram::new(
        std::iter::repeat_n(Rank::Ace, 300).chain(std::iter::repeat_n(Rank::King, 255)),
    );

    assert_eq!(hist.count(Rank::Ace), u8::MAX);
    assert_eq!(hist.count(Rank::King), u8::MAX);
    assert_eq!(hist.max(), u8::MAX);
    assert_eq!(hist.total(), 510);
    assert_eq!(hist.sum_over(&Rank::ROYAL), 510);
    assert_eq!(hist.windows(2).next(), Some(510));
    assert_eq!(hist.windows(2).nth(1), Some(255));
}
