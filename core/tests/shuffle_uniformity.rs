use concentration_core::*;

const DEALS: u64 = 8000;

/// Pearson chi-squared statistic of `observed` against a flat distribution
fn chi_squared(observed: &[u64]) -> f64 {
    let total: u64 = observed.iter().sum();
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn every_card_lands_anywhere_with_equal_odds() {
    let board_size = BoardSize::Small;
    let cards = board_size.cards();
    // positions[id][position]
    let mut positions = vec![vec![0u64; cards]; cards];

    for seed in 0..DEALS {
        let deck = RandomDeckGenerator::new(seed).generate(board_size);
        for (position, card) in deck.iter().enumerate() {
            positions[usize::from(card.id.0)][position] += 1;
        }
    }

    // 15 degrees of freedom, 60 is far beyond the 0.0001 critical value
    for (id, row) in positions.iter().enumerate() {
        let statistic = chi_squared(row);
        assert!(statistic < 60.0, "card {} is biased, chi2 = {:.1}", id, statistic);
    }
}

#[test]
fn first_position_is_not_biased_towards_low_ids() {
    let board_size = BoardSize::Large;
    let mut sum = 0u64;

    for seed in 0..DEALS {
        let deck = RandomDeckGenerator::new(seed).generate(board_size);
        sum += u64::from(deck[0].id.0);
    }

    // uniform over 0..36 has mean 17.5 and standard error ~0.12 for this many deals
    let mean = sum as f64 / DEALS as f64;
    assert!((mean - 17.5).abs() < 1.0, "mean id at position 0 is {:.2}", mean);
}
