use boltzgrid::core::game::{EnergyGame, Start};
use boltzgrid::core::grid::{SITES, TOTAL_QUANTA};

#[test]
fn total_is_conserved_for_all_modes_and_run_lengths() {
    for &start in &[Start::Uniform, Start::Skewed] {
        for &throws in &[0u64, 5, 25, 100, 10_000] {
            let tally = EnergyGame::new(throws, start).play_seeded(7);
            assert_eq!(
                tally.weighted_total(),
                TOTAL_QUANTA,
                "weighted total drifted: start={start}, throws={throws}"
            );
            assert_eq!(
                tally.sites(),
                SITES,
                "site count drifted: start={start}, throws={throws}"
            );
        }
    }
}

#[test]
fn tally_levels_are_contiguous_from_zero() {
    for &start in &[Start::Uniform, Start::Skewed] {
        let tally = EnergyGame::new(10_000, start).play_seeded(42);
        assert_eq!(tally.levels.len(), tally.counts.len());
        for (i, &level) in tally.levels.iter().enumerate() {
            assert_eq!(level as usize, i, "gap in tally levels at index {i}");
        }
    }
}

#[test]
fn different_seeds_still_satisfy_the_invariants() {
    for seed in 0..20 {
        let tally = EnergyGame::new(1_000, Start::Skewed).play_seeded(seed);
        assert_eq!(tally.weighted_total(), TOTAL_QUANTA);
        assert_eq!(tally.sites(), SITES);
    }
}
