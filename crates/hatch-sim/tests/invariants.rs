//! Property tests: arbitrary sequences of care and decay keep every stat
//! inside its bounds and never move the growth stage backward.

use chrono::{DateTime, Duration, TimeZone, Utc};
use hatch_core::{Character, GrowthStage, MAX_CARE_STAT};
use hatch_sim::{CharacterSimulator, SeededRandom, SimConfig};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Feed,
    Clean,
    Play(u32),
    Decay,
    Evolve,
    Wait(i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Feed),
        Just(Op::Clean),
        (0u32..20).prop_map(Op::Play),
        Just(Op::Decay),
        Just(Op::Evolve),
        (1i64..72).prop_map(Op::Wait),
    ]
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap()
}

fn check(c: &Character) -> Result<(), TestCaseError> {
    prop_assert!(c.max_hit_point >= 1);
    prop_assert!(c.hit_point <= c.max_hit_point);
    prop_assert!(c.living_environment <= MAX_CARE_STAT);
    prop_assert!(c.favorability <= MAX_CARE_STAT);
    prop_assert!(c.validate().is_ok());
    Ok(())
}

proptest! {
    #[test]
    fn operations_preserve_invariants(seed in any::<u64>(), ops in prop::collection::vec(op(), 1..80)) {
        let mut sim = CharacterSimulator::new(SimConfig::default(), SeededRandom::from_seed(seed));
        let mut now = start();
        let mut last_update = now;
        let mut c = sim.create_character(now);
        let death_at = c.death_at;
        let mut stage = c.growth_stage;

        for op in ops {
            c = match op {
                Op::Feed => sim.feed(c, now),
                Op::Clean => sim.clean_toilet(c),
                Op::Play(amount) => sim.increase_favorability(c, amount),
                Op::Decay => {
                    let next = sim.apply_elapsed_decay(c, now, last_update);
                    last_update = now;
                    next
                }
                Op::Evolve => sim.challenge_evolution(c, now),
                Op::Wait(hours) => {
                    now += Duration::hours(hours);
                    c
                }
            };
            check(&c)?;
            prop_assert!(c.growth_stage >= stage, "stage went from {stage} to {}", c.growth_stage);
            prop_assert_eq!(c.death_at, death_at);
            stage = c.growth_stage;
        }
    }

    #[test]
    fn death_is_hit_point_zero_or_past_deadline(
        hit_point in 0u32..=10,
        offset_secs in -100_000i64..100_000,
    ) {
        let sim = CharacterSimulator::new(SimConfig::default(), SeededRandom::from_seed(0));
        let mut c = Character::hatch(start(), start() + Duration::days(20));
        c.hit_point = hit_point;
        let now = c.death_at + Duration::seconds(offset_secs);
        prop_assert_eq!(sim.is_dead(&c, now), hit_point == 0 || offset_secs >= 0);
    }

    #[test]
    fn maturity_is_terminal(seed in any::<u64>(), days_left in -5i64..40, favorability in 0u32..=10) {
        let mut sim = CharacterSimulator::new(SimConfig::default(), SeededRandom::from_seed(seed));
        let mut c = Character::hatch(start() - Duration::days(40), start() + Duration::days(days_left));
        c.growth_stage = GrowthStage::Maturity;
        c.favorability = favorability;
        let c = sim.challenge_evolution(c, start());
        prop_assert_eq!(c.growth_stage, GrowthStage::Maturity);
        check(&c)?;
    }
}
