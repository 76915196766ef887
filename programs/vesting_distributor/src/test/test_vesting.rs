use crate::constants::{BPS_DENOMINATOR, REFERENCE_SCHEDULES, SECONDS_PER_DAY};
use crate::error::VestingDistributorError;
use crate::state::{CategorySchedule, VestingDistributor};
use crate::utils::{claimable_amount, vested_amount, vested_fraction_bps};

const DAY: i64 = SECONDS_PER_DAY;

fn reference_distributor() -> VestingDistributor {
    let mut distributor = VestingDistributor::default();
    distributor.category_count = REFERENCE_SCHEDULES.len() as u8;
    distributor.schedules[..REFERENCE_SCHEDULES.len()].copy_from_slice(&REFERENCE_SCHEDULES);
    distributor
}

#[cfg(test)]
mod fraction_tests {
    use super::*;

    #[test]
    fn cliff_only_before_first_step() {
        for schedule in REFERENCE_SCHEDULES.iter() {
            // At TGE itself and anywhere inside the first step, only the
            // cliff fraction is vested
            assert_eq!(
                vested_fraction_bps(schedule, 0).unwrap(),
                schedule.cliff_bps as u64
            );
            assert_eq!(
                vested_fraction_bps(schedule, schedule.step_duration - 1).unwrap(),
                schedule.cliff_bps as u64
            );
            // The first full step unlocks one step fraction
            assert_eq!(
                vested_fraction_bps(schedule, schedule.step_duration).unwrap(),
                (schedule.cliff_bps + schedule.step_bps) as u64
            );
        }
    }

    #[test]
    fn monotonic_and_bounded() {
        for schedule in REFERENCE_SCHEDULES.iter() {
            let mut previous = 0u64;
            for day in 0..1000 {
                let bps = vested_fraction_bps(schedule, day * DAY).unwrap();
                assert!(bps >= previous, "fraction decreased at day {}", day);
                assert!(bps >= schedule.cliff_bps as u64);
                assert!(bps <= BPS_DENOMINATOR);
                previous = bps;
            }
        }
    }

    #[test]
    fn saturates_at_full_vesting() {
        // Category 1 fully vests after 15 steps: 1000 + 600 * 15 = 10000
        let schedule = &REFERENCE_SCHEDULES[0];
        assert_eq!(vested_fraction_bps(schedule, 15 * 30 * DAY).unwrap(), 10_000);
        assert_eq!(vested_fraction_bps(schedule, 16 * 30 * DAY).unwrap(), 10_000);
        // Far-future timestamps stay capped
        assert_eq!(vested_fraction_bps(schedule, i64::MAX).unwrap(), 10_000);
    }

    #[test]
    fn negative_elapsed_rejected() {
        let schedule = &REFERENCE_SCHEDULES[0];
        assert_eq!(
            vested_fraction_bps(schedule, -1).unwrap_err(),
            VestingDistributorError::TgeNotStarted.into()
        );
    }

    #[test]
    fn zero_step_duration_rejected() {
        let schedule = CategorySchedule {
            cliff_bps: 1000,
            step_bps: 600,
            step_duration: 0,
        };
        assert_eq!(
            vested_fraction_bps(&schedule, 0).unwrap_err(),
            VestingDistributorError::InvalidScheduleTable.into()
        );
    }
}

#[cfg(test)]
mod amount_tests {
    use super::*;

    #[test]
    fn truncates_toward_pool() {
        // floor(9999 * 1 / 10000) = 0
        assert_eq!(vested_amount(9999, 1).unwrap(), 0);
        // floor(10001 * 5000 / 10000) = 5000
        assert_eq!(vested_amount(10_001, 5000).unwrap(), 5000);
        assert_eq!(vested_amount(10_000, 10_000).unwrap(), 10_000);
    }

    #[test]
    fn no_overflow_at_u64_max() {
        // The u128 interim keeps amount * bps from overflowing
        assert_eq!(vested_amount(u64::MAX, 10_000).unwrap(), u64::MAX);
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;

    #[test]
    fn configured_categories_resolve() {
        let distributor = reference_distributor();
        for category in 1..=REFERENCE_SCHEDULES.len() as u8 {
            let schedule = distributor.schedule_for(category).unwrap();
            assert_eq!(*schedule, REFERENCE_SCHEDULES[category as usize - 1]);
        }
    }

    #[test]
    fn unconfigured_categories_rejected() {
        let distributor = reference_distributor();
        // Category 0 is reserved, 6 and beyond are unconfigured
        assert_eq!(
            distributor.schedule_for(0).unwrap_err(),
            VestingDistributorError::InvalidCategory.into()
        );
        assert_eq!(
            distributor.schedule_for(6).unwrap_err(),
            VestingDistributorError::InvalidCategory.into()
        );
        assert_eq!(
            distributor.schedule_for(u8::MAX).unwrap_err(),
            VestingDistributorError::InvalidCategory.into()
        );
    }
}

#[cfg(test)]
mod construction_tests {
    use super::*;
    use crate::constants::MAX_CATEGORIES;
    use crate::utils::validate_distributor_config;

    const NOW: i64 = 1_700_000_000;
    const DEPOSIT: u64 = 1_000_000;
    const ROOT: [u8; 32] = [7; 32];

    #[test]
    fn accepts_reference_configuration() {
        validate_distributor_config(DEPOSIT, &ROOT, NOW + DAY, NOW, &REFERENCE_SCHEDULES)
            .unwrap();
    }

    #[test]
    fn rejects_zero_deposit() {
        assert_eq!(
            validate_distributor_config(0, &ROOT, NOW + DAY, NOW, &REFERENCE_SCHEDULES)
                .unwrap_err(),
            VestingDistributorError::InvalidAmount.into()
        );
    }

    #[test]
    fn rejects_zero_merkle_root() {
        assert_eq!(
            validate_distributor_config(DEPOSIT, &[0; 32], NOW + DAY, NOW, &REFERENCE_SCHEDULES)
                .unwrap_err(),
            VestingDistributorError::ZeroMerkleRoot.into()
        );
    }

    #[test]
    fn rejects_tge_not_strictly_in_future() {
        // TGE equal to configuration time is rejected, not just past TGE
        for tge in [NOW, NOW - 1, NOW - DAY] {
            assert_eq!(
                validate_distributor_config(DEPOSIT, &ROOT, tge, NOW, &REFERENCE_SCHEDULES)
                    .unwrap_err(),
                VestingDistributorError::InvalidTgeTimestamp.into()
            );
        }
    }

    #[test]
    fn rejects_empty_schedule_table() {
        assert_eq!(
            validate_distributor_config(DEPOSIT, &ROOT, NOW + DAY, NOW, &[]).unwrap_err(),
            VestingDistributorError::InvalidScheduleTable.into()
        );
    }

    #[test]
    fn rejects_oversized_schedule_table() {
        let schedules = vec![REFERENCE_SCHEDULES[0]; MAX_CATEGORIES + 1];
        assert_eq!(
            validate_distributor_config(DEPOSIT, &ROOT, NOW + DAY, NOW, &schedules)
                .unwrap_err(),
            VestingDistributorError::InvalidScheduleTable.into()
        );
    }

    #[test]
    fn rejects_out_of_range_schedule_entries() {
        let overweight_cliff = [CategorySchedule {
            cliff_bps: 10_001,
            step_bps: 600,
            step_duration: 30 * DAY,
        }];
        let overweight_step = [CategorySchedule {
            cliff_bps: 1000,
            step_bps: 10_001,
            step_duration: 30 * DAY,
        }];
        let stalled_step = [CategorySchedule {
            cliff_bps: 1000,
            step_bps: 600,
            step_duration: 0,
        }];

        for schedules in [&overweight_cliff, &overweight_step, &stalled_step] {
            assert_eq!(
                validate_distributor_config(DEPOSIT, &ROOT, NOW + DAY, NOW, schedules)
                    .unwrap_err(),
                VestingDistributorError::InvalidScheduleTable.into()
            );
        }
    }
}

#[cfg(test)]
mod claim_math_tests {
    use super::*;

    #[test]
    fn scenario_category_1() {
        // Category 1, allocation 10000: 10% cliff, 6% per 30 days
        let schedule = &REFERENCE_SCHEDULES[0];
        let amount = 10_000u64;
        let mut claimed = 0u64;

        // Claim at TGE: the cliff
        let delta = claimable_amount(schedule, amount, 0, claimed).unwrap();
        assert_eq!(delta, 1000);
        claimed += delta;

        // Claim one day into step 1: one step fraction
        let delta = claimable_amount(schedule, amount, 30 * DAY + DAY, claimed).unwrap();
        assert_eq!(delta, 600);
        claimed += delta;
        assert_eq!(claimed, 1600);

        // Claim at 15 steps: fully vested, remainder drawn down
        let delta = claimable_amount(schedule, amount, 15 * 30 * DAY, claimed).unwrap();
        claimed += delta;
        assert_eq!(claimed, amount);

        // Any further claim fails, even arbitrarily far in the future
        assert_eq!(
            claimable_amount(schedule, amount, 100 * 30 * DAY, claimed).unwrap_err(),
            VestingDistributorError::NothingToClaim.into()
        );
    }

    #[test]
    fn scenario_category_5() {
        // Category 5, allocation 100000: 4.17% cliff, 4.17% per 30 days
        let schedule = &REFERENCE_SCHEDULES[4];
        let amount = 100_000u64;

        // At 22 elapsed steps the cumulative claim is 95910
        let claimed = claimable_amount(schedule, amount, 22 * 30 * DAY, 0).unwrap();
        assert_eq!(claimed, 95_910);

        // The 23rd step saturates at 10000 bps and yields the remainder
        let delta = claimable_amount(schedule, amount, 23 * 30 * DAY, claimed).unwrap();
        assert_eq!(delta, 4090);
        assert_eq!(claimed + delta, amount);

        assert_eq!(
            claimable_amount(schedule, amount, 24 * 30 * DAY, amount).unwrap_err(),
            VestingDistributorError::NothingToClaim.into()
        );
    }

    #[test]
    fn repeated_claim_without_time_advance_fails() {
        let schedule = &REFERENCE_SCHEDULES[1];
        let amount = 15_000u64;
        let elapsed = 2 * 30 * DAY;

        let delta = claimable_amount(schedule, amount, elapsed, 0).unwrap();
        assert!(delta > 0);

        // Immediately re-claiming at the same time yields nothing
        assert_eq!(
            claimable_amount(schedule, amount, elapsed, delta).unwrap_err(),
            VestingDistributorError::NothingToClaim.into()
        );
    }

    #[test]
    fn conservation_over_full_schedule() {
        // Claiming every step, the cumulative total never exceeds the
        // allocation and lands exactly on it once the fraction saturates
        for schedule in REFERENCE_SCHEDULES.iter() {
            let amount = 1_000_003u64; // deliberately not bps-aligned
            let mut claimed = 0u64;

            for step in 0..400i64 {
                let elapsed = step * schedule.step_duration;
                if let Ok(delta) = claimable_amount(schedule, amount, elapsed, claimed) {
                    claimed += delta;
                }
                assert!(claimed <= amount);
            }

            assert_eq!(claimed, amount);
        }
    }

    #[test]
    fn claim_before_tge_fails() {
        let schedule = &REFERENCE_SCHEDULES[0];
        assert_eq!(
            claimable_amount(schedule, 10_000, -DAY, 0).unwrap_err(),
            VestingDistributorError::TgeNotStarted.into()
        );
    }
}
