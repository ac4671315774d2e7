use crate::state::{Participant, PoolState};
use crate::ContractError;

/// Fixed-point scaling factor.
///
/// All reward-per-token values are multiplied by this constant before storage
/// to preserve sub-unit precision without floating-point arithmetic.
/// 10^12 keeps `reward_rate × elapsed × PRECISION` inside `i128` for
/// 18-decimal tokens over multi-week windows.
pub const PRECISION: i128 = 1_000_000_000_000;

// ── Core reward engine ──────────────────────────────────────────────────────

/// The last instant at which rewards accrue: `min(now, period_finish)`.
pub fn last_time_reward_applicable(pool: &PoolState, now: u64) -> u64 {
    now.min(pool.period_finish)
}

/// Advance a stored reward-per-token value by `elapsed` seconds of emission.
///
/// ```text
/// Δrpt = reward_rate × elapsed_seconds × PRECISION / total_staked
/// new_rpt = stored_rpt + Δrpt
/// ```
///
/// When `total_staked` is zero we return `stored` unchanged: the emission for
/// that interval is not banked for later stakers.
pub fn compute_reward_per_token(
    stored: i128,
    reward_rate: i128,
    elapsed: u64,
    total_staked: i128,
) -> Result<i128, ContractError> {
    if total_staked <= 0 {
        return Ok(stored);
    }

    // Multiply everything first, divide once.
    let delta = reward_rate
        .checked_mul(i128::from(elapsed))
        .and_then(|v| v.checked_mul(PRECISION))
        .ok_or(ContractError::ArithmeticOverflow)?
        / total_staked;

    stored
        .checked_add(delta)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// The accumulator as of `now`, without touching `pool`.
///
/// Time before `last_update_time` (which only a misordered caller could
/// produce) counts as zero elapsed seconds.
pub fn current_reward_per_token(pool: &PoolState, now: u64) -> Result<i128, ContractError> {
    let elapsed = last_time_reward_applicable(pool, now).saturating_sub(pool.last_update_time);
    compute_reward_per_token(
        pool.reward_per_token_stored,
        pool.reward_rate,
        elapsed,
        pool.total_staked,
    )
}

/// Calculate the total rewards a participant has earned as of `now`.
///
/// ```text
/// earned = balance × (current_rpt − rpt_paid) / PRECISION + rewards_accrued
/// ```
///
/// The subtraction isolates only the accumulation since the participant's
/// last checkpoint, so earlier snapshots are never double-counted.
pub fn earned(
    pool: &PoolState,
    participant: &Participant,
    now: u64,
) -> Result<i128, ContractError> {
    let current_rpt = current_reward_per_token(pool, now)?;
    accrue(participant, current_rpt)
}

fn accrue(participant: &Participant, current_rpt: i128) -> Result<i128, ContractError> {
    let new_rewards = participant
        .balance
        .checked_mul(current_rpt.saturating_sub(participant.reward_per_token_paid))
        .ok_or(ContractError::ArithmeticOverflow)?
        / PRECISION;

    participant
        .rewards_accrued
        .checked_add(new_rewards)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Bring the pool, and optionally one participant, up to `now`.
///
/// Must run before anything changes `total_staked`, a balance or the rate.
/// Running it twice at the same timestamp changes nothing the second time.
pub fn checkpoint(
    pool: &mut PoolState,
    participant: Option<&mut Participant>,
    now: u64,
) -> Result<(), ContractError> {
    let rpt = current_reward_per_token(pool, now)?;
    pool.reward_per_token_stored = rpt;
    pool.last_update_time = last_time_reward_applicable(pool, now);

    if let Some(participant) = participant {
        participant.rewards_accrued = accrue(participant, rpt)?;
        participant.reward_per_token_paid = rpt;
    }

    Ok(())
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// These are pure-math tests with no Soroban environment dependency.

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    fn active_pool(total_staked: i128, reward_rate: i128) -> PoolState {
        PoolState {
            total_staked,
            reward_rate,
            reward_per_token_stored: 0,
            last_update_time: 1_000,
            period_finish: 2_000,
            rewards_duration: 1_000,
        }
    }

    #[test]
    fn rpt_zero_when_no_stakers() {
        let rpt = compute_reward_per_token(500, 100, 60, 0).unwrap();
        assert_eq!(rpt, 500, "RPT must not change when total_staked is zero");
    }

    #[test]
    fn rpt_accumulates_correctly() {
        // reward_rate=10 tokens/s, elapsed=100s, total_staked=1_000 tokens
        // Δrpt = 10 × 100 × PRECISION / 1_000 = PRECISION
        let rpt = compute_reward_per_token(0, 10, 100, 1_000).unwrap();
        assert_eq!(rpt, PRECISION);
    }

    #[test]
    fn rpt_overflow_is_an_error() {
        let result = compute_reward_per_token(0, i128::MAX / 2, 10, 1);
        assert_eq!(result, Err(ContractError::ArithmeticOverflow));
    }

    #[test]
    fn elapsed_is_clamped_at_period_finish() {
        let pool = active_pool(1_000, 10);
        let at_finish = current_reward_per_token(&pool, 2_000).unwrap();
        let long_after = current_reward_per_token(&pool, 9_000).unwrap();
        assert_eq!(at_finish, long_after);
        assert_eq!(at_finish, 10 * PRECISION);
    }

    #[test]
    fn time_before_last_update_counts_as_zero() {
        let pool = active_pool(1_000, 10);
        assert_eq!(current_reward_per_token(&pool, 500).unwrap(), 0);
    }

    #[test]
    fn earned_zero_when_no_new_accumulation() {
        // Snapshot equals the current accumulator: only the accrued part remains.
        let pool = active_pool(1_000, 10);
        let participant = Participant {
            balance: 500,
            reward_per_token_paid: 0,
            rewards_accrued: 50,
        };
        assert_eq!(earned(&pool, &participant, 1_000).unwrap(), 50);
    }

    #[test]
    fn earned_proportional_to_stake() {
        let pool = active_pool(4_000, 40);
        let small = Participant {
            balance: 1_000,
            ..Participant::default()
        };
        let large = Participant {
            balance: 3_000,
            ..Participant::default()
        };
        let a = earned(&pool, &small, 1_500).unwrap();
        let b = earned(&pool, &large, 1_500).unwrap();
        assert_eq!(a, 5_000);
        assert_eq!(b, 15_000);
    }

    #[test]
    fn checkpoint_is_idempotent_at_same_timestamp() {
        let mut pool = active_pool(1_000, 10);
        let mut participant = Participant {
            balance: 1_000,
            ..Participant::default()
        };

        checkpoint(&mut pool, Some(&mut participant), 1_300).unwrap();
        let (pool_once, participant_once) = (pool.clone(), participant.clone());
        checkpoint(&mut pool, Some(&mut participant), 1_300).unwrap();

        assert_eq!(pool, pool_once);
        assert_eq!(participant, participant_once);
        assert_eq!(participant.rewards_accrued, 3_000);
        assert_eq!(participant.reward_per_token_paid, pool.reward_per_token_stored);
    }

    #[test]
    fn checkpoint_never_moves_last_update_past_finish() {
        let mut pool = active_pool(1_000, 10);
        checkpoint(&mut pool, None, 5_000).unwrap();
        assert_eq!(pool.last_update_time, 2_000);
    }

    #[test]
    fn earned_does_not_overflow_large_amounts() {
        // 10^5 whole 18-decimal tokens earning 10^3 reward units per staked
        // unit stays inside i128.
        let participant = Participant {
            balance: 100_000_000_000_000_000_000_000,
            ..Participant::default()
        };
        let rpt_delta = PRECISION * 1_000;
        let e = accrue(&participant, rpt_delta).unwrap();
        assert_eq!(e, participant.balance * 1_000);
    }
}
