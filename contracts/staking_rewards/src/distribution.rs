//! Distribution window lifecycle.
//!
//! `Uninitialized → Active → Expired → Active …`. Everything that changes
//! `reward_rate` or `rewards_duration` goes through this module.

use crate::rewards;
use crate::state::{PoolState, WindowState};
use crate::ContractError;

/// Classify the window at `now`.
pub fn window_state(pool: &PoolState, now: u64) -> WindowState {
    if pool.period_finish == 0 {
        WindowState::Uninitialized
    } else if now < pool.period_finish {
        WindowState::Active
    } else {
        WindowState::Expired
    }
}

/// Total emission of one full window at the current rate.
pub fn reward_for_duration(pool: &PoolState) -> Result<i128, ContractError> {
    pool.reward_rate
        .checked_mul(i128::from(pool.rewards_duration))
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Open a new window funded with `reward_amount`, or restart the running one.
///
/// A running window's unemitted remainder is folded into the new rate, so
/// repeated calls never discard rewards. `reserve` is the reward balance the
/// contract holds; it must cover the whole emission of the new window.
///
/// `pool` is left untouched when an error is returned.
pub fn initialize_or_extend(
    pool: &mut PoolState,
    reward_amount: i128,
    reserve: i128,
    now: u64,
) -> Result<(), ContractError> {
    if reward_amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if pool.rewards_duration == 0 {
        return Err(ContractError::InvalidDuration);
    }

    let mut next = pool.clone();
    rewards::checkpoint(&mut next, None, now)?;

    let duration = i128::from(next.rewards_duration);
    let funded = match window_state(&next, now) {
        WindowState::Active => {
            let remaining = i128::from(next.period_finish - now);
            let leftover = remaining
                .checked_mul(next.reward_rate)
                .ok_or(ContractError::ArithmeticOverflow)?;
            reward_amount
                .checked_add(leftover)
                .ok_or(ContractError::ArithmeticOverflow)?
        }
        WindowState::Uninitialized | WindowState::Expired => reward_amount,
    };

    next.reward_rate = funded / duration;
    if reward_for_duration(&next)? > reserve {
        return Err(ContractError::InsufficientRewardReserve);
    }

    next.last_update_time = now;
    next.period_finish = now
        .checked_add(next.rewards_duration)
        .ok_or(ContractError::ArithmeticOverflow)?;

    *pool = next;
    Ok(())
}

/// Change the length of future windows. Only allowed while no window runs.
pub fn set_rewards_duration(
    pool: &mut PoolState,
    duration: u64,
    now: u64,
) -> Result<(), ContractError> {
    if window_state(pool, now) == WindowState::Active {
        return Err(ContractError::WindowActive);
    }
    if duration == 0 {
        return Err(ContractError::InvalidDuration);
    }
    pool.rewards_duration = duration;
    Ok(())
}
