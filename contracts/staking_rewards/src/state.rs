use soroban_sdk::{contracttype, Address};

/// Deployment-time wiring, fixed by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token users stake.
    pub stake_token: Address,
    /// Token paid out as rewards; its balance held by the contract is the
    /// reward reserve.
    pub reward_token: Address,
}

/// Global accumulator and window timing.
///
/// Stored once in instance storage and threaded through every operation.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Sum of every participant's `balance`.
    pub total_staked: i128,
    /// Reward units emitted per second during the current window.
    pub reward_rate: i128,
    /// Cumulative reward per staked unit, scaled by `rewards::PRECISION`.
    pub reward_per_token_stored: i128,
    /// Timestamp of the last checkpoint, never past `period_finish`.
    pub last_update_time: u64,
    /// End of the current window; zero until the first window opens.
    pub period_finish: u64,
    /// Length in seconds of every window opened from now on.
    pub rewards_duration: u64,
}

/// Per-account bookkeeping. Absent records read as all zeros.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Participant {
    pub balance: i128,
    /// Accumulator value at this account's last checkpoint.
    pub reward_per_token_paid: i128,
    /// Rewards fixed at past checkpoints and not yet claimed.
    pub rewards_accrued: i128,
}

/// Lifecycle of the distribution window.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowState {
    Uninitialized,
    Active,
    Expired,
}
