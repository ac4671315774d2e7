use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::state::{Config, Participant, PoolState};

// ── Storage key constants ───────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const CONFIG: Symbol = symbol_short!("CONFIG");
const POOL: Symbol = symbol_short!("POOL");

/// Per-participant persistent storage uses tuple keys: (prefix, address).
const PARTICIPANT: Symbol = symbol_short!("PARTIC");

const INSTANCE_TTL_THRESHOLD: u32 = 17_280; // ~1 day
const INSTANCE_TTL_EXTEND_TO: u32 = 518_400; // ~30 days
const PARTICIPANT_TTL_THRESHOLD: u32 = 518_400; // ~30 days
const PARTICIPANT_TTL_EXTEND_TO: u32 = 3_110_400; // ~180 days

fn participant_key(account: &Address) -> (Symbol, Address) {
    (PARTICIPANT, account.clone())
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn mark_initialized(env: &Env) {
    env.storage().instance().set(&INITIALIZED, &true);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&CONFIG)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&CONFIG, config);
}

/// Load the pool record; an uninitialized contract reads as all zeros.
pub fn get_pool(env: &Env) -> PoolState {
    env.storage().instance().get(&POOL).unwrap_or_default()
}

pub fn set_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&POOL, pool);
}

/// Load a participant record, defaulting to zeros for unseen accounts.
pub fn get_participant(env: &Env, account: &Address) -> Participant {
    env.storage()
        .persistent()
        .get(&participant_key(account))
        .unwrap_or_default()
}

/// Persist a participant record and keep it alive.
pub fn set_participant(env: &Env, account: &Address, participant: &Participant) {
    let key = participant_key(account);
    env.storage().persistent().set(&key, participant);
    env.storage()
        .persistent()
        .extend_ttl(&key, PARTICIPANT_TTL_THRESHOLD, PARTICIPANT_TTL_EXTEND_TO);
}
