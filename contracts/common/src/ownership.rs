use soroban_sdk::{symbol_short, Address, Env, Symbol};

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");

/// Records `owner` as the contract owner, replacing any previous one.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Returns the current owner, or `None` before the contract is set up.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Returns whether `address` is the current owner.
pub fn is_owner(env: &Env, address: &Address) -> bool {
    get_owner(env).is_some_and(|owner| owner == *address)
}

/// Returns the address nominated by `propose_owner`, if any.
pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

/// Nominates `new_owner`. Returns `false` when `current` is not the owner.
///
/// Ownership only moves once the nominee calls [`accept_owner`].
pub fn propose_owner(env: &Env, current: &Address, new_owner: &Address) -> bool {
    if !is_owner(env, current) {
        return false;
    }
    env.storage().instance().set(&PENDING_OWNER, new_owner);
    true
}

/// Completes a pending transfer.
///
/// Returns the previous owner on success and `None` when `new_owner` is not
/// the nominated address (or nothing is pending).
pub fn accept_owner(env: &Env, new_owner: &Address) -> Option<Address> {
    let pending = get_pending_owner(env)?;
    if pending != *new_owner {
        return None;
    }
    let previous = get_owner(env)?;
    set_owner(env, new_owner);
    env.storage().instance().remove(&PENDING_OWNER);
    Some(previous)
}

/// Drops the pending nomination, returning the nominee that was removed.
pub fn cancel_transfer(env: &Env) -> Option<Address> {
    let pending = get_pending_owner(env)?;
    env.storage().instance().remove(&PENDING_OWNER);
    Some(pending)
}
