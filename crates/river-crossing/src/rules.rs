//! Crossing rules: legal moves, the safety predicate, and the goal test.
//!
//! Neighbor generation order is fixed (escort alone first, then each cargo
//! item in role order) because the solver's visit order, and therefore
//! which solutions it reports first, depends on it.

use smallvec::SmallVec;

use crate::state::{Bank, Role, State, ROLE_COUNT};

/// Successor states of one state; never more than one per role
pub type Neighbors = SmallVec<[State; ROLE_COUNT]>;

/// Send the escort to the other bank, taking `role` along unless it is the escort.
///
/// No guard is applied here; [`neighbors`] only ferries cargo that shares
/// the escort's bank.
pub fn move_across(state: &State, role: Role) -> State {
    let to = state.escort().other();
    state.with_bank(Role::Escort, to).with_bank(role, to)
}

/// Check if a state leaves an incompatible pair alone without the escort.
///
/// Wolf with sheep, or sheep with cabbage, on a bank the escort is not on.
pub fn is_dead(state: &State) -> bool {
    let escort = state.escort();
    let wolf = state.bank(Role::Wolf);
    let sheep = state.bank(Role::Sheep);
    let cabbage = state.bank(Role::Cabbage);

    if wolf == sheep && sheep != escort {
        return true;
    }
    if sheep == cabbage && sheep != escort {
        return true;
    }
    false
}

/// Everyone has crossed
pub fn is_goal(state: &State) -> bool {
    state.banks().iter().all(|&bank| bank == Bank::Destination)
}

/// Check whether `role` may ride along on the escort's next crossing
pub fn can_ferry(state: &State, role: Role) -> bool {
    role == Role::Escort || state.bank(role) == state.escort()
}

/// All safe states one crossing away, in generation order.
pub fn neighbors(state: &State) -> Neighbors {
    let mut next = Neighbors::new();
    for role in Role::ALL {
        if !can_ferry(state, role) {
            continue;
        }
        let candidate = move_across(state, role);
        if !is_dead(&candidate) {
            next.push(candidate);
        }
    }
    next
}
