//! Level modifiers - prayer, void set, and gathering boosts

pub mod prayer;
pub mod region;
pub mod void;

pub use prayer::prayer_multiplier;
pub use region::region_bonus;
pub use void::void_multiplier;

/// Evaluate an ordered override table
///
/// Rules are checked in order and every active rule replaces the value
/// chosen so far, so the last active rule wins. Returns `default` when no
/// rule is active.
pub(crate) fn last_active<K: Copy, V: Copy>(
    rules: &[(K, V)],
    default: V,
    is_active: impl Fn(K) -> bool,
) -> V {
    rules
        .iter()
        .fold(default, |current, &(key, value)| if is_active(key) { value } else { current })
}
