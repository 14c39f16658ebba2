//! Economy logic: pure functions over `EconomyState`, fully testable.
//!
//! Every purchase checks affordability before touching any state, so a
//! rejected purchase leaves gold, levels and flags exactly as they were.

use super::achievements::{AchievementKind, AchievementNotifier};
use super::state::EconomyState;

/// Passive income for one whole second. Returns the amount added.
pub fn tick_second(state: &mut EconomyState, notifier: &mut impl AchievementNotifier) -> f64 {
    let output = state.auto_collect_per_second();
    state.stats.passive_ticks += 1;
    add_gold(state, notifier, output);
    log::debug!("auto collect +{} (gold {})", output, state.total_gold);
    output
}

/// Tap the coin: collect the full unlocked output. Returns the amount added.
pub fn collect_by_tap(state: &mut EconomyState, notifier: &mut impl AchievementNotifier) -> f64 {
    let output = state.unlocked_output();
    state.stats.total_taps += 1;
    add_gold(state, notifier, output);
    output
}

/// Apply a gold change and raise every GoldReach trigger now satisfied.
///
/// No lower bound is enforced here; purchases check funds before calling
/// with a negative delta.
pub fn add_gold(state: &mut EconomyState, notifier: &mut impl AchievementNotifier, delta: f64) {
    state.total_gold += delta;
    if delta >= 0.0 {
        state.stats.gold_earned += delta;
    } else {
        state.stats.gold_spent -= delta;
    }

    let reached: Vec<AchievementKind> = notifier
        .achievements()
        .into_iter()
        .filter(|a| matches!(a, AchievementKind::GoldReach(t) if state.total_gold >= *t))
        .collect();
    for kind in &reached {
        notifier.unlock_achievement(kind);
    }
}

/// Upgrade an unlocked resource by one level. Returns true if successful.
pub fn upgrade(
    state: &mut EconomyState,
    notifier: &mut impl AchievementNotifier,
    index: usize,
) -> bool {
    let cost = match state.resources.get(index) {
        Some(r) if r.is_unlocked() => r.upgrade_cost(),
        _ => return false,
    };
    if state.total_gold < cost {
        return false;
    }

    add_gold(state, notifier, -cost);
    let resource = &mut state.resources[index];
    resource.level_up();
    log::debug!(
        "upgraded {} to Lv.{} for {}",
        resource.name(),
        resource.level(),
        cost
    );
    true
}

/// Unlock a visible, locked resource. Returns true if successful.
///
/// Reveals hidden resources up to the next locked one and raises an
/// UnlockResource trigger.
pub fn unlock(
    state: &mut EconomyState,
    notifier: &mut impl AchievementNotifier,
    index: usize,
) -> bool {
    let (cost, name) = match state.resources.get(index) {
        Some(r) if !r.is_unlocked() && r.is_visible() => (r.unlock_cost(), r.name().to_string()),
        _ => return false,
    };
    if state.total_gold < cost {
        return false;
    }

    state.resources[index].mark_unlocked();
    add_gold(state, notifier, -cost);
    // Free resources never get unlocked, so reveal past them to the next locked one.
    while let Some(idx) = reveal_next(state) {
        if !state.resources[idx].is_unlocked() {
            break;
        }
    }
    log::info!("unlocked {} for {}", name, cost);
    notifier.unlock_achievement(&AchievementKind::UnlockResource(name));
    true
}

/// Show the first hidden resource. Returns its index, or None if all are shown.
pub fn reveal_next(state: &mut EconomyState) -> Option<usize> {
    let idx = state.resources.iter().position(|r| !r.is_visible())?;
    state.resources[idx].show();
    Some(idx)
}

/// Can the player afford the resource's next unlock/upgrade?
pub fn buyable_check(state: &EconomyState, index: usize) -> bool {
    state
        .resources
        .get(index)
        .is_some_and(|r| state.total_gold >= r.next_cost())
}

/// `buyable_check` for every resource, in order.
pub fn buyable_flags(state: &EconomyState) -> Vec<bool> {
    (0..state.resources.len())
        .map(|i| buyable_check(state, i))
        .collect()
}

/// Buy a cosmetic shop item. Returns true if successful.
pub fn buy_shop_item(
    state: &mut EconomyState,
    notifier: &mut impl AchievementNotifier,
    index: usize,
) -> bool {
    let cost = match state.shop.get(index) {
        Some(e) if e.item.available && !e.purchased => e.item.cost,
        _ => return false,
    };
    if state.total_gold < cost {
        return false;
    }

    add_gold(state, notifier, -cost);
    let entry = &mut state.shop[index];
    entry.purchased = true;
    log::info!("purchased {} for {}", entry.item.name, cost);
    true
}

/// Format a number with thousands separators and at most one decimal.
pub fn format_number(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    let mut int_part = n.floor() as u64;
    let mut tenths = ((n - int_part as f64) * 10.0).round() as u64;
    if tenths >= 10 {
        int_part += 1;
        tenths = 0;
    }

    let s = int_part.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let result: String = result.chars().rev().collect();

    if tenths > 0 {
        format!("{}.{}", result, tenths)
    } else {
        result
    }
}

/// "Gold: 1,234"
pub fn gold_label(gold: f64) -> String {
    format!("Gold: {}", format_number(gold.floor()))
}

/// "Auto Collect: 0.6 / second"
pub fn auto_collect_label(per_second: f64) -> String {
    format!("Auto Collect: {:.1} / second", per_second)
}

/// Floating tap feedback, e.g. "+5".
pub fn tap_label(amount: f64) -> String {
    format!("+{}", format_number(amount.round()))
}
