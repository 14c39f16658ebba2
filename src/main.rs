use std::env;
use std::process::ExitCode;

use coin_tap_idle::economy::config::GameConfig;
use coin_tap_idle::economy::logic::{auto_collect_label, gold_label, tap_label};
use coin_tap_idle::economy::Economy;

/// Frames per simulated second.
const FPS: u32 = 60;
/// Player taps per simulated second.
const TAPS_PER_SECOND: u32 = 3;
const DEFAULT_SECONDS: u32 = 300;

/// Usage: coin-tap-idle [CONFIG_JSON] [SECONDS]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        _ => GameConfig::default(),
    };
    let seconds = match args.next().map(|s| s.parse::<u32>()) {
        None => DEFAULT_SECONDS,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("invalid SECONDS argument: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "starting session: {} resources, {} shop items, {}s",
        config.resources.len(),
        config.shop_items.len(),
        seconds
    );
    let mut eco = Economy::from_config(&config);

    for second in 1..=seconds {
        for frame in 0..FPS {
            // Spread taps across the second like a player would.
            if frame % (FPS / TAPS_PER_SECOND) == 0 {
                let gained = eco.collect_by_tap();
                log::trace!("tap {}", tap_label(gained));
            }
            eco.update(1.0 / FPS as f64);
        }

        play_purchases(&mut eco);

        for title in eco.notifier_mut().take_recent() {
            println!("[{:>4}s] Achievement: {}", second, title);
        }
        if second % 60 == 0 {
            println!(
                "[{:>4}s] {}  {}",
                second,
                gold_label(eco.total_gold()),
                auto_collect_label(eco.auto_collect_per_second())
            );
        }
    }

    println!("--- session summary ---");
    println!("{}", gold_label(eco.total_gold()));
    for r in eco.resources().iter().filter(|r| r.is_visible()) {
        let cost = if r.is_unlocked() {
            r.upgrade_cost_label()
        } else {
            r.unlock_cost_label()
        };
        println!("{}  [{}]", r.label().replace('\n', "  "), cost.replace('\n', ": "));
    }
    let owned: Vec<&str> = eco
        .state
        .shop
        .iter()
        .filter(|e| e.purchased)
        .map(|e| e.item.name.as_str())
        .collect();
    println!("Shop: {}", if owned.is_empty() { "-".to_string() } else { owned.join(", ") });
    println!(
        "Achievements: {}/{}",
        eco.notifier().unlocked_count(),
        eco.notifier().entries.len()
    );
    ExitCode::SUCCESS
}

/// Unlock the next resource as soon as possible, otherwise buy the cheapest
/// upgrade, then spend leftovers on the shop.
fn play_purchases(eco: &mut Economy) {
    loop {
        let next_locked = eco
            .resources()
            .iter()
            .position(|r| r.is_visible() && !r.is_unlocked());
        if let Some(idx) = next_locked {
            if eco.unlock(idx) {
                continue;
            }
        }

        let cheapest = eco
            .resources()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_unlocked())
            .min_by(|(_, a), (_, b)| a.upgrade_cost().total_cmp(&b.upgrade_cost()))
            .map(|(i, r)| (i, r.upgrade_cost()));
        // Save up for the next unlock instead of upgrading past it.
        let reserve = next_locked.map_or(0.0, |i| eco.resources()[i].unlock_cost());
        match cheapest {
            Some((idx, cost)) if cost > 0.0 && eco.total_gold() - cost >= reserve * 0.5 => {
                if !eco.upgrade(idx) {
                    break;
                }
            }
            _ => break,
        }
    }

    for idx in 0..eco.state.shop.len() {
        if eco.buy_shop_item(idx) {
            log::debug!("bought shop item #{}", idx);
        }
    }
}
