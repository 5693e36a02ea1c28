//! Passive income: a rate that steps up over match time, paid out once per
//! accumulated second.

use photon_core::constants::{INCOME_PAYOUT_INTERVAL_SECS, INCOME_STEP_SECS, TIMER_EPSILON};
use photon_core::types::Player;

/// Income rate in effect at `elapsed_secs` into the match. Tolerates the
/// rounding left by summing non-binary frame times such as 0.1 s.
pub fn income_rate_at(elapsed_secs: f64) -> u32 {
    ((elapsed_secs + TIMER_EPSILON) / INCOME_STEP_SECS).floor() as u32 + 1
}

/// Update both players' rate and pay out every full second accumulated.
pub fn run(players: &mut [Player; 2], accumulator: &mut f64, elapsed_secs: f64, dt: f64) {
    let rate = income_rate_at(elapsed_secs);
    for player in players.iter_mut() {
        player.income_rate = rate;
    }

    *accumulator += dt;
    while *accumulator >= INCOME_PAYOUT_INTERVAL_SECS - TIMER_EPSILON {
        *accumulator -= INCOME_PAYOUT_INTERVAL_SECS;
        for player in players.iter_mut() {
            player.photons += player.income_rate;
        }
    }
}
