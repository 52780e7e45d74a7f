use schema::{Pokemon, StatType};
use std::collections::HashMap;
use std::time::Duration;

/// Hard ceiling the data source puts on a single base stat.
pub const STAT_CEILING: u16 = 255;

/// Scale used for a stat key with no aggregated maximum, so a lone detail
/// view still renders sensible bars.
pub const FALLBACK_MAX: u16 = 100;

/// Running maximum per stat key across a collection of detail records.
///
/// Keys are the raw wire strings; a key never seen before is inserted on
/// first sight, so records carrying stats outside the known six aggregate
/// instead of failing. Empty input yields an empty map. Pure, and
/// order-independent: shuffling the records cannot change a maximum.
pub fn aggregate_max(records: &[Pokemon]) -> HashMap<String, u16> {
    let mut maxima: HashMap<String, u16> = HashMap::new();
    for record in records {
        for slot in &record.stats {
            let entry = maxima.entry(slot.stat.name.clone()).or_insert(0);
            *entry = (*entry).max(slot.base_stat);
        }
    }
    maxima
}

/// Maximum for one of the known six keys, with the display fallback for
/// keys the aggregate never observed.
pub fn max_for(maxima: &HashMap<String, u16>, stat: StatType) -> u16 {
    maxima.get(&stat.key()).copied().unwrap_or(FALLBACK_MAX)
}

/// Ease-out interpolation fraction in `[0.0, 1.0]` as a pure function of
/// elapsed time. Replaces interval-driven counters: the bar value at any
/// frame is derived from when the view appeared, never from mutable
/// animation state.
pub fn eased_fraction(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() || elapsed >= duration {
        return 1.0;
    }
    let t = elapsed.as_secs_f32() / duration.as_secs_f32();
    1.0 - (1.0 - t).powi(3)
}

/// The displayed stat value partway through the reveal animation.
pub fn animated_value(target: u16, elapsed: Duration, duration: Duration) -> u16 {
    (target as f32 * eased_fraction(elapsed, duration)).round() as u16
}
