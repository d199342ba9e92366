/*!
Tier limits derived from clause-use statistics.

Reduction policies keep clauses in tiers by glue (LBD): tier one is kept
unconditionally, tier two on recent use.
The limits separating the tiers may be fixed by
[configuration](crate::config::ArchiveConfig), or derived from a histogram of
use events so that tier one covers roughly half of all use and tier two
roughly ninety percent.

The module is a numeric utility over a caller-maintained [GlueUsage]; it holds
no state of its own and reads only the tier options of the configuration.
*/

use crate::{config::ArchiveConfig, misc::log::targets};

/// The largest glue tracked individually; use at higher glues saturates here.
pub const MAX_GLUE_USED: u32 = 255;

const TIER1_RELATIVE: f64 = 0.5;
const TIER2_RELATIVE: f64 = 0.9;

/// How tier limits are derived from use statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TierMode {
    /// The configured `tier1` and `tier2` values, as given.
    Fixed,

    /// The smallest glues whose accumulated use reaches 50% and 90% of all
    /// use, falling back to the configured values on an empty histogram.
    Accumulated,
}

/// A histogram of clause-use events, keyed by glue.
#[derive(Clone, Debug)]
pub struct GlueUsage {
    used: Vec<u64>,
}

impl Default for GlueUsage {
    fn default() -> Self {
        GlueUsage {
            used: vec![0; MAX_GLUE_USED as usize + 1],
        }
    }
}

impl GlueUsage {
    /// Records one use of a clause of the given glue.
    pub fn record(&mut self, glue: u32) {
        let glue = glue.min(MAX_GLUE_USED) as usize;
        self.used[glue] += 1;
    }

    /// The count of recorded events.
    pub fn total(&self) -> u64 {
        self.used.iter().sum()
    }
}

/// Computes the `(tier1, tier2)` glue limits for the given configuration and
/// use histogram.
///
/// Whatever the mode, `tier1 ≤ tier2` holds on return.
pub fn compute_tier_limits(config: &ArchiveConfig, usage: &GlueUsage) -> (u32, u32) {
    let mut tier1: i64 = -1;
    let mut tier2: i64 = -1;

    match config.tier_mode.value {
        TierMode::Fixed => {
            tier1 = config.tier1.value as i64;
            tier2 = config.tier2.value as i64;
        }

        TierMode::Accumulated => {
            let total = usage.total();
            if total > 0 {
                let tier1_limit = (total as f64 * TIER1_RELATIVE) as u64;
                let tier2_limit = (total as f64 * TIER2_RELATIVE) as u64;
                let mut accumulated: u64 = 0;

                for (glue, used) in usage.used.iter().enumerate() {
                    accumulated += used;
                    if accumulated >= tier1_limit {
                        tier1 = glue as i64;
                        break;
                    }
                }
                if accumulated < tier2_limit {
                    for glue in (tier1 + 1) as usize..usage.used.len() {
                        accumulated += usage.used[glue];
                        if accumulated >= tier2_limit {
                            tier2 = glue as i64;
                            break;
                        }
                    }
                }
            }
        }
    }

    if tier1 < 0 {
        tier1 = config.tier1.value as i64;
        tier2 = (config.tier2.value as i64).max(tier1);
    } else if tier2 < 0 {
        tier2 = tier1;
    }

    debug_assert!(0 <= tier1 && tier1 <= tier2);
    log::trace!(target: targets::TIERS, "tier1 limit {tier1}, tier2 limit {tier2}");
    (tier1 as u32, tier2 as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArchiveConfig;

    #[test]
    fn fixed_mode_reads_the_configuration() {
        let mut config = ArchiveConfig::default();
        config.tier_mode.value = TierMode::Fixed;
        config.tier1.value = 3;
        config.tier2.value = 7;

        let usage = GlueUsage::default();
        assert_eq!(compute_tier_limits(&config, &usage), (3, 7));
    }

    #[test]
    fn empty_histogram_falls_back() {
        let config = ArchiveConfig::default();
        let usage = GlueUsage::default();
        assert_eq!(compute_tier_limits(&config, &usage), (2, 6));
    }

    #[test]
    fn accumulated_quantiles() {
        let config = ArchiveConfig::default();
        let mut usage = GlueUsage::default();
        // 50 events at glue 2, 30 at glue 4, 20 at glue 9.
        for _ in 0..50 {
            usage.record(2);
        }
        for _ in 0..30 {
            usage.record(4);
        }
        for _ in 0..20 {
            usage.record(9);
        }

        // Half of all use is reached at glue 2, ninety percent at glue 9.
        assert_eq!(compute_tier_limits(&config, &usage), (2, 9));
    }

    #[test]
    fn tier_two_collapses_onto_tier_one() {
        let config = ArchiveConfig::default();
        let mut usage = GlueUsage::default();
        for _ in 0..10 {
            usage.record(5);
        }

        // All use is at glue 5: both quantiles are met at once.
        assert_eq!(compute_tier_limits(&config, &usage), (5, 5));
    }

    #[test]
    fn saturation_at_the_maximum_glue() {
        let mut usage = GlueUsage::default();
        for _ in 0..10 {
            usage.record(MAX_GLUE_USED + 40);
        }
        assert_eq!(usage.total(), 10);
        assert_eq!(
            compute_tier_limits(&ArchiveConfig::default(), &usage),
            (MAX_GLUE_USED, MAX_GLUE_USED),
        );
    }
}
