/*!
Configuration of an archive.

All configuration for an archive is contained within the archive.
The [tiers](crate::tiers) module reads the tier options when computing limits.
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::tiers::{TierMode, MAX_GLUE_USED};

/// The primary configuration structure.
#[derive(Clone)]
pub struct ArchiveConfig {
    /// The master switch: with `enabled` false no clause is archived and no
    /// propagation takes place, regardless of [init](crate::context::Archive::init).
    pub enabled: ConfigOption<bool>,

    /// The glue limit of tier one, used directly under [TierMode::Fixed].
    pub tier1: ConfigOption<u32>,

    /// The glue limit of tier two, used directly under [TierMode::Fixed].
    pub tier2: ConfigOption<u32>,

    /// How tier limits are derived from use statistics.
    pub tier_mode: ConfigOption<TierMode>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        ArchiveConfig {
            enabled: ConfigOption {
                name: "archive",
                min: false,
                max: true,
                value: true,
            },

            tier1: ConfigOption {
                name: "tier1",
                min: 0,
                max: MAX_GLUE_USED,
                value: 2,
            },

            tier2: ConfigOption {
                name: "tier2",
                min: 0,
                max: MAX_GLUE_USED,
                value: 6,
            },

            tier_mode: ConfigOption {
                name: "tiermode",
                min: TierMode::Fixed,
                max: TierMode::Accumulated,
                value: TierMode::Accumulated,
            },
        }
    }
}
