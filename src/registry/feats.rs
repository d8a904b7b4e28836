use std::sync::LazyLock;

use crate::components::id::FeatId;

pub static EVASION_ID: LazyLock<FeatId> = LazyLock::new(|| FeatId::from_str("feat.evasion"));

pub static IMPROVED_EVASION_ID: LazyLock<FeatId> =
    LazyLock::new(|| FeatId::from_str("feat.improved_evasion"));
