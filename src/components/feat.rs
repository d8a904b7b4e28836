use std::collections::HashSet;

use crate::components::id::FeatId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownFeats {
    feats: HashSet<FeatId>,
}

impl KnownFeats {
    pub fn new(feats: impl IntoIterator<Item = FeatId>) -> Self {
        Self {
            feats: feats.into_iter().collect(),
        }
    }

    pub fn contains(&self, feat: &FeatId) -> bool {
        self.feats.contains(feat)
    }
}
