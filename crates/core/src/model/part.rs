use std::collections::BTreeMap;

use crate::model::ids::PartId;

/// Human labels for parts, falling back to the standard listening-test names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartLabels {
    overrides: BTreeMap<PartId, String>,
}

impl PartLabels {
    #[must_use]
    pub fn new(overrides: BTreeMap<PartId, String>) -> Self {
        let overrides = overrides
            .into_iter()
            .filter(|(_, label)| !label.trim().is_empty())
            .collect();
        Self { overrides }
    }

    #[must_use]
    pub fn label(&self, part: PartId) -> String {
        self.overrides
            .get(&part)
            .cloned()
            .unwrap_or_else(|| default_label(part))
    }
}

fn default_label(part: PartId) -> String {
    let name = match part.value() {
        1 => "Picture Description",
        2 => "Question Response",
        3 => "Short Conversations",
        4 => "Short Talks",
        n => return format!("Part {n}"),
    };
    format!("Part {part}: {name}")
}
