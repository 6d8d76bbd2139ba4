// Waste category and assignment target value objects

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteCategory {
    Edible,
    Organic,
    #[serde(alias = "coffee")]
    CoffeeGrounds,
    Other,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 4] = [
        WasteCategory::Edible,
        WasteCategory::Organic,
        WasteCategory::CoffeeGrounds,
        WasteCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::Edible => "edible",
            WasteCategory::Organic => "organic",
            WasteCategory::CoffeeGrounds => "coffee_grounds",
            WasteCategory::Other => "other",
        }
    }

    /// Edible food goes to charities, compostables go to farmers.
    /// `Other` carries no fixed assignee.
    pub fn required_target(&self) -> Option<AssignmentTarget> {
        match self {
            WasteCategory::Edible => Some(AssignmentTarget::Charity),
            WasteCategory::Organic | WasteCategory::CoffeeGrounds => Some(AssignmentTarget::Farmer),
            WasteCategory::Other => None,
        }
    }

    pub fn accepts(&self, target: AssignmentTarget) -> bool {
        self.required_target().map_or(true, |required| required == target)
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentTarget {
    Charity,
    Farmer,
}

impl AssignmentTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentTarget::Charity => "charity",
            AssignmentTarget::Farmer => "farmer",
        }
    }

    /// Users of this role are notified about, and may request, entries with this target.
    pub fn role(&self) -> Role {
        match self {
            AssignmentTarget::Charity => Role::Charity,
            AssignmentTarget::Farmer => Role::Farmer,
        }
    }
}

impl fmt::Display for AssignmentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
