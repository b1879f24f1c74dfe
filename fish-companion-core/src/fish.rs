//! Lakes, fish categories and the per-category count tables.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    LAKE_FISH_TOTAL, LARGE_EPIC_FRACTION, LARGE_RARE_FRACTION, LEGENDARY_FRACTION,
    MEDIUM_RARE_FRACTION, POLAR_FISH_TOTAL, SMALL_EPIC_FRACTION, SMALL_RARE_FRACTION,
};

/// Colour tier a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

/// Fish category, ordered from most common to rarest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FishCategory {
    #[serde(rename = "SR")]
    SmallRare,
    #[serde(rename = "MR")]
    MediumRare,
    #[serde(rename = "LR")]
    LargeRare,
    #[serde(rename = "SE")]
    SmallEpic,
    #[serde(rename = "LE")]
    LargeEpic,
    #[serde(rename = "LEG")]
    Legendary,
}

impl FishCategory {
    /// Every category in display order.
    pub const ALL: [Self; 6] = [
        Self::SmallRare,
        Self::MediumRare,
        Self::LargeRare,
        Self::SmallEpic,
        Self::LargeEpic,
        Self::Legendary,
    ];

    /// Persisted tag, also used in asset names.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::SmallRare => "SR",
            Self::MediumRare => "MR",
            Self::LargeRare => "LR",
            Self::SmallEpic => "SE",
            Self::LargeEpic => "LE",
            Self::Legendary => "LEG",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SmallRare => "Small Rare",
            Self::MediumRare => "Medium Rare",
            Self::LargeRare => "Large Rare",
            Self::SmallEpic => "Small Epic",
            Self::LargeEpic => "Large Epic",
            Self::Legendary => "Legendary",
        }
    }

    #[must_use]
    pub const fn rarity(self) -> Rarity {
        match self {
            Self::SmallRare | Self::MediumRare | Self::LargeRare => Rarity::Rare,
            Self::SmallEpic | Self::LargeEpic => Rarity::Epic,
            Self::Legendary => Rarity::Legendary,
        }
    }

    /// Share of a fresh pool made up of this category.
    #[must_use]
    pub const fn pool_fraction(self) -> f64 {
        match self {
            Self::SmallRare => SMALL_RARE_FRACTION,
            Self::MediumRare => MEDIUM_RARE_FRACTION,
            Self::LargeRare => LARGE_RARE_FRACTION,
            Self::SmallEpic => SMALL_EPIC_FRACTION,
            Self::LargeEpic => LARGE_EPIC_FRACTION,
            Self::Legendary => LEGENDARY_FRACTION,
        }
    }
}

impl fmt::Display for FishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FishCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.tag() == s)
            .ok_or(())
    }
}

/// A fishing location with its own independent pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lake {
    #[default]
    Lakehouse,
    Sunset,
    Oceanic,
    Polar,
}

impl Lake {
    /// Every lake in selector order.
    pub const ALL: [Self; 4] = [Self::Lakehouse, Self::Sunset, Self::Oceanic, Self::Polar];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lakehouse => "Lakehouse",
            Self::Sunset => "Sunset",
            Self::Oceanic => "Oceanic",
            Self::Polar => "Polar",
        }
    }

    /// Number of fish in a freshly stocked pool.
    #[must_use]
    pub const fn fish_total(self) -> f64 {
        match self {
            Self::Polar => POLAR_FISH_TOTAL,
            Self::Lakehouse | Self::Sunset | Self::Oceanic => LAKE_FISH_TOTAL,
        }
    }

    /// Per-category counts of a freshly stocked pool.
    #[must_use]
    pub fn initial_counts(self) -> FishCounts {
        let total = self.fish_total();
        let mut counts = FishCounts::default();
        for category in FishCategory::ALL {
            counts.set(category, total * category.pool_fraction());
        }
        counts
    }
}

impl fmt::Display for Lake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lake {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lake| lake.as_str() == s)
            .ok_or(())
    }
}

/// Count per fish category. Missing categories deserialize as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FishCounts {
    #[serde(rename = "SR", default)]
    small_rare: f64,
    #[serde(rename = "MR", default)]
    medium_rare: f64,
    #[serde(rename = "LR", default)]
    large_rare: f64,
    #[serde(rename = "SE", default)]
    small_epic: f64,
    #[serde(rename = "LE", default)]
    large_epic: f64,
    #[serde(rename = "LEG", default)]
    legendary: f64,
}

impl FishCounts {
    #[must_use]
    pub const fn get(&self, category: FishCategory) -> f64 {
        match category {
            FishCategory::SmallRare => self.small_rare,
            FishCategory::MediumRare => self.medium_rare,
            FishCategory::LargeRare => self.large_rare,
            FishCategory::SmallEpic => self.small_epic,
            FishCategory::LargeEpic => self.large_epic,
            FishCategory::Legendary => self.legendary,
        }
    }

    pub const fn get_mut(&mut self, category: FishCategory) -> &mut f64 {
        match category {
            FishCategory::SmallRare => &mut self.small_rare,
            FishCategory::MediumRare => &mut self.medium_rare,
            FishCategory::LargeRare => &mut self.large_rare,
            FishCategory::SmallEpic => &mut self.small_epic,
            FishCategory::LargeEpic => &mut self.large_epic,
            FishCategory::Legendary => &mut self.legendary,
        }
    }

    pub const fn set(&mut self, category: FishCategory, value: f64) {
        *self.get_mut(category) = value;
    }

    /// Sum over every category.
    #[must_use]
    pub fn total(&self) -> f64 {
        FishCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Add `other` scaled by `sign` to every category.
    pub fn add_scaled(&mut self, other: &Self, sign: f64) {
        for category in FishCategory::ALL {
            *self.get_mut(category) += other.get(category) * sign;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FishCategory, f64)> + '_ {
        FishCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// One value per lake, serialized as a map keyed by lake name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerLake<T> {
    #[serde(rename = "Lakehouse")]
    lakehouse: T,
    #[serde(rename = "Sunset")]
    sunset: T,
    #[serde(rename = "Oceanic")]
    oceanic: T,
    #[serde(rename = "Polar")]
    polar: T,
}

impl<T> PerLake<T> {
    /// Build a table by evaluating `f` for each lake.
    pub fn from_fn(mut f: impl FnMut(Lake) -> T) -> Self {
        Self {
            lakehouse: f(Lake::Lakehouse),
            sunset: f(Lake::Sunset),
            oceanic: f(Lake::Oceanic),
            polar: f(Lake::Polar),
        }
    }

    #[must_use]
    pub const fn get(&self, lake: Lake) -> &T {
        match lake {
            Lake::Lakehouse => &self.lakehouse,
            Lake::Sunset => &self.sunset,
            Lake::Oceanic => &self.oceanic,
            Lake::Polar => &self.polar,
        }
    }

    pub const fn get_mut(&mut self, lake: Lake) -> &mut T {
        match lake {
            Lake::Lakehouse => &mut self.lakehouse,
            Lake::Sunset => &mut self.sunset,
            Lake::Oceanic => &mut self.oceanic,
            Lake::Polar => &mut self.polar,
        }
    }

    /// Entries in `Lake::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Lake, &T)> + '_ {
        Lake::ALL.into_iter().map(move |lake| (lake, self.get(lake)))
    }
}
