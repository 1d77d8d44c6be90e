use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreedId(pub i64);

/// Paired imperial/metric reading as the breed API reports it. Both sides are
/// free text ("23 - 29", "59 - 74") and either may be missing on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default)]
    pub imperial: String,
    #[serde(default)]
    pub metric: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreedImage {
    #[serde(default)]
    pub url: String,
}

/// One breed entry from the remote API. `id` is unique within a fetched
/// collection; every other field is optional on the wire and defaults to
/// empty. Instances are never mutated after fetch, only cloned into derived
/// filtered/sorted views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    pub id: BreedId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub height: Measurement,
    #[serde(default)]
    pub weight: Measurement,
    #[serde(default)]
    pub life_span: String,
    #[serde(default)]
    pub image: Option<BreedImage>,
    #[serde(default)]
    pub bred_for: String,
    #[serde(default)]
    pub breed_group: String,
    #[serde(default)]
    pub temperament: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    Name,
    Height,
    Lifespan,
}

impl SortOption {
    /// Parses a user-facing option name. Unknown strings yield `None`;
    /// callers are expected to leave the current ordering untouched rather
    /// than treat this as an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "height" => Some(Self::Height),
            "lifespan" => Some(Self::Lifespan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Height => "height",
            Self::Lifespan => "lifespan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingState {
    Loading,
    Ready,
    Error,
}
