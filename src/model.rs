use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One dish record as served by the recipe API.
///
/// Only the fields the filter engine looks at are interpreted. Display
/// attributes are typed but optional, and anything else the API sends is
/// kept in `extra` so a record survives a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cuisine: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub cook_time_minutes: u32,
    /// `None` when the record carries no ingredients list at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Only populated on records fetched by id
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub prep_time_minutes: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub servings: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub calories_per_serving: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Parsed difficulty level, `None` for values outside Easy/Medium/Hard
    pub fn difficulty_level(&self) -> Option<Difficulty> {
        self.difficulty.parse().ok()
    }

    /// Ingredients as a slice, empty when the record has none
    pub fn ingredient_list(&self) -> &[String] {
        self.ingredients.as_deref().unwrap_or_default()
    }

    /// Whether the record came from a detail fetch
    pub fn has_details(&self) -> bool {
        !self.instructions.is_empty()
    }
}

// Per-field decoders: null, fractional and numeric-string values fall back to
// defaults so one odd record still decodes.

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_count(deserializer)?.unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(whole_number(&value).map(|n| u32::try_from(n).unwrap_or(u32::MAX)))
}

/// Round up to a whole count. Negative values clamp to zero.
fn whole_number(value: &Value) -> Option<u64> {
    let float = match value {
        Value::Number(n) => {
            if let Some(whole) = n.as_u64() {
                return Some(whole);
            }
            n.as_f64()?
        }
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    // `as` saturates, so huge values land on u64::MAX
    float.is_finite().then(|| float.max(0.0).ceil() as u64)
}

/// Envelope returned by the list and search endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecipeCollection {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// Format a duration in minutes the way recipe cards show it: `45m`, `2h`, `1h 30m`
pub fn format_cook_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}h", hours)
    }
}
