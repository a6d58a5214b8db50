use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// The serde derives here mirror the upstream JSON; a pragmatic leak into the domain.

/// Menu section a summary list is loaded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Main,
    Soup,
    Side,
}

impl MenuCategory {
    /// Path segment used by the menu endpoint.
    pub fn as_path(&self) -> &'static str {
        match self {
            MenuCategory::Main => "main",
            MenuCategory::Soup => "soup",
            MenuCategory::Side => "side",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown menu category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for MenuCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(MenuCategory::Main),
            "soup" => Ok(MenuCategory::Soup),
            "side" => Ok(MenuCategory::Side),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

// One entry of a category listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSummary {
    // Key used to load the matching detail record.
    pub detail_hash: String,
    pub image: String,
    pub alt: String,
    #[serde(default)]
    pub delivery_type: Vec<String>,
    pub title: String,
    pub description: String,
    // Original price, only present for discounted items.
    #[serde(default)]
    pub n_price: Option<String>,
    pub s_price: String,
    #[serde(default)]
    pub badge: Option<Vec<String>>,
}

// Full record behind a detail hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDetail {
    pub top_image: String,
    #[serde(default)]
    pub thumb_images: Vec<String>,
    pub product_description: String,
    pub point: String,
    pub delivery_info: String,
    pub delivery_fee: String,
    #[serde(default)]
    pub prices: Vec<String>,
    #[serde(default)]
    pub detail_section: Vec<String>,
}
