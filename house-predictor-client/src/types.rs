//! Public types exchanged with the prediction service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// City covered by the prediction model.
///
/// The service is trained on the seven metro markets listed here; the wire
/// value is the plain English name (e.g. `"Bengaluru"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    /// National Capital Territory of Delhi.
    Delhi,
    /// Mumbai, Maharashtra.
    Mumbai,
    /// Bengaluru, Karnataka.
    Bengaluru,
    /// Hyderabad, Telangana.
    Hyderabad,
    /// Chennai, Tamil Nadu.
    Chennai,
    /// Pune, Maharashtra.
    Pune,
    /// Kolkata, West Bengal.
    Kolkata,
}

impl City {
    /// All supported cities, in selector order.
    pub fn all() -> &'static [City] {
        &[
            City::Delhi,
            City::Mumbai,
            City::Bengaluru,
            City::Hyderabad,
            City::Chennai,
            City::Pune,
            City::Kolkata,
        ]
    }

    /// Wire name, also used as the selector label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Delhi => "Delhi",
            Self::Mumbai => "Mumbai",
            Self::Bengaluru => "Bengaluru",
            Self::Hyderabad => "Hyderabad",
            Self::Chennai => "Chennai",
            Self::Pune => "Pune",
            Self::Kolkata => "Kolkata",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delhi" => Ok(Self::Delhi),
            "mumbai" => Ok(Self::Mumbai),
            "bengaluru" => Ok(Self::Bengaluru),
            "hyderabad" => Ok(Self::Hyderabad),
            "chennai" => Ok(Self::Chennai),
            "pune" => Ok(Self::Pune),
            "kolkata" => Ok(Self::Kolkata),
            _ => Err(format!("Unsupported city: {s}")),
        }
    }
}

/// Furnishing level of a listing.
///
/// Wire values use the hyphenated form (`"Semi-Furnished"`), matching the
/// option values the service was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Furnishing {
    /// Fully furnished.
    Furnished,
    /// Partially furnished.
    #[serde(rename = "Semi-Furnished")]
    SemiFurnished,
    /// Bare shell.
    Unfurnished,
}

impl Furnishing {
    /// All furnishing levels, in selector order.
    pub fn all() -> &'static [Furnishing] {
        &[
            Furnishing::Furnished,
            Furnishing::SemiFurnished,
            Furnishing::Unfurnished,
        ]
    }

    /// Wire name, also used as the selector label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Furnished => "Furnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::Unfurnished => "Unfurnished",
        }
    }
}

impl fmt::Display for Furnishing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Furnishing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "furnished" => Ok(Self::Furnished),
            "semi-furnished" => Ok(Self::SemiFurnished),
            "unfurnished" => Ok(Self::Unfurnished),
            _ => Err(format!("Unsupported furnishing level: {s}")),
        }
    }
}

/// User-entered listing features, keyed exactly as the service expects.
///
/// Every value is sent as a raw string, numeric fields included; the service
/// performs its own coercion. All fields start empty and are only ever
/// mutated one at a time by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureForm {
    /// Carpet area in square feet.
    pub area: String,
    /// Bedroom count.
    pub bedrooms: String,
    /// Bathroom count.
    pub bathrooms: String,
    /// Floor the unit is on.
    pub floor: String,
    /// City name, one of [`City`] (or empty when not selected).
    pub city: String,
    /// Furnishing level, one of [`Furnishing`] (or empty when not selected).
    pub furnishing: String,
}

/// Body of `POST /predict`: `{"features": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// The feature form as entered.
    pub features: FeatureForm,
}

/// Successful prediction payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Point estimate of the sale price.
    pub predicted_price: f64,
    /// Currency unit, `"INR"` when the service reports one.
    pub unit: Option<String>,
    /// Model disclaimer attached by the service.
    pub note: Option<String>,
}

/// Payload of the service root route (`GET /`), used as a reachability probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service identification message.
    pub message: String,
}
