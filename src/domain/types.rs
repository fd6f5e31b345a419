//! Closed classifications for attractions and services.
//!
//! Each variant has a stable code (`MUSEUM`) that is stored in the database and
//! returned by the API, and a Russian display name (`Музей`) that clients may
//! send instead of the code.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of tourist attraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttractionType {
    Palace,
    Park,
    Museum,
    ArchaeologicalSite,
    Reserve,
    Temple,
}

impl AttractionType {
    pub const ALL: [AttractionType; 6] = [
        AttractionType::Palace,
        AttractionType::Park,
        AttractionType::Museum,
        AttractionType::ArchaeologicalSite,
        AttractionType::Reserve,
        AttractionType::Temple,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AttractionType::Palace => "PALACE",
            AttractionType::Park => "PARK",
            AttractionType::Museum => "MUSEUM",
            AttractionType::ArchaeologicalSite => "ARCHAEOLOGICAL_SITE",
            AttractionType::Reserve => "RESERVE",
            AttractionType::Temple => "TEMPLE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttractionType::Palace => "Дворец",
            AttractionType::Park => "Парк",
            AttractionType::Museum => "Музей",
            AttractionType::ArchaeologicalSite => "Археологический объект",
            AttractionType::Reserve => "Заповедник",
            AttractionType::Temple => "Храм",
        }
    }

    /// Resolves a display name (case-insensitive) or a variant code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalArgument`] if nothing matches.
    pub fn from_display_name(name: &str) -> Result<Self, AppError> {
        Self::ALL
            .into_iter()
            .find(|t| label_matches(name, t.display_name(), t.code()))
            .ok_or_else(|| unknown_display_name(name))
    }

    /// Parses a stored code. Used when reading rows back from the database.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// Kind of service offered at attractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    Guide,
    CarExcursion,
    Meals,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        ServiceType::Guide,
        ServiceType::CarExcursion,
        ServiceType::Meals,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ServiceType::Guide => "GUIDE",
            ServiceType::CarExcursion => "CAR_EXCURSION",
            ServiceType::Meals => "MEALS",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::Guide => "Гид",
            ServiceType::CarExcursion => "Авто_экскурсия",
            ServiceType::Meals => "Питание",
        }
    }

    /// Resolves a display name (case-insensitive) or a variant code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IllegalArgument`] if nothing matches.
    pub fn from_display_name(name: &str) -> Result<Self, AppError> {
        Self::ALL
            .into_iter()
            .find(|t| label_matches(name, t.display_name(), t.code()))
            .ok_or_else(|| unknown_display_name(name))
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

fn label_matches(input: &str, display_name: &str, code: &str) -> bool {
    let input = input.trim();
    input == code || input.to_lowercase() == display_name.to_lowercase()
}

fn unknown_display_name(name: &str) -> AppError {
    AppError::illegal_argument(format!("Unknown display name: {name}"))
}
