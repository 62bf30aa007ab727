//! Catalog content classification types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a catalog item is a single film or an episodic series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    #[default]
    Movie,
    Series,
}

/// Hosting platform of the video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoSource {
    Vimeo,
    Dailymotion,
    GoogleDrive,
}

/// Returned when a stored enum string does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field}: {value}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

impl FromStr for ContentKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            other => Err(UnknownVariant {
                field: "content kind",
                value: other.to_owned(),
            }),
        }
    }
}

impl VideoSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vimeo => "vimeo",
            Self::Dailymotion => "dailymotion",
            Self::GoogleDrive => "google_drive",
        }
    }
}

impl FromStr for VideoSource {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vimeo" => Ok(Self::Vimeo),
            "dailymotion" => Ok(Self::Dailymotion),
            "google_drive" => Ok(Self::GoogleDrive),
            other => Err(UnknownVariant {
                field: "video source",
                value: other.to_owned(),
            }),
        }
    }
}
