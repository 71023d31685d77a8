use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// One row from the audited catalog. Immutable once read; the validator
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProjectRecord {
    pub account_id: String,
    pub id: i64,
    pub master_path: Option<String>,
    pub poster_path: Option<String>,
    pub thumbnail_path: Option<String>,
}

/// Which rule set applies to an asset slot: the master file is audited as
/// video, poster and thumbnail as images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRole {
    Video,
    Image,
}

impl Display for AssetRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AssetRole::Video => write!(f, "video"),
            AssetRole::Image => write!(f, "image"),
        }
    }
}

/// Metadata returned by the object store head call. No content is
/// transferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub size_bytes: u64,
}

/// Classification of a single asset slot.
///
/// The first five variants are ordinary expected outcomes. `Inconclusive`
/// is the fault channel: the store could not be asked, so the slot is
/// neither verified clean nor verified defective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOutcome {
    /// Passed all checks; carries the store metadata for future comparison
    /// against the catalog-recorded size.
    Ok(ObjectMeta),
    /// Key is absent, empty, or the catalog sentinel.
    DataMissing,
    /// Key present but the object does not exist in storage.
    StorageMissing,
    /// Extension not in the allow-list for the role.
    WrongExtension,
    /// Object exists but its size is at or below the role minimum.
    TooSmall,
    /// The store returned a non-not-found error; verification failed.
    Inconclusive,
}

impl AssetOutcome {
    /// Map this outcome to the defect reported for the slot, if any.
    pub fn defect(self) -> Option<SlotDefect> {
        match self {
            AssetOutcome::Ok(_) => None,
            AssetOutcome::DataMissing => Some(SlotDefect::DataMissing),
            AssetOutcome::StorageMissing => Some(SlotDefect::StorageMissing),
            AssetOutcome::WrongExtension => Some(SlotDefect::WrongExtension),
            AssetOutcome::TooSmall => Some(SlotDefect::TooSmall),
            AssetOutcome::Inconclusive => Some(SlotDefect::Inconclusive),
        }
    }
}

/// Closed set of defect labels for one asset slot.
///
/// The serialized strings are the external report contract; they appear
/// only at the serde/CSV boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotDefect {
    #[serde(rename = "Data missing")]
    DataMissing,
    #[serde(rename = "S3 missing")]
    StorageMissing,
    #[serde(rename = "Wrong ext")]
    WrongExtension,
    #[serde(rename = "Too small")]
    TooSmall,
    #[serde(rename = "Inconclusive")]
    Inconclusive,
}

impl SlotDefect {
    pub fn as_label(&self) -> &'static str {
        match self {
            SlotDefect::DataMissing => "Data missing",
            SlotDefect::StorageMissing => "S3 missing",
            SlotDefect::WrongExtension => "Wrong ext",
            SlotDefect::TooSmall => "Too small",
            SlotDefect::Inconclusive => "Inconclusive",
        }
    }
}

impl Display for SlotDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_label())
    }
}

/// Per-project aggregation of the three slot outcomes. Constructed once by
/// the project validator, immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatus {
    pub account_id: String,
    pub id: i64,
    pub master_path: Option<String>,
    pub master: Option<SlotDefect>,
    pub poster: Option<SlotDefect>,
    pub thumb: Option<SlotDefect>,
}

impl ProjectStatus {
    /// A project is reportable iff at least one slot carries a defect.
    pub fn is_reportable(&self) -> bool {
        self.master.is_some() || self.poster.is_some() || self.thumb.is_some()
    }
}
