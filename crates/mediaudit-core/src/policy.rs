//! Validation policy: which extensions are acceptable per asset role, and
//! the minimum plausible object size per role.
//!
//! Constructed once and passed into the checker explicitly so the
//! validation core stays testable with fake stores.

use crate::models::AssetRole;

/// Literal stored in the catalog when no reference was ever recorded.
pub const MISSING_SENTINEL: &str = "not_found";

const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".mpeg", ".m4v", ".mov", ".wmv", ".flv", ".mpg", ".mxf", ".3gp", ".m2t", ".f4v",
    ".avi", ".vob", ".webm", ".mts", ".mp3", ".m4a",
];

const IMAGE_EXTENSIONS: &[&str] = &[".jpeg", ".jpg", ".gif", ".png"];

/// Minimum acceptable sizes are exclusive: an object must be strictly
/// larger to pass.
const MIN_VIDEO_BYTES: u64 = 1024;
const MIN_IMAGE_BYTES: u64 = 1;

#[derive(Debug, Clone)]
pub struct AuditPolicy {
    video_extensions: Vec<String>,
    image_extensions: Vec<String>,
    min_video_bytes: u64,
    min_image_bytes: u64,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self::new(
            VIDEO_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            IMAGE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            MIN_VIDEO_BYTES,
            MIN_IMAGE_BYTES,
        )
    }
}

impl AuditPolicy {
    pub fn new(
        video_extensions: Vec<String>,
        image_extensions: Vec<String>,
        min_video_bytes: u64,
        min_image_bytes: u64,
    ) -> Self {
        Self {
            video_extensions,
            image_extensions,
            min_video_bytes,
            min_image_bytes,
        }
    }

    /// Whether `ext` (dotted, lowercase) is acceptable for the role.
    pub fn allows(&self, role: AssetRole, ext: &str) -> bool {
        let allowed = match role {
            AssetRole::Video => &self.video_extensions,
            AssetRole::Image => &self.image_extensions,
        };
        allowed.iter().any(|a| a == ext)
    }

    /// Exclusive size floor for the role: objects at or below it fail.
    pub fn min_size_bytes(&self, role: AssetRole) -> u64 {
        match role {
            AssetRole::Video => self.min_video_bytes,
            AssetRole::Image => self.min_image_bytes,
        }
    }

    /// Dotted, lowercased extension of a storage key: the substring from
    /// the last `.` onward, or empty if the key has none.
    pub fn extension_of(key: &str) -> String {
        match key.rfind('.') {
            Some(idx) => key[idx..].to_lowercase(),
            None => String::new(),
        }
    }

    /// Whether a catalog reference counts as missing: absent, empty, or
    /// the sentinel literal.
    pub fn is_missing_reference(key: Option<&str>) -> bool {
        match key {
            None => true,
            Some(k) => k.is_empty() || k == MISSING_SENTINEL,
        }
    }
}
