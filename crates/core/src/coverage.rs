//! Service availability by ZIP code and by position on the coverage map.
//!
//! Real availability comes from an external service; the site only ever
//! talks to it through [`CoverageLookup`]. [`StaticCoverageTable`] is the
//! built-in table used until one is wired up.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::ZipCode;

/// Signal strength reported for ZIP table hits (the map reports per-zone strength).
pub const TABLE_SIGNAL_STRENGTH: f64 = 0.9;

/// Availability of service for a ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageResult {
    /// Whether the ZIP is inside the service area.
    pub available: bool,
    /// Maximum advertised speed, e.g. `1 Gbps`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    /// Starting price, e.g. `$49.99`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl CoverageResult {
    /// A covered ZIP with its speed and starting price.
    #[must_use]
    pub fn available(speed: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            available: true,
            speed: Some(speed.into()),
            price: Some(price.into()),
        }
    }

    /// A ZIP outside the service area.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            available: false,
            speed: None,
            price: None,
        }
    }
}

/// Source of coverage answers.
pub trait CoverageLookup: Send + Sync {
    /// Look up availability for a ZIP code.
    fn lookup_coverage(&self, zip: &ZipCode) -> CoverageResult;
}

/// Fixed ZIP table. Unknown ZIPs are unavailable.
#[derive(Debug, Clone, Default)]
pub struct StaticCoverageTable {
    entries: HashMap<String, CoverageResult>,
}

impl StaticCoverageTable {
    /// An empty table (nothing is covered).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    #[must_use]
    pub fn with_entry(mut self, zip: &ZipCode, result: CoverageResult) -> Self {
        self.entries.insert(zip.as_str().to_owned(), result);
        self
    }

    /// The launch-area table.
    #[must_use]
    pub fn launch_area() -> Self {
        let covered = [
            ("10001", "1 Gbps", "$49.99"),
            ("10002", "500 Mbps", "$39.99"),
            ("10003", "1 Gbps", "$49.99"),
            ("10004", "800 Mbps", "$44.99"),
            ("10005", "600 Mbps", "$39.99"),
            ("10006", "1 Gbps", "$49.99"),
            ("10007", "900 Mbps", "$44.99"),
        ];
        let not_covered = ["90210", "12345"];

        let mut entries: HashMap<String, CoverageResult> = covered
            .into_iter()
            .map(|(zip, speed, price)| (zip.to_owned(), CoverageResult::available(speed, price)))
            .collect();
        entries.extend(
            not_covered
                .into_iter()
                .map(|zip| (zip.to_owned(), CoverageResult::unavailable())),
        );

        Self { entries }
    }

    /// Number of ZIPs with an explicit entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CoverageLookup for StaticCoverageTable {
    fn lookup_coverage(&self, zip: &ZipCode) -> CoverageResult {
        self.entries
            .get(zip.as_str())
            .cloned()
            .unwrap_or_else(CoverageResult::unavailable)
    }
}

/// A circular zone on the coverage map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageZone {
    /// Center x in map pixels.
    pub x: f64,
    /// Center y in map pixels.
    pub y: f64,
    /// Radius in map pixels.
    pub radius: f64,
    /// Signal strength in `0.0..=1.0`.
    pub strength: f64,
    /// ZIP code the zone represents.
    pub zip: String,
}

impl CoverageZone {
    /// Whether `(x, y)` lies inside the zone, boundary included.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (x - self.x).hypot(y - self.y) <= self.radius
    }

    /// Strength as a whole percentage.
    #[must_use]
    pub fn strength_percent(&self) -> u8 {
        strength_percent(self.strength)
    }
}

/// Convert a `0.0..=1.0` strength to a rounded percentage.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=100 first
pub fn strength_percent(strength: f64) -> u8 {
    (strength.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// The interactive coverage map's zones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CoverageMap {
    zones: Vec<CoverageZone>,
}

impl CoverageMap {
    /// Build a map from zones. Earlier zones win where they overlap.
    #[must_use]
    pub const fn new(zones: Vec<CoverageZone>) -> Self {
        Self { zones }
    }

    /// The launch-area map (an 800x400 canvas).
    #[must_use]
    pub fn launch_area() -> Self {
        let zones = [
            (150.0, 100.0, 80.0, 0.8, "10001"),
            (350.0, 150.0, 100.0, 0.9, "10002"),
            (500.0, 120.0, 60.0, 0.7, "10003"),
            (650.0, 180.0, 90.0, 0.85, "10004"),
            (200.0, 250.0, 70.0, 0.75, "10005"),
            (450.0, 280.0, 85.0, 0.8, "10006"),
            (600.0, 320.0, 95.0, 0.9, "10007"),
        ]
        .into_iter()
        .map(|(x, y, radius, strength, zip)| CoverageZone {
            x,
            y,
            radius,
            strength,
            zip: zip.to_owned(),
        })
        .collect();

        Self { zones }
    }

    /// First zone containing `(x, y)`, if any.
    #[must_use]
    pub fn find_zone(&self, x: f64, y: f64) -> Option<&CoverageZone> {
        self.zones.iter().find(|zone| zone.contains(x, y))
    }

    /// All zones in priority order.
    #[must_use]
    pub fn zones(&self) -> &[CoverageZone] {
        &self.zones
    }
}
