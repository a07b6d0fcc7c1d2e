//! Geolocation result attached to a visit.

use serde::Serialize;

/// Outcome of a geolocation lookup for one visit.
///
/// `is_empty` marks a lookup that was attempted but produced no geographic
/// data (private addresses, unknown ranges). Once stored, a location is not
/// changed by this layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitLocation {
    pub id: i64,
    pub country_code: String,
    pub country_name: String,
    pub region_name: String,
    pub city_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub is_empty: bool,
}

impl VisitLocation {
    /// A location recording a lookup that found nothing.
    pub fn empty(id: i64) -> Self {
        Self {
            id,
            country_code: String::new(),
            country_name: String::new(),
            region_name: String::new(),
            city_name: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: String::new(),
            is_empty: true,
        }
    }

    /// Marks the location as carrying real geographic data.
    pub fn resolved(mut self) -> Self {
        self.is_empty = false;
        self
    }
}
