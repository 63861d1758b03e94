use crate::types::GeoCoordinates;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Known headquarters locations. Keys must match the company list verbatim.
static LOCATIONS: Lazy<HashMap<&'static str, GeoCoordinates>> = Lazy::new(|| {
    [
        ("San Jose, California", 37.334789, 121.888138),
        ("San Francisco, California", 37.774929, -122.419418),
        ("Chicago, Illinois", 41.878113, -87.629799),
        ("Atlanta, Georgia", 33.748997, -84.387985),
        ("Houston, Texas", 29.760427, -95.369804),
        ("New York, New York", 40.712776, -74.005974),
    ]
    .into_iter()
    .map(|(name, latitude, longitude)| (name, GeoCoordinates { latitude, longitude }))
    .collect()
});

/// Exact-match lookup, no case or whitespace normalization.
pub fn lookup_coordinates(location: &str) -> Option<GeoCoordinates> {
    LOCATIONS.get(location).copied()
}

pub fn known_locations() -> impl Iterator<Item = &'static str> {
    LOCATIONS.keys().copied()
}
