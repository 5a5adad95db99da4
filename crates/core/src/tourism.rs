//! Tourist guide: city -> attractions, sliced by time of day.

use serde::Serialize;
use std::collections::HashMap;

use crate::context::{TimeContext, UNKNOWN};

/// Static city -> attraction mapping with an `"Unknown"` fallback entry.
#[derive(Debug, Clone)]
pub struct TouristCatalog {
    cities: HashMap<&'static str, Vec<&'static str>>,
}

impl TouristCatalog {
    /// The catalog the assistant ships with.
    pub fn builtin() -> Self {
        let cities = HashMap::from([
            (
                "Chennai",
                vec!["🏖 Marina Beach", "🛕 Kapaleeshwarar Temple", "🏰 Fort St. George"],
            ),
            (
                "Bengaluru",
                vec!["🌳 Lalbagh Botanical Garden", "🏯 Bangalore Palace", "🛰 ISRO Museum"],
            ),
            ("Delhi", vec!["🕌 India Gate", "🏛 Qutub Minar", "🏰 Red Fort"]),
            (
                "Mumbai",
                vec!["🌊 Marine Drive", "🎥 Bollywood Studio Tour", "🕍 Gateway of India"],
            ),
            (UNKNOWN, vec!["🌍 Explore global tourist spots online!"]),
        ]);
        Self { cities }
    }

    /// Attractions for `city`, or the fallback entry when the city is absent.
    pub fn spots_for(&self, city: &str) -> &[&'static str] {
        self.cities
            .get(city)
            .or_else(|| self.cities.get(UNKNOWN))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Known city names (fallback excluded), sorted.
    pub fn cities(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .cities
            .keys()
            .copied()
            .filter(|c| *c != UNKNOWN)
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for TouristCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A guide message plus the attractions worth visiting right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TouristRecommendation {
    pub message: String,
    pub spots: Vec<String>,
}

/// Pick a message and a slice of attractions for `city` at `time`.
///
/// Morning takes the first two spots, Evening takes all of them, and every
/// other bucket takes the last two. Short lists yield whatever exists.
pub fn recommend_spots(city: &str, time: TimeContext, catalog: &TouristCatalog) -> TouristRecommendation {
    let spots = catalog.spots_for(city);

    let (message, selected) = match time {
        TimeContext::Morning => (
            format!("🌅 Great time to explore outdoors in {city}!"),
            &spots[..spots.len().min(2)],
        ),
        TimeContext::Evening => (
            format!("🌆 Evening vibes in {city}! Perfect for sightseeing."),
            spots,
        ),
        TimeContext::Afternoon | TimeContext::Night => (
            format!("🌙 In {city}? Night walks and cultural shows are best now."),
            &spots[spots.len().saturating_sub(2)..],
        ),
    };

    TouristRecommendation {
        message,
        spots: selected.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morning_takes_first_two() {
        let rec = recommend_spots("Chennai", TimeContext::Morning, &TouristCatalog::builtin());
        assert_eq!(rec.spots, vec!["🏖 Marina Beach", "🛕 Kapaleeshwarar Temple"]);
        assert!(rec.message.contains("Chennai"));
        assert!(rec.message.contains("explore outdoors"));
    }

    #[test]
    fn evening_takes_everything() {
        let rec = recommend_spots("Chennai", TimeContext::Evening, &TouristCatalog::builtin());
        assert_eq!(rec.spots.len(), 3);
        assert_eq!(rec.spots[2], "🏰 Fort St. George");
        assert!(rec.message.contains("sightseeing"));
    }

    #[test]
    fn afternoon_and_night_take_last_two() {
        let catalog = TouristCatalog::builtin();
        for time in [TimeContext::Afternoon, TimeContext::Night] {
            let rec = recommend_spots("Delhi", time, &catalog);
            assert_eq!(rec.spots, vec!["🏛 Qutub Minar", "🏰 Red Fort"]);
            assert!(rec.message.contains("Night walks"));
        }
    }

    #[test]
    fn unknown_city_falls_back_without_panicking() {
        let catalog = TouristCatalog::builtin();
        let rec = recommend_spots("Atlantis", TimeContext::Night, &catalog);
        assert_eq!(rec.spots, vec!["🌍 Explore global tourist spots online!"]);
        assert!(rec.message.contains("Atlantis"));

        let rec = recommend_spots("Atlantis", TimeContext::Morning, &catalog);
        assert_eq!(rec.spots.len(), 1);
    }

    #[test]
    fn city_lookup_is_exact() {
        let catalog = TouristCatalog::builtin();
        assert_eq!(catalog.spots_for("chennai").len(), 1);
        assert_eq!(catalog.spots_for("Mumbai").len(), 3);
    }

    #[test]
    fn lists_known_cities() {
        let cities = TouristCatalog::builtin().cities();
        assert_eq!(cities, vec!["Bengaluru", "Chennai", "Delhi", "Mumbai"]);
    }
}
