//! Context value types.
//!
//! A context is one categorical fact about the current environment: the
//! time-of-day bucket, the approximate location, the device, the network
//! address, and the role the user picked. Every fact is recomputed on each
//! render; none of them is ever mutated after construction.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Sentinel for a location field the geolocation lookup could not supply.
pub const UNKNOWN: &str = "Unknown";

/// Sentinel for a network address that could not be resolved.
pub const UNAVAILABLE: &str = "Unavailable";

/// Time-of-day bucket derived from a 24-hour clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeContext {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeContext {
    pub const ALL: [TimeContext; 4] = [
        TimeContext::Morning,
        TimeContext::Afternoon,
        TimeContext::Evening,
        TimeContext::Night,
    ];

    /// Bucket an hour: [5,12) Morning, [12,17) Afternoon, [17,21) Evening,
    /// everything else Night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeContext::Morning,
            12..=16 => TimeContext::Afternoon,
            17..=20 => TimeContext::Evening,
            _ => TimeContext::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeContext::Morning => "Morning",
            TimeContext::Afternoon => "Afternoon",
            TimeContext::Evening => "Evening",
            TimeContext::Night => "Night",
        }
    }
}

impl std::fmt::Display for TimeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeContext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeContext::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownTimeContext(s.to_string()))
    }
}

impl TryFrom<String> for TimeContext {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Resolve the time context for a clock reading.
pub fn resolve_time_context<T: Timelike>(now: &T) -> TimeContext {
    TimeContext::from_hour(now.hour())
}

/// The role the user selected. There is no other source of truth for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Role {
    Student,
    Professor,
    Developer,
    #[default]
    Guest,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Student, Role::Professor, Role::Developer, Role::Guest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Professor => "Professor",
            Role::Developer => "Developer",
            Role::Guest => "Guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Approximate location reported by the geolocation lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationContext {
    pub city: String,
    pub country: String,
}

impl LocationContext {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }

    /// Both fields set to the "Unknown" sentinel.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN)
    }
}

impl std::fmt::Display for LocationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// The facts gathered from live collaborators for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentFacts {
    pub location: LocationContext,
    /// `"<system-name> - <release-version>"`, informational only.
    pub device: String,
    /// Local IP address, or [`UNAVAILABLE`].
    pub network: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn every_hour_maps_to_exactly_one_bucket() {
        let predicates: [(TimeContext, fn(u32) -> bool); 4] = [
            (TimeContext::Morning, |h| (5..12).contains(&h)),
            (TimeContext::Afternoon, |h| (12..17).contains(&h)),
            (TimeContext::Evening, |h| (17..21).contains(&h)),
            (TimeContext::Night, |h| !(5..21).contains(&h)),
        ];

        for hour in 0..24 {
            let matching: Vec<_> = predicates
                .iter()
                .filter(|(_, p)| p(hour))
                .map(|(t, _)| *t)
                .collect();
            assert_eq!(matching.len(), 1, "hour {hour} must hit one bucket");
            assert_eq!(TimeContext::from_hour(hour), matching[0]);
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(TimeContext::from_hour(0), TimeContext::Night);
        assert_eq!(TimeContext::from_hour(4), TimeContext::Night);
        assert_eq!(TimeContext::from_hour(5), TimeContext::Morning);
        assert_eq!(TimeContext::from_hour(11), TimeContext::Morning);
        assert_eq!(TimeContext::from_hour(12), TimeContext::Afternoon);
        assert_eq!(TimeContext::from_hour(17), TimeContext::Evening);
        assert_eq!(TimeContext::from_hour(20), TimeContext::Evening);
        assert_eq!(TimeContext::from_hour(21), TimeContext::Night);
        assert_eq!(TimeContext::from_hour(23), TimeContext::Night);
    }

    #[test]
    fn resolves_from_clock_reading() {
        let noon = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        assert_eq!(resolve_time_context(&noon), TimeContext::Afternoon);
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("developer".parse::<Role>().unwrap(), Role::Developer);
        assert_eq!(" GUEST ".parse::<Role>().unwrap(), Role::Guest);
        assert!("UnknownRole".parse::<Role>().is_err());
    }

    #[test]
    fn role_deserializes_through_parser() {
        let role: Role = serde_json::from_str("\"professor\"").unwrap();
        assert_eq!(role, Role::Professor);
        assert!(serde_json::from_str::<Role>("\"Janitor\"").is_err());
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"Student\"");
    }

    #[test]
    fn location_display_and_sentinels() {
        assert_eq!(LocationContext::new("Chennai", "IN").to_string(), "Chennai, IN");
        assert_eq!(LocationContext::unknown().to_string(), "Unknown, Unknown");
    }
}
