use chrono::{DateTime, Utc};
use serde::Serialize;

/// Time calculations for the next-kickoff countdown
pub struct CountdownService;

impl Default for CountdownService {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownService {
    pub fn new() -> Self {
        Self
    }

    /// Seconds from `now` until `kickoff`, floored at zero
    pub fn seconds_until(&self, kickoff: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        (kickoff - now).num_seconds().max(0)
    }

    /// Format countdown time in human-readable format
    pub fn format_countdown(&self, seconds: i64) -> String {
        if seconds <= 0 {
            return "Kick-off!".to_string();
        }

        let days = seconds / 86400;
        let hours = (seconds % 86400) / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        if days > 0 {
            format!("{}d {}h {}m {}s", days, hours, minutes, secs)
        } else if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, secs)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, secs)
        } else {
            format!("{}s", secs)
        }
    }

    /// Get detailed countdown breakdown
    pub fn breakdown(&self, kickoff: DateTime<Utc>, now: DateTime<Utc>) -> CountdownBreakdown {
        let seconds = self.seconds_until(kickoff, now);

        CountdownBreakdown {
            total_seconds: seconds,
            days: seconds / 86400,
            hours: (seconds % 86400) / 3600,
            minutes: (seconds % 3600) / 60,
            seconds: seconds % 60,
            formatted: self.format_countdown(seconds),
            kickoff,
            urgency: self.get_urgency_level(seconds),
        }
    }

    /// Get urgency level based on time remaining
    pub fn get_urgency_level(&self, seconds_remaining: i64) -> UrgencyLevel {
        match seconds_remaining {
            i64::MIN..=0 => UrgencyLevel::KickOff,
            1..=3600 => UrgencyLevel::Critical,      // Less than 1 hour
            3601..=21600 => UrgencyLevel::High,      // Less than 6 hours
            21601..=86400 => UrgencyLevel::Medium,   // Less than 1 day
            _ => UrgencyLevel::Low,
        }
    }
}

/// Detailed breakdown of countdown information
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountdownBreakdown {
    pub total_seconds: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub formatted: String,
    pub kickoff: DateTime<Utc>,
    pub urgency: UrgencyLevel,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    KickOff,
    Critical,
    High,
    Medium,
    Low,
}
