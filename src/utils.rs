//! Utility functions for the tournament service

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Round a value to two decimal places, ties away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate the absolute difference between two ratings, rounded to
/// two decimal places
pub fn rating_difference(rating1: f64, rating2: f64) -> f64 {
    round2((rating1 - rating2).abs())
}
