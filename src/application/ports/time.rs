// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for rows created by the service (comment timestamps).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
