//! Notification record definitions and per-record trigger rules.
//!
//! Defines the [`NotificationRecord`] type, the [`Frequency`] enum selecting
//! how its schedule is interpreted, and the decision logic that determines
//! whether a record fires at a given instant.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Maximum number of characters allowed in a title.
pub const MAX_TITLE_CHARS: usize = 125;

/// Maximum number of embedded line breaks allowed in a title.
pub const MAX_TITLE_LINE_BREAKS: usize = 3;

/// Visual severity of a notification. Affects presentation only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational reminder.
    #[default]
    Info,
    /// Warning.
    Warning,
    /// Important reminder.
    Important,
    /// Critical alert.
    Danger,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Important => write!(f, "important"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

/// How often a notification fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Fire once at an absolute date and time, then deactivate.
    Once,
    /// Fire once per calendar day at a given time of day.
    Daily,
    /// Fire every N minutes, measured from the last fire.
    Repeat,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Once => write!(f, "once"),
            Self::Daily => write!(f, "daily"),
            Self::Repeat => write!(f, "repeat"),
        }
    }
}

/// Why a record's schedule could not be evaluated.
///
/// A record that produces one of these is skipped for the tick; the rest of
/// the collection still evaluates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// `once` schedule whose datetime string does not parse.
    #[error("cannot parse datetime '{0}'")]
    BadDateTime(String),

    /// `daily` schedule whose `HH:MM` string does not parse.
    #[error("cannot parse time of day '{0}'")]
    BadTimeOfDay(String),

    /// `repeat` schedule with a zero interval.
    #[error("repeat interval must be at least 1 minute")]
    ZeroInterval,
}

/// Why a title was rejected at the edit boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    /// Empty or whitespace-only title.
    #[error("title is empty")]
    Empty,

    /// Title longer than [`MAX_TITLE_CHARS`] characters.
    #[error("title exceeds {MAX_TITLE_CHARS} characters")]
    TooLong,

    /// Title with more than [`MAX_TITLE_LINE_BREAKS`] line breaks.
    #[error("title has more than {MAX_TITLE_LINE_BREAKS} line breaks")]
    TooManyLines,
}

/// Validate a title against the edit-boundary limits.
///
/// The engine itself never checks titles; callers must reject invalid input
/// before a record reaches the collection.
pub fn validate_title(title: &str) -> Result<(), TitleError> {
    if title.trim().is_empty() {
        return Err(TitleError::Empty);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(TitleError::TooLong);
    }
    if title.matches('\n').count() > MAX_TITLE_LINE_BREAKS {
        return Err(TitleError::TooManyLines);
    }
    Ok(())
}

/// One user-defined reminder and its trigger history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Short display title. Limits enforced by [`validate_title`] at the
    /// edit boundary, not here.
    pub title: String,

    /// Free text body shown in the popup.
    #[serde(default)]
    pub content: String,

    /// Visual severity.
    #[serde(rename = "type", default)]
    pub severity: Severity,

    /// Firing cadence; selects how [`scheduled_time`](Self::scheduled_time)
    /// is interpreted.
    pub frequency: Frequency,

    /// Schedule payload: ISO-8601 local datetime for `once`, `HH:MM` for
    /// `daily`, unused for `repeat`. Kept as text so malformed data
    /// surfaces as a per-record [`ScheduleError`] instead of a load failure.
    #[serde(default)]
    pub scheduled_time: String,

    /// Minutes between fires when `frequency` is `repeat`.
    #[serde(default = "default_repeat_interval")]
    pub repeat_interval_minutes: u32,

    /// Inactive records are skipped by the engine entirely.
    #[serde(default = "default_active")]
    pub active: bool,

    /// Creation timestamp; never modified after construction.
    pub created_at: NaiveDateTime,

    /// Stamped on every create, edit, and toggle.
    pub updated_at: NaiveDateTime,

    /// Set by the engine when this record fires; cleared whenever the
    /// schedule is edited so the record can re-fire under the new rule.
    #[serde(default)]
    pub last_triggered_at: Option<NaiveDateTime>,
}

fn default_repeat_interval() -> u32 {
    1
}

fn default_active() -> bool {
    true
}

impl NotificationRecord {
    /// Create a new active record, stamping both timestamps with `now`.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        severity: Severity,
        frequency: Frequency,
        scheduled_time: impl Into<String>,
        repeat_interval_minutes: u32,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            severity,
            frequency,
            scheduled_time: scheduled_time.into(),
            repeat_interval_minutes,
            active: true,
            created_at: now,
            updated_at: now,
            last_triggered_at: None,
        }
    }

    /// Replace the user-editable fields of this record.
    ///
    /// Re-stamps `updated_at`, re-activates the record, and clears
    /// `last_triggered_at` so the edited schedule is immediately eligible
    /// to fire.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_edit(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        severity: Severity,
        frequency: Frequency,
        scheduled_time: impl Into<String>,
        repeat_interval_minutes: u32,
        now: NaiveDateTime,
    ) {
        self.title = title.into();
        self.content = content.into();
        self.severity = severity;
        self.frequency = frequency;
        self.scheduled_time = scheduled_time.into();
        self.repeat_interval_minutes = repeat_interval_minutes;
        self.active = true;
        self.updated_at = now;
        self.last_triggered_at = None;
    }

    /// Enable or disable this record, stamping `updated_at`.
    pub fn set_active(&mut self, active: bool, now: NaiveDateTime) {
        self.active = active;
        self.updated_at = now;
    }

    /// Returns `true` if this record should fire at `now`.
    ///
    /// Inactive records never fire. Malformed schedule data yields a
    /// [`ScheduleError`] so the caller can skip this record without
    /// aborting the tick.
    pub fn due_at(&self, now: NaiveDateTime) -> Result<bool, ScheduleError> {
        if !self.active {
            return Ok(false);
        }

        match self.frequency {
            Frequency::Once => {
                let scheduled: NaiveDateTime = self
                    .scheduled_time
                    .parse()
                    .map_err(|_| ScheduleError::BadDateTime(self.scheduled_time.clone()))?;
                Ok(now >= scheduled && self.last_triggered_at.is_none())
            }
            Frequency::Daily => {
                let time = NaiveTime::parse_from_str(&self.scheduled_time, "%H:%M")
                    .map_err(|_| ScheduleError::BadTimeOfDay(self.scheduled_time.clone()))?;
                let target = now.date().and_time(time);
                if now < target {
                    return Ok(false);
                }
                Ok(match self.last_triggered_at {
                    None => true,
                    Some(last) => last.date() < now.date(),
                })
            }
            Frequency::Repeat => {
                if self.repeat_interval_minutes == 0 {
                    return Err(ScheduleError::ZeroInterval);
                }
                let anchor = self.last_triggered_at.unwrap_or(self.created_at);
                Ok(now >= anchor + Duration::minutes(i64::from(self.repeat_interval_minutes)))
            }
        }
    }

    /// Record a fire at `now`.
    ///
    /// `once` records go permanently inactive; firing them is terminal.
    pub fn mark_fired(&mut self, now: NaiveDateTime) {
        self.last_triggered_at = Some(now);
        if self.frequency == Frequency::Once {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn once_record(scheduled: &str) -> NotificationRecord {
        NotificationRecord::new(
            "Pay invoice",
            "Invoice #42 is due",
            Severity::Warning,
            Frequency::Once,
            scheduled,
            1,
            dt("2023-12-01T08:00:00"),
        )
    }

    fn daily_record(time: &str) -> NotificationRecord {
        NotificationRecord::new(
            "Stand-up",
            "Daily stand-up meeting",
            Severity::Info,
            Frequency::Daily,
            time,
            1,
            dt("2024-02-01T08:00:00"),
        )
    }

    fn repeat_record(minutes: u32, created: &str) -> NotificationRecord {
        NotificationRecord::new(
            "Stretch",
            "Stand up and stretch",
            Severity::Info,
            Frequency::Repeat,
            "",
            minutes,
            dt(created),
        )
    }

    #[test]
    fn new_record_defaults() {
        let record = once_record("2024-01-01T10:00:00");
        assert!(record.active);
        assert!(record.last_triggered_at.is_none());
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn once_fires_at_scheduled_time_and_goes_inactive() {
        let mut record = once_record("2024-01-01T10:00:00");
        assert!(!record.due_at(dt("2024-01-01T09:59:00")).unwrap());
        assert!(record.due_at(dt("2024-01-01T10:00:01")).unwrap());

        record.mark_fired(dt("2024-01-01T10:00:01"));
        assert!(!record.active);
        assert_eq!(record.last_triggered_at, Some(dt("2024-01-01T10:00:01")));
        // Firing is terminal: even with active forced back on, the stored
        // trigger blocks a second fire.
        record.active = true;
        assert!(!record.due_at(dt("2024-01-02T10:00:01")).unwrap());
    }

    #[test]
    fn once_fires_exactly_at_boundary() {
        let record = once_record("2024-01-01T10:00:00");
        assert!(record.due_at(dt("2024-01-01T10:00:00")).unwrap());
    }

    #[test]
    fn daily_fires_once_per_calendar_day() {
        let mut record = daily_record("09:00");
        record.last_triggered_at = Some(dt("2024-03-01T09:00:05"));

        // Same day, hours later: already fired today.
        assert!(!record.due_at(dt("2024-03-01T18:00:00")).unwrap());
        // Next day, past the target: re-armed at midnight.
        assert!(record.due_at(dt("2024-03-02T09:00:01")).unwrap());
        // Next day, before the target.
        assert!(!record.due_at(dt("2024-03-03T08:59:59")).unwrap());
    }

    #[test]
    fn daily_never_fired_fires_after_target() {
        let record = daily_record("09:00");
        assert!(!record.due_at(dt("2024-03-01T08:59:59")).unwrap());
        assert!(record.due_at(dt("2024-03-01T09:00:00")).unwrap());
    }

    #[test]
    fn repeat_measures_from_creation_before_first_fire() {
        let record = repeat_record(30, "2024-01-01T00:00:00");
        assert!(!record.due_at(dt("2024-01-01T00:29:59")).unwrap());
        assert!(record.due_at(dt("2024-01-01T00:30:00")).unwrap());
    }

    #[test]
    fn repeat_measures_from_last_fire_afterwards() {
        let mut record = repeat_record(30, "2024-01-01T00:00:00");
        record.mark_fired(dt("2024-01-01T00:31:12"));
        assert!(record.active);

        assert!(!record.due_at(dt("2024-01-01T01:01:11")).unwrap());
        assert!(record.due_at(dt("2024-01-01T01:01:12")).unwrap());
    }

    #[test]
    fn repeat_zero_interval_is_a_schedule_error() {
        let mut record = repeat_record(1, "2024-01-01T00:00:00");
        record.repeat_interval_minutes = 0;
        assert_eq!(
            record.due_at(dt("2024-01-02T00:00:00")),
            Err(ScheduleError::ZeroInterval)
        );
    }

    #[test]
    fn inactive_record_never_fires() {
        let mut record = once_record("2024-01-01T10:00:00");
        record.set_active(false, dt("2024-01-01T09:00:00"));
        assert!(!record.due_at(dt("2024-01-01T11:00:00")).unwrap());
        assert_eq!(record.updated_at, dt("2024-01-01T09:00:00"));
    }

    #[test]
    fn malformed_once_datetime_errors() {
        let record = once_record("not-a-datetime");
        assert_eq!(
            record.due_at(dt("2024-01-01T10:00:00")),
            Err(ScheduleError::BadDateTime("not-a-datetime".to_owned()))
        );
    }

    #[test]
    fn malformed_daily_time_errors() {
        let record = daily_record("25:99");
        assert!(matches!(
            record.due_at(dt("2024-01-01T10:00:00")),
            Err(ScheduleError::BadTimeOfDay(_))
        ));
    }

    #[test]
    fn apply_edit_clears_trigger_and_reactivates() {
        let mut record = once_record("2024-01-01T10:00:00");
        record.mark_fired(dt("2024-01-01T10:00:01"));
        assert!(!record.active);

        record.apply_edit(
            "Pay invoice",
            "Invoice #42 is due",
            Severity::Danger,
            Frequency::Once,
            "2024-02-01T10:00:00",
            1,
            dt("2024-01-05T12:00:00"),
        );

        assert!(record.active);
        assert!(record.last_triggered_at.is_none());
        assert_eq!(record.updated_at, dt("2024-01-05T12:00:00"));
        assert_eq!(record.created_at, dt("2023-12-01T08:00:00"));
        // Immediately eligible under the new schedule.
        assert!(record.due_at(dt("2024-02-01T10:00:00")).unwrap());
    }

    #[test]
    fn validate_title_limits() {
        assert_eq!(validate_title(""), Err(TitleError::Empty));
        assert_eq!(validate_title("   "), Err(TitleError::Empty));
        assert!(validate_title("Pay invoice").is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_CHARS)).is_ok());
        assert_eq!(
            validate_title(&"x".repeat(MAX_TITLE_CHARS + 1)),
            Err(TitleError::TooLong)
        );
        assert!(validate_title("a\nb\nc\nd").is_ok());
        assert_eq!(validate_title("a\nb\nc\nd\ne"), Err(TitleError::TooManyLines));
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let record = once_record("2024-01-01T10:00:00");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["frequency"], "once");
        assert_eq!(json["scheduled_time"], "2024-01-01T10:00:00");
        assert_eq!(json["active"], true);
        assert!(json["last_triggered_at"].is_null());
    }

    #[test]
    fn record_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "title": "Backup",
            "frequency": "repeat",
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        }"#;
        let record: NotificationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.content, "");
        assert_eq!(record.severity, Severity::Info);
        assert_eq!(record.repeat_interval_minutes, 1);
        assert!(record.active);
        assert!(record.last_triggered_at.is_none());
    }

    #[test]
    fn record_deserializes_tolerating_unknown_fields() {
        let json = r#"{
            "title": "Backup",
            "frequency": "daily",
            "scheduled_time": "03:30",
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00",
            "color": "teal",
            "snooze_count": 4
        }"#;
        let record: NotificationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.scheduled_time, "03:30");
    }

    #[test]
    fn frequency_and_severity_display() {
        assert_eq!(Frequency::Once.to_string(), "once");
        assert_eq!(Frequency::Daily.to_string(), "daily");
        assert_eq!(Frequency::Repeat.to_string(), "repeat");
        assert_eq!(Severity::Danger.to_string(), "danger");
    }
}
