//! Meeting record domain model
//!
//! The persisted transcript/summary/metadata bundle that the export pipeline
//! turns into documents. The repository collaborator owns persistence; this
//! module owns the shape and its construction rules.

use crate::domain::ids::MeetingId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One utterance in a meeting transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Who spoke
    pub speaker: String,

    /// What was said
    pub text: String,

    /// Offset from meeting start, e.g. "00:14:05"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl TranscriptSegment {
    /// Create a segment without a timestamp
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            timestamp: None,
        }
    }
}

/// A follow-up item captured during the meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// What needs to happen
    pub description: String,

    /// Who owns it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Free-form due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
}

impl ActionItem {
    /// Create an unowned action item
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            owner: None,
            due: None,
        }
    }

    /// Set the owner
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the due date
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }
}

/// A stored meeting record
///
/// Immutable input to the export pipeline. Use [`MeetingBuilder`] to
/// construct one with validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Unique identifier
    pub id: MeetingId,

    /// Meeting title
    pub title: String,

    /// When the meeting took place
    pub occurred_at: DateTime<Utc>,

    /// Duration in minutes, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,

    /// Participant names
    #[serde(default)]
    pub participants: Vec<String>,

    /// Full transcript, in utterance order
    #[serde(default)]
    pub transcript: Vec<TranscriptSegment>,

    /// Generated or hand-written summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Key discussion points
    #[serde(default)]
    pub key_points: Vec<String>,

    /// Captured follow-ups
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
}

/// Builder for [`Meeting`]
///
/// # Examples
///
/// ```
/// use dossier::domain::meeting::MeetingBuilder;
/// use chrono::Utc;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let meeting = MeetingBuilder::new()
///     .id("weekly-sync")?
///     .title("Weekly Sync")
///     .occurred_at(Utc::now())
///     .participant("Ada")
///     .summary("Short week, short sync.")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MeetingBuilder {
    id: Option<MeetingId>,
    title: Option<String>,
    occurred_at: Option<DateTime<Utc>>,
    duration_minutes: Option<u32>,
    participants: Vec<String>,
    transcript: Vec<TranscriptSegment>,
    summary: Option<String>,
    key_points: Vec<String>,
    action_items: Vec<ActionItem>,
}

impl MeetingBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the meeting id
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty
    pub fn id(mut self, id: impl Into<String>) -> Result<Self, String> {
        self.id = Some(MeetingId::new(id)?);
        Ok(self)
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the meeting time
    pub fn occurred_at(mut self, at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(at);
        self
    }

    /// Set the duration in minutes
    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Add a participant
    pub fn participant(mut self, name: impl Into<String>) -> Self {
        self.participants.push(name.into());
        self
    }

    /// Append a transcript segment
    pub fn segment(mut self, segment: TranscriptSegment) -> Self {
        self.transcript.push(segment);
        self
    }

    /// Set the summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Add a key point
    pub fn key_point(mut self, point: impl Into<String>) -> Self {
        self.key_points.push(point.into());
        self
    }

    /// Add an action item
    pub fn action_item(mut self, item: ActionItem) -> Self {
        self.action_items.push(item);
        self
    }

    /// Build the meeting
    ///
    /// # Errors
    ///
    /// Returns an error if the id or title is missing, or the title is empty
    pub fn build(self) -> Result<Meeting, String> {
        let id = self.id.ok_or("Meeting id is required")?;
        let title = self.title.ok_or("Meeting title is required")?;
        if title.trim().is_empty() {
            return Err("Meeting title cannot be empty".to_string());
        }

        Ok(Meeting {
            id,
            title,
            occurred_at: self.occurred_at.unwrap_or_else(Utc::now),
            duration_minutes: self.duration_minutes,
            participants: self.participants,
            transcript: self.transcript,
            summary: self.summary,
            key_points: self.key_points,
            action_items: self.action_items,
        })
    }
}
