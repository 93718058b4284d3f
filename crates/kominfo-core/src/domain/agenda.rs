// ============================================================================
// Kominfo Core - Agenda Entity
// File: crates/kominfo-core/src/domain/agenda.rs
// Description: Agenda items (kegiatan) and day grouping for the public calendar
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::content::{check_link, clean_opt, ContentEntity};
use super::listing::Listable;
use crate::error::DomainError;

/// How attendees join an agenda item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgendaMode {
    #[default]
    Offline,
    Online,
    Hybrid,
}

impl AgendaMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgendaMode::Offline => "offline",
            AgendaMode::Online => "online",
            AgendaMode::Hybrid => "hybrid",
        }
    }

    pub fn needs_link(&self) -> bool {
        matches!(self, AgendaMode::Online | AgendaMode::Hybrid)
    }

    pub fn needs_location(&self) -> bool {
        matches!(self, AgendaMode::Offline | AgendaMode::Hybrid)
    }
}

impl fmt::Display for AgendaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgendaMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offline" => Ok(AgendaMode::Offline),
            "online" => Ok(AgendaMode::Online),
            "hybrid" => Ok(AgendaMode::Hybrid),
            other => Err(DomainError::ValidationError(format!("mode: unknown mode '{}'", other))),
        }
    }
}

/// Agenda item (`agenda`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agenda {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub mode: AgendaMode,
    pub link_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AgendaInput {
    #[validate(length(min = 3, max = 255, message = "Title must be between 3 and 255 characters"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(length(max = 255, message = "Location too long"))]
    pub location: Option<String>,

    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub mode: AgendaMode,

    pub link_url: Option<String>,

    #[serde(default = "default_true")]
    pub is_published: bool,
}

fn default_true() -> bool {
    true
}

impl AgendaInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.title = self.title.trim().to_string();
        self.description = clean_opt(self.description);
        self.location = clean_opt(self.location);
        self.link_url = clean_opt(self.link_url);
        self.validate()?;

        if let Some(end) = self.end_at {
            if end < self.start_at {
                return Err(DomainError::ValidationError("end_at: must not be before start_at".into()));
            }
        }
        if self.mode.needs_link() && self.link_url.is_none() {
            return Err(DomainError::ValidationError(format!(
                "link_url: is required for {} agenda",
                self.mode
            )));
        }
        if self.mode.needs_location() && self.location.is_none() {
            return Err(DomainError::ValidationError(format!(
                "location: is required for {} agenda",
                self.mode
            )));
        }
        check_link("link_url", self.link_url.as_deref())?;
        Ok(self)
    }
}

impl Agenda {
    pub fn local_date(&self, offset: &FixedOffset) -> NaiveDate {
        self.start_at.with_timezone(offset).date_naive()
    }
}

impl Listable for Agenda {
    fn title(&self) -> &str {
        &self.title
    }

    fn search_text(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn category(&self) -> Option<&str> {
        Some(self.mode.as_str())
    }

    fn year(&self) -> Option<String> {
        Some(self.start_at.year().to_string())
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.start_at
    }
}

impl ContentEntity for Agenda {
    type Input = AgendaInput;
    const LABEL: &'static str = "Agenda";

    fn from_input(input: AgendaInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            location: input.location,
            start_at: input.start_at,
            end_at: input.end_at,
            mode: input.mode,
            link_url: input.link_url,
            is_published: input.is_published,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn apply_input(&mut self, input: AgendaInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        self.title = input.title;
        self.description = input.description;
        self.location = input.location;
        self.start_at = input.start_at;
        self.end_at = input.end_at;
        self.mode = input.mode;
        self.link_url = input.link_url;
        self.is_published = input.is_published;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn is_public(&self, _now: DateTime<FixedOffset>) -> bool {
        self.is_published
    }
}

/// Agenda items sharing one local calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct AgendaDay {
    pub date: NaiveDate,
    pub items: Vec<Agenda>,
}

/// Groups by local date of `start_at`. Groups follow the order in which their
/// first item appears; items keep their input order inside a group.
pub fn group_agenda_by_day(items: Vec<Agenda>, offset: FixedOffset) -> Vec<AgendaDay> {
    let mut days: Vec<AgendaDay> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for item in items {
        let date = item.local_date(&offset);
        match index.get(&date) {
            Some(&i) => days[i].items.push(item),
            None => {
                index.insert(date, days.len());
                days.push(AgendaDay { date, items: vec![item] });
            }
        }
    }
    days
}
