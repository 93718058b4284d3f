// ============================================================================
// Kominfo Core - Pegawai Entity
// File: crates/kominfo-core/src/domain/pegawai.rs
// Description: Employee directory (pegawai)
// ============================================================================

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::content::{check_link, clean_opt, ContentEntity};
use super::listing::Listable;
use crate::error::DomainError;

/// Length of a civil servant registration number (NIP).
pub const NIP_LENGTH: usize = 18;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pegawai {
    pub id: Uuid,
    pub name: String,
    pub nip: Option<String>,
    pub position: String,
    pub rank: Option<String>,
    pub unit: Option<String>,
    pub photo_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PegawaiInput {
    #[validate(length(min = 2, max = 150, message = "Name must be between 2 and 150 characters"))]
    pub name: String,

    pub nip: Option<String>,

    #[validate(length(min = 2, max = 150, message = "Position is required"))]
    pub position: String,

    /// Pangkat/golongan, e.g. "Pembina (IV/a)"
    pub rank: Option<String>,
    pub unit: Option<String>,
    pub photo_url: Option<String>,

    #[serde(default)]
    pub display_order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

fn is_valid_nip(nip: &str) -> bool {
    nip.len() == NIP_LENGTH && nip.chars().all(|c| c.is_ascii_digit())
}

impl PegawaiInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.name = self.name.trim().to_string();
        self.position = self.position.trim().to_string();
        // NIP is often typed with spaces between its segments
        self.nip = clean_opt(self.nip).map(|n| n.chars().filter(|c| !c.is_whitespace()).collect());
        self.rank = clean_opt(self.rank);
        self.unit = clean_opt(self.unit);
        self.photo_url = clean_opt(self.photo_url);
        self.validate()?;

        if let Some(nip) = &self.nip {
            if !is_valid_nip(nip) {
                return Err(DomainError::ValidationError(format!(
                    "nip: must be {} digits",
                    NIP_LENGTH
                )));
            }
        }
        check_link("photo_url", self.photo_url.as_deref())?;
        Ok(self)
    }
}

impl Listable for Pegawai {
    fn title(&self) -> &str {
        &self.name
    }

    fn search_text(&self) -> Option<&str> {
        Some(&self.position)
    }

    fn category(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn display_order(&self) -> i32 {
        self.display_order
    }
}

impl ContentEntity for Pegawai {
    type Input = PegawaiInput;
    const LABEL: &'static str = "Pegawai";

    fn from_input(input: PegawaiInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            nip: input.nip,
            position: input.position,
            rank: input.rank,
            unit: input.unit,
            photo_url: input.photo_url,
            display_order: input.display_order,
            is_active: input.is_active,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    fn apply_input(&mut self, input: PegawaiInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        self.name = input.name;
        self.nip = input.nip;
        self.position = input.position;
        self.rank = input.rank;
        self.unit = input.unit;
        self.photo_url = input.photo_url;
        self.display_order = input.display_order;
        self.is_active = input.is_active;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn is_public(&self, _now: DateTime<FixedOffset>) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(nip: Option<&str>) -> PegawaiInput {
        PegawaiInput {
            name: "Budi Santoso".to_string(),
            nip: nip.map(String::from),
            position: "Kepala Dinas".to_string(),
            rank: None,
            unit: Some("Sekretariat".to_string()),
            photo_url: None,
            display_order: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_nip_is_optional_but_must_have_18_digits() {
        assert!(Pegawai::from_input(input(None)).is_ok());
        assert!(Pegawai::from_input(input(Some("  "))).is_ok());
        assert!(Pegawai::from_input(input(Some("12345"))).is_err());
        assert!(Pegawai::from_input(input(Some("19750101 200001 1 001"))).is_ok());
        assert!(Pegawai::from_input(input(Some("19750101200001100A"))).is_err());
    }
}
