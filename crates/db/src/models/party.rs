//! Party entity models and DTOs.

use lexora_core::party::EntityKind;
use lexora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `parties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Party {
    pub id: DbId,
    pub case_id: DbId,
    pub party_type: String,
    pub entity_kind: String,
    pub person_name: Option<String>,
    pub company_name: Option<String>,
    pub created_at: Timestamp,
}

impl From<Party> for lexora_core::party::PartyRecord {
    fn from(row: Party) -> Self {
        Self {
            id: row.id,
            case_id: row.case_id,
            party_type: row.party_type,
            entity_kind: EntityKind::from_tag(&row.entity_kind),
            person_name: row.person_name,
            company_name: row.company_name,
        }
    }
}

/// DTO for creating a party on a case.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateParty {
    #[validate(length(min = 1))]
    pub party_type: String,
    pub entity_kind: Option<String>,
    pub person_name: Option<String>,
    pub company_name: Option<String>,
}

/// DTO for updating a party. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateParty {
    pub party_type: Option<String>,
    pub entity_kind: Option<String>,
    pub person_name: Option<String>,
    pub company_name: Option<String>,
}
