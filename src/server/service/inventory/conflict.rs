//! Detection of likely re-submitted remaining stock counts.
//!
//! A count for a bread type and shift is suspicious when no record exists for it yet
//! today but an earlier day holds exactly the same quantity: staff most likely sent a
//! stale form again instead of a fresh count.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::Shift;
use sea_orm::ConnectionTrait;

use crate::{
    model::inventory::{ConflictDto, ConflictReportDto, RemainingItemDto},
    server::{data::remaining_bread::RemainingBreadRepository, error::Error},
};

/// One remaining stock count to be checked
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictCandidate {
    pub bread_type_id: i32,
    pub shift: Shift,
    pub quantity: i32,
    pub recorded_by: i32,
}

pub struct ConflictChecker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConflictChecker<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Check `candidates` for `today` without writing anything.
    ///
    /// Per candidate, a record already existing for today means the write updates it in
    /// place and is never a conflict. Otherwise the most recent earlier record with the
    /// same quantity, if any, is reported. At most two queries run per candidate.
    pub async fn check(
        &self,
        today: NaiveDate,
        candidates: &[ConflictCandidate],
    ) -> Result<ConflictReportDto, Error> {
        let repo = RemainingBreadRepository::new(self.db);
        let mut conflicts = Vec::new();

        for candidate in candidates {
            if repo
                .find_for_date(candidate.bread_type_id, candidate.shift, today)
                .await?
                .is_some()
            {
                continue;
            }

            let previous = repo
                .latest_before_with_quantity(
                    candidate.bread_type_id,
                    candidate.shift,
                    today,
                    candidate.quantity,
                )
                .await?;

            if let Some(previous) = previous {
                conflicts.push(ConflictDto {
                    identifier: candidate.bread_type_id,
                    quantity: candidate.quantity,
                    existing_date: previous.record_date,
                    original_input: RemainingItemDto {
                        bread_type_id: candidate.bread_type_id,
                        quantity: candidate.quantity,
                    },
                });
            }
        }

        Ok(ConflictReportDto {
            has_conflicts: !conflicts.is_empty(),
            conflicts,
        })
    }
}
