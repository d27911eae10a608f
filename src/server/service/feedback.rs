use entity::sea_orm_active_enums::{ActivityType, Role, Shift};
use sea_orm::DatabaseConnection;

use crate::{
    model::feedback::{CreateFeedbackDto, FeedbackQuery},
    server::{
        data::shift_feedback::{FeedbackFilter, ShiftFeedbackRepository},
        error::{auth::AuthError, validation::ValidationError, Error},
        model::db::{ProfileModel, ShiftFeedbackModel},
        service::activity::{ActivityLogger, NewActivity},
        util::{
            shift::ShiftClock,
            validate::{parse_date, parse_shift, require_text},
        },
    },
};

/// Longest accepted feedback note, in characters
pub const MAX_NOTE_LENGTH: usize = 2000;

/// Validate a feedback submission, returning the shift and trimmed note.
pub fn validate_feedback(
    dto: CreateFeedbackDto,
    session_shift: Shift,
) -> Result<(Shift, String), ValidationError> {
    let shift = parse_shift(dto.shift.as_deref())?.unwrap_or(session_shift);
    let note = require_text(dto.note.as_deref(), "note")?;

    if note.chars().count() > MAX_NOTE_LENGTH {
        return Err(ValidationError::InvalidField {
            field: "note",
            reason: format!("must be at most {} characters", MAX_NOTE_LENGTH),
        });
    }

    Ok((shift, note))
}

/// Resolve list query parameters into a repository filter.
///
/// Sales reps may only read their own feedback; owners and managers read everyone's
/// unless `user_id` narrows it down.
pub fn feedback_filter(
    viewer: &ProfileModel,
    query: FeedbackQuery,
    clock: &ShiftClock,
) -> Result<FeedbackFilter, Error> {
    let shift = parse_shift(query.shift.as_deref())?;
    let date = parse_date(query.date.as_deref())?;

    let user_id = match (viewer.role, query.user_id) {
        (Role::SalesRep, Some(user_id)) if user_id != viewer.id => {
            return Err(AuthError::AccessDenied {
                user_id: viewer.id,
                role: viewer.role,
            }
            .into())
        }
        (Role::SalesRep, _) => Some(viewer.id),
        (Role::Owner | Role::Manager, user_id) => user_id,
    };

    let created_between = date.map(|date| {
        let day = clock.day_bounds(date);
        (day.start.naive_utc(), day.end.naive_utc())
    });

    Ok(FeedbackFilter {
        user_id,
        shift,
        created_between,
    })
}

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn submit(
        &self,
        actor: &ProfileModel,
        shift: Shift,
        note: &str,
        activity: &ActivityLogger,
    ) -> Result<ShiftFeedbackModel, Error> {
        let feedback = ShiftFeedbackRepository::new(self.db)
            .create(actor.id, shift, note)
            .await?;

        activity.log(
            NewActivity::new(
                actor,
                ActivityType::FeedbackSubmitted,
                format!("{} left feedback on the {:?} shift", actor.name, shift),
            )
            .with_shift(shift)
            .with_metadata(serde_json::json!({ "feedback_id": feedback.id })),
        );

        Ok(feedback)
    }

    pub async fn list(&self, filter: &FeedbackFilter) -> Result<Vec<ShiftFeedbackModel>, Error> {
        Ok(ShiftFeedbackRepository::new(self.db).list(filter).await?)
    }
}
