use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{ActivityType, Role, Shift};

/// Audit trail entry; user name and role are copied at write time so the feed
/// still reads correctly after a profile changes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub user_role: Role,
    pub activity_type: ActivityType,
    pub shift: Option<Shift>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub metadata: Option<Json>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
