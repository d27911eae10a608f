use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BatchStatus, Shift};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "batch")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bread_type_id: i32,
    pub batch_number: String,
    pub shift: Shift,
    pub status: BatchStatus,
    pub target_quantity: i32,
    pub actual_quantity: i32,
    pub notes: Option<String>,
    pub start_time: DateTime,
    pub end_time: Option<DateTime>,
    pub created_by: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bread_type::Entity",
        from = "Column::BreadTypeId",
        to = "super::bread_type::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    BreadType,
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::CreatedBy",
        to = "super::profile::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Profile,
}

impl Related<super::bread_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BreadType.def()
    }
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
