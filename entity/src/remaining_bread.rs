use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Shift;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "remaining_bread")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bread_type_id: i32,
    pub shift: Shift,
    pub quantity: i32,
    pub unit_price: f64,
    pub record_date: Date,
    pub recorded_by: i32,
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
        from = "Column::RecordedBy",
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
