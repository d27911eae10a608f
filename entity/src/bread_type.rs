use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bread_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub unit_price: f64,
    pub is_active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::batch::Entity")]
    Batch,
    #[sea_orm(has_many = "super::sales_log::Entity")]
    SalesLog,
    #[sea_orm(has_many = "super::remaining_bread::Entity")]
    RemainingBread,
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::sales_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesLog.def()
    }
}

impl Related<super::remaining_bread::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RemainingBread.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
