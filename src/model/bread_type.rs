use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BreadTypeDto {
    pub id: i32,
    pub name: String,
    pub unit_price: f64,
    pub is_active: bool,
}

impl From<entity::bread_type::Model> for BreadTypeDto {
    fn from(bread_type: entity::bread_type::Model) -> Self {
        Self {
            id: bread_type.id,
            name: bread_type.name,
            unit_price: bread_type.unit_price,
            is_active: bread_type.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateBreadTypeDto {
    pub name: Option<String>,
    pub unit_price: Option<f64>,
}
