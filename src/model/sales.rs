use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::Shift;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SalesLogDto {
    pub id: i32,
    pub bread_type_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub discount: f64,
    pub shift: Shift,
    pub recorded_by: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::sales_log::Model> for SalesLogDto {
    fn from(sale: entity::sales_log::Model) -> Self {
        Self {
            id: sale.id,
            bread_type_id: sale.bread_type_id,
            quantity: sale.quantity,
            unit_price: sale.unit_price,
            discount: sale.discount,
            shift: sale.shift,
            recorded_by: sale.recorded_by,
            created_at: sale.created_at,
        }
    }
}

/// Body of `POST /api/sales`
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateSaleDto {
    pub bread_type_id: Option<i32>,
    pub quantity: Option<i32>,
    /// Defaults to the bread type's current price
    pub unit_price: Option<f64>,
    pub discount: Option<f64>,
    /// Defaults to the session's shift
    pub shift: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SalesSummaryDto {
    pub record_count: u64,
    pub total_quantity: i64,
    pub gross_revenue: f64,
    pub total_discount: f64,
    pub net_revenue: f64,
    pub by_bread_type: Vec<BreadTypeSalesDto>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BreadTypeSalesDto {
    pub bread_type_id: i32,
    pub quantity: i64,
    /// Gross revenue less discounts
    pub net_revenue: f64,
}
