use sea_orm::DatabaseConnection;

use crate::{
    model::bread_type::CreateBreadTypeDto,
    server::{
        data::bread_type::BreadTypeRepository,
        error::{validation::ValidationError, Error},
        model::db::BreadTypeModel,
        util::validate::{non_negative, require, require_text},
    },
};

/// Validate a new bread type, returning its name and unit price.
pub fn validate_bread_type(dto: CreateBreadTypeDto) -> Result<(String, f64), ValidationError> {
    let name = require_text(dto.name.as_deref(), "name")?;
    let unit_price = non_negative(require(dto.unit_price, "unit_price")?, "unit_price")?;

    Ok((name, unit_price))
}

pub struct BreadTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BreadTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_active(&self) -> Result<Vec<BreadTypeModel>, Error> {
        Ok(BreadTypeRepository::new(self.db).get_active().await?)
    }

    pub async fn create(&self, name: &str, unit_price: f64) -> Result<BreadTypeModel, Error> {
        let bread_type = BreadTypeRepository::new(self.db)
            .create(name, unit_price)
            .await?;

        tracing::info!("Added bread type {} ({})", bread_type.id, bread_type.name);

        Ok(bread_type)
    }
}
