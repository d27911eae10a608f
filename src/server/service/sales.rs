use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ActivityType, Role, Shift};
use sea_orm::DatabaseConnection;

use crate::{
    model::sales::CreateSaleDto,
    server::{
        data::{
            bread_type::BreadTypeRepository,
            sales_log::{NewSale, SalesLogRepository},
        },
        error::{validation::ValidationError, Error},
        model::db::{ProfileModel, SalesLogModel},
        service::{
            activity::{ActivityLogger, NewActivity},
            stats::SalesSummary,
        },
        util::{
            shift::ShiftClock,
            validate::{non_negative, parse_shift, require},
        },
    },
};

/// Validated sale whose unit price may still have to come from the bread type.
#[derive(Clone, Debug, PartialEq)]
pub struct SaleInput {
    pub bread_type_id: i32,
    pub quantity: i32,
    pub unit_price: Option<f64>,
    pub discount: f64,
    pub shift: Shift,
}

impl SaleInput {
    /// `session_shift` is used when the body names no shift.
    pub fn from_dto(dto: CreateSaleDto, session_shift: Shift) -> Result<Self, ValidationError> {
        let bread_type_id = require(dto.bread_type_id, "bread_type_id")?;
        let quantity = require(dto.quantity, "quantity")?;
        if quantity <= 0 {
            return Err(ValidationError::InvalidField {
                field: "quantity",
                reason: "must be greater than 0".to_string(),
            });
        }

        let unit_price = dto
            .unit_price
            .map(|price| non_negative(price, "unit_price"))
            .transpose()?;
        let discount = non_negative(dto.discount.unwrap_or(0.0), "discount")?;
        let shift = parse_shift(dto.shift.as_deref())?.unwrap_or(session_shift);

        Ok(Self {
            bread_type_id,
            quantity,
            unit_price,
            discount,
            shift,
        })
    }
}

pub struct SalesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record a sale, priced at the bread type's current price unless one was given.
    pub async fn record(
        &self,
        actor: &ProfileModel,
        input: SaleInput,
        activity: &ActivityLogger,
    ) -> Result<SalesLogModel, Error> {
        let Some(bread_type) = BreadTypeRepository::new(self.db)
            .get(input.bread_type_id)
            .await?
        else {
            return Err(Error::NotFound(format!("Bread type {}", input.bread_type_id)));
        };

        let sale = SalesLogRepository::new(self.db)
            .create(&NewSale {
                bread_type_id: bread_type.id,
                quantity: input.quantity,
                unit_price: input.unit_price.unwrap_or(bread_type.unit_price),
                discount: input.discount,
                shift: input.shift,
                recorded_by: actor.id,
            })
            .await?;

        activity.log(
            NewActivity::new(
                actor,
                ActivityType::SaleRecorded,
                format!("Sold {} × {}", sale.quantity, bread_type.name),
            )
            .with_shift(sale.shift)
            .with_metadata(serde_json::json!({
                "sale_id": sale.id,
                "bread_type_id": sale.bread_type_id,
                "quantity": sale.quantity,
            })),
        );

        Ok(sale)
    }

    pub async fn list(&self, user_id: i32, shift: Option<Shift>) -> Result<Vec<SalesLogModel>, Error> {
        Ok(SalesLogRepository::new(self.db)
            .list_owned(user_id, shift)
            .await?)
    }

    /// Totals over the latest occurrence of `shift`.
    ///
    /// Owners and managers get the whole bakery's sales, sales reps only their own.
    pub async fn summary(
        &self,
        viewer: &ProfileModel,
        shift: Shift,
        clock: &ShiftClock,
        now: DateTime<Utc>,
    ) -> Result<SalesSummary, Error> {
        let window = clock.latest_window(shift, now);
        let recorded_by = match viewer.role {
            Role::Owner | Role::Manager => None,
            Role::SalesRep => Some(viewer.id),
        };

        let sales = SalesLogRepository::new(self.db)
            .list_recorded_between(
                shift,
                window.start.naive_utc(),
                window.end.naive_utc(),
                recorded_by,
            )
            .await?;

        Ok(SalesSummary::from_sales(&sales))
    }
}
