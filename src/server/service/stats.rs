//! Pure reductions of batch and sales records into summary figures.
//!
//! Every function here works on records already fetched and is independent of input
//! order: the same records always produce the same output.

use std::collections::BTreeMap;

use entity::sea_orm_active_enums::{BatchStatus, Shift};

use crate::{
    model::{
        batch::{BatchStatsDto, ShiftBreakdownDto},
        sales::{BreadTypeSalesDto, SalesSummaryDto},
    },
    server::{
        model::db::{BatchModel, SalesLogModel},
        util::shift::LocalDay,
    },
};

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole` as a percentage, 0 when `whole` is 0
fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }

    round2(part / whole * 100.0)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchStats {
    pub total: u64,
    pub active: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub total_target_quantity: i64,
    pub total_actual_quantity: i64,
    pub created_today: u64,
    pub completion_rate: f64,
    pub efficiency_rate: f64,
    pub morning: u64,
    pub night: u64,
}

impl BatchStats {
    /// Aggregate `batches`, counting those created within `today` as created today.
    pub fn from_batches(batches: &[BatchModel], today: &LocalDay) -> Self {
        let mut stats = batches.iter().fold(Self::default(), |mut stats, batch| {
            stats.total += 1;

            match batch.status {
                BatchStatus::Active => stats.active += 1,
                BatchStatus::Completed => stats.completed += 1,
                BatchStatus::Cancelled => stats.cancelled += 1,
            }

            match batch.shift {
                Shift::Morning => stats.morning += 1,
                Shift::Night => stats.night += 1,
            }

            stats.total_target_quantity += i64::from(batch.target_quantity);
            stats.total_actual_quantity += i64::from(batch.actual_quantity);

            if today.contains_naive(batch.created_at) {
                stats.created_today += 1;
            }

            stats
        });

        stats.completion_rate = percentage(stats.completed as f64, stats.total as f64);
        stats.efficiency_rate = percentage(
            stats.total_actual_quantity as f64,
            stats.total_target_quantity as f64,
        );

        stats
    }
}

impl From<BatchStats> for BatchStatsDto {
    fn from(stats: BatchStats) -> Self {
        Self {
            total_batches: stats.total,
            active_batches: stats.active,
            completed_batches: stats.completed,
            cancelled_batches: stats.cancelled,
            total_target_quantity: stats.total_target_quantity,
            total_actual_quantity: stats.total_actual_quantity,
            batches_created_today: stats.created_today,
            completion_rate: stats.completion_rate,
            efficiency_rate: stats.efficiency_rate,
            by_shift: ShiftBreakdownDto {
                morning: stats.morning,
                night: stats.night,
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalesSummary {
    pub record_count: u64,
    pub total_quantity: i64,
    pub gross_revenue: f64,
    pub total_discount: f64,
    pub net_revenue: f64,
    /// Ordered by bread type ID
    pub by_bread_type: Vec<BreadTypeSales>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BreadTypeSales {
    pub bread_type_id: i32,
    pub quantity: i64,
    pub net_revenue: f64,
}

impl SalesSummary {
    /// Gross revenue is quantity × unit price; the discount applies to the whole sale.
    pub fn from_sales(sales: &[SalesLogModel]) -> Self {
        let mut per_bread_type: BTreeMap<i32, (i64, f64)> = BTreeMap::new();

        let mut summary = sales.iter().fold(Self::default(), |mut summary, sale| {
            let gross = f64::from(sale.quantity) * sale.unit_price;

            summary.record_count += 1;
            summary.total_quantity += i64::from(sale.quantity);
            summary.gross_revenue += gross;
            summary.total_discount += sale.discount;

            let entry = per_bread_type.entry(sale.bread_type_id).or_default();
            entry.0 += i64::from(sale.quantity);
            entry.1 += gross - sale.discount;

            summary
        });

        summary.gross_revenue = round2(summary.gross_revenue);
        summary.total_discount = round2(summary.total_discount);
        summary.net_revenue = round2(summary.gross_revenue - summary.total_discount);
        summary.by_bread_type = per_bread_type
            .into_iter()
            .map(|(bread_type_id, (quantity, net_revenue))| BreadTypeSales {
                bread_type_id,
                quantity,
                net_revenue: round2(net_revenue),
            })
            .collect();

        summary
    }
}

impl From<SalesSummary> for SalesSummaryDto {
    fn from(summary: SalesSummary) -> Self {
        Self {
            record_count: summary.record_count,
            total_quantity: summary.total_quantity,
            gross_revenue: summary.gross_revenue,
            total_discount: summary.total_discount,
            net_revenue: summary.net_revenue,
            by_bread_type: summary
                .by_bread_type
                .into_iter()
                .map(|sales| BreadTypeSalesDto {
                    bread_type_id: sales.bread_type_id,
                    quantity: sales.quantity,
                    net_revenue: sales.net_revenue,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockLevel {
    pub bread_type_id: i32,
    pub produced: i64,
    pub sold: i64,
    /// `produced - sold`, never below 0
    pub available: i64,
}

/// Stock per bread type: produced by non-cancelled batches minus sold, ordered by bread
/// type ID.
pub fn available_stock(batches: &[BatchModel], sales: &[SalesLogModel]) -> Vec<StockLevel> {
    let mut totals: BTreeMap<i32, (i64, i64)> = BTreeMap::new();

    for batch in batches
        .iter()
        .filter(|batch| batch.status != BatchStatus::Cancelled)
    {
        totals.entry(batch.bread_type_id).or_default().0 += i64::from(batch.actual_quantity);
    }

    for sale in sales {
        totals.entry(sale.bread_type_id).or_default().1 += i64::from(sale.quantity);
    }

    totals
        .into_iter()
        .map(|(bread_type_id, (produced, sold))| StockLevel {
            bread_type_id,
            produced,
            sold,
            available: (produced - sold).max(0),
        })
        .collect()
}
