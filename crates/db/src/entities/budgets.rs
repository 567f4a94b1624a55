//! `SeaORM` Entity for the budgets table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::SpendingCategory;

#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub business_profile_id: Uuid,
    pub category: SpendingCategory,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub allocated_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub spent_amount: Decimal,
    pub period_start: Date,
    pub period_end: Date,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business_profiles::Entity",
        from = "Column::BusinessProfileId",
        to = "super::business_profiles::Column::Id"
    )]
    BusinessProfiles,
}

impl Related<super::business_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
