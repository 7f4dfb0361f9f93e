//! `SeaORM` entity definitions.

pub mod finance_entries;
pub mod sea_orm_active_enums;
