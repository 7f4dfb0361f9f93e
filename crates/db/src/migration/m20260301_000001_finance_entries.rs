//! Finance entries migration.
//!
//! Creates the entry enums, the `finance_entries` table, and the trigger that
//! keeps an entry's owner fixed after creation.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(FINANCE_ENTRIES_SQL).await?;
        db.execute_unprepared(OWNER_IMMUTABLE_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE finance_entry_type AS ENUM ('income', 'expense');

CREATE TYPE finance_category AS ENUM (
    'salary',
    'education',
    'health',
    'food',
    'transportation',
    'entertainment',
    'utilities',
    'others'
);
";

const FINANCE_ENTRIES_SQL: &str = r"
-- One income or expense record. user_id comes from the auth service; there is
-- no local users table to reference.
CREATE TABLE finance_entries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    title TEXT NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    entry_type finance_entry_type NOT NULL,
    category finance_category NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_title_not_empty CHECK (title <> ''),
    CONSTRAINT chk_amount_positive CHECK (amount > 0)
);

-- Listing and date-range reports per user
CREATE INDEX idx_finance_entries_user_created ON finance_entries(user_id, created_at);

-- Type filter per user
CREATE INDEX idx_finance_entries_user_type ON finance_entries(user_id, entry_type);
";

const OWNER_IMMUTABLE_SQL: &str = r"
-- ============================================================
-- FUNCTION: prevent_owner_change
-- An entry never changes hands
-- ============================================================
CREATE OR REPLACE FUNCTION prevent_owner_change()
RETURNS TRIGGER AS $$
BEGIN
    IF NEW.user_id <> OLD.user_id THEN
        RAISE EXCEPTION 'Entry owner cannot be changed';
    END IF;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_finance_entries_owner_immutable
BEFORE UPDATE ON finance_entries
FOR EACH ROW
EXECUTE FUNCTION prevent_owner_change();
";

const DROP_ALL_SQL: &str = r"
DROP TRIGGER IF EXISTS trg_finance_entries_owner_immutable ON finance_entries;
DROP FUNCTION IF EXISTS prevent_owner_change();
DROP TABLE IF EXISTS finance_entries CASCADE;
DROP TYPE IF EXISTS finance_category;
DROP TYPE IF EXISTS finance_entry_type;
";
