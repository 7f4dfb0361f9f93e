//! Repository tests against a mocked `PostgreSQL` connection.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use uuid::Uuid;

use fintrack_core::finance::{
    Category, DateRange, EntryChanges, EntryQuery, EntryStore, EntryType, FinanceError, NewEntry,
};
use fintrack_shared::types::{EntryId, UserId};

use crate::entities::finance_entries;
use crate::entities::sea_orm_active_enums::{FinanceCategory, FinanceEntryType};
use crate::repositories::FinanceEntryRepository;

fn model(owner: Uuid, title: &str) -> finance_entries::Model {
    let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
    finance_entries::Model {
        id: Uuid::now_v7(),
        user_id: owner,
        title: title.to_string(),
        amount: dec!(120.50),
        entry_type: FinanceEntryType::Expense,
        category: FinanceCategory::Food,
        created_at: at.into(),
        updated_at: at.into(),
    }
}

fn mock_with_rows(rows: Vec<Vec<finance_entries::Model>>) -> Arc<DatabaseConnection> {
    Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(rows)
            .into_connection(),
    )
}

/// Rendered SQL of every statement the repository sent.
fn executed_sql(repo: FinanceEntryRepository, db: Arc<DatabaseConnection>) -> Vec<String> {
    drop(repo);
    let Some(db) = Arc::into_inner(db) else {
        panic!("connection still shared");
    };
    db.into_transaction_log()
        .iter()
        .flat_map(|tx| tx.statements().iter().map(ToString::to_string))
        .collect()
}

#[test]
fn test_model_maps_to_domain_entry() {
    let owner = Uuid::now_v7();
    let row = model(owner, "Groceries");
    let id = row.id;

    let entry = fintrack_core::finance::FinanceEntry::from(row);

    assert_eq!(entry.id, EntryId::from_uuid(id));
    assert_eq!(entry.owner, UserId::from_uuid(owner));
    assert_eq!(entry.title, "Groceries");
    assert_eq!(entry.amount, dec!(120.50));
    assert_eq!(entry.entry_type, EntryType::Expense);
    assert_eq!(entry.category, Category::Food);
    assert_eq!(
        entry.created_at,
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    );
}

#[tokio::test]
async fn test_find_owned_returns_entry() {
    let owner = Uuid::now_v7();
    let row = model(owner, "Lunch");
    let id = row.id;
    let repo = FinanceEntryRepository::new(mock_with_rows(vec![vec![row]]));

    let found = repo
        .find_owned(UserId::from_uuid(owner), EntryId::from_uuid(id))
        .await
        .unwrap();

    assert_eq!(found.map(|e| e.title), Some("Lunch".to_string()));
}

#[tokio::test]
async fn test_find_owned_missing_returns_none() {
    let repo = FinanceEntryRepository::new(mock_with_rows(vec![vec![]]));

    let found = repo
        .find_owned(UserId::new(), EntryId::new())
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_preserves_row_order() {
    let owner = Uuid::now_v7();
    let rows = vec![model(owner, "First"), model(owner, "Second")];
    let repo = FinanceEntryRepository::new(mock_with_rows(vec![rows]));

    let entries = repo
        .find(&EntryQuery::owned_by(UserId::from_uuid(owner)))
        .await
        .unwrap();

    let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_find_translates_query_into_where_clause() {
    let owner = Uuid::now_v7();
    let db = mock_with_rows(vec![vec![]]);
    let repo = FinanceEntryRepository::new(Arc::clone(&db));
    let query = EntryQuery {
        entry_type: Some(EntryType::Income),
        ..EntryQuery::owned_by(UserId::from_uuid(owner))
    }
    .created_within(DateRange::month(2023, 12).unwrap());

    repo.find(&query).await.unwrap();

    let sql = executed_sql(repo, db);
    assert_eq!(sql.len(), 1);
    let sql = &sql[0];
    assert!(sql.contains(&format!(r#""user_id" = '{owner}'"#)), "{sql}");
    assert!(sql.contains(r#""entry_type" ="#), "{sql}");
    assert!(sql.contains("'income'"), "{sql}");
    assert!(sql.contains(r#""created_at" >= '2023-12-01"#), "{sql}");
    assert!(sql.contains(r#""created_at" < '2024-01-01"#), "{sql}");
    assert!(sql.contains(r#"ORDER BY "finance_entries"."created_at" ASC"#), "{sql}");
}

#[tokio::test]
async fn test_find_without_filters_only_scopes_owner() {
    let owner = Uuid::now_v7();
    let db = mock_with_rows(vec![vec![]]);
    let repo = FinanceEntryRepository::new(Arc::clone(&db));

    repo.find(&EntryQuery::owned_by(UserId::from_uuid(owner)))
        .await
        .unwrap();

    let sql = executed_sql(repo, db);
    assert!(sql[0].contains(&format!(r#""user_id" = '{owner}'"#)), "{}", sql[0]);
    assert!(!sql[0].contains(r#""entry_type" ="#), "{}", sql[0]);
    assert!(!sql[0].contains(r#""created_at" >="#), "{}", sql[0]);
}

#[tokio::test]
async fn test_single_entry_operations_filter_by_owner() {
    let owner = Uuid::now_v7();
    let id = Uuid::now_v7();
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<finance_entries::Model>::new()])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection(),
    );
    let repo = FinanceEntryRepository::new(Arc::clone(&db));

    repo.find_owned(UserId::from_uuid(owner), EntryId::from_uuid(id))
        .await
        .unwrap();
    repo.delete_owned(UserId::from_uuid(owner), EntryId::from_uuid(id))
        .await
        .unwrap();

    let sql = executed_sql(repo, db);
    assert_eq!(sql.len(), 2);
    for statement in &sql {
        assert!(statement.contains(&format!("'{id}'")), "{statement}");
        assert!(statement.contains(&format!(r#""user_id" = '{owner}'"#)), "{statement}");
    }
    assert!(sql[1].starts_with("DELETE FROM"), "{}", sql[1]);
}

#[tokio::test]
async fn test_create_returns_inserted_entry() {
    let owner = Uuid::now_v7();
    let repo = FinanceEntryRepository::new(mock_with_rows(vec![vec![model(owner, "Lunch")]]));

    let created = repo
        .create(
            UserId::from_uuid(owner),
            NewEntry {
                title: "Lunch".to_string(),
                amount: dec!(120.50),
                entry_type: EntryType::Expense,
                category: Category::Food,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.owner, UserId::from_uuid(owner));
    assert_eq!(created.title, "Lunch");
}

#[tokio::test]
async fn test_update_owned_applies_changes() {
    let owner = Uuid::now_v7();
    let existing = model(owner, "Lunch");
    let id = existing.id;
    let mut updated = existing.clone();
    updated.title = "Dinner".to_string();
    let repo = FinanceEntryRepository::new(mock_with_rows(vec![vec![existing], vec![updated]]));

    let result = repo
        .update_owned(
            UserId::from_uuid(owner),
            EntryId::from_uuid(id),
            EntryChanges {
                title: Some("Dinner".to_string()),
                ..EntryChanges::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(result.map(|e| e.title), Some("Dinner".to_string()));
}

#[tokio::test]
async fn test_update_owned_missing_returns_none() {
    let repo = FinanceEntryRepository::new(mock_with_rows(vec![vec![]]));

    let result = repo
        .update_owned(UserId::new(), EntryId::new(), EntryChanges::default())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_owned_reports_affected_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let repo = FinanceEntryRepository::new(Arc::new(db));
    let owner = UserId::new();
    let id = EntryId::new();

    assert!(repo.delete_owned(owner, id).await.unwrap());
    assert!(!repo.delete_owned(owner, id).await.unwrap());
}

#[tokio::test]
async fn test_database_error_maps_to_store_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
        .into_connection();
    let repo = FinanceEntryRepository::new(Arc::new(db));

    let err = repo
        .find(&EntryQuery::owned_by(UserId::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, FinanceError::Store(msg) if msg.contains("connection reset")));
}
