//! Member Repository
//!
//! The registration write path: upsert the primary member keyed on
//! (phone, birthdate), then replace its family rows.

use sqlx::{Sqlite, SqlitePool, Transaction};

use shared::models::{FamilySubmission, Member, PrimarySubmission};
use shared::util::{now_millis, snowflake_id};

use super::RepoResult;

const MEMBER_SELECT: &str = "SELECT id, is_primary, name, birthdate, relation, phone, address, parent_id, created_at, updated_at FROM member";

/// Relation label applied when a family entry carries none
pub const DEFAULT_RELATION: &str = "Other";

/// Register a primary member and replace their family list.
///
/// Runs the whole lookup → update/insert → delete → insert sequence in one
/// transaction: a failure at any step rolls everything back, so the store
/// never holds a primary with stale or duplicated family rows.
///
/// Returns the primary member id.
pub async fn register(
    pool: &SqlitePool,
    primary: &PrimarySubmission,
    family: &[FamilySubmission],
) -> RepoResult<i64> {
    let mut tx = pool.begin().await?;

    let primary_id = upsert_primary(&mut tx, primary).await?;

    // Full replace: prior family rows go away even when the new list is empty
    sqlx::query("DELETE FROM member WHERE parent_id = ?")
        .bind(primary_id)
        .execute(&mut *tx)
        .await?;

    insert_family(&mut tx, primary_id, family).await?;

    tx.commit().await?;
    Ok(primary_id)
}

/// Update-or-insert the primary row for a (phone, birthdate) identity.
async fn upsert_primary(
    tx: &mut Transaction<'_, Sqlite>,
    primary: &PrimarySubmission,
) -> RepoResult<i64> {
    let existing: Option<(i64,)> = sqlx::query_as(
        "SELECT id FROM member WHERE is_primary = 1 AND phone = ? AND birthdate = ?",
    )
    .bind(&primary.phone)
    .bind(&primary.birthdate)
    .fetch_optional(&mut **tx)
    .await?;

    let now = now_millis();

    if let Some((id,)) = existing {
        // Phone and birthdate are the immutable identity: only name and
        // address follow the new submission.
        sqlx::query("UPDATE member SET name = ?, address = ?, updated_at = ? WHERE id = ?")
            .bind(&primary.name)
            .bind(&primary.address)
            .bind(now)
            .bind(id)
            .execute(&mut **tx)
            .await?;
        return Ok(id);
    }

    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO member (id, is_primary, name, birthdate, phone, address, created_at, updated_at) VALUES (?1, 1, ?2, ?3, ?4, ?5, ?6, ?6)",
    )
    .bind(id)
    .bind(&primary.name)
    .bind(&primary.birthdate)
    .bind(&primary.phone)
    .bind(&primary.address)
    .bind(now)
    .execute(&mut **tx)
    .await?;
    Ok(id)
}

/// Insert the filtered family list for a primary id.
///
/// Entries missing name or birthdate are dropped, not rejected. An empty
/// post-filter list inserts nothing.
async fn insert_family(
    tx: &mut Transaction<'_, Sqlite>,
    primary_id: i64,
    family: &[FamilySubmission],
) -> RepoResult<()> {
    let now = now_millis();
    for entry in family.iter().filter(|f| is_complete(f)) {
        let relation = entry
            .relation
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_RELATION);

        sqlx::query(
            "INSERT INTO member (id, is_primary, name, birthdate, relation, parent_id, created_at, updated_at) VALUES (?1, 0, ?2, ?3, ?4, ?5, ?6, ?6)",
        )
        .bind(snowflake_id())
        .bind(entry.name.trim())
        .bind(entry.birthdate.trim())
        .bind(relation)
        .bind(primary_id)
        .bind(now)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// A family entry participates only when both name and birthdate are present
fn is_complete(entry: &FamilySubmission) -> bool {
    !entry.name.trim().is_empty() && !entry.birthdate.trim().is_empty()
}

/// Locate the primary row whose (phone, birthdate) identity matches
pub async fn find_primary(
    pool: &SqlitePool,
    phone: &str,
    birthdate: &str,
) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE is_primary = 1 AND phone = ? AND birthdate = ?");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(phone)
        .bind(birthdate)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Family rows attached to a primary member
pub async fn find_family(pool: &SqlitePool, parent_id: i64) -> RepoResult<Vec<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE parent_id = ? ORDER BY name");
    let rows = sqlx::query_as::<_, Member>(&sql)
        .bind(parent_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory pool with the crate's own migrations applied.
    /// max_connections(1): every connection to `:memory:` is a fresh database.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::DbService::migrate(&pool).await.unwrap();
        pool
    }

    fn ana() -> PrimarySubmission {
        PrimarySubmission {
            name: "Ana Silva".into(),
            birthdate: "1990-05-01".into(),
            phone: "11999998888".into(),
            address: "Rua A, 10".into(),
        }
    }

    fn fam(name: &str, birthdate: &str, relation: Option<&str>) -> FamilySubmission {
        FamilySubmission {
            name: name.into(),
            birthdate: birthdate.into(),
            relation: relation.map(|r| r.to_string()),
        }
    }

    #[tokio::test]
    async fn first_submission_inserts_primary_and_family() {
        let pool = test_pool().await;
        let family = vec![fam("Leo Silva", "2015-03-02", Some("Son"))];

        let id = register(&pool, &ana(), &family).await.unwrap();

        let primary = find_primary(&pool, "11999998888", "1990-05-01")
            .await
            .unwrap()
            .expect("primary should exist");
        assert_eq!(primary.id, id);
        assert!(primary.is_primary);
        assert_eq!(primary.name, "Ana Silva");
        assert_eq!(primary.address.as_deref(), Some("Rua A, 10"));
        assert_eq!(primary.parent_id, None);

        let family = find_family(&pool, id).await.unwrap();
        assert_eq!(family.len(), 1);
        assert_eq!(family[0].name, "Leo Silva");
        assert_eq!(family[0].relation.as_deref(), Some("Son"));
        assert_eq!(family[0].parent_id, Some(id));
        assert!(!family[0].is_primary);
    }

    #[tokio::test]
    async fn resubmission_updates_primary_in_place() {
        let pool = test_pool().await;
        let id = register(&pool, &ana(), &[]).await.unwrap();

        let renamed = PrimarySubmission {
            name: "Ana Maria Silva".into(),
            address: "Rua B, 20".into(),
            ..ana()
        };
        let id2 = register(&pool, &renamed, &[]).await.unwrap();
        assert_eq!(id, id2, "matching (phone, birthdate) must reuse the row");

        let primary = find_primary(&pool, "11999998888", "1990-05-01")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(primary.name, "Ana Maria Silva");
        assert_eq!(primary.address.as_deref(), Some("Rua B, 20"));
        // Identity fields untouched
        assert_eq!(primary.phone.as_deref(), Some("11999998888"));
        assert_eq!(primary.birthdate, "1990-05-01");
    }

    #[tokio::test]
    async fn resubmission_replaces_family_rows() {
        let pool = test_pool().await;

        // First call: 1 primary + 1 family
        let id = register(&pool, &ana(), &[fam("Leo Silva", "2015-03-02", Some("Son"))])
            .await
            .unwrap();
        let before = find_family(&pool, id).await.unwrap();
        assert_eq!(before.len(), 1);
        let old_family_id = before[0].id;

        // Second call: same identity, two family members
        let id2 = register(
            &pool,
            &ana(),
            &[
                fam("Leo Silva", "2015-03-02", Some("Son")),
                fam("Bia Silva", "2018-07-09", Some("Daughter")),
            ],
        )
        .await
        .unwrap();
        assert_eq!(id, id2);

        let after = find_family(&pool, id).await.unwrap();
        assert_eq!(after.len(), 2);
        // Full replace, not a merge: the original row is gone
        assert!(after.iter().all(|m| m.id != old_family_id));
    }

    #[tokio::test]
    async fn resubmission_with_empty_family_clears_prior_rows() {
        let pool = test_pool().await;
        let id = register(&pool, &ana(), &[fam("Leo Silva", "2015-03-02", None)])
            .await
            .unwrap();
        assert_eq!(find_family(&pool, id).await.unwrap().len(), 1);

        register(&pool, &ana(), &[]).await.unwrap();
        assert!(find_family(&pool, id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn incomplete_family_entries_are_dropped() {
        let pool = test_pool().await;
        let family = vec![
            fam("", "2015-03-02", Some("Son")),
            fam("Bia Silva", "", Some("Daughter")),
            fam("   ", "   ", None),
            fam("Leo Silva", "2015-03-02", Some("Son")),
        ];

        let id = register(&pool, &ana(), &family).await.unwrap();

        let inserted = find_family(&pool, id).await.unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].name, "Leo Silva");
    }

    #[tokio::test]
    async fn relation_defaults_when_omitted_or_blank() {
        let pool = test_pool().await;
        let family = vec![
            fam("Bia Silva", "2018-07-09", None),
            fam("Leo Silva", "2015-03-02", Some("  ")),
        ];

        let id = register(&pool, &ana(), &family).await.unwrap();

        let inserted = find_family(&pool, id).await.unwrap();
        assert_eq!(inserted.len(), 2);
        for member in inserted {
            assert_eq!(member.relation.as_deref(), Some(DEFAULT_RELATION));
        }
    }

    #[tokio::test]
    async fn identity_requires_both_phone_and_birthdate() {
        let pool = test_pool().await;
        let id = register(&pool, &ana(), &[]).await.unwrap();

        // Same phone, different birthdate → a distinct primary
        let sibling = PrimarySubmission {
            birthdate: "1992-11-20".into(),
            ..ana()
        };
        let other = register(&pool, &sibling, &[]).await.unwrap();
        assert_ne!(id, other);

        assert!(
            find_primary(&pool, "11999998888", "1990-05-01")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            find_primary(&pool, "11999998888", "1992-11-20")
                .await
                .unwrap()
                .is_some()
        );
    }
}
