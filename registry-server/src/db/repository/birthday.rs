//! Birthday View Repository
//!
//! Read side of the monthly report. The `v_birthdays` view precomputes
//! birth_month and birth_day; queries only filter and order.

use sqlx::SqlitePool;

use shared::models::BirthdayRow;

use super::RepoResult;

/// Rows whose birth month matches, ordered by day of month ascending
pub async fn find_by_month(pool: &SqlitePool, month: u32) -> RepoResult<Vec<BirthdayRow>> {
    let rows = sqlx::query_as::<_, BirthdayRow>(
        "SELECT id, name, birthdate, birth_day, is_primary, relation, phone, address FROM v_birthdays WHERE birth_month = ? ORDER BY birth_day ASC",
    )
    .bind(month)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::member;
    use shared::models::{FamilySubmission, PrimarySubmission};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::DbService::migrate(&pool).await.unwrap();
        pool
    }

    fn primary(name: &str, birthdate: &str, phone: &str) -> PrimarySubmission {
        PrimarySubmission {
            name: name.into(),
            birthdate: birthdate.into(),
            phone: phone.into(),
            address: "Rua A, 10".into(),
        }
    }

    fn fam(name: &str, birthdate: &str, relation: &str) -> FamilySubmission {
        FamilySubmission {
            name: name.into(),
            birthdate: birthdate.into(),
            relation: Some(relation.into()),
        }
    }

    #[tokio::test]
    async fn returns_only_matching_month_sorted_by_day() {
        let pool = test_pool().await;

        member::register(
            &pool,
            &primary("Ana Silva", "1990-05-21", "11999998888"),
            &[fam("Leo Silva", "2015-05-03", "Son")],
        )
        .await
        .unwrap();
        member::register(
            &pool,
            &primary("Rui Costa", "1985-05-07", "11988887777"),
            &[fam("Nina Costa", "2019-12-24", "Daughter")],
        )
        .await
        .unwrap();

        let rows = find_by_month(&pool, 5).await.unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Leo Silva", "Rui Costa", "Ana Silva"]);

        let days: Vec<_> = rows.iter().map(|r| r.birth_day).collect();
        assert_eq!(days, [3, 7, 21]);

        // December family member is excluded from May
        assert!(rows.iter().all(|r| r.name != "Nina Costa"));
    }

    #[tokio::test]
    async fn family_rows_carry_relation_but_no_contact() {
        let pool = test_pool().await;
        member::register(
            &pool,
            &primary("Ana Silva", "1990-05-21", "11999998888"),
            &[fam("Leo Silva", "2015-05-03", "Son")],
        )
        .await
        .unwrap();

        let rows = find_by_month(&pool, 5).await.unwrap();

        let leo = rows.iter().find(|r| r.name == "Leo Silva").unwrap();
        assert!(!leo.is_primary);
        assert_eq!(leo.relation.as_deref(), Some("Son"));
        assert_eq!(leo.phone, None);
        assert_eq!(leo.address, None);

        let ana = rows.iter().find(|r| r.name == "Ana Silva").unwrap();
        assert!(ana.is_primary);
        assert_eq!(ana.relation, None);
        assert_eq!(ana.phone.as_deref(), Some("11999998888"));
    }

    #[tokio::test]
    async fn month_without_birthdays_is_empty_not_an_error() {
        let pool = test_pool().await;
        member::register(
            &pool,
            &primary("Ana Silva", "1990-05-21", "11999998888"),
            &[],
        )
        .await
        .unwrap();

        let rows = find_by_month(&pool, 2).await.unwrap();
        assert!(rows.is_empty());
    }
}
