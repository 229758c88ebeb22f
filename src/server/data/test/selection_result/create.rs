use super::*;

fn params(session_id: i32, employee_id: i32, rank: i32) -> SelectionResultParams {
    SelectionResultParams {
        session_id,
        employee_id,
        category: SelectionCategory::Official,
        rank,
        selected_at: Utc::now(),
    }
}

/// Tests the schema rejects a repeated rank within a session.
///
/// Expected: second insert fails and maps to AppError::Conflict
#[tokio::test]
async fn rejects_duplicate_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let first = factory::create_employee(db).await?;
    let second = factory::create_employee(db).await?;

    let repo = SelectionResultRepository::new(db);
    repo.create(params(session.id, first.id, 1)).await?;
    let err = repo
        .create(params(session.id, second.id, 1))
        .await
        .unwrap_err();

    assert!(matches!(
        AppError::conflict_on_unique(err, "duplicate"),
        AppError::Conflict(_)
    ));
    assert_eq!(repo.count_by_session(session.id).await?, 1);

    Ok(())
}

/// Tests the schema rejects a second result for the same employee in a session.
///
/// Expected: second insert fails and maps to AppError::Conflict
#[tokio::test]
async fn rejects_duplicate_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let employee = factory::create_employee(db).await?;

    let repo = SelectionResultRepository::new(db);
    repo.create(params(session.id, employee.id, 1)).await?;
    let err = repo
        .create(params(session.id, employee.id, 2))
        .await
        .unwrap_err();

    assert!(matches!(
        AppError::conflict_on_unique(err, "duplicate"),
        AppError::Conflict(_)
    ));

    Ok(())
}

/// Tests the same rank is allowed in different sessions.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_rank_in_other_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_p1, session) = factory::helpers::create_open_session(db).await?;
    let (_p2, other_session) = factory::helpers::create_open_session(db).await?;
    let employee = factory::create_employee(db).await?;

    let repo = SelectionResultRepository::new(db);
    repo.create(params(session.id, employee.id, 1)).await?;
    repo.create(params(other_session.id, employee.id, 1)).await?;

    assert_eq!(repo.session_ids_with_results().await?.len(), 2);

    Ok(())
}
