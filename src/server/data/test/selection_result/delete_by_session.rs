use super::*;

/// Tests only the target session's results are removed.
///
/// Expected: Ok(2) and the other session keeps its row
#[tokio::test]
async fn deletes_only_target_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let (_other_periode, other_session) = factory::helpers::create_open_session(db).await?;
    let first = factory::create_employee(db).await?;
    let second = factory::create_employee(db).await?;

    factory::create_resultat_selection(db, session.id, first.id, 1).await?;
    factory::create_resultat_selection(db, session.id, second.id, 2).await?;
    factory::create_resultat_selection(db, other_session.id, first.id, 1).await?;

    let repo = SelectionResultRepository::new(db);

    assert_eq!(repo.delete_by_session(session.id).await?, 2);
    assert_eq!(repo.count_by_session(session.id).await?, 0);
    assert_eq!(repo.count_by_session(other_session.id).await?, 1);

    Ok(())
}

/// Tests deleting from a session without results.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_open_session(db).await?;

    let repo = SelectionResultRepository::new(db);

    assert_eq!(repo.delete_by_session(session.id).await?, 0);

    Ok(())
}
