use super::*;

/// Tests the session is returned together with its period.
///
/// Expected: Some((session, periode)) with the period's deadline
#[tokio::test]
async fn returns_session_with_periode() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let periode = factory::periode::PeriodeFactory::new(db)
        .registration_deadline(date(2024, 1, 10))
        .build()
        .await?;
    let session = factory::create_session(db, destination.id, periode.id).await?;

    let repo = SessionRepository::new(db);
    let (found_session, found_periode) = repo.find_with_periode(session.id).await?.unwrap();

    assert_eq!(found_session.id, session.id);
    assert_eq!(found_periode.id, periode.id);
    assert_eq!(found_periode.registration_deadline, date(2024, 1, 10));

    Ok(())
}

/// Tests a missing session yields None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let result = repo.find_with_periode(999).await?;

    assert!(result.is_none());

    Ok(())
}
