use super::*;

/// Tests only sessions whose period deadline is strictly in the past are returned.
///
/// Creates sessions under periods with deadlines yesterday, today and next week.
///
/// Expected: only the session under yesterday's deadline
#[tokio::test]
async fn returns_sessions_past_deadline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let today = Utc::now().date_naive();

    let destination = factory::create_destination(db).await?;

    let expired = factory::periode::PeriodeFactory::new(db)
        .registration_deadline(today - Duration::days(1))
        .build()
        .await?;
    let due_today = factory::periode::PeriodeFactory::new(db)
        .registration_deadline(today)
        .build()
        .await?;
    let open = factory::create_periode(db).await?;

    let expired_session = factory::create_session(db, destination.id, expired.id).await?;
    factory::session::SessionFactory::new(db, destination.id, due_today.id)
        .dates(today + Duration::days(40), today + Duration::days(45))
        .build()
        .await?;
    factory::session::SessionFactory::new(db, destination.id, open.id)
        .dates(today + Duration::days(50), today + Duration::days(55))
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let ids = repo.find_expired_ids(today).await?;

    assert_eq!(ids, vec![expired_session.id]);

    Ok(())
}

/// Tests no sessions are returned when none have expired.
///
/// Expected: empty list
#[tokio::test]
async fn returns_empty_when_nothing_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let periode = factory::create_periode(db).await?;
    factory::create_session(db, destination.id, periode.id).await?;

    let repo = SessionRepository::new(db);
    let ids = repo.find_expired_ids(Utc::now().date_naive()).await?;

    assert!(ids.is_empty());

    Ok(())
}
