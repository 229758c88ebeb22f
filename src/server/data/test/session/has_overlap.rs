use super::*;

/// Tests an overlapping range at the same destination is detected.
///
/// Existing session runs 2025-07-01..2025-07-10; a new range starting on its last
/// day shares that day.
///
/// Expected: true
#[tokio::test]
async fn detects_overlap_sharing_a_boundary_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let periode = factory::create_periode(db).await?;
    factory::session::SessionFactory::new(db, destination.id, periode.id)
        .dates(date(2025, 7, 1), date(2025, 7, 10))
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let overlaps = repo
        .has_overlap(destination.id, date(2025, 7, 10), date(2025, 7, 20))
        .await?;

    assert!(overlaps);

    Ok(())
}

/// Tests adjacent ranges that do not share a day.
///
/// Expected: false
#[tokio::test]
async fn allows_adjacent_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let periode = factory::create_periode(db).await?;
    factory::session::SessionFactory::new(db, destination.id, periode.id)
        .dates(date(2025, 7, 1), date(2025, 7, 10))
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let overlaps = repo
        .has_overlap(destination.id, date(2025, 7, 11), date(2025, 7, 20))
        .await?;

    assert!(!overlaps);

    Ok(())
}

/// Tests sessions at other destinations are ignored.
///
/// Expected: false
#[tokio::test]
async fn ignores_other_destinations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let destination = factory::create_destination(db).await?;
    let other_destination = factory::create_destination(db).await?;
    let periode = factory::create_periode(db).await?;
    factory::session::SessionFactory::new(db, other_destination.id, periode.id)
        .dates(date(2025, 7, 1), date(2025, 7, 10))
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let overlaps = repo
        .has_overlap(destination.id, date(2025, 7, 5), date(2025, 7, 15))
        .await?;

    assert!(!overlaps);

    Ok(())
}
