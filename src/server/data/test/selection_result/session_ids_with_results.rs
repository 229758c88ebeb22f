use super::*;

/// Tests sessions are listed once regardless of how many results they hold.
///
/// Expected: the two sessions with results, not the empty one
#[tokio::test]
async fn lists_distinct_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_p1, first) = factory::helpers::create_open_session(db).await?;
    let (_p2, second) = factory::helpers::create_open_session(db).await?;
    let (_p3, empty) = factory::helpers::create_open_session(db).await?;
    let a = factory::create_employee(db).await?;
    let b = factory::create_employee(db).await?;

    factory::create_resultat_selection(db, first.id, a.id, 1).await?;
    factory::create_resultat_selection(db, first.id, b.id, 2).await?;
    factory::create_resultat_selection(db, second.id, a.id, 1).await?;

    let repo = SelectionResultRepository::new(db);
    let ids = repo.session_ids_with_results().await?;

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
    assert!(!ids.contains(&empty.id));

    Ok(())
}
