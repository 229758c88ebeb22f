use super::*;

/// Tests only active inscriptions of the session are returned, in registration order.
///
/// Creates three active candidates, one cancelled inscription, and an active
/// inscription in another session.
///
/// Expected: the three active employees in creation order
#[tokio::test]
async fn returns_active_candidates_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let (_other_periode, other_session) = factory::helpers::create_open_session(db).await?;

    let candidates = factory::helpers::create_candidates(db, session.id, 3).await?;

    let cancelled = factory::create_employee(db).await?;
    factory::inscription::InscriptionFactory::new(db, cancelled.id, session.id)
        .status("cancelled")
        .build()
        .await?;

    factory::helpers::create_candidates(db, other_session.id, 1).await?;

    let repo = InscriptionRepository::new(db);
    let ids = repo.get_active_employee_ids(session.id).await?;

    let expected: Vec<i32> = candidates.iter().map(|e| e.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}
