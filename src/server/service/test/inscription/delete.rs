use super::*;

/// Tests withdrawing before the deadline.
///
/// Expected: Ok and the inscription is gone
#[tokio::test]
async fn deletes_before_deadline() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let created = factory::create_inscription(db, employee.id, session.id).await?;

    let service = InscriptionService::new(db);
    service.delete(created.id).await?;

    assert!(service.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests withdrawing after the deadline.
///
/// Expected: Err(DeadlinePassed) and the inscription kept
#[tokio::test]
async fn rejects_after_deadline() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let (_periode, session) = factory::helpers::create_expired_session(db).await?;
    let created = factory::create_inscription(db, employee.id, session.id).await?;

    let service = InscriptionService::new(db);
    let result = service.delete(created.id).await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::DeadlinePassed { .. }))
    ));
    assert!(service.get_by_id(created.id).await?.is_some());

    Ok(())
}

/// Tests withdrawing an unknown inscription.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_inscription() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InscriptionService::new(db).delete(7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
