use super::*;

/// Tests a status-only update keeps the employee and session.
///
/// Expected: Ok with status cancelled and other fields unchanged
#[tokio::test]
async fn updates_status_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let created = factory::create_inscription(db, employee.id, session.id).await?;

    let updated = InscriptionService::new(db)
        .update(UpdateInscriptionParams {
            id: created.id,
            status: Some(InscriptionStatus::Cancelled),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.employee_id, employee.id);
    assert_eq!(updated.session_id, session.id);
    assert_eq!(updated.status, InscriptionStatus::Cancelled);

    Ok(())
}

/// Tests moving an inscription to another open session.
///
/// Expected: Ok with the new session
#[tokio::test]
async fn moves_to_open_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let (_other_periode, other_session) = factory::helpers::create_open_session(db).await?;
    let created = factory::create_inscription(db, employee.id, session.id).await?;

    let updated = InscriptionService::new(db)
        .update(UpdateInscriptionParams {
            id: created.id,
            session_id: Some(other_session.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.session_id, other_session.id);

    Ok(())
}

/// Tests moving an inscription into a session whose period is closed.
///
/// Expected: Err(Closed)
#[tokio::test]
async fn rejects_move_to_closed_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let destination = factory::create_destination(db).await?;
    let closed = factory::periode::PeriodeFactory::new(db)
        .status("closed")
        .build()
        .await?;
    let closed_session = factory::create_session(db, destination.id, closed.id).await?;
    let created = factory::create_inscription(db, employee.id, session.id).await?;

    let result = InscriptionService::new(db)
        .update(UpdateInscriptionParams {
            id: created.id,
            session_id: Some(closed_session.id),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::Closed { .. }))
    ));

    Ok(())
}

/// Tests updating an inscription whose session deadline has passed.
///
/// Expected: Err(DeadlinePassed) and the stored status unchanged
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
    let result = service
        .update(UpdateInscriptionParams {
            id: created.id,
            status: Some(InscriptionStatus::Cancelled),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::DeadlinePassed { .. }))
    ));

    let stored = service.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.inscription.status, InscriptionStatus::Active);

    Ok(())
}

/// Tests an update is allowed in a period closed early but before its deadline.
///
/// Expected: Ok
#[tokio::test]
async fn allows_closed_period_before_deadline() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let destination = factory::create_destination(db).await?;
    let periode = factory::periode::PeriodeFactory::new(db)
        .registration_deadline(Utc::now().date_naive() + Duration::days(3))
        .status("closed")
        .build()
        .await?;
    let session = factory::create_session(db, destination.id, periode.id).await?;
    let created = factory::create_inscription(db, employee.id, session.id).await?;

    let result = InscriptionService::new(db)
        .update(UpdateInscriptionParams {
            id: created.id,
            status: Some(InscriptionStatus::Cancelled),
            ..Default::default()
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests moving onto a pair that is already registered.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_taken_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let (_other_periode, other_session) = factory::helpers::create_open_session(db).await?;
    let created = factory::create_inscription(db, employee.id, session.id).await?;
    factory::create_inscription(db, employee.id, other_session.id).await?;

    let result = InscriptionService::new(db)
        .update(UpdateInscriptionParams {
            id: created.id,
            session_id: Some(other_session.id),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating an unknown inscription.
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

    let result = InscriptionService::new(db)
        .update(UpdateInscriptionParams {
            id: 42,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
