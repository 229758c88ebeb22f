use super::*;

/// Tests inscriptions are enriched with employee name, session name and deadline.
///
/// Expected: one detail row with all display fields resolved
#[tokio::test]
async fn enriches_with_display_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::EmployeeFactory::new(db)
        .first_name("Amina")
        .last_name("Benali")
        .build()
        .await?;
    let (periode, session) = factory::helpers::create_open_session(db).await?;
    factory::create_inscription(db, employee.id, session.id).await?;

    let repo = InscriptionRepository::new(db);
    let details = repo.get_all().await?;

    assert_eq!(details.len(), 1);
    let detail = &details[0];
    assert_eq!(detail.employee_name.as_deref(), Some("Amina Benali"));
    assert_eq!(detail.session_name.as_deref(), Some(session.name.as_str()));
    assert_eq!(detail.deadline, Some(periode.registration_deadline));

    Ok(())
}

/// Tests per-session and per-employee listings filter correctly.
///
/// Expected: each listing contains only the matching inscriptions
#[tokio::test]
async fn filters_by_session_and_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::create_employee(db).await?;
    let other_employee = factory::create_employee(db).await?;
    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let (_other_periode, other_session) = factory::helpers::create_open_session(db).await?;

    factory::create_inscription(db, employee.id, session.id).await?;
    factory::create_inscription(db, employee.id, other_session.id).await?;
    factory::create_inscription(db, other_employee.id, session.id).await?;

    let repo = InscriptionRepository::new(db);

    let by_session = repo.get_by_session(session.id).await?;
    assert_eq!(by_session.len(), 2);
    assert!(by_session
        .iter()
        .all(|d| d.inscription.session_id == session.id));

    let by_employee = repo.get_by_employee(employee.id).await?;
    assert_eq!(by_employee.len(), 2);
    assert!(by_employee
        .iter()
        .all(|d| d.inscription.employee_id == employee.id));

    Ok(())
}

/// Tests a missing inscription yields None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InscriptionRepository::new(db);

    assert!(repo.get_detail_by_id(42).await?.is_none());

    Ok(())
}
