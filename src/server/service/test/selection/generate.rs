use super::*;

/// Tests a draw over five candidates in shuffled order.
///
/// Expected: three officials then two alternates, last registrant ranked first
#[tokio::test]
async fn ranks_five_candidates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_expired_session(db).await?;
    let candidates = factory::helpers::create_candidates(db, session.id, 5).await?;

    let results = SelectionService::new(db, &ReverseShuffler)
        .generate(session.id)
        .await?;

    assert_eq!(results.len(), 5);
    assert_eq!(results[0].employee_id, candidates[4].id);
    assert_eq!(results[0].rank, 1);
    assert_eq!(
        results
            .iter()
            .filter(|r| r.category == SelectionCategory::Official)
            .count(),
        3
    );
    assert_eq!(results[4].category, SelectionCategory::Alternate);
    assert_eq!(results[4].rank, 5);

    Ok(())
}

/// Tests at most seven candidates are ranked.
///
/// Expected: seven stored rows for ten candidates
#[tokio::test]
async fn caps_ten_candidates_at_seven() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_expired_session(db).await?;
    factory::helpers::create_candidates(db, session.id, 10).await?;

    let results = SelectionService::new(db, &IdentityShuffler)
        .generate(session.id)
        .await?;

    assert_eq!(results.len(), 7);
    assert_eq!(
        SelectionResultRepository::new(db)
            .count_by_session(session.id)
            .await?,
        7
    );

    Ok(())
}

/// Tests cancelled inscriptions are not candidates.
///
/// Creates three active and two cancelled inscriptions.
///
/// Expected: only the three active employees are ranked
#[tokio::test]
async fn ignores_cancelled_inscriptions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_expired_session(db).await?;
    let active = factory::helpers::create_candidates(db, session.id, 3).await?;
    for _ in 0..2 {
        let employee = factory::create_employee(db).await?;
        factory::inscription::InscriptionFactory::new(db, employee.id, session.id)
            .status("cancelled")
            .build()
            .await?;
    }

    let results = SelectionService::new(db, &IdentityShuffler)
        .generate(session.id)
        .await?;

    let ids: Vec<i32> = results.iter().map(|r| r.employee_id).collect();
    let expected: Vec<i32> = active.iter().map(|e| e.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests too few candidates leaves earlier results in place.
///
/// Seeds a prior result, then leaves only two active candidates.
///
/// Expected: Err(InsufficientCandidates) and the prior row still stored
#[tokio::test]
async fn insufficient_candidates_keeps_prior_results() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_expired_session(db).await?;
    let candidates = factory::helpers::create_candidates(db, session.id, 2).await?;
    factory::create_resultat_selection(db, session.id, candidates[0].id, 1).await?;

    let result = SelectionService::new(db, &IdentityShuffler)
        .generate(session.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::SelectionErr(SelectionError::InsufficientCandidates {
            found: 2,
            required: 3
        }))
    ));
    assert_eq!(
        SelectionResultRepository::new(db)
            .count_by_session(session.id)
            .await?,
        1
    );

    Ok(())
}

/// Tests regenerating replaces the earlier draw.
///
/// Expected: five rows after the second run, ordered by the second shuffle
#[tokio::test]
async fn regenerating_replaces_results() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_expired_session(db).await?;
    let candidates = factory::helpers::create_candidates(db, session.id, 5).await?;

    SelectionService::new(db, &IdentityShuffler)
        .generate(session.id)
        .await?;
    SelectionService::new(db, &ReverseShuffler)
        .generate(session.id)
        .await?;

    let stored = SelectionResultRepository::new(db)
        .get_by_session(session.id)
        .await?;

    assert_eq!(stored.len(), 5);
    assert_eq!(stored[0].result.employee_id, candidates[4].id);

    Ok(())
}

/// Tests two concurrent draws for the same session.
///
/// Expected: both succeed and exactly one set of results remains
#[tokio::test]
async fn concurrent_runs_leave_one_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_expired_session(db).await?;
    factory::helpers::create_candidates(db, session.id, 6).await?;

    let first = SelectionService::new(db, &IdentityShuffler);
    let second = SelectionService::new(db, &ReverseShuffler);

    let (a, b) = tokio::join!(first.generate(session.id), second.generate(session.id));
    a?;
    b?;

    let stored = SelectionResultRepository::new(db)
        .get_by_session(session.id)
        .await?;
    let ranks: Vec<i32> = stored.iter().map(|d| d.result.rank).collect();

    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);

    Ok(())
}

/// Tests a shuffler that does not return a permutation.
///
/// Expected: Err(InternalErr) and nothing stored
#[tokio::test]
async fn rejects_broken_shuffle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_expired_session(db).await?;
    factory::helpers::create_candidates(db, session.id, 4).await?;

    let result = SelectionService::new(db, &BrokenShuffler)
        .generate(session.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::InvalidPermutation { len: 4 }))
    ));
    assert_eq!(
        SelectionResultRepository::new(db)
            .count_by_session(session.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests drawing for an unknown session.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SelectionService::new(db, &IdentityShuffler)
        .generate(404)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
