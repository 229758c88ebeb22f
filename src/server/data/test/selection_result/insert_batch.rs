use super::*;

/// Tests a batch is stored with a shared timestamp and the given categories.
///
/// Expected: Ok with one row per ranked candidate and a matching count
#[tokio::test]
async fn inserts_ranked_candidates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_periode, session) = factory::helpers::create_open_session(db).await?;
    let employees = factory::helpers::create_candidates(db, session.id, 4).await?;

    let ranked: Vec<RankedCandidate> = employees
        .iter()
        .enumerate()
        .map(|(i, e)| RankedCandidate {
            employee_id: e.id,
            category: if i < 3 {
                SelectionCategory::Official
            } else {
                SelectionCategory::Alternate
            },
            rank: i as i32 + 1,
        })
        .collect();

    let selected_at = Utc::now();
    let repo = SelectionResultRepository::new(db);
    let results = repo.insert_batch(session.id, &ranked, selected_at).await?;

    assert_eq!(results.len(), 4);
    assert!(results
        .iter()
        .all(|r| r.selected_at.timestamp() == selected_at.timestamp()));
    assert_eq!(results[3].category, SelectionCategory::Alternate);
    assert_eq!(results[3].rank, 4);
    assert_eq!(repo.count_by_session(session.id).await?, 4);

    Ok(())
}
