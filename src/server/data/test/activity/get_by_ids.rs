use super::*;

/// Tests fetching a subset of activities by id.
///
/// Verifies that unknown ids are skipped and unrequested activities are not returned.
///
/// Expected: Ok with only the requested, existing activities
#[tokio::test]
async fn returns_only_requested_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::activity::create_activity(db).await?;
    let _second = factory::activity::create_activity(db).await?;
    let third = factory::activity::create_activity(db).await?;

    let repo = ActivityRepository::new(db);
    let activities = repo.get_by_ids(&[third.id, first.id, 999]).await?;

    let ids: Vec<i32> = activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Tests fetching with no ids.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::activity::create_activity(db).await?;

    let repo = ActivityRepository::new(db);
    let activities = repo.get_by_ids(&[]).await?;

    assert!(activities.is_empty());

    Ok(())
}
