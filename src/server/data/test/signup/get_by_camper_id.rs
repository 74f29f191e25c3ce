use super::*;

/// Tests listing the signups owned by one camper.
///
/// Expected: Ok with only that camper's signups, ordered by id
#[tokio::test]
async fn returns_only_signups_of_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alex = factory::camper::create_camper(db).await?;
    let sam = factory::camper::create_camper(db).await?;
    let activity = factory::activity::create_activity(db).await?;
    let first = factory::signup::create_signup(db, alex.id, activity.id).await?;
    factory::signup::create_signup(db, sam.id, activity.id).await?;
    let second = factory::signup::SignupFactory::new(db, alex.id, activity.id)
        .time(15)
        .build()
        .await?;

    let repo = SignupRepository::new(db);
    let signups = repo.get_by_camper_id(alex.id).await?;

    let ids: Vec<i32> = signups.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(signups[1].time, 15);

    Ok(())
}

/// Tests listing signups for a camper without any.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_for_camper_without_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::camper::create_camper(db).await?;

    let repo = SignupRepository::new(db);
    let signups = repo.get_by_camper_id(camper.id).await?;

    assert!(signups.is_empty());

    Ok(())
}
