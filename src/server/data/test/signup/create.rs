use super::*;

/// Tests creating a signup between an existing camper and activity.
///
/// Expected: Ok with signup created
#[tokio::test]
async fn creates_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::camper::create_camper(db).await?;
    let activity = factory::activity::create_activity(db).await?;

    let repo = SignupRepository::new(db);
    let params = CreateSignupParams::new(camper.id, activity.id, 9).unwrap();
    let signup = repo.create(&params).await?;

    assert!(signup.id > 0);
    assert_eq!(signup.camper_id, camper.id);
    assert_eq!(signup.activity_id, activity.id);
    assert_eq!(signup.time, 9);

    Ok(())
}

/// Tests that the database rejects a signup whose camper does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_dangling_camper_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::create_activity(db).await?;

    let repo = SignupRepository::new(db);
    let params = CreateSignupParams::new(999, activity.id, 9).unwrap();
    let result = repo.create(&params).await;

    assert!(result.is_err());

    Ok(())
}
