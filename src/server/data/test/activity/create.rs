use super::*;

/// Tests creating an activity at both ends of the difficulty range.
///
/// Expected: Ok with both activities created
#[tokio::test]
async fn creates_activities_at_range_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityRepository::new(db);
    let easy = repo
        .create(&CreateActivityParams::new("Crafts".to_string(), 0).unwrap())
        .await?;
    let hard = repo
        .create(&CreateActivityParams::new("Climbing".to_string(), 10).unwrap())
        .await?;

    assert_eq!(easy.difficulty, 0);
    assert_eq!(hard.difficulty, 10);
    assert_eq!(entity::prelude::Activity::find().count(db).await?, 2);

    Ok(())
}
