use super::*;

/// Tests existence checks for present and absent campers.
///
/// Expected: true for a stored camper, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::camper::create_camper(db).await?;

    let repo = CamperRepository::new(db);

    assert!(repo.exists(camper.id).await?);
    assert!(!repo.exists(camper.id + 1).await?);

    Ok(())
}
