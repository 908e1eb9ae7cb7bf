use super::*;

/// Tests retrieving every selection of a guild.
///
/// Expected: Ok with only the guild's records, in insertion order
#[tokio::test]
async fn returns_only_records_for_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_addon(db, "100", "TicTacToe", "on").await?;
    factory::create_guild_addon(db, "200", "TicTacToe", "off").await?;
    factory::create_guild_addon(db, "100", "Economy", "on").await?;

    let addons = AddonRepository::new(db).get_by_guild(100).await?;

    let types: Vec<_> = addons.iter().map(|addon| addon.addon_type).collect();
    assert_eq!(types, vec![AddonType::TicTacToe, AddonType::Economy]);
    assert!(addons.iter().all(|addon| addon.guild_id == 100));

    Ok(())
}

/// Tests retrieving selections of a guild that never saved any.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let addons = AddonRepository::new(db).get_by_guild(999).await?;

    assert!(addons.is_empty());

    Ok(())
}

/// Tests that a corrupted addon type surfaces as an error.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_on_unknown_stored_addon_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_addon(db, "100", "Music", "on").await?;

    let result = AddonRepository::new(db).get_by_guild(100).await;

    assert!(result.is_err());

    Ok(())
}
