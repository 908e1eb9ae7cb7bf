use super::*;

/// Tests creating a new addon record.
///
/// Verifies that the repository creates a record when none exists for the guild and
/// addon type.
///
/// Expected: Ok with new record created
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AddonRepository::new(db);
    let addon = repo
        .upsert(UpsertAddonParam {
            guild_id: 123456789,
            addon_type: AddonType::Leveling,
            value: "classic".to_string(),
        })
        .await?;

    assert_eq!(addon.guild_id, 123456789);
    assert_eq!(addon.addon_type, AddonType::Leveling);
    assert_eq!(addon.value, "classic");

    let stored = Addon::find_by_id(addon.id).one(db).await?.unwrap();
    assert_eq!(stored.guild_id, "123456789");
    assert_eq!(stored.addon_type, "Leveling");

    Ok(())
}

/// Tests replacing an existing selection.
///
/// Verifies that upserting the same (guild, addon type) overwrites the value in place
/// rather than inserting a second record.
///
/// Expected: Ok with same record ID and a single row
#[tokio::test]
async fn updates_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AddonRepository::new(db);
    let original = repo
        .upsert(UpsertAddonParam {
            guild_id: 123456789,
            addon_type: AddonType::Economy,
            value: "on".to_string(),
        })
        .await?;

    let updated = repo
        .upsert(UpsertAddonParam {
            guild_id: 123456789,
            addon_type: AddonType::Economy,
            value: "off".to_string(),
        })
        .await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.value, "off");

    let count = Addon::find()
        .filter(entity::addon::Column::GuildId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an update preserves created_at and bumps updated_at.
///
/// Expected: created_at unchanged, updated_at later than before
#[tokio::test]
async fn preserves_created_at_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AddonRepository::new(db);
    let original = repo
        .upsert(UpsertAddonParam {
            guild_id: 1,
            addon_type: AddonType::Ticketing,
            value: "threads".to_string(),
        })
        .await?;

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let updated = repo
        .upsert(UpsertAddonParam {
            guild_id: 1,
            addon_type: AddonType::Ticketing,
            value: "channels".to_string(),
        })
        .await?;

    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    Ok(())
}

/// Tests that different addon types of one guild are separate records.
///
/// Expected: Ok with one record per addon type
#[tokio::test]
async fn creates_separate_records_per_addon_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AddonRepository::new(db);
    for addon_type in AddonType::ALL {
        repo.upsert(UpsertAddonParam {
            guild_id: 42,
            addon_type,
            value: "on".to_string(),
        })
        .await?;
    }

    let count = Addon::find().count(db).await?;
    assert_eq!(count, 4);

    Ok(())
}

/// Tests that the same addon type in different guilds does not collide.
///
/// Expected: Ok with untouched value for the other guild
#[tokio::test]
async fn keeps_guilds_isolated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_addon(db, "1", "Economy", "guild-one").await?;

    let repo = AddonRepository::new(db);
    repo.upsert(UpsertAddonParam {
        guild_id: 2,
        addon_type: AddonType::Economy,
        value: "guild-two".to_string(),
    })
    .await?;

    let first = repo.find(1, AddonType::Economy).await?.unwrap();
    assert_eq!(first.value, "guild-one");

    Ok(())
}

/// Tests that a record stored outside the repository is updated in place.
///
/// Verifies that the conflict on the (guild, addon type) key is resolved by updating
/// the existing row instead of failing or inserting a duplicate.
///
/// Expected: Ok with the existing record ID and a single row
#[tokio::test]
async fn resolves_conflict_on_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_guild_addon(db, "7", "Ticketing", "threads").await?;

    let updated = AddonRepository::new(db)
        .upsert(UpsertAddonParam {
            guild_id: 7,
            addon_type: AddonType::Ticketing,
            value: "channels".to_string(),
        })
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.created_at, existing.created_at);
    assert_eq!(updated.value, "channels");
    assert_eq!(Addon::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the schema itself rejects a second record for the same key.
///
/// Expected: Err from the unique index on a plain insert
#[tokio::test]
async fn schema_rejects_duplicate_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_dashboard_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_addon(db, "7", "Economy", "on").await?;
    let duplicate = factory::create_guild_addon(db, "7", "Economy", "off").await;

    assert!(duplicate.is_err());

    Ok(())
}
