use super::*;

/// Tests guilds without stored settings get the defaults.
///
/// Expected: defaults and no stored row
#[tokio::test]
async fn missing_config_uses_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.get(7).await?;

    assert_eq!(config.guild_id, 7);
    assert!(!config.check_reactions);
    assert!(repo.find(7).await?.is_none());

    Ok(())
}

/// Tests setting a key creates the row, then updates it.
///
/// Expected: both values kept after two sets
#[tokio::test]
async fn set_creates_then_updates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.set(7, ConfigKey::CheckReactions, ConfigValue::Bool(true))
        .await?;
    let config = repo
        .set(7, ConfigKey::NotificationChannelId, ConfigValue::Channel(Some(55)))
        .await?;

    assert!(config.check_reactions);
    assert_eq!(config.notification_channel_id, Some(55));
    assert_eq!(repo.find(7).await?, Some(config));
    assert_eq!(entity::prelude::GuildConfig::find().count(db).await?, 1);

    Ok(())
}

/// Tests stored settings created elsewhere are read back.
///
/// Expected: factory values parsed into the domain model
#[tokio::test]
async fn reads_stored_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("9")
        .pins("55", 3)
        .radio("66", Some("77".to_string()))
        .build()
        .await?;

    let config = GuildConfigRepository::new(db).get(9).await?;

    assert!(config.pins_enabled());
    assert_eq!(config.minimum_reaction_count, 3);
    assert_eq!(config.radio_text_channel_id, Some(66));
    assert_eq!(config.radio_message_id, Some(77));

    Ok(())
}
