use super::*;

/// Tests storing an action for a new button.
///
/// Expected: Ok with the stored record parsed into a domain model
#[tokio::test]
async fn upsert_inserts_new_action() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ButtonAction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ButtonActionRepository::new(db);
    let stored = repo
        .upsert(SetButtonActionParam {
            location: location(10),
            button_id: "verify".to_string(),
            action: "{}".to_string(),
        })
        .await?;

    assert_eq!(stored.location, location(10));
    assert_eq!(stored.button_id, "verify");
    assert_eq!(stored.action, "{}");

    Ok(())
}

/// Tests storing an action for a button that already has one.
///
/// Verifies the existing row is replaced rather than duplicated.
///
/// Expected: one row holding the new document
#[tokio::test]
async fn upsert_replaces_existing_action() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ButtonAction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::button_action::ButtonActionFactory::new(db)
        .guild_id("1")
        .channel_id("2")
        .message_id("10")
        .button_id("verify")
        .build()
        .await?;

    let repo = ButtonActionRepository::new(db);
    let stored = repo
        .upsert(SetButtonActionParam {
            location: location(10),
            button_id: "verify".to_string(),
            action: "new".to_string(),
        })
        .await?;

    assert_eq!(stored.id, existing.id);
    assert_eq!(stored.action, "new");
    let count = entity::prelude::ButtonAction::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests finding actions by message and button.
///
/// Expected: Some for the stored button, None for others
#[tokio::test]
async fn finds_action_by_button() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ButtonAction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::button_action::ButtonActionFactory::new(db)
        .message_id("10")
        .button_id("a")
        .build()
        .await?;

    let repo = ButtonActionRepository::new(db);

    assert!(repo.find(10, "a").await?.is_some());
    assert!(repo.find(10, "b").await?.is_none());
    assert!(repo.find(11, "a").await?.is_none());

    Ok(())
}

/// Tests deleting a single button action.
///
/// Expected: true when deleted, false when nothing matched
#[tokio::test]
async fn deletes_single_action() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ButtonAction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::button_action::ButtonActionFactory::new(db)
        .message_id("10")
        .button_id("a")
        .build()
        .await?;

    let repo = ButtonActionRepository::new(db);

    assert!(repo.delete(10, "a").await?);
    assert!(!repo.delete(10, "a").await?);

    Ok(())
}

/// Tests purging all actions of a message.
///
/// Expected: only the message's rows are removed
#[tokio::test]
async fn deletes_by_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ButtonAction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for button_id in ["a", "b"] {
        factory::button_action::ButtonActionFactory::new(db)
            .message_id("10")
            .button_id(button_id)
            .build()
            .await?;
    }
    factory::button_action::ButtonActionFactory::new(db)
        .message_id("11")
        .build()
        .await?;

    let repo = ButtonActionRepository::new(db);
    let deleted = repo.delete_by_messages(&[10]).await.unwrap();

    assert_eq!(deleted, 2);
    assert!(repo.get_by_message(10).await.unwrap().is_empty());
    assert_eq!(repo.get_by_message(11).await.unwrap().len(), 1);

    Ok(())
}

/// Tests deleting the button actions of several messages in one query.
///
/// Verifies that every listed message loses its actions while unlisted
/// messages keep theirs.
///
/// Expected: 3 rows deleted, message 12 untouched
#[tokio::test]
async fn deletes_by_many_messages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ButtonAction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (message_id, button_id) in [("10", "a"), ("10", "b"), ("11", "a"), ("12", "a")] {
        factory::button_action::ButtonActionFactory::new(db)
            .message_id(message_id)
            .button_id(button_id)
            .build()
            .await?;
    }

    let repo = ButtonActionRepository::new(db);

    assert_eq!(repo.delete_by_messages(&[10, 11]).await?, 3);
    assert_eq!(repo.delete_by_messages(&[10, 11]).await?, 0);
    assert_eq!(repo.get_by_message(12).await?.len(), 1);

    Ok(())
}
