use super::*;
use crate::service::action::ActionService;

/// Tests attaching a button environment.
///
/// Verifies the stored document is canonical JSON and reads back as the same
/// environment.
///
/// Expected: environment stored and returned by lookup
#[tokio::test]
async fn stores_button_environment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_action_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ActionService::new(db);

    let pretty = serde_json::to_string_pretty(&serde_json::from_str::<serde_json::Value>(
        &say_button("hi"),
    )?)?;
    let stored = service.set_button_action(location(10), "verify", &pretty).await?;

    let found = service.button_action(10, "verify").await?.unwrap();
    assert_eq!(found.kind, EnvironmentType::Buttons);
    assert_eq!(found.to_json()?, stored.to_json()?);
    assert!(service.button_action(10, "other").await?.is_none());

    Ok(())
}

/// Tests rejection of environments written for the other component type.
///
/// Expected: BadRequest and nothing stored
#[tokio::test]
async fn rejects_environment_of_wrong_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_action_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ActionService::new(db);

    let result = service
        .set_button_action(location(10), "verify", &toggle_role_menu(5))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .set_menu_action(location(10), "roles", "Red", &say_button("hi"))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    assert!(service.button_action(10, "verify").await?.is_none());

    Ok(())
}

/// Tests rejection of invalid documents.
///
/// Expected: ActionErr
#[tokio::test]
async fn rejects_invalid_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_action_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ActionService::new(db)
        .set_button_action(location(10), "verify", "{ \"type\": \"buttons\" ")
        .await;

    assert!(matches!(result, Err(AppError::ActionErr(_))));

    Ok(())
}

/// Tests that renamed menus and options keep their actions.
///
/// Expected: lookups by the new names succeed, old names find nothing
#[tokio::test]
async fn renames_keep_actions_attached() -> Result<(), AppError> {
    let test = TestBuilder::new().with_action_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ActionService::new(db);

    service
        .set_menu_action(location(10), "roles", "Red", &toggle_role_menu(5))
        .await?;

    service.rename_menu(10, "roles", "colors").await?;
    service.rename_option(10, "colors", "Red", "Crimson").await?;

    assert!(service.menu_action(10, "roles", "Red").await?.is_none());
    assert!(service.menu_action(10, "colors", "Crimson").await?.is_some());

    Ok(())
}

/// Tests purging the actions of a deleted message.
///
/// Expected: button and option actions of that message removed, others kept
#[tokio::test]
async fn purges_deleted_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_action_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ActionService::new(db);

    factory::button_action::ButtonActionFactory::new(db)
        .message_id("10")
        .button_id("a")
        .build()
        .await?;
    factory::menu_action::MenuActionFactory::new(db)
        .message_id("10")
        .build()
        .await?;
    factory::button_action::ButtonActionFactory::new(db)
        .message_id("11")
        .button_id("a")
        .build()
        .await?;

    assert_eq!(service.purge_messages(&[10]).await?, 2);
    assert_eq!(service.purge_messages(&[10]).await?, 0);
    assert!(service.button_action(11, "a").await?.is_some());

    Ok(())
}

/// Tests purging several deleted messages at once.
///
/// Verifies that a bulk delete detaches button and menu actions of every listed
/// message and that an empty list touches nothing.
///
/// Expected: actions of 10 and 11 removed, 12 kept
#[tokio::test]
async fn purges_bulk_deleted_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_action_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ActionService::new(db);

    for message_id in ["10", "11", "12"] {
        factory::button_action::ButtonActionFactory::new(db)
            .message_id(message_id)
            .button_id("a")
            .build()
            .await?;
    }
    factory::menu_action::MenuActionFactory::new(db)
        .message_id("11")
        .build()
        .await?;

    assert_eq!(service.purge_messages(&[]).await?, 0);
    assert_eq!(service.purge_messages(&[10, 11, 99]).await?, 3);
    assert!(service.button_action(10, "a").await?.is_none());
    assert!(service.button_action(11, "a").await?.is_none());
    assert!(service.button_action(12, "a").await?.is_some());

    Ok(())
}

/// Tests detaching actions.
///
/// Expected: true when something was removed, false otherwise
#[tokio::test]
async fn removes_actions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_action_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ActionService::new(db);

    service
        .set_button_action(location(10), "verify", &say_button("hi"))
        .await?;
    service
        .set_menu_action(location(10), "roles", "Red", &toggle_role_menu(5))
        .await?;
    service
        .set_menu_action(location(10), "roles", "Blue", &toggle_role_menu(6))
        .await?;

    assert!(service.remove_button_action(10, "verify").await?);
    assert!(!service.remove_button_action(10, "verify").await?);
    assert!(service.remove_menu_action(10, "roles", "Red").await?);
    assert_eq!(service.remove_menu_actions(10, "roles").await?, 1);

    Ok(())
}
