use sea_orm::DatabaseConnection;

use crate::{
    action::{ActionEnvironment, InteractionGateway},
    component::MenuComponent,
    data::{button_action::ButtonActionRepository, menu_action::MenuActionRepository},
    error::AppError,
};

/// Runs the stored action environments of a component interaction.
pub struct InteractionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InteractionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Handles a button click
    ///
    /// Runs the `on_button_click` event of the button's environment, then acknowledges
    /// the interaction if no action responded to it.
    ///
    /// # Arguments
    /// - `gateway` - Discord side of the interaction
    /// - `message_id` - Message holding the button
    /// - `custom_id` - Custom ID of the clicked button
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of environments that ran (0 or 1)
    /// - `Err(AppError)` - Database error or the final acknowledgement failed
    pub async fn handle_button<G>(
        &self,
        gateway: &G,
        message_id: u64,
        custom_id: &str,
    ) -> Result<usize, AppError>
    where
        G: InteractionGateway + ?Sized,
    {
        let stored = ButtonActionRepository::new(self.db)
            .find(message_id, custom_id)
            .await?;

        let mut executed = 0;
        if let Some(stored) = stored {
            match ActionEnvironment::parse(&stored.action) {
                Ok(environment) => {
                    executed += 1;
                    if let Err(e) = environment.execute_button(gateway).await {
                        tracing::warn!(
                            "Actions of button {} on message {} stopped: {}",
                            custom_id,
                            message_id,
                            e
                        );
                    }
                }
                Err(e) => tracing::error!(
                    "Stored actions of button {} on message {} are invalid: {}",
                    custom_id,
                    message_id,
                    e
                ),
            }
        }

        finish(gateway).await?;

        Ok(executed)
    }

    /// Handles a string select menu submission
    ///
    /// Every option with stored actions runs exactly one event: `on_menu_select` when the
    /// option is among the submitted values, `on_menu_unselect` otherwise. Environments
    /// run in the order they were stored.
    ///
    /// # Arguments
    /// - `gateway` - Discord side of the interaction
    /// - `message_id` - Message holding the menu
    /// - `menu` - The menu as currently shown, used to map values back to labels
    /// - `menu_id` - Custom ID of the menu
    /// - `values` - Submitted option values
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of environments that ran
    /// - `Err(AppError)` - Database error or the final acknowledgement failed
    pub async fn handle_menu<G>(
        &self,
        gateway: &G,
        message_id: u64,
        menu: Option<&MenuComponent>,
        menu_id: &str,
        values: &[String],
    ) -> Result<usize, AppError>
    where
        G: InteractionGateway + ?Sized,
    {
        // Without the menu, values are all we know; options are usually labelled by value.
        let selected = match menu {
            Some(menu) => menu.labels_for_values(values),
            None => values.to_vec(),
        };

        let stored = MenuActionRepository::new(self.db)
            .get_by_menu(message_id, menu_id)
            .await?;

        let mut executed = 0;
        for option in stored {
            let environment = match ActionEnvironment::parse(&option.action) {
                Ok(environment) => environment,
                Err(e) => {
                    tracing::error!(
                        "Stored actions of option '{}' of menu {} are invalid: {}",
                        option.option_label,
                        menu_id,
                        e
                    );
                    continue;
                }
            };

            let is_selected = selected.contains(&option.option_label);
            executed += 1;

            if let Err(e) = environment.execute_menu(gateway, is_selected).await {
                tracing::warn!(
                    "Actions of option '{}' of menu {} stopped: {}",
                    option.option_label,
                    menu_id,
                    e
                );
            }
        }

        finish(gateway).await?;

        Ok(executed)
    }
}

async fn finish<G>(gateway: &G) -> Result<(), AppError>
where
    G: InteractionGateway + ?Sized,
{
    if !gateway.has_responded() {
        gateway.acknowledge().await?;
    }

    Ok(())
}
