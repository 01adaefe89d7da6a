//! Walk-throughs printed by the `demo` command.

use tracing::info;

use common::{AppError, AppResult};

use crate::config::StoreKind;
use crate::service::UserService;

/// Run the walk-through suited to the selected backend.
pub async fn run(service: &dyn UserService, store: StoreKind) -> AppResult<()> {
    match store {
        StoreKind::Memory => run_crud_scenario(service).await,
        StoreKind::Postgres => run_lifecycle(service).await,
    }
}

/// Create two users, delete the second, check the first survives.
pub async fn run_crud_scenario(service: &dyn UserService) -> AppResult<()> {
    let john = service
        .create_user("john_doe".to_string(), "john@example.com".to_string())
        .await?;
    let jane = service
        .create_user("jane_doe".to_string(), "jane@example.com".to_string())
        .await?;
    info!(john = john.id, jane = jane.id, "users created");

    let found = service.get_user_by_id(john.id).await?;
    println!("Found user: {}", found);

    service.delete_user(jane.id).await?;
    println!("Deleted user with ID: {}", jane.id);

    match service.get_user_by_id(jane.id).await {
        Err(AppError::NotFound) => println!("User with ID {} not found", jane.id),
        Err(e) => return Err(e),
        Ok(user) => {
            return Err(AppError::internal(format!(
                "user {} still present after delete",
                user.id
            )))
        }
    }

    let survivor = service.get_user_by_id(john.id).await?;
    if survivor != john {
        return Err(AppError::internal("remaining user changed after delete"));
    }
    println!("Still present: {}", survivor);

    Ok(())
}

/// Create, fetch, rename and delete a single user.
pub async fn run_lifecycle(service: &dyn UserService) -> AppResult<()> {
    let created = service
        .create_user("jane_doe".to_string(), "jane@example.com".to_string())
        .await?;
    println!("Created user: {}", created);

    let mut user = service.get_user_by_id(created.id).await?;
    println!("Fetched user: {}", user);

    user.username = "jane_updated".to_string();
    service.update_user(&user).await?;
    println!("Updated user: {}", user);

    service.delete_user(user.id).await?;
    println!("Deleted user with ID: {}", user.id);

    Ok(())
}
