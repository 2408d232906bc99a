// ==================== USER RECORDS ====================
// Validation happens here, before the store is touched, so a rejected
// request never mutates state.

use crate::{
    database::UserStore,
    models::{User, UserInput},
    utils::error::AppError,
};

pub fn list_users(store: &UserStore) -> Result<Vec<User>, AppError> {
    store.list()
}

pub fn get_user(store: &UserStore, id: &str) -> Result<User, AppError> {
    store.get_by_id(id).map_err(|e| {
        log::warn!("⚠️ User {} not found", id);
        e
    })
}

pub fn add_user(store: &UserStore, input: UserInput) -> Result<User, AppError> {
    let fields = input.validate()?;
    let user = store.create(fields)?;
    log::info!("✅ User created: {}", user.id);
    Ok(user)
}

pub fn update_user(store: &UserStore, id: &str, input: UserInput) -> Result<User, AppError> {
    let fields = input.validate()?;
    match store.update(id, fields) {
        Ok(user) => {
            log::info!("✅ User updated: {}", id);
            Ok(user)
        }
        Err(e) => {
            log::warn!("⚠️ Cannot update user {}: {}", id, e);
            Err(e)
        }
    }
}

pub fn delete_user(store: &UserStore, id: &str) -> Result<User, AppError> {
    match store.delete(id) {
        Ok(user) => {
            log::info!("🗑️  User deleted: {}", id);
            Ok(user)
        }
        Err(e) => {
            log::warn!("⚠️ Cannot delete user {}: {}", id, e);
            Err(e)
        }
    }
}
