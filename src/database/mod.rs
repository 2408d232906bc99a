use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::models::{User, UserFields};
use crate::utils::error::AppError;

/// In-memory user store.
///
/// Records keep insertion order. Ids are expected to be unique but this is
/// not enforced: every lookup returns the first match.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users
            .read()
            .map_err(|e| AppError::Internal(format!("User store lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users
            .write()
            .map_err(|e| AppError::Internal(format!("User store lock poisoned: {}", e)))
    }

    pub fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    pub fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        self.read()?
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(AppError::UserNotFound)
    }

    pub fn create(&self, fields: UserFields) -> Result<User, AppError> {
        let user = User::new(Uuid::new_v4().to_string(), fields);
        self.write()?.push(user.clone());
        Ok(user)
    }

    pub fn update(&self, id: &str, fields: UserFields) -> Result<User, AppError> {
        let mut users = self.write()?;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(AppError::UserNotFound)?;

        user.apply(fields);
        Ok(user.clone())
    }

    /// Removes the first record with `id` and returns it
    pub fn delete(&self, id: &str) -> Result<User, AppError> {
        let mut users = self.write()?;
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or(AppError::UserNotFound)?;

        Ok(users.remove(index))
    }

    /// Ids that appear more than once, in order of first occurrence
    pub fn duplicate_ids(&self) -> Result<Vec<String>, AppError> {
        let users = self.read()?;
        let mut seen = HashSet::new();
        let mut duplicates: Vec<String> = Vec::new();

        for user in users.iter() {
            if !seen.insert(user.id.as_str()) && !duplicates.contains(&user.id) {
                duplicates.push(user.id.clone());
            }
        }

        Ok(duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, first: &str) -> User {
        User::new(id, UserFields::new(first, "Last", "Hobby"))
    }

    fn fields(first: &str) -> UserFields {
        UserFields::new(first, "Banner", "Science")
    }

    #[test]
    fn test_create_appends_with_fresh_id() {
        let store = UserStore::with_users(vec![user("1", "Bruce")]);

        let created = store.create(fields("Bruce")).unwrap();
        let again = store.create(fields("Bruce")).unwrap();

        assert!(!created.id.is_empty());
        assert_ne!(created.id, "1");
        assert_ne!(created.id, again.id);

        let users = store.list().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[1], created);
        assert_eq!(users[2], again);
    }

    #[test]
    fn test_get_by_id_first_match_wins() {
        let store = UserStore::with_users(vec![user("4", "Ankit"), user("4", "Nirmala")]);

        assert_eq!(store.get_by_id("4").unwrap().first_name, "Ankit");
        assert!(matches!(store.get_by_id("5"), Err(AppError::UserNotFound)));
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let store = UserStore::with_users(vec![user("1", "Bruce")]);

        let updated = store
            .update("1", UserFields::new("Dick", "Grayson", "Acrobatics"))
            .unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(store.get_by_id("1").unwrap(), updated);
        assert_eq!(updated.last_name, "Grayson");
        assert_eq!(updated.hobby, "Acrobatics");
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let store = UserStore::with_users(vec![user("1", "Bruce")]);
        let before = store.list().unwrap();

        assert!(matches!(
            store.update("nope", fields("Hulk")),
            Err(AppError::UserNotFound)
        ));
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_delete_removes_only_first_match() {
        let store = UserStore::with_users(vec![
            user("3", "Green"),
            user("4", "Ankit"),
            user("4", "Nirmala"),
        ]);

        let removed = store.delete("4").unwrap();
        assert_eq!(removed.first_name, "Ankit");
        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(store.get_by_id("4").unwrap().first_name, "Nirmala");

        assert!(matches!(store.delete("42"), Err(AppError::UserNotFound)));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_duplicate_ids() {
        let store = UserStore::with_users(vec![
            user("1", "a"),
            user("4", "b"),
            user("4", "c"),
            user("4", "d"),
            user("2", "e"),
        ]);
        assert_eq!(store.duplicate_ids().unwrap(), vec!["4".to_string()]);
        assert!(UserStore::new().duplicate_ids().unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_creates_are_all_kept() {
        let store = std::sync::Arc::new(UserStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.create(fields(&format!("worker-{}", i))).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len().unwrap(), 200);
        assert!(store.duplicate_ids().unwrap().is_empty());
    }
}
