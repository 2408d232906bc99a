use crate::database::UserStore;
use crate::models::{User, UserFields};

/// Demo records loaded at startup.
///
/// Id "4" appears twice. That is a defect in the data, kept as-is so lookups
/// show first-match behaviour; `seed_store` reports it on startup.
pub fn default_users() -> Vec<User> {
    vec![
        User::new("1", UserFields::new("Bruce", "Wayne", "Fighting Criminal")),
        User::new("2", UserFields::new("Punit", "Panda", "Tea Lover")),
        User::new("3", UserFields::new("Green", "Goblin", "Troubling spiderman")),
        User::new("4", UserFields::new("Ankit", "Deepak", "Gamer boy")),
        User::new("4", UserFields::new("Nirmala", "Sitaraman", "Tax collection")),
    ]
}

/// Builds the store, seeded with the demo records when `seed` is set
pub fn seed_store(seed: bool) -> UserStore {
    if !seed {
        log::info!("👥 User seed disabled, starting with an empty store");
        return UserStore::new();
    }

    let users = default_users();
    log::info!("👥 Seeding {} users", users.len());
    let store = UserStore::with_users(users);

    match store.duplicate_ids() {
        Ok(duplicates) if !duplicates.is_empty() => {
            log::warn!(
                "⚠️  Seed data contains duplicate user ids {:?}; lookups return the first match",
                duplicates
            );
        }
        Ok(_) => {}
        Err(e) => log::warn!("⚠️  Could not check seed data for duplicate ids: {}", e),
    }

    store
}
