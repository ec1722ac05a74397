use crate::model::user::{Role, User, UserStatus};

/// The bootstrap dataset written to the store on first access. Fixed ids,
/// no stored passwords (these accounts use the shared fallback password).
pub fn bootstrap_users() -> Vec<User> {
    vec![
        seed_user("001", "John Doe", "john@example.com", Role::Admin, UserStatus::Active, "https://picsum.photos/100/100"),
        seed_user("002", "Jane Smith", "jane@example.com", Role::Editor, UserStatus::Active, "https://picsum.photos/101/101"),
        seed_user("003", "Michael Lee", "michael@example.com", Role::Member, UserStatus::Inactive, "https://picsum.photos/102/102"),
        seed_user("004", "Sara Wilson", "sara@example.com", Role::Member, UserStatus::Active, "https://picsum.photos/103/103"),
        seed_user("005", "David Brown", "david@example.com", Role::Editor, UserStatus::Active, "https://picsum.photos/104/104"),
        seed_user("006", "Emily Davis", "emily@example.com", Role::Member, UserStatus::Inactive, "https://picsum.photos/105/105"),
    ]
}

fn seed_user(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
    avatar: &str,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        avatar: Some(avatar.to_string()),
        password: None,
    }
}
