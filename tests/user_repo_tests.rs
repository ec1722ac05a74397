use pulseboard_backend::model::user::{NewUser, Role, UserPatch, UserStatus};
use pulseboard_backend::repository::repository_error::RepositoryError;
use pulseboard_backend::repository::user_repo::{KvUserRepository, UserRepository, USERS_KEY};
use pulseboard_backend::util::kv::{KvStore, MemoryKvStore};
use std::sync::Arc;
use tracing::info;

/// Initialize tracing for tests
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn repo_with_store() -> (KvUserRepository, Arc<MemoryKvStore>) {
    let store = Arc::new(MemoryKvStore::new());
    (KvUserRepository::new(store.clone()), store)
}

fn sample_new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Member,
        status: UserStatus::Active,
        avatar: None,
        password: None,
    }
}

mod seeding_tests {
    use super::*;

    #[tokio::test]
    async fn first_access_seeds_and_persists_the_bootstrap_dataset() {
        init_tracing();
        let (repo, store) = repo_with_store();

        assert!(!store.exists(USERS_KEY).await.unwrap());
        let users = repo.list_all().await.unwrap();
        assert_eq!(users.len(), 6);
        assert_eq!(users[0].email, "john@example.com");
        assert_eq!(users[5].id, "006");
        assert!(store.exists(USERS_KEY).await.unwrap());

        // Second read comes back from the store unchanged, same order.
        let again = repo.list_all().await.unwrap();
        assert_eq!(again, users);
        info!("seeding verified");
    }

    #[tokio::test]
    async fn stored_collection_is_returned_as_is() {
        init_tracing();
        let (repo, store) = repo_with_store();
        store
            .set_string(
                USERS_KEY,
                r#"[{"id":"zzz","name":"Solo","email":"solo@example.com","role":"Editor","status":"Inactive"}]"#,
            )
            .await
            .unwrap();

        let users = repo.list_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "zzz");
        assert_eq!(users[0].role, Role::Editor);
        assert_eq!(users[0].avatar, None);
    }
}

mod insert_tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_id_and_derives_avatar() {
        init_tracing();
        let (repo, _store) = repo_with_store();

        let created = repo.insert(sample_new_user("New Person", "new@example.com")).await.unwrap();
        assert_eq!(created.id.len(), 9);
        assert_eq!(
            created.avatar.as_deref(),
            Some("https://ui-avatars.com/api/?name=New%20Person&background=random")
        );

        let users = repo.list_all().await.unwrap();
        assert_eq!(users.len(), 7);
        // Appended at the end, insertion order preserved.
        assert_eq!(users.last().unwrap(), &created);
    }

    #[tokio::test]
    async fn insert_keeps_an_explicit_avatar() {
        init_tracing();
        let (repo, _store) = repo_with_store();

        let mut new_user = sample_new_user("Pic Person", "pic@example.com");
        new_user.avatar = Some("https://example.com/me.png".to_string());
        let created = repo.insert(new_user).await.unwrap();
        assert_eq!(created.avatar.as_deref(), Some("https://example.com/me.png"));
    }
}

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn merge_overlays_supplied_fields_and_preserves_the_rest() {
        init_tracing();
        let (repo, _store) = repo_with_store();
        repo.list_all().await.unwrap();

        let mut patch = UserPatch::for_id("003");
        patch.status = Some(UserStatus::Active);
        let merged = repo.update_merge(patch.clone()).await.unwrap();

        assert_eq!(merged.id, "003");
        assert_eq!(merged.status, UserStatus::Active);
        // Untouched fields survive the merge.
        assert_eq!(merged.name, "Michael Lee");
        assert_eq!(merged.email, "michael@example.com");
        assert_eq!(merged.role, Role::Member);
        assert_eq!(merged.avatar.as_deref(), Some("https://picsum.photos/102/102"));

        // Idempotent: applying the same patch again changes nothing.
        let merged_again = repo.update_merge(patch).await.unwrap();
        assert_eq!(merged_again, merged);
    }

    #[tokio::test]
    async fn rename_keeps_a_remote_avatar() {
        init_tracing();
        let (repo, _store) = repo_with_store();
        repo.list_all().await.unwrap();

        let mut patch = UserPatch::for_id("001");
        patch.name = Some("Johnny Doe".to_string());
        let merged = repo.update_merge(patch).await.unwrap();
        assert_eq!(merged.name, "Johnny Doe");
        // Seeded avatar is a real URL, so it is kept.
        assert_eq!(merged.avatar.as_deref(), Some("https://picsum.photos/100/100"));
    }

    #[tokio::test]
    async fn rename_regenerates_a_placeholder_avatar() {
        init_tracing();
        let (repo, _store) = repo_with_store();
        let created = repo
            .insert(NewUser {
                name: "Temp Name".to_string(),
                email: "temp@example.com".to_string(),
                role: Role::Member,
                status: UserStatus::Active,
                avatar: Some("local-placeholder.png".to_string()),
                password: None,
            })
            .await
            .unwrap();

        let mut patch = UserPatch::for_id(created.id.clone());
        patch.name = Some("Final Name".to_string());
        let merged = repo.update_merge(patch).await.unwrap();
        assert_eq!(
            merged.avatar.as_deref(),
            Some("https://ui-avatars.com/api/?name=Final%20Name&background=random")
        );
    }

    #[tokio::test]
    async fn unknown_id_surfaces_not_found_without_persisting() {
        init_tracing();
        let (repo, _store) = repo_with_store();
        let before = repo.list_all().await.unwrap();

        let mut patch = UserPatch::for_id("does-not-exist");
        patch.name = Some("Ghost".to_string());
        let err = repo.update_merge(patch).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)), "got {:?}", err);

        assert_eq!(repo.list_all().await.unwrap(), before);
    }
}

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn delete_removes_the_record_and_repeats_as_noop() {
        init_tracing();
        let (repo, _store) = repo_with_store();
        repo.list_all().await.unwrap();

        repo.delete_by_id("002").await.unwrap();
        let users = repo.list_all().await.unwrap();
        assert_eq!(users.len(), 5);
        assert!(users.iter().all(|u| u.id != "002"));

        // Deleting the same id twice is a no-op the second time.
        repo.delete_by_id("002").await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 5);
    }
}
