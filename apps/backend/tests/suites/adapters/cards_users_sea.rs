use tombola::adapters::{cards_sea, users_sea};
use tombola::domain::cards::CardLayout;
use tombola::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use tombola::infra::db_errors::map_db_err;
use tombola::repos::cards::{CardCatalog, SeaCardCatalog};
use tombola::repos::users::{SeaUserDirectory, UserDirectory, CALLER_ROLE};
use sea_orm::{ActiveModelTrait, Set};

use crate::support::factory::{sample_cells, sqlite_db};

#[tokio::test]
async fn card_round_trips_through_json_column() {
    let db = sqlite_db().await;
    let stored = cards_sea::insert_card(&db, "Cartella 7", "2024.1", &sample_cells())
        .await
        .unwrap();

    let catalog = SeaCardCatalog::new(db);
    let card = catalog.find_card(stored.id).await.unwrap().unwrap();
    assert_eq!(
        card,
        CardLayout {
            id: stored.id,
            name: "Cartella 7".into(),
            version: "2024.1".into(),
            cells: sample_cells(),
        }
    );
    assert!(catalog.find_card(stored.id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn garbage_cells_are_data_corruption() {
    let db = sqlite_db().await;
    let stored = cards_sea::insert_card(&db, "c", "v", &[1, 2, 3]).await.unwrap();

    let mut active: tombola::entities::cards::ActiveModel = stored.clone().into();
    active.cells = Set(serde_json::json!({ "not": "cells" }));
    active.update(&db).await.unwrap();

    let err = SeaCardCatalog::new(db).find_card(stored.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}

#[tokio::test]
async fn roles_and_lookup() {
    let db = sqlite_db().await;
    let user = users_sea::create_user(&db, "Gino", "gino@example.com")
        .await
        .unwrap();
    let directory = SeaUserDirectory::new(db.clone());

    let summary = directory.find_user(user.id).await.unwrap().unwrap();
    assert_eq!(summary.name, "Gino");
    assert!(directory.find_user(user.id + 1).await.unwrap().is_none());

    assert!(!directory.has_role(user.id, CALLER_ROLE).await.unwrap());
    users_sea::grant_role(&db, user.id, CALLER_ROLE).await.unwrap();
    assert!(directory.has_role(user.id, CALLER_ROLE).await.unwrap());
    assert!(!directory.has_role(user.id, "admin").await.unwrap());

    // granting twice reuses the role row
    let again = users_sea::ensure_role(&db, CALLER_ROLE).await.unwrap();
    let first = users_sea::ensure_role(&db, CALLER_ROLE).await.unwrap();
    assert_eq!(again.id, first.id);
}

#[tokio::test]
async fn duplicate_email_maps_to_conflict() {
    let db = sqlite_db().await;
    users_sea::create_user(&db, "a", "same@example.com").await.unwrap();
    let err = users_sea::create_user(&db, "b", "same@example.com")
        .await
        .unwrap_err();
    assert!(map_db_err(err).is_conflict(&ConflictKind::UniqueEmail));
}
