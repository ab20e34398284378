//! Integration tests for the in-memory data store.
//!
//! Exercises the `DataStore` contract the synchronization layer relies on:
//! - Ordering (services oldest first, everything else newest first)
//! - Store-generated ids and timestamps
//! - Not-found updates and deletes report `false`, not an error
//! - Fault injection (unavailable and missing tables)

use assert_matches::assert_matches;
use mucize_db::memory::MemoryStore;
use mucize_db::models::appointment::NewAppointmentRow;
use mucize_db::models::message::NewMessageRow;
use mucize_db::models::review::NewReviewRow;
use mucize_db::models::service::NewServiceRow;
use mucize_db::{DataStore, StoreError, Table};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_service(title: &str) -> NewServiceRow {
    NewServiceRow {
        title: title.to_string(),
        description: String::new(),
        icon: "Sparkles".to_string(),
        image: String::new(),
        base_price: 300.0,
    }
}

fn new_appointment(service_id: Uuid, phone: &str) -> NewAppointmentRow {
    NewAppointmentRow {
        customer_name: "Ayşe Yılmaz".to_string(),
        customer_phone: phone.to_string(),
        service_id,
        service_name: "Ev Temizliği".to_string(),
        date: "2024-05-12".to_string(),
        time_slot: "09:00 - 13:00".to_string(),
        address: "Merkez / Çorum".to_string(),
        status: "pending".to_string(),
        notes: None,
        price_estimate: Some(300.0),
    }
}

fn new_message(name: &str) -> NewMessageRow {
    NewMessageRow {
        name: name.to_string(),
        email: "bilgi@example.com".to_string(),
        phone: "05421112233".to_string(),
        message: "Fiyat almak istiyorum".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn services_list_oldest_first() {
    let store = MemoryStore::new();
    store.insert_service(&new_service("Ev Temizliği")).await.unwrap();
    store.insert_service(&new_service("Ofis Temizliği")).await.unwrap();

    let titles: Vec<_> = store
        .list_services()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, ["Ev Temizliği", "Ofis Temizliği"]);
}

#[tokio::test]
async fn appointments_and_messages_list_newest_first() {
    let store = MemoryStore::new();
    let service_id = Uuid::new_v4();
    let first = store
        .insert_appointment(&new_appointment(service_id, "1"))
        .await
        .unwrap();
    let second = store
        .insert_appointment(&new_appointment(service_id, "2"))
        .await
        .unwrap();
    store.insert_message(&new_message("eski")).await.unwrap();
    store.insert_message(&new_message("yeni")).await.unwrap();

    let appts = store.list_appointments().await.unwrap();
    assert_eq!(appts[0].id, second.id);
    assert_eq!(appts[1].id, first.id);

    let messages = store.list_messages().await.unwrap();
    assert_eq!(messages[0].name, "yeni");
}

#[tokio::test]
async fn inserts_generate_distinct_ids() {
    let store = MemoryStore::new();
    let a = store.insert_service(&new_service("A")).await.unwrap();
    let b = store.insert_service(&new_service("B")).await.unwrap();
    assert_ne!(a.id, b.id);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_update_reports_missing_row() {
    let store = MemoryStore::new();
    let appt = store
        .insert_appointment(&new_appointment(Uuid::new_v4(), "1"))
        .await
        .unwrap();

    assert!(store
        .update_appointment_status(appt.id, "approved")
        .await
        .unwrap());
    assert!(!store
        .update_appointment_status(Uuid::new_v4(), "approved")
        .await
        .unwrap());

    let appts = store.list_appointments().await.unwrap();
    assert_eq!(appts[0].status, "approved");
}

#[tokio::test]
async fn service_update_replaces_fields() {
    let store = MemoryStore::new();
    let svc = store.insert_service(&new_service("Eski")).await.unwrap();

    let mut changed = new_service("Yeni");
    changed.base_price = 650.0;
    assert!(store.update_service(svc.id, &changed).await.unwrap());

    let services = store.list_services().await.unwrap();
    assert_eq!(services[0].title, "Yeni");
    assert_eq!(services[0].base_price, 650.0);
}

#[tokio::test]
async fn deleting_service_keeps_referencing_rows() {
    let store = MemoryStore::new();
    let svc = store.insert_service(&new_service("Koltuk")).await.unwrap();
    store
        .insert_appointment(&new_appointment(svc.id, "1"))
        .await
        .unwrap();
    store
        .insert_review(&NewReviewRow {
            service_id: svc.id,
            customer_name: "Mehmet".to_string(),
            rating: 5,
            comment: "Harika".to_string(),
        })
        .await
        .unwrap();

    assert!(store.delete_service(svc.id).await.unwrap());
    assert!(!store.delete_service(svc.id).await.unwrap());

    assert_eq!(store.list_appointments().await.unwrap().len(), 1);
    assert_eq!(store.list_reviews().await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Faults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unavailable_table_fails_every_operation() {
    let store = MemoryStore::new();
    store.set_unavailable(Table::Messages, "connection reset").await;

    assert_matches!(
        store.list_messages().await,
        Err(StoreError::Unavailable { table: "messages", .. })
    );
    assert!(store.insert_message(&new_message("x")).await.is_err());
    // Other tables are unaffected.
    assert!(store.list_services().await.is_ok());

    store.restore(Table::Messages).await;
    assert!(store.list_messages().await.is_ok());
}

#[tokio::test]
async fn dropped_table_reports_missing_table() {
    let store = MemoryStore::new();
    store.drop_table(Table::Reviews).await;

    let err = store.list_reviews().await.unwrap_err();
    assert!(err.is_missing_table());
    assert_eq!(err.to_string(), "Table 'reviews' does not exist");
}
