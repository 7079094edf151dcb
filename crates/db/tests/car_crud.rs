//! Integration tests for car CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create / read round-trip
//! - Full-replace update semantics
//! - Photo reference handling
//! - Delete, including delete of a missing id

use assert_matches::assert_matches;
use carkat_db::models::car::CarFields;
use carkat_db::repositories::CarRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn escort() -> CarFields {
    CarFields {
        brand: "Ford".to_string(),
        model: "Escort".to_string(),
        generation: "V рестайлинг".to_string(),
        body: "Седан, хетчбек".to_string(),
        engines: "1.3-1.8 бензин".to_string(),
        drive: "Передний".to_string(),
        car_class: "C".to_string(),
        years: "1995-2000".to_string(),
        country: "Америка".to_string(),
        weak_points: "Электрика, подвеска".to_string(),
        price_min: Some(700),
        price_max: Some(800),
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_then_read_round_trips(pool: PgPool) {
    let created = CarRepo::create(&pool, &escort()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = CarRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(fetched.brand, "Ford");
    assert_eq!(fetched.model, "Escort");
    assert_eq!(fetched.body, "Седан, хетчбек");
    assert_eq!(fetched.years, "1995-2000");
    assert_eq!(fetched.price_min, Some(700));
    assert_eq!(fetched.price_max, Some(800));
    assert_eq!(fetched.photo_filename, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_accepts_all_fields_empty(pool: PgPool) {
    let created = CarRepo::create(&pool, &CarFields::default()).await.unwrap();
    assert_eq!(created.brand, "");
    assert_eq!(created.price_min, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_missing_id_returns_none(pool: PgPool) {
    assert_matches!(CarRepo::find_by_id(&pool, 424242).await, Ok(None));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_is_full_replace(pool: PgPool) {
    let created = CarRepo::create(&pool, &escort()).await.unwrap();

    // A replacement carrying only a brand: every other field must become
    // empty / null, not stay at its previous value.
    let replacement = CarFields {
        brand: "Opel".to_string(),
        ..CarFields::default()
    };
    let updated = CarRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.brand, "Opel");
    assert_eq!(updated.model, "");
    assert_eq!(updated.weak_points, "");
    assert_eq!(updated.price_min, None);
    assert_eq!(updated.price_max, None);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_id_returns_none(pool: PgPool) {
    assert_matches!(CarRepo::update(&pool, 424242, &escort()).await, Ok(None));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_does_not_touch_photo(pool: PgPool) {
    let created = CarRepo::create(&pool, &escort()).await.unwrap();
    CarRepo::set_photo(&pool, created.id, "abc123.png")
        .await
        .unwrap()
        .unwrap();

    let updated = CarRepo::update(&pool, created.id, &escort())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.photo_filename, Some("abc123.png".to_string()));
}

#[sqlx::test(migrations = "./migrations")]
async fn set_photo_overwrites_previous_reference(pool: PgPool) {
    let created = CarRepo::create(&pool, &escort()).await.unwrap();
    CarRepo::set_photo(&pool, created.id, "first.png").await.unwrap();
    let updated = CarRepo::set_photo(&pool, created.id, "second.jpg")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.photo_filename, Some("second.jpg".to_string()));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_row(pool: PgPool) {
    let created = CarRepo::create(&pool, &escort()).await.unwrap();

    assert!(CarRepo::delete(&pool, created.id).await.unwrap());
    assert_matches!(CarRepo::find_by_id(&pool, created.id).await, Ok(None));
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_missing_id_mutates_nothing(pool: PgPool) {
    let created = CarRepo::create(&pool, &escort()).await.unwrap();

    assert!(!CarRepo::delete(&pool, 424242).await.unwrap());

    // The existing row is untouched.
    let fetched = CarRepo::find_by_id(&pool, created.id).await.unwrap();
    assert!(fetched.is_some());
}
