//! Beat lifecycle tests: atomic triple insert (product, beat, ownership
//! link) and ownership-scoped reads, updates, and deletes.

use assert_matches::assert_matches;
use sqlx::PgPool;

use beatstore_db::models::account::CreateAccount;
use beatstore_db::models::beat::{CreateBeat, UpdateBeat};
use beatstore_db::repositories::{AccountRepo, ArtistRepo, BeatRepo, ProductRepo};
use beatstore_db::DbError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create an account plus artist profile; returns (account_id, artist_id).
async fn seed_artist(pool: &PgPool, email: &str) -> (i64, i64) {
    let account_id = AccountRepo::create(
        pool,
        &CreateAccount {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            name: None,
        },
    )
    .await
    .unwrap();
    let artist_id = ArtistRepo::create(pool, account_id).await.unwrap();
    (account_id, artist_id)
}

fn trap_beat() -> CreateBeat {
    CreateBeat {
        stripe_id: "prod_abc".to_string(),
        bpm: 140,
        key: "Cm".to_string(),
        path: "/f.wav".to_string(),
        tag: "trap".to_string(),
        price: 29.99,
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Creation atomicity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_links_product_and_owner(pool: PgPool) {
    let (account_id, artist_id) = seed_artist(&pool, "a@example.com").await;

    let beat_id = BeatRepo::create(&pool, account_id, artist_id, &trap_beat())
        .await
        .unwrap();

    let beat = BeatRepo::get_owned(&pool, account_id, beat_id).await.unwrap();
    assert_eq!(beat.bpm, 140);
    assert_eq!(beat.key, "Cm");
    assert_eq!(beat.path, "/f.wav");
    assert_eq!(beat.tag, "trap");
    assert_eq!(beat.price, 29.99);

    let product = ProductRepo::get(&pool, beat.product_id).await.unwrap();
    assert_eq!(product.artist_id, artist_id);
    assert_eq!(product.stripe_id, "prod_abc");

    let links = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users_beats WHERE user_id = $1 AND beat_id = $2",
    )
    .bind(account_id)
    .bind(beat_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(links, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rolls_back_when_link_insert_fails(pool: PgPool) {
    let (_, artist_id) = seed_artist(&pool, "a@example.com").await;

    // Nonexistent owner: the third insert hits the users_beats FK, which must
    // also roll back the product and beat inserts from the same transaction.
    let err = BeatRepo::create(&pool, 999_999, artist_id, &trap_beat())
        .await
        .unwrap_err();
    assert_matches!(err, DbError::ConstraintViolation { .. });

    assert_eq!(count(&pool, "beats").await, 0);
    assert_eq!(count(&pool, "products").await, 0);
    assert_eq!(count(&pool, "users_beats").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rolls_back_when_product_insert_fails(pool: PgPool) {
    let (account_id, _) = seed_artist(&pool, "a@example.com").await;

    // Nonexistent artist: the first insert fails, nothing may remain.
    let err = BeatRepo::create(&pool, account_id, 999_999, &trap_beat())
        .await
        .unwrap_err();
    assert_matches!(err, DbError::ConstraintViolation { .. });

    assert_eq!(count(&pool, "beats").await, 0);
    assert_eq!(count(&pool, "products").await, 0);
    assert_eq!(count(&pool, "users_beats").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_creates_produce_distinct_ids(pool: PgPool) {
    let (account_id, artist_id) = seed_artist(&pool, "a@example.com").await;

    let mut handles = Vec::new();
    for i in 0..4 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            let input = CreateBeat {
                stripe_id: format!("prod_{i}"),
                bpm: 120 + i,
                key: "Am".to_string(),
                path: format!("/beat_{i}.wav"),
                tag: "house".to_string(),
                price: 10.0,
            };
            BeatRepo::create(&pool, account_id, artist_id, &input)
                .await
                .unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4, "beat ids must be distinct");
    assert_eq!(count(&pool, "users_beats").await, 4);
}

// ---------------------------------------------------------------------------
// Ownership scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_owned_hides_foreign_beats(pool: PgPool) {
    let (owner_a, artist_a) = seed_artist(&pool, "a@example.com").await;
    let (owner_b, _) = seed_artist(&pool, "b@example.com").await;

    let beat_id = BeatRepo::create(&pool, owner_a, artist_a, &trap_beat())
        .await
        .unwrap();

    // Owner sees it; a different artist gets NotFound, not "forbidden".
    BeatRepo::get_owned(&pool, owner_a, beat_id).await.unwrap();
    let err = BeatRepo::get_owned(&pool, owner_b, beat_id).await.unwrap_err();
    assert_matches!(err, DbError::NotFound(_));

    // The public catalog read is unscoped.
    BeatRepo::get(&pool, beat_id).await.unwrap();

    assert_eq!(BeatRepo::list_owned(&pool, owner_a).await.unwrap().len(), 1);
    assert!(BeatRepo::list_owned(&pool, owner_b).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_scoped_by_owner(pool: PgPool) {
    let (owner_a, artist_a) = seed_artist(&pool, "a@example.com").await;
    let (owner_b, _) = seed_artist(&pool, "b@example.com").await;

    let beat_id = BeatRepo::create(&pool, owner_a, artist_a, &trap_beat())
        .await
        .unwrap();

    let input = UpdateBeat {
        price: Some(19.99),
        ..Default::default()
    };

    // Mismatched owner: zero rows affected, reported as NotFound.
    let err = BeatRepo::update(&pool, owner_b, beat_id, &input)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::NotFound(_));
    let beat = BeatRepo::get(&pool, beat_id).await.unwrap();
    assert_eq!(beat.price, 29.99);

    // Rightful owner succeeds.
    BeatRepo::update(&pool, owner_a, beat_id, &input).await.unwrap();
    let beat = BeatRepo::get(&pool, beat_id).await.unwrap();
    assert_eq!(beat.price, 19.99);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_scoped_by_owner(pool: PgPool) {
    let (owner_a, artist_a) = seed_artist(&pool, "a@example.com").await;
    let (owner_b, _) = seed_artist(&pool, "b@example.com").await;

    let beat_id = BeatRepo::create(&pool, owner_a, artist_a, &trap_beat())
        .await
        .unwrap();

    let err = BeatRepo::delete(&pool, owner_b, beat_id).await.unwrap_err();
    assert_matches!(err, DbError::NotFound(_));
    BeatRepo::get(&pool, beat_id).await.unwrap();

    BeatRepo::delete(&pool, owner_a, beat_id).await.unwrap();
    let err = BeatRepo::get(&pool, beat_id).await.unwrap_err();
    assert_matches!(err, DbError::NotFound(_));

    // Link rows go with the beat (FK cascade).
    assert_eq!(count(&pool, "users_beats").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_on_empty_table_returns_empty_vec(pool: PgPool) {
    assert!(BeatRepo::list(&pool).await.unwrap().is_empty());
}
