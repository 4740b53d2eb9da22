//! Bootstrap tests: migrations apply, conventions hold, facade wires up.

use sqlx::PgPool;

use beatstore_db::models::account::CreateAccount;
use beatstore_db::models::beat::CreateBeat;
use beatstore_db::models::playlist::CreatePlaylist;
use beatstore_db::Repositories;

/// Connect, migrate, verify the expected tables exist.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    beatstore_db::health_check(&pool).await.unwrap();

    let tables = [
        "accounts",
        "artists",
        "products",
        "beats",
        "users_beats",
        "playlists",
        "playlists_beats",
        "carts",
    ];

    for table in tables {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(exists.0, "{table} should exist after migration");
    }
}

/// All entity `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "bigint",
            "Table {table}.id should be bigint, got {data_type}"
        );
    }
}

/// Every table must carry created_at and updated_at as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = $1
                   AND column_name = $2",
            )
            .bind(table)
            .bind(col)
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) = result
                .unwrap_or_else(|| panic!("{table} should have a {col} column"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "{table}.{col} should be timestamptz"
            );
        }
    }
}

/// The facade is pure composition: one pool in, every aggregate reachable.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_facade_round_trip(pool: PgPool) {
    let repos = Repositories::new(pool);

    let account_id = repos
        .accounts()
        .create(&CreateAccount {
            email: "facade@example.com".into(),
            password_hash: "hash".into(),
            name: Some("Facade".into()),
        })
        .await
        .unwrap();
    let artist_id = repos.artists().create(account_id).await.unwrap();

    let beat_id = repos
        .beats()
        .create(
            account_id,
            artist_id,
            &CreateBeat {
                stripe_id: "prod_facade".into(),
                bpm: 128,
                key: "Am".into(),
                path: "/facade.wav".into(),
                tag: "house".into(),
                price: 9.99,
            },
        )
        .await
        .unwrap();

    let playlist_id = repos
        .playlists()
        .create(account_id, &CreatePlaylist { name: "Mine".into() })
        .await
        .unwrap();
    repos.playlists().add_beat(playlist_id, beat_id).await.unwrap();
    repos.carts().add_beat(account_id, beat_id).await.unwrap();

    let beat = repos.beats().get_owned(account_id, beat_id).await.unwrap();
    assert_eq!(beat.bpm, 128);

    let product = repos.products().get(beat.product_id).await.unwrap();
    assert_eq!(product.artist_id, artist_id);

    assert_eq!(repos.playlists().list_beats(playlist_id).await.unwrap().len(), 1);
    assert_eq!(repos.carts().list_beats(account_id).await.unwrap().len(), 1);
}
