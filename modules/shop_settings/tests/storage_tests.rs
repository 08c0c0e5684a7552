//! SeaORM storage tests against an in-memory SQLite database

mod common;

use common::{full_form, input, print_test_header};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::json;
use shop_settings::domain::repository::{OptionRepository, PostMetaRepository};
use shop_settings::domain::{Service, SettingsSchema};
use shop_settings::infra::storage::{SeaOrmOptionRepository, SeaOrmPostMetaRepository};
use shop_settings::{Config, FieldValue, ShopSettingsModule};
use std::sync::Arc;

async fn connect() -> DatabaseConnection {
    // One connection, otherwise each pool member sees its own empty database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.unwrap();
    ShopSettingsModule::default().migrate(&db).await.unwrap();
    db
}

#[tokio::test]
async fn test_option_upsert_overwrites() {
    print_test_header(
        "test_option_upsert_overwrites",
        &["Verify the option slot is a single row replaced on every put"],
    );
    let repo = SeaOrmOptionRepository::new(Arc::new(connect().await));

    assert_eq!(repo.get("not_woo-settings").await.unwrap(), None);

    repo.put("not_woo-settings", &json!({ "shop_active": 1 }))
        .await
        .unwrap();
    repo.put("not_woo-settings", &json!({ "shop_active": 0 }))
        .await
        .unwrap();

    let stored = repo.get("not_woo-settings").await.unwrap();
    assert_eq!(stored, Some(json!({ "shop_active": 0 })));
    assert_eq!(repo.get("other").await.unwrap(), None);
}

#[tokio::test]
async fn test_post_meta_prefix_filter() {
    let repo = SeaOrmPostMetaRepository::new(Arc::new(connect().await));

    repo.upsert(10, "_not_woo-product_sku", "A").await.unwrap();
    repo.upsert(10, "_not_woo-product_sku", "B").await.unwrap();
    repo.upsert(10, "_edit_lock", "123").await.unwrap();
    repo.upsert(11, "_not_woo-product_sku", "C").await.unwrap();

    let rows = repo.find_by_post(10, "_not_woo-product_").await.unwrap();
    assert_eq!(rows, vec![("_not_woo-product_sku".to_string(), "B".to_string())]);
}

#[tokio::test]
async fn test_post_meta_rejects_out_of_range_id() {
    let repo = SeaOrmPostMetaRepository::new(Arc::new(connect().await));
    assert!(repo.upsert(u64::MAX, "_not_woo-product_sku", "x").await.is_err());
}

#[tokio::test]
async fn test_service_over_sqlite() {
    print_test_header(
        "test_service_over_sqlite",
        &["Verify settings and product meta persist through SeaORM"],
    );
    let db = Arc::new(connect().await);
    let service = Service::new(
        Arc::new(SettingsSchema::shop()),
        Arc::new(SettingsSchema::product_meta()),
        Arc::new(SeaOrmOptionRepository::new(db.clone())),
        Arc::new(SeaOrmPostMetaRepository::new(db)),
        &Config::default(),
    );

    let saved = service.save_settings(full_form()).await.unwrap();
    let read = service.get_settings().await.unwrap();
    assert_eq!(saved, read);
    assert_eq!(
        read["shop_css_minified"],
        FieldValue::Text("body{color:red}".into())
    );

    service
        .save_product_meta(3, input(&[("sku", "NW-3"), ("data", "a\tb")]))
        .await
        .unwrap();
    let meta = service.get_product_meta(3).await.unwrap();
    assert_eq!(meta["sku"], FieldValue::Text("NW-3".into()));
    assert_eq!(meta["data"], FieldValue::Text("a\tb".into()));
}

#[tokio::test]
async fn test_concurrent_saves_leave_one_complete_record() {
    print_test_header(
        "test_concurrent_saves_leave_one_complete_record",
        &[
            "Verify concurrent writers never interleave fields in the slot",
            "The stored record is exactly one writer's input, omitted fields defaulted",
        ],
    );
    let db = Arc::new(connect().await);
    let service = Arc::new(Service::new(
        Arc::new(SettingsSchema::shop()),
        Arc::new(SettingsSchema::product_meta()),
        Arc::new(SeaOrmOptionRepository::new(db.clone())),
        Arc::new(SeaOrmPostMetaRepository::new(db)),
        &Config::default(),
    ));

    let writers: Vec<_> = (0..8u64)
        .map(|n| {
            let service = service.clone();
            tokio::spawn(async move {
                // shop_js is left out of every write
                let active = (n % 2).to_string();
                let image = format!("writer-{n}.png");
                let paypal = format!("writer-{n}@example.com");
                let css = format!(".w{n} {{ top: {n}px; }}");
                let form = input(&[
                    ("shop_active", active.as_str()),
                    ("shop_image", image.as_str()),
                    ("paypal_address", paypal.as_str()),
                    ("shop_css", css.as_str()),
                ]);
                service.save_settings(form).await
            })
        })
        .collect();

    let mut saved = Vec::new();
    for writer in writers {
        saved.push(writer.await.unwrap().unwrap());
    }

    let stored = service.get_settings().await.unwrap();
    assert!(saved.contains(&stored), "stored record matches no writer");

    let Some(FieldValue::Text(image)) = stored.get("shop_image") else {
        panic!("shop_image missing");
    };
    let n: u64 = image
        .trim_start_matches("writer-")
        .trim_end_matches(".png")
        .parse()
        .unwrap();
    assert_eq!(stored["shop_active"], FieldValue::Integer(n % 2));
    assert_eq!(
        stored["paypal_address"],
        FieldValue::Text(format!("writer-{n}@example.com"))
    );
    assert_eq!(
        stored["shop_css_minified"],
        FieldValue::Text(format!(".w{n}{{top:{n}px}}"))
    );
    assert_eq!(stored["shop_js"], FieldValue::Text(String::new()));
    assert_eq!(stored["shop_js_minified"], FieldValue::Text(String::new()));
}

#[tokio::test]
async fn test_module_lifecycle() {
    let db = connect().await;
    let module = ShopSettingsModule::default();

    assert!(module.client().is_err());
    module.init(db).unwrap();

    let client = module.client().unwrap();
    let record = client.get_settings().await.unwrap();
    assert_eq!(record["shop_active"], FieldValue::Integer(1));
}
