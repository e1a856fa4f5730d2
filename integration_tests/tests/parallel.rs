use futures_util::future::join_all;
use serde_json::{json, Value};

mod common;

use common::Registry;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_never_merge() {
    let registry = Registry::start().await;

    let writes = (0..16).map(|writer| {
        let client = &registry.client;
        async move {
            if writer % 4 == 3 {
                client.delete("shared").await.map(|_| ())
            } else {
                let body = json!({"envName": "shared", "writer": writer, "payload": writer * 10});
                client.put_raw(body.to_string()).await.map(|_| ())
            }
        }
    });

    for result in join_all(writes).await {
        result.unwrap();
    }

    if let Some(record) = registry.client.get("shared").await.unwrap() {
        let value = serde_json::to_value(&record).unwrap();
        let writer = value["writer"].as_i64().unwrap();
        assert_eq!(
            value,
            json!({"envName": "shared", "writer": writer, "payload": writer * 10})
        );
    }

    registry.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn independent_keys_do_not_interfere() {
    let registry = Registry::start().await;

    let writes = (0..20).map(|i| {
        let client = &registry.client;
        async move {
            let body = json!({"envName": format!("env-{}", i), "index": i});
            client.put_raw(body.to_string()).await
        }
    });
    for result in join_all(writes).await {
        result.unwrap();
    }

    let records = registry.client.list().await.unwrap();
    assert_eq!(records.len(), 20);
    for record in records {
        let value: Value = serde_json::to_value(&record).unwrap();
        let name = record.env_name().unwrap();
        assert_eq!(name, format!("env-{}", value["index"]));
    }

    registry.stop().await;
}
