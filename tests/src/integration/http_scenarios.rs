//! # HTTP Scenarios
//!
//! The assembled node (config → RocksDB → gateway router) driven through
//! `tower::ServiceExt::oneshot`.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use kv_03_request_auth::test_utils::TestSigner;
    use kv_04_api_gateway::RecordDto;
    use node_runtime::{NodeConfig, NodeRuntime, StorageConfig};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn rocksdb_config(dir: &Path) -> NodeConfig {
        NodeConfig {
            storage: StorageConfig {
                path: dir.join("database"),
                in_memory: false,
            },
            ..NodeConfig::default()
        }
    }

    fn router_for(runtime: &NodeRuntime) -> Router {
        runtime.gateway().unwrap().router()
    }

    async fn post(router: &Router, path: &str, body: Vec<u8>) -> Response {
        router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header("content-length", body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn records(router: &Router, signer: &TestSigner) -> Vec<(Vec<u8>, Vec<u8>)> {
        let response = post(router, "/getAll", signer.get_all_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let dtos: Vec<RecordDto> = serde_json::from_str(&text(response).await).unwrap();
        dtos.iter()
            .map(|dto| {
                let pair = dto.decode().unwrap();
                (pair.key, pair.value)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_put_get_all_clear_over_rocksdb() {
        let dir = TempDir::new().unwrap();
        let runtime = NodeRuntime::open(rocksdb_config(dir.path())).unwrap();
        let router = router_for(&runtime);
        let p1 = TestSigner::random();
        let p2 = TestSigner::random();

        let response = post(&router, "/put", p1.put_request(b"alpha", b"1")).await;
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(
            records(&router, &p1).await,
            vec![(b"alpha".to_vec(), b"1".to_vec())]
        );
        assert!(records(&router, &p2).await.is_empty());

        let response = post(&router, "/clear", p1.clear_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(records(&router, &p1).await.is_empty());
    }

    #[tokio::test]
    async fn test_records_survive_restart() {
        let dir = TempDir::new().unwrap();
        let signer = TestSigner::random();

        {
            let runtime = NodeRuntime::open(rocksdb_config(dir.path())).unwrap();
            let router = router_for(&runtime);
            for (k, v) in [(b"a", b"1"), (b"b", b"2")] {
                let response = post(&router, "/put", signer.put_request(k, v)).await;
                assert_eq!(response.status(), StatusCode::OK);
            }
        }

        let runtime = NodeRuntime::open(rocksdb_config(dir.path())).unwrap();
        let router = router_for(&runtime);
        assert_eq!(
            records(&router, &signer).await,
            vec![
                (b"a".to_vec(), b"1".to_vec()),
                (b"b".to_vec(), b"2".to_vec()),
            ]
        );
    }

    #[tokio::test]
    async fn test_overwrite_keeps_single_record() {
        let dir = TempDir::new().unwrap();
        let runtime = NodeRuntime::open(rocksdb_config(dir.path())).unwrap();
        let router = router_for(&runtime);
        let signer = TestSigner::random();

        post(&router, "/put", signer.put_request(b"k", b"first")).await;
        post(&router, "/put", signer.put_request(b"k", b"second")).await;

        assert_eq!(
            records(&router, &signer).await,
            vec![(b"k".to_vec(), b"second".to_vec())]
        );
    }

    #[tokio::test]
    async fn test_forged_put_is_rejected_and_stores_nothing() {
        let dir = TempDir::new().unwrap();
        let runtime = NodeRuntime::open(rocksdb_config(dir.path())).unwrap();
        let router = router_for(&runtime);
        let signer = TestSigner::random();

        let mut request = signer.put_request(b"k", b"v");
        let last = request.len() - 1;
        request[last] ^= 0x01;

        let response = post(&router, "/put", request).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(text(response).await, "Wrong signature");
        assert!(records(&router, &signer).await.is_empty());
    }

    #[tokio::test]
    async fn test_replayed_put_is_accepted() {
        let dir = TempDir::new().unwrap();
        let runtime = NodeRuntime::open(rocksdb_config(dir.path())).unwrap();
        let router = router_for(&runtime);
        let signer = TestSigner::random();
        let put = signer.put_request(b"k", b"v");

        for _ in 0..3 {
            let response = post(&router, "/put", put.clone()).await;
            assert_eq!(response.status(), StatusCode::OK);
        }
        assert_eq!(records(&router, &signer).await.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_requests_are_bad_requests() {
        let runtime = NodeRuntime::open(NodeConfig {
            storage: StorageConfig {
                in_memory: true,
                ..StorageConfig::default()
            },
            ..NodeConfig::default()
        })
        .unwrap();
        let router = router_for(&runtime);
        let signer = TestSigner::random();

        // Too short for the header.
        let response = post(&router, "/put", vec![0u8; 96]).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Bad prefix byte on the public key.
        let mut request = signer.get_all_request();
        request[64] = 0x04;
        let response = post(&router, "/getAll", request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Put body cut inside the value.
        let mut request = signer.put_request(b"key", b"value");
        request.truncate(request.len() - 2);
        let response = post(&router, "/put", request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
