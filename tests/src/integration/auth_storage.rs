//! # Authorization → Storage Flows
//!
//! The gateway's request path without HTTP: kv-03 authorizes raw bytes and
//! the resulting namespace drives kv-02.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use kv_02_namespaced_storage::{
        InMemoryKVStore, KVStoreError, KeyValueStore, NamespaceError, NamespacedStore, ScanResult,
    };
    use kv_03_request_auth::test_utils::TestSigner;
    use kv_03_request_auth::{
        AuthError, AuthorizedRequest, Operation, OperationKind, RequestAuthenticator, HEADER_LEN,
    };
    use shared_types::KeyValuePair;

    type Store = NamespacedStore<Arc<InMemoryKVStore>>;

    fn setup() -> (RequestAuthenticator, Store, Arc<InMemoryKVStore>) {
        let engine = Arc::new(InMemoryKVStore::new());
        (
            RequestAuthenticator::ecdsa(),
            NamespacedStore::new(engine.clone()),
            engine,
        )
    }

    /// Mirror of the gateway's dispatch.
    fn apply<S: KeyValueStore>(
        store: &NamespacedStore<S>,
        request: AuthorizedRequest,
    ) -> Result<Vec<KeyValuePair>, NamespaceError> {
        match request.operation {
            Operation::Put(record) => {
                store.put(&request.namespace, record.key(), record.value())?;
                Ok(Vec::new())
            }
            Operation::GetAll => store.get_all(&request.namespace),
            Operation::Clear => store.clear(&request.namespace).map(|_| Vec::new()),
        }
    }

    fn submit(
        auth: &RequestAuthenticator,
        store: &Store,
        kind: OperationKind,
        request: &[u8],
    ) -> Result<Vec<KeyValuePair>, AuthError> {
        let authorized = auth.authorize(kind, request)?;
        Ok(apply(store, authorized).unwrap())
    }

    #[test]
    fn test_two_callers_full_scenario() {
        let (auth, store, _) = setup();
        let p1 = TestSigner::random();
        let p2 = TestSigner::random();

        submit(&auth, &store, OperationKind::Put, &p1.put_request(b"alpha", b"1")).unwrap();

        assert_eq!(
            submit(&auth, &store, OperationKind::GetAll, &p1.get_all_request()).unwrap(),
            vec![KeyValuePair::new(b"alpha".to_vec(), b"1".to_vec())]
        );
        assert!(submit(&auth, &store, OperationKind::GetAll, &p2.get_all_request())
            .unwrap()
            .is_empty());

        submit(&auth, &store, OperationKind::Clear, &p1.clear_request()).unwrap();
        assert!(submit(&auth, &store, OperationKind::GetAll, &p1.get_all_request())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_invalid_put_leaves_namespace_unchanged() {
        let (auth, store, engine) = setup();
        let signer = TestSigner::random();
        submit(&auth, &store, OperationKind::Put, &signer.put_request(b"k", b"old")).unwrap();

        // Same header, different value: the signature no longer covers the body.
        let mut tampered = signer.put_request(b"k", b"new");
        let original = signer.put_request(b"k", b"old");
        tampered[..HEADER_LEN].copy_from_slice(&original[..HEADER_LEN]);

        assert_eq!(
            submit(&auth, &store, OperationKind::Put, &tampered),
            Err(AuthError::SignatureMismatch)
        );
        assert_eq!(engine.len(), 1);
        assert_eq!(
            store.get_all(&signer.namespace()).unwrap(),
            vec![KeyValuePair::new(b"k".to_vec(), b"old".to_vec())]
        );
    }

    #[test]
    fn test_caller_cannot_write_into_another_namespace() {
        let (auth, store, engine) = setup();
        let attacker = TestSigner::random();
        let victim = TestSigner::random();

        // Attacker signs with their own key but claims the victim's namespace.
        let mut request = attacker.put_request(b"k", b"v");
        request[64..HEADER_LEN].copy_from_slice(victim.namespace().as_bytes());

        assert_eq!(
            submit(&auth, &store, OperationKind::Put, &request),
            Err(AuthError::SignatureMismatch)
        );
        assert!(engine.is_empty());
    }

    #[test]
    fn test_clear_by_one_caller_keeps_others() {
        let (auth, store, _) = setup();
        let signers: Vec<TestSigner> = (0..4).map(|_| TestSigner::random()).collect();

        for (i, signer) in signers.iter().enumerate() {
            for j in 0..3u8 {
                let request = signer.put_request(&[j], &[i as u8]);
                submit(&auth, &store, OperationKind::Put, &request).unwrap();
            }
        }

        submit(&auth, &store, OperationKind::Clear, &signers[1].clear_request()).unwrap();

        for (i, signer) in signers.iter().enumerate() {
            let records = store.get_all(&signer.namespace()).unwrap();
            if i == 1 {
                assert!(records.is_empty());
            } else {
                assert_eq!(records.len(), 3);
                assert!(records.iter().all(|r| r.value == vec![i as u8]));
            }
        }
    }

    #[test]
    fn test_replayed_clear_is_accepted() {
        let (auth, store, _) = setup();
        let signer = TestSigner::random();
        let clear = signer.clear_request();

        submit(&auth, &store, OperationKind::Put, &signer.put_request(b"a", b"1")).unwrap();
        submit(&auth, &store, OperationKind::Clear, &clear).unwrap();

        // A captured clear wipes records written after it was signed.
        submit(&auth, &store, OperationKind::Put, &signer.put_request(b"b", b"2")).unwrap();
        submit(&auth, &store, OperationKind::Clear, &clear).unwrap();
        assert!(store.get_all(&signer.namespace()).unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_writers_stay_isolated() {
        let (_, store, _) = setup();
        let store = Arc::new(store);
        let auth = Arc::new(RequestAuthenticator::ecdsa());

        let handles: Vec<_> = (0..8u8)
            .map(|t| {
                let store = store.clone();
                let auth = auth.clone();
                std::thread::spawn(move || {
                    let signer = TestSigner::random();
                    for k in 0..10u8 {
                        let request = signer.put_request(&[k], &[t]);
                        let authorized = auth.authorize(OperationKind::Put, &request).unwrap();
                        apply(&*store, authorized).unwrap();
                    }
                    signer.namespace()
                })
            })
            .collect();

        for (t, handle) in handles.into_iter().enumerate() {
            let namespace = handle.join().unwrap();
            let records = store.get_all(&namespace).unwrap();
            assert_eq!(records.len(), 10);
            assert!(records.iter().all(|r| r.value == vec![t as u8]));
        }
    }

    /// Engine whose deletes start failing after a budget is spent.
    struct DeleteBudget {
        inner: InMemoryKVStore,
        remaining: AtomicUsize,
    }

    impl KeyValueStore for DeleteBudget {
        fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
            self.inner.get(key)
        }

        fn put(&self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
            self.inner.put(key, value)
        }

        fn delete(&self, key: &[u8]) -> Result<(), KVStoreError> {
            let left = self.remaining.load(Ordering::SeqCst);
            if left == 0 {
                return Err(KVStoreError::IOError {
                    message: "disk full".into(),
                });
            }
            self.remaining.store(left - 1, Ordering::SeqCst);
            self.inner.delete(key)
        }

        fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
            self.inner.prefix_scan(prefix)
        }
    }

    #[test]
    fn test_partial_clear_is_reported_and_not_rolled_back() {
        let auth = RequestAuthenticator::ecdsa();
        let store = NamespacedStore::new(DeleteBudget {
            inner: InMemoryKVStore::new(),
            remaining: AtomicUsize::new(2),
        });
        let signer = TestSigner::random();

        for k in 0..5u8 {
            let request = signer.put_request(&[k], b"v");
            apply(&store, auth.authorize(OperationKind::Put, &request).unwrap()).unwrap();
        }

        let clear = auth
            .authorize(OperationKind::Clear, &signer.clear_request())
            .unwrap();
        match apply(&store, clear) {
            Err(NamespaceError::ClearAborted { removed, .. }) => assert_eq!(removed, 2),
            other => panic!("expected ClearAborted, got {other:?}"),
        }

        // The first two keys (ascending) are gone, the rest remain.
        let keys: Vec<Vec<u8>> = store
            .get_all(&signer.namespace())
            .unwrap()
            .into_iter()
            .map(|r| r.key)
            .collect();
        assert_eq!(keys, vec![vec![2], vec![3], vec![4]]);
    }
}
