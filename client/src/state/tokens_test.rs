use super::*;

fn memory_store() -> TokenStore<MemoryStorage> {
    TokenStore::new(MemoryStorage::new())
}

#[test]
fn save_then_read_returns_both_tokens() {
    let store = memory_store();
    store.save_tokens("a", "b");
    assert_eq!(store.access_token().as_deref(), Some("a"));
    assert_eq!(store.refresh_token().as_deref(), Some("b"));
}

#[test]
fn save_writes_fixed_keys() {
    let store = memory_store();
    store.save_tokens("access123", "refresh456");
    assert_eq!(store.storage().get("accessToken").as_deref(), Some("access123"));
    assert_eq!(store.storage().get("refreshToken").as_deref(), Some("refresh456"));
}

#[test]
fn save_overwrites_existing_pair() {
    let store = memory_store();
    store.save_tokens("old-a", "old-r");
    store.save_tokens("new-a", "new-r");
    assert_eq!(store.access_token().as_deref(), Some("new-a"));
    assert_eq!(store.refresh_token().as_deref(), Some("new-r"));
    assert_eq!(store.storage().len(), 2);
}

#[test]
fn reads_are_absent_when_never_saved() {
    let store = memory_store();
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn empty_access_token_reads_as_absent() {
    let store = memory_store();
    store.storage().set(ACCESS_TOKEN_KEY, "");
    assert!(store.access_token().is_none());
}

#[test]
fn clear_removes_both_keys() {
    let store = memory_store();
    store.save_tokens("a", "b");
    store.clear_tokens();
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.storage().is_empty());
}

#[test]
fn clear_twice_matches_clear_once() {
    let once = memory_store();
    once.save_tokens("a", "b");
    once.clear_tokens();

    let twice = memory_store();
    twice.save_tokens("a", "b");
    twice.clear_tokens();
    twice.clear_tokens();

    assert_eq!(once.storage().len(), twice.storage().len());
    assert!(twice.access_token().is_none());
    assert!(twice.refresh_token().is_none());
}

#[test]
fn clear_on_empty_store_is_noop() {
    let store = memory_store();
    store.clear_tokens();
    assert!(store.storage().is_empty());
}

#[test]
fn clones_share_underlying_storage() {
    let storage = MemoryStorage::new();
    let writer = TokenStore::new(storage.clone());
    let reader = TokenStore::new(storage);
    writer.save_tokens("shared", "r");
    assert_eq!(reader.access_token().as_deref(), Some("shared"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_outside_the_browser() {
    let store = TokenStore::browser();
    store.save_tokens("a", "b");
    assert!(store.access_token().is_none());
    store.clear_tokens();
}
