//! # Genesis & Params Integration Tests
//!
//! Drive the module through its public surface only: keeper, query server
//! and genesis controller over the store adapters.

use proptest::prelude::*;
use x_safrochain::test_utils::{genesis_roundtrip, keeper_for_test};
use x_safrochain::{
    default_genesis, export_genesis, init_genesis, AppModule, Context, FileBackedKVStore,
    GenesisState, InMemoryKVStore, Keeper, KeyValueStore, ModuleConfig, ModuleError, Params,
    PrefixStore, QueryParamsRequest, QueryParamsResponse, QueryServer,
};

#[test]
fn test_genesis_roundtrip_default() {
    let genesis_state = GenesisState {
        params: Params::default(),
    };

    let got = genesis_roundtrip(&genesis_state).unwrap();
    assert_eq!(got.normalized(), genesis_state.normalized());
}

#[test]
fn test_params_query_after_genesis() {
    let (keeper, mut store) = keeper_for_test();
    let mut ctx = Context::new(&mut store).with_chain_id("safro-testnet-1");
    init_genesis(&mut ctx, &keeper, &default_genesis()).unwrap();

    let response = keeper.params(&ctx, &QueryParamsRequest {}).unwrap();
    assert_eq!(
        response,
        QueryParamsResponse {
            params: Params::default()
        }
    );
}

#[test]
fn test_independent_inits_are_byte_identical() {
    let genesis = GenesisState::from_json(br#"{"params":null}"#).unwrap();

    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let (keeper, mut store) = keeper_for_test();
        {
            let mut ctx = Context::new(&mut store);
            init_genesis(&mut ctx, &keeper, &genesis).unwrap();
        }
        snapshots.push(store);
    }

    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(
        snapshots[0].entries().collect::<Vec<_>>(),
        vec![(&b"safrochain/p_safrochain"[..], &b""[..])]
    );
}

#[test]
fn test_genesis_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.db");
    let module = AppModule::new(Keeper::new(ModuleConfig::default()).unwrap());

    {
        let mut store = FileBackedKVStore::open(&path).unwrap();
        let mut ctx = Context::new(&mut store);
        module.init_genesis_json(&mut ctx, b"{}").unwrap();
    }

    let mut store = FileBackedKVStore::open(&path).unwrap();
    let ctx = Context::new(&mut store);
    assert!(module.keeper().has_params(&ctx).unwrap());
    assert_eq!(
        export_genesis(&ctx, module.keeper()).unwrap(),
        default_genesis()
    );
}

#[test]
fn test_export_digest_matches_input_digest() {
    let input = default_genesis();
    let exported = genesis_roundtrip(&input).unwrap();
    assert_eq!(exported.digest().unwrap(), input.digest().unwrap());
}

proptest! {
    /// Genesis and params writes only ever touch the module's own namespace,
    /// and params read back as written whatever else the store holds.
    #[test]
    fn prop_init_genesis_leaves_foreign_keys(
        foreign in prop::collection::btree_map(
            "[a-z]{1,8}/[a-z0-9]{0,8}",
            prop::collection::vec(any::<u8>(), 0..16),
            0..16,
        )
    ) {
        let keeper = Keeper::new(ModuleConfig::default()).unwrap();
        let mut store = InMemoryKVStore::new();
        for (k, v) in &foreign {
            if k.starts_with("safrochain/") {
                continue;
            }
            store.put(k.as_bytes(), v).unwrap();
        }
        let before = store.clone();

        {
            let mut ctx = Context::new(&mut store);
            init_genesis(&mut ctx, &keeper, &default_genesis()).unwrap();
            prop_assert_eq!(keeper.get_params(&ctx).unwrap(), Params::default());

            keeper.set_params(&mut ctx, &Params::new()).unwrap();
            prop_assert!(keeper.has_params(&ctx).unwrap());
            prop_assert_eq!(keeper.get_params(&ctx).unwrap(), Params::new());
        }

        for (k, v) in before.entries() {
            let kept = store.get(k).unwrap();
            prop_assert_eq!(kept.as_deref(), Some(v));
        }
        let own = PrefixStore::new("safrochain").entries(&store).unwrap();
        prop_assert_eq!(own, vec![(b"p_safrochain".to_vec(), Vec::new())]);
    }

    /// Any non-canonical bytes under the params key are reported, never defaulted.
    #[test]
    fn prop_garbage_params_are_corruption(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let (keeper, mut store) = keeper_for_test();
        store.put(b"safrochain/p_safrochain", &bytes).unwrap();
        let ctx = Context::new(&mut store);

        let is_corrupted = matches!(
            keeper.get_params(&ctx),
            Err(ModuleError::CorruptedState { .. })
        );
        prop_assert!(is_corrupted);
    }
}
