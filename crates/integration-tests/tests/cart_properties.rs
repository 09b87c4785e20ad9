//! Cart invariants over mutation sequences.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use shopfront_core::ProductId;
use shopfront_integration_tests::TestContext;
use shopfront_storefront::catalog::sample_products;
use shopfront_storefront::models::Product;
use shopfront_storefront::state::AppState;
use shopfront_storefront::storage::{MemoryStorage, SharedStorage};
use shopfront_storefront::stores::CartStore;

fn pid(id: &str) -> ProductId {
    ProductId::new(id)
}

fn add(state: &mut AppState, id: &str) {
    let (catalog, cart) = state.catalog_and_cart();
    let product = catalog.get(&pid(id)).expect("product exists");
    cart.add(product);
}

/// Check the derived totals against a direct recomputation.
fn assert_consistent(cart: &CartStore) {
    let expected_total: Decimal = cart
        .items()
        .iter()
        .map(|i| i.product.price * Decimal::from(i.quantity))
        .sum();
    let expected_count: u32 = cart.items().iter().map(|i| i.quantity).sum();

    assert_eq!(cart.total(), expected_total);
    assert_eq!(cart.count(), expected_count);
    assert!(cart.items().iter().all(|i| i.quantity >= 1));

    let mut ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), cart.items().len(), "duplicate cart lines");
}

// ============================================================================
// Add
// ============================================================================

#[tokio::test]
async fn test_repeated_add_accumulates_one_line() {
    let ctx = TestContext::in_memory();
    let mut state = ctx.boot().await;

    for _ in 0..5 {
        add(&mut state, "6");
    }

    let cart = state.cart();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.get(&pid("6")).expect("line").quantity, 5);
    assert_consistent(cart);
}

#[tokio::test]
async fn test_add_preserves_insertion_order() {
    let ctx = TestContext::in_memory();
    let mut state = ctx.boot().await;

    for id in ["7", "2", "7", "4"] {
        add(&mut state, id);
    }

    let ids: Vec<&str> = state
        .cart()
        .items()
        .iter()
        .map(|i| i.product.id.as_str())
        .collect();
    assert_eq!(ids, ["7", "2", "4"]);
}

// ============================================================================
// Mixed sequences
// ============================================================================

#[tokio::test]
async fn test_totals_hold_after_every_mutation() {
    let ctx = TestContext::in_memory();
    let mut state = ctx.boot().await;

    add(&mut state, "1");
    assert_consistent(state.cart());
    add(&mut state, "3");
    assert_consistent(state.cart());
    add(&mut state, "1");
    assert_consistent(state.cart());

    state.cart_mut().set_quantity(&pid("3"), 4);
    assert_consistent(state.cart());

    state.cart_mut().set_quantity(&pid("1"), 0);
    assert_consistent(state.cart());
    assert_eq!(state.cart().get(&pid("1")).expect("line").quantity, 2);

    state.cart_mut().remove(&pid("8"));
    assert_consistent(state.cart());

    state.cart_mut().remove(&pid("1"));
    assert_consistent(state.cart());

    assert_eq!(state.cart().count(), 4);
    assert_eq!(state.cart().total(), Decimal::new(519_996, 2));
    assert_eq!(state.cart().total_price().to_string(), "$5,199.96");

    state.cart_mut().clear();
    assert_consistent(state.cart());
    assert!(state.cart().is_empty());
    assert_eq!(state.cart().total(), Decimal::ZERO);
}

#[tokio::test]
async fn test_noop_mutations_leave_cart_unchanged() {
    let ctx = TestContext::in_memory();
    let mut state = ctx.boot().await;
    add(&mut state, "2");
    add(&mut state, "5");
    let before = state.cart().items().to_vec();

    let events = [
        state.cart_mut().set_quantity(&pid("2"), 0),
        state.cart_mut().set_quantity(&pid("99"), 3),
        state.cart_mut().remove(&pid("99")),
    ];

    assert!(events.iter().all(|e| !e.changed()));
    assert_eq!(state.cart().items(), before.as_slice());
}

// ============================================================================
// Generated sequences
// ============================================================================

/// Index 8 names a product that is not in the catalog.
const MISSING: usize = 8;

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    AddQuantity(usize, u32),
    Remove(usize),
    SetQuantity(usize, i64),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..MISSING).prop_map(Op::Add),
        2 => (0..MISSING, 0u32..5).prop_map(|(i, n)| Op::AddQuantity(i, n)),
        2 => (0..=MISSING).prop_map(Op::Remove),
        2 => (0..=MISSING, -2i64..6).prop_map(|(i, n)| Op::SetQuantity(i, n)),
        1 => Just(Op::Clear),
    ]
}

fn id_at(products: &[Product], index: usize) -> ProductId {
    products
        .get(index)
        .map_or_else(|| pid("missing"), |p| p.id.clone())
}

/// Apply `op` to both the cart and a plain list of `(id, quantity)` lines.
fn apply(cart: &mut CartStore, model: &mut Vec<(ProductId, u32)>, products: &[Product], op: &Op) {
    match *op {
        Op::Add(i) | Op::AddQuantity(i, _) => {
            let quantity = match *op {
                Op::AddQuantity(_, n) => n,
                _ => 1,
            };
            let product = products.get(i).expect("generated index in catalog");
            cart.add_quantity(product, quantity);
            if quantity > 0 {
                match model.iter_mut().find(|(id, _)| *id == product.id) {
                    Some((_, q)) => *q += quantity,
                    None => model.push((product.id.clone(), quantity)),
                }
            }
        }
        Op::Remove(i) => {
            let id = id_at(products, i);
            cart.remove(&id);
            model.retain(|(line, _)| *line != id);
        }
        Op::SetQuantity(i, n) => {
            let id = id_at(products, i);
            cart.set_quantity(&id, n);
            if n >= 1
                && let Some((_, q)) = model.iter_mut().find(|(line, _)| *line == id)
            {
                *q = u32::try_from(n).expect("small quantity");
            }
        }
        Op::Clear => {
            cart.clear();
            model.clear();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Any number of single adds of one product yields one line with that
    /// quantity.
    #[test]
    fn prop_repeated_add_counts(index in 0..MISSING, times in 1u32..20) {
        let products = sample_products();
        let product = products.get(index).expect("generated index in catalog");
        let mut cart = CartStore::load(Arc::new(MemoryStorage::new()));

        for _ in 0..times {
            cart.add(product);
        }

        prop_assert_eq!(cart.items().len(), 1);
        prop_assert_eq!(cart.count(), times);
        prop_assert_eq!(cart.total(), product.price * Decimal::from(times));
    }

    /// After every step of a random mutation sequence the cart matches a
    /// plain list model, its derived totals hold, and a reload from storage
    /// restores the same lines.
    #[test]
    fn prop_mutation_sequences_keep_invariants(
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let products = sample_products();
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let mut cart = CartStore::load(Arc::clone(&storage));
        let mut model: Vec<(ProductId, u32)> = Vec::new();

        for op in &ops {
            apply(&mut cart, &mut model, &products, op);

            assert_consistent(&cart);
            let lines: Vec<(ProductId, u32)> = cart
                .items()
                .iter()
                .map(|i| (i.product.id.clone(), i.quantity))
                .collect();
            prop_assert_eq!(&lines, &model, "after {:?}", op);

            let reloaded = CartStore::load(Arc::clone(&storage));
            prop_assert_eq!(reloaded.items(), cart.items());
        }
    }
}
