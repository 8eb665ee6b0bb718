//! Property-based tests for the grouping engine.
//!
//! These verify that overview sums stay consistent across randomly generated
//! asset-item sets, using the `proptest` crate for test case generation.

use proptest::prelude::*;

use assetfolio_core::portfolio::items::{AssetItem, AssetType};
use assetfolio_core::portfolio::overview::{build_overview, build_sum_groups, GroupBy};
use assetfolio_core::quotes::{Quote, QuoteIndex};
use chrono::{TimeZone, Utc};

// =============================================================================
// Generators
// =============================================================================

fn arb_asset_type() -> impl Strategy<Value = AssetType> {
    prop_oneof![
        Just(AssetType::Cash),
        Just(AssetType::Funds),
        Just(AssetType::Stocks),
    ]
}

fn arb_broker() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("broker1".to_string()),
        Just("broker2".to_string()),
        Just("broker3".to_string()),
    ]
}

/// Currencies the test quote index can always convert.
fn arb_currency() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("JPY".to_string()),
        Just("USD".to_string()),
        Just("EUR".to_string()),
    ]
}

fn arb_asset_item() -> impl Strategy<Value = AssetItem> {
    (
        arb_asset_type(),
        arb_broker(),
        arb_currency(),
        -1.0e6f64..1.0e6,
        -1.0e5f64..1.0e5,
    )
        .prop_map(|(asset_type, broker, currency, value, profit)| AssetItem {
            asset_type,
            broker,
            currency,
            value,
            profit,
        })
}

fn arb_grouping() -> impl Strategy<Value = GroupBy> {
    prop_oneof![
        Just(GroupBy::AssetType),
        Just(GroupBy::Broker),
        Just(GroupBy::Currency),
    ]
}

fn test_quote_index() -> QuoteIndex {
    let ts = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    QuoteIndex::new(
        vec![
            Quote {
                symbol: "USDJPY=X".to_string(),
                timestamp: ts,
                price: 150.0,
            },
            // only the inverse pair exists for EUR, exercising the divide path
            Quote {
                symbol: "JPYEUR=X".to_string(),
                timestamp: ts,
                price: 0.006,
            },
        ],
        Default::default(),
    )
}

fn assert_close(a: f64, b: f64) {
    let scale = 1.0f64.max(a.abs()).max(b.abs());
    assert!(
        (a - b).abs() <= 1e-9 * scale,
        "expected {a} ~= {b} (scale {scale})"
    );
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every node's sum equals the sum of its children, bottom-up, and the
    /// leaves account for every item exactly once.
    #[test]
    fn overview_sums_are_consistent(
        items in prop::collection::vec(arb_asset_item(), 1..40),
        level1 in arb_grouping(),
        level2 in arb_grouping(),
        level3 in arb_grouping(),
    ) {
        let quotes = test_quote_index();
        let overview = build_overview(&items, &quotes, "JPY", level1, level2, level3);

        let mut leaf_count = 0;
        for group in &overview.groups {
            for sub_group in &group.sub_groups {
                let leaf_value: f64 = sub_group.items.iter().map(|i| i.value_in_main_ccy).sum();
                let leaf_profit: f64 = sub_group.items.iter().map(|i| i.profit_in_main_ccy).sum();
                assert_close(sub_group.value_sum_in_main_ccy, leaf_value);
                assert_close(sub_group.profit_sum_in_main_ccy, leaf_profit);
                leaf_count += sub_group.items.len();
            }
            let sub_value: f64 = group.sub_groups.iter().map(|s| s.value_sum_in_main_ccy).sum();
            assert_close(group.value_sum_in_main_ccy, sub_value);
        }
        let group_value: f64 = overview.groups.iter().map(|g| g.value_sum_in_main_ccy).sum();
        assert_close(overview.value_sum_in_main_ccy, group_value);
        prop_assert_eq!(leaf_count, items.len());
    }

    /// The overall total does not depend on how the levels are grouped, and
    /// the flat sum-group variant agrees with the tree.
    #[test]
    fn totals_are_invariant_under_grouping_order(
        items in prop::collection::vec(arb_asset_item(), 1..40),
        group in arb_grouping(),
    ) {
        let quotes = test_quote_index();
        let by_asset = build_overview(
            &items, &quotes, "JPY",
            GroupBy::AssetType, GroupBy::Broker, GroupBy::Currency,
        );
        let by_currency = build_overview(
            &items, &quotes, "JPY",
            GroupBy::Currency, GroupBy::AssetType, GroupBy::Broker,
        );
        assert_close(by_asset.value_sum_in_main_ccy, by_currency.value_sum_in_main_ccy);
        assert_close(by_asset.profit_sum_in_main_ccy, by_currency.profit_sum_in_main_ccy);

        let flat_total: f64 = build_sum_groups(&items, &quotes, "JPY", group)
            .iter()
            .map(|s| s.value_in_main_ccy)
            .sum();
        assert_close(by_asset.value_sum_in_main_ccy, flat_total);
    }
}
