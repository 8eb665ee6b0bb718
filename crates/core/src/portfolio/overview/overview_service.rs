//! The grouping engine: builds overview trees and flat sum groups.

use std::collections::BTreeMap;

use super::overview_model::{
    GroupBy, Overview, OverviewGroup, OverviewItem, OverviewSubGroup, SumGroup,
};
use crate::portfolio::items::AssetItem;
use crate::quotes::QuoteIndex;

/// Builds the 3-level overview of `items`, grouped per level by the given
/// dimensions, with every figure converted into `main_ccy`.
///
/// Sums propagate bottom-up exactly once: a sub-group sums its leaves, a
/// group sums its sub-groups, the overview sums its groups. Groups come out
/// sorted by key, but no particular order is part of the contract.
pub fn build_overview(
    items: &[AssetItem],
    quotes: &QuoteIndex,
    main_ccy: &str,
    level1: GroupBy,
    level2: GroupBy,
    level3: GroupBy,
) -> Overview {
    let mut groups = Vec::new();
    let mut value_sum = 0.0;
    let mut profit_sum = 0.0;
    for (key, group_items) in group_by_key(items.iter(), level1) {
        let group = build_group(key, &group_items, quotes, main_ccy, level2, level3);
        value_sum += group.value_sum_in_main_ccy;
        profit_sum += group.profit_sum_in_main_ccy;
        groups.push(group);
    }
    Overview {
        item_name: level1.label().to_string(),
        value_sum_in_main_ccy: value_sum,
        profit_sum_in_main_ccy: profit_sum,
        groups,
    }
}

/// Single-level variant: converted totals per key of `group`.
pub fn build_sum_groups(
    items: &[AssetItem],
    quotes: &QuoteIndex,
    main_ccy: &str,
    group: GroupBy,
) -> Vec<SumGroup> {
    group_by_key(items.iter(), group)
        .into_iter()
        .map(|(key, members)| {
            let mut value = 0.0;
            let mut profit = 0.0;
            for item in members {
                value += quotes.to_main_ccy(item.value, &item.currency, main_ccy);
                profit += quotes.to_main_ccy(item.profit, &item.currency, main_ccy);
            }
            SumGroup {
                name: key.to_string(),
                value_in_main_ccy: value,
                profit_in_main_ccy: profit,
            }
        })
        .collect()
}

fn group_by_key<'a>(
    items: impl Iterator<Item = &'a AssetItem>,
    level: GroupBy,
) -> BTreeMap<&'a str, Vec<&'a AssetItem>> {
    let mut grouped: BTreeMap<&str, Vec<&AssetItem>> = BTreeMap::new();
    for item in items {
        grouped.entry(level.key(item)).or_default().push(item);
    }
    grouped
}

fn build_group(
    name: &str,
    items: &[&AssetItem],
    quotes: &QuoteIndex,
    main_ccy: &str,
    level2: GroupBy,
    level3: GroupBy,
) -> OverviewGroup {
    let mut sub_groups = Vec::new();
    let mut value_sum = 0.0;
    let mut profit_sum = 0.0;
    for (key, sub_items) in group_by_key(items.iter().copied(), level2) {
        let sub_group = build_sub_group(key, &sub_items, quotes, main_ccy, level3);
        value_sum += sub_group.value_sum_in_main_ccy;
        profit_sum += sub_group.profit_sum_in_main_ccy;
        sub_groups.push(sub_group);
    }
    OverviewGroup {
        name: name.to_string(),
        item_name: level2.label().to_string(),
        value_sum_in_main_ccy: value_sum,
        profit_sum_in_main_ccy: profit_sum,
        sub_groups,
    }
}

fn build_sub_group(
    name: &str,
    items: &[&AssetItem],
    quotes: &QuoteIndex,
    main_ccy: &str,
    level3: GroupBy,
) -> OverviewSubGroup {
    let mut leaves = Vec::new();
    let mut value_sum = 0.0;
    let mut profit_sum = 0.0;
    for item in items {
        let value_in_main_ccy = quotes.to_main_ccy(item.value, &item.currency, main_ccy);
        let profit_in_main_ccy = quotes.to_main_ccy(item.profit, &item.currency, main_ccy);
        value_sum += value_in_main_ccy;
        profit_sum += profit_in_main_ccy;
        leaves.push(OverviewItem {
            name: level3.key(item).to_string(),
            currency: item.currency.clone(),
            value: item.value,
            value_in_main_ccy,
            profit: item.profit,
            profit_in_main_ccy,
        });
    }
    OverviewSubGroup {
        name: name.to_string(),
        item_name: level3.label().to_string(),
        value_sum_in_main_ccy: value_sum,
        profit_sum_in_main_ccy: profit_sum,
        items: leaves,
    }
}
