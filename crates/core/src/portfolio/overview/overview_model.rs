use serde::{Deserialize, Serialize};

use crate::portfolio::items::AssetItem;

/// Dimensions an overview can group by, one per level, in any order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GroupBy {
    AssetType,
    Broker,
    Currency,
}

impl GroupBy {
    /// Column label of this dimension.
    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::AssetType => "Asset",
            GroupBy::Broker => "Broker",
            GroupBy::Currency => "Currency",
        }
    }

    /// Grouping key of `item` along this dimension. Key equality is exact
    /// string equality.
    pub fn key<'a>(&self, item: &'a AssetItem) -> &'a str {
        match self {
            GroupBy::AssetType => item.asset_type.as_str(),
            GroupBy::Broker => &item.broker,
            GroupBy::Currency => &item.currency,
        }
    }
}

/// Leaf of an overview tree: one asset item with its figures both native and
/// converted into the main currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewItem {
    pub name: String,
    pub currency: String,
    pub value: f64,
    pub value_in_main_ccy: f64,
    pub profit: f64,
    pub profit_in_main_ccy: f64,
}

/// Second grouping level: the leaves sharing one level-2 key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSubGroup {
    pub name: String,
    /// Label of the dimension the leaves are keyed by.
    pub item_name: String,
    pub value_sum_in_main_ccy: f64,
    pub profit_sum_in_main_ccy: f64,
    pub items: Vec<OverviewItem>,
}

/// First grouping level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewGroup {
    pub name: String,
    /// Label of the dimension the sub-groups are keyed by.
    pub item_name: String,
    pub value_sum_in_main_ccy: f64,
    pub profit_sum_in_main_ccy: f64,
    pub sub_groups: Vec<OverviewSubGroup>,
}

/// Three-level grouped summary over the asset items. Every sum is converted
/// into the main currency; a NaN anywhere below keeps flowing upward, so an
/// unconvertible item reads as an unknown group total rather than vanishing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// Label of the level-1 dimension.
    pub item_name: String,
    pub value_sum_in_main_ccy: f64,
    pub profit_sum_in_main_ccy: f64,
    pub groups: Vec<OverviewGroup>,
}

/// One row of a single-level summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SumGroup {
    pub name: String,
    pub value_in_main_ccy: f64,
    pub profit_in_main_ccy: f64,
}
