use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api_client;
use crate::api_client::dashboard;

/// Asset response model. The wire names the kind field `type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Asset {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub current_value: Decimal,
    pub purchase_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Request body for creating an asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAsset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub current_value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update body; only supplied fields travel
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Get all assets for the signed-in user
pub async fn get_assets() -> Result<Vec<Asset>, String> {
    log::trace!("Fetching all assets");
    let result = api_client::get::<Vec<Asset>>("/assets").await;
    match &result {
        Ok(assets) => log::info!("Fetched {} assets", assets.len()),
        Err(e) => log::error!("Failed to fetch assets: {}", e),
    }
    result
}

/// Get a specific asset by ID
pub async fn get_asset(asset_id: &str) -> Result<Asset, String> {
    log::trace!("Fetching asset with ID: {}", asset_id);
    let result = api_client::get::<Asset>(&format!("/assets/{}", asset_id)).await;
    if let Err(e) = &result {
        log::error!("Failed to fetch asset {}: {}", asset_id, e);
    }
    result
}

/// Create a new asset
pub async fn create_asset(request: NewAsset) -> Result<Asset, String> {
    log::debug!("Creating asset: {}", request.name);
    let result = api_client::post::<Asset, _>("/assets", &request).await;
    match &result {
        Ok(asset) => {
            log::info!("Created asset: {} (ID: {})", asset.name, asset.id);
            dashboard::invalidate_summary();
        }
        Err(e) => log::error!("Failed to create asset '{}': {}", request.name, e),
    }
    result
}

/// Update an existing asset
pub async fn update_asset(asset_id: &str, patch: AssetPatch) -> Result<Asset, String> {
    log::debug!("Updating asset ID: {}", asset_id);
    let result = api_client::put::<Asset, _>(&format!("/assets/{}", asset_id), &patch).await;
    match &result {
        Ok(asset) => {
            log::info!("Updated asset: {} (ID: {})", asset.name, asset.id);
            dashboard::invalidate_summary();
        }
        Err(e) => log::error!("Failed to update asset {}: {}", asset_id, e),
    }
    result
}

/// Delete an asset
pub async fn delete_asset(asset_id: &str) -> Result<(), String> {
    log::debug!("Deleting asset ID: {}", asset_id);
    let result = api_client::delete(&format!("/assets/{}", asset_id)).await;
    match &result {
        Ok(()) => {
            log::info!("Deleted asset ID: {}", asset_id);
            dashboard::invalidate_summary();
        }
        Err(e) => log::error!("Failed to delete asset {}: {}", asset_id, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn patch_serializes_only_supplied_fields() {
        let patch = AssetPatch {
            current_value: Some(Decimal::from_str("325000").unwrap()),
            ..AssetPatch::default()
        };

        let body = serde_json::to_value(&patch).unwrap();
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["current_value"]);
    }

    #[test]
    fn kind_maps_to_wire_type_field() {
        let request = NewAsset {
            name: "Index fund".to_string(),
            kind: "mutual_fund".to_string(),
            current_value: Decimal::from_str("150000").unwrap(),
            purchase_date: None,
            notes: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["type"], "mutual_fund");
        assert!(body.get("kind").is_none());
    }
}
