use std::cell::RefCell;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::api_client;
use crate::session::storage;

/// One labeled value of a chart series (category slice or month point)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
}

/// Server-computed aggregate shown on the dashboard. Fetched, never
/// recomputed or merged client-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardSummary {
    pub net_worth: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub category_expenses: Vec<ChartSlice>,
    #[serde(default)]
    pub monthly_series: Option<Vec<ChartSlice>>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Read-through cache for the summary, keyed by the bearer token so a
/// sign-out or account switch can never serve another scope's numbers.
/// Mutation endpoints call [`invalidate_summary`] after any write that
/// makes the server aggregate stale.
#[derive(Debug, Default)]
struct SummaryCache {
    scope: Option<String>,
    value: Option<DashboardSummary>,
}

impl SummaryCache {
    fn lookup(&self, scope: Option<&str>) -> Option<DashboardSummary> {
        if scope.is_some() && self.scope.as_deref() == scope {
            self.value.clone()
        } else {
            None
        }
    }

    fn store(&mut self, scope: Option<String>, value: DashboardSummary) {
        self.scope = scope;
        self.value = Some(value);
    }

    fn invalidate(&mut self) {
        self.scope = None;
        self.value = None;
    }
}

thread_local! {
    static SUMMARY_CACHE: RefCell<SummaryCache> = RefCell::new(SummaryCache::default());
}

/// Get the dashboard summary, served from cache while it is fresh for
/// the current auth scope.
pub async fn get_summary() -> Result<DashboardSummary, String> {
    let scope = storage::token();

    if let Some(hit) = SUMMARY_CACHE.with(|c| c.borrow().lookup(scope.as_deref())) {
        log::debug!("Dashboard summary served from cache");
        return Ok(hit);
    }

    log::trace!("Fetching dashboard summary");
    let summary = api_client::get::<DashboardSummary>("/dashboard/summary").await?;
    SUMMARY_CACHE.with(|c| c.borrow_mut().store(scope, summary.clone()));
    log::info!("Fetched dashboard summary");
    Ok(summary)
}

/// Drop the cached summary. Called after transaction/goal/asset writes
/// and on sign-out.
pub fn invalidate_summary() {
    log::debug!("Invalidating cached dashboard summary");
    SUMMARY_CACHE.with(|c| c.borrow_mut().invalidate());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn summary(net_worth: &str) -> DashboardSummary {
        DashboardSummary {
            net_worth: Decimal::from_str(net_worth).unwrap(),
            monthly_income: Decimal::ZERO,
            monthly_expenses: Decimal::ZERO,
            category_expenses: Vec::new(),
            monthly_series: None,
            user_name: None,
        }
    }

    #[test]
    fn lookup_hits_only_for_the_stored_scope() {
        let mut cache = SummaryCache::default();
        cache.store(Some("token-a".to_string()), summary("100"));

        assert!(cache.lookup(Some("token-a")).is_some());
        assert!(cache.lookup(Some("token-b")).is_none());
        assert!(cache.lookup(None).is_none());
    }

    #[test]
    fn anonymous_scope_is_never_cached() {
        let mut cache = SummaryCache::default();
        cache.store(None, summary("100"));
        assert!(cache.lookup(None).is_none());
    }

    #[test]
    fn invalidate_clears_value_and_scope() {
        let mut cache = SummaryCache::default();
        cache.store(Some("token-a".to_string()), summary("100"));
        cache.invalidate();
        assert!(cache.lookup(Some("token-a")).is_none());
    }

    #[test]
    fn store_replaces_previous_scope() {
        let mut cache = SummaryCache::default();
        cache.store(Some("token-a".to_string()), summary("100"));
        cache.store(Some("token-b".to_string()), summary("200"));

        assert!(cache.lookup(Some("token-a")).is_none());
        let hit = cache.lookup(Some("token-b")).unwrap();
        assert_eq!(hit.net_worth, Decimal::from_str("200").unwrap());
    }

    #[test]
    fn summary_parses_without_optional_fields() {
        let raw = r#"{
            "net_worth": 12500.0,
            "monthly_income": 40000.0,
            "monthly_expenses": 27500.0,
            "category_expenses": []
        }"#;
        let summary: DashboardSummary = serde_json::from_str(raw).unwrap();
        assert!(summary.category_expenses.is_empty());
        assert!(summary.monthly_series.is_none());
        assert!(summary.user_name.is_none());
    }
}
