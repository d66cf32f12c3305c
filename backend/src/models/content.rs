//! Mock collaborator content models
//!
//! These back the read-only challenge/education/marketplace/report/
//! dashboard endpoints. None of them are persisted; the API serves
//! fixed-shape payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Environmental challenge
#[derive(Debug, Serialize, Clone)]
pub struct Challenge {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub goal: i64,
    pub participants: Vec<Uuid>,
}

/// Body of `POST /api/challenges`
#[derive(Debug, Deserialize)]
pub struct CreateChallengeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub goal: Option<i64>,
    pub participants: Option<Vec<Uuid>>,
}

/// Query filters for `GET /api/challenges`
#[derive(Debug, Default, Deserialize)]
pub struct ChallengeFilters {
    pub location: Option<String>,
    pub project_type: Option<String>,
}

/// Educational resource. `category` and `level` drive filtering but are
/// stripped from the response shape.
#[derive(Debug, Clone)]
pub struct EducationItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: &'static str,
    pub level: &'static str,
}

/// Response shape for `GET /api/education`
#[derive(Debug, Serialize)]
pub struct EducationSummary {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl From<EducationItem> for EducationSummary {
    fn from(item: EducationItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            content: item.content,
        }
    }
}

/// Query filters for `GET /api/education`
#[derive(Debug, Default, Deserialize)]
pub struct EducationFilters {
    pub category: Option<String>,
    pub level: Option<String>,
}

/// Marketplace product. `category` filters but is stripped from responses.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub impact: i64,
    pub category: &'static str,
}

/// Response shape for `GET /api/marketplace`
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub impact: i64,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            brand: product.brand,
            impact: product.impact,
        }
    }
}

/// Query filters for `GET /api/marketplace`
#[derive(Debug, Default, Deserialize)]
pub struct MarketplaceFilters {
    pub product_category: Option<String>,
}

/// Body of `POST /api/issue-reports`
#[derive(Debug, Deserialize)]
pub struct SubmitReportRequest {
    pub user_id: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Environmental issue report
#[derive(Debug, Serialize)]
pub struct IssueReport {
    pub id: Uuid,
    pub user_id: String,
    pub location: String,
    pub description: String,
    pub media_url: String,
    pub status: String,
}

/// Query for `GET /api/dashboard`
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub time_range: Option<String>,
}

/// Response of `GET /api/dashboard`
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub impact_score: i64,
    pub achievements: Vec<String>,
}

/// Response of `GET /api/profile`
#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub eco_goals: Vec<String>,
    pub impact_score: i64,
}

/// Body of `POST /api/activities`
#[derive(Debug, Deserialize)]
pub struct LogActivityRequest {
    pub user_id: Option<String>,
    pub action_type: Option<String>,
    pub impact_points: Option<f64>,
}

/// Echo response of `POST /api/activities` (nothing is persisted)
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub user_id: String,
    pub action_type: String,
    pub timestamp: String,
    pub impact_points: f64,
}
