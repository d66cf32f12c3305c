//! Mock content HTTP handlers
//!
//! Challenges, education, marketplace, issue reports, dashboard, and
//! profile summary. All of these serve fixed-shape payloads behind the
//! auth gateway; none touch the database.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{
    Challenge, ChallengeFilters, CreateChallengeRequest, DashboardQuery, DashboardResponse,
    EducationFilters, EducationItem, EducationSummary, IssueReport, MarketplaceFilters, Product,
    ProductSummary, ProfileSummary, SubmitReportRequest,
};

fn mock_challenges(current_user: Uuid) -> Vec<Challenge> {
    vec![
        Challenge {
            id: Uuid::new_v4(),
            title: "Beach Cleanup Challenge".to_string(),
            description: "Join us in cleaning local beaches to protect marine life".to_string(),
            start_date: "2024-01-15T09:00:00Z".to_string(),
            end_date: "2024-01-31T18:00:00Z".to_string(),
            goal: 100,
            participants: vec![current_user],
        },
        Challenge {
            id: Uuid::new_v4(),
            title: "Tree Planting Initiative".to_string(),
            description: "Plant trees in urban areas to improve air quality".to_string(),
            start_date: "2024-02-01T08:00:00Z".to_string(),
            end_date: "2024-02-28T17:00:00Z".to_string(),
            goal: 500,
            participants: Vec::new(),
        },
    ]
}

/// Filter the challenge list the way the API has always filtered it:
/// `location` matches against the title, `project_type` against keywords.
fn filter_challenges(
    challenges: Vec<Challenge>,
    filters: &ChallengeFilters,
) -> Vec<Challenge> {
    let mut filtered = challenges;

    if let Some(location) = &filters.location {
        let needle = location.to_lowercase();
        filtered.retain(|c| c.title.to_lowercase().contains(&needle));
    }

    if let Some(project_type) = &filters.project_type {
        filtered.retain(|c| {
            let title = c.title.to_lowercase();
            match project_type.as_str() {
                "cleanup" => title.contains("cleanup"),
                "tree_planting" => title.contains("tree") || title.contains("plant"),
                "education" => title.contains("education") || title.contains("learn"),
                "awareness" => title.contains("awareness") || title.contains("campaign"),
                _ => true,
            }
        });
    }

    filtered
}

/// GET /api/challenges - List challenges with optional filters
pub async fn list_challenges(
    auth: AuthenticatedUser,
    Query(filters): Query<ChallengeFilters>,
) -> Json<Vec<Challenge>> {
    Json(filter_challenges(mock_challenges(auth.user.id), &filters))
}

/// POST /api/challenges - Create a challenge (echo only)
pub async fn create_challenge(
    _auth: AuthenticatedUser,
    Json(req): Json<CreateChallengeRequest>,
) -> Result<(StatusCode, Json<Challenge>), ApiError> {
    let (title, description, start_date, end_date, goal) = match (
        req.title,
        req.description,
        req.start_date,
        req.end_date,
        req.goal,
    ) {
        (Some(t), Some(d), Some(s), Some(e), Some(g)) => (t, d, s, e, g),
        _ => {
            return Err(ApiError::MissingFields(
                "title, description, start_date, end_date, and goal are required".to_string(),
            ))
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(Challenge {
            id: Uuid::new_v4(),
            title,
            description,
            start_date,
            end_date,
            goal,
            participants: req.participants.unwrap_or_default(),
        }),
    ))
}

/// GET /api/challenges/:challenge_id - Fetch one challenge
pub async fn get_challenge(
    auth: AuthenticatedUser,
    Path(challenge_id): Path<Uuid>,
) -> Json<Challenge> {
    Json(Challenge {
        id: challenge_id,
        title: "Beach Cleanup Challenge".to_string(),
        description: "Join us in cleaning local beaches to protect marine life".to_string(),
        start_date: "2024-01-15T09:00:00Z".to_string(),
        end_date: "2024-01-31T18:00:00Z".to_string(),
        goal: 100,
        participants: vec![auth.user.id],
    })
}

fn mock_education() -> Vec<EducationItem> {
    vec![
        EducationItem {
            id: Uuid::new_v4(),
            title: "Understanding Climate Change".to_string(),
            content: "A comprehensive guide to climate science and its impacts".to_string(),
            category: "climate",
            level: "beginner",
        },
        EducationItem {
            id: Uuid::new_v4(),
            title: "Advanced Waste Management Techniques".to_string(),
            content: "Expert-level strategies for reducing waste in organizations".to_string(),
            category: "waste",
            level: "expert",
        },
        EducationItem {
            id: Uuid::new_v4(),
            title: "Biodiversity Conservation Basics".to_string(),
            content: "Introduction to protecting local ecosystems and wildlife".to_string(),
            category: "biodiversity",
            level: "beginner",
        },
    ]
}

fn filter_education(
    items: Vec<EducationItem>,
    filters: &EducationFilters,
) -> Vec<EducationSummary> {
    items
        .into_iter()
        .filter(|item| {
            filters
                .category
                .as_ref()
                .map_or(true, |c| item.category == c)
        })
        .filter(|item| filters.level.as_ref().map_or(true, |l| item.level == l))
        .map(EducationSummary::from)
        .collect()
}

/// GET /api/education - List educational content
pub async fn list_education(
    _auth: AuthenticatedUser,
    Query(filters): Query<EducationFilters>,
) -> Json<Vec<EducationSummary>> {
    Json(filter_education(mock_education(), &filters))
}

fn mock_products() -> Vec<Product> {
    vec![
        Product {
            id: Uuid::new_v4(),
            name: "Bamboo Water Bottle".to_string(),
            brand: "EcoBottle Co.".to_string(),
            impact: 25,
            category: "reusable",
        },
        Product {
            id: Uuid::new_v4(),
            name: "Organic Cotton Tote Bag".to_string(),
            brand: "GreenBags Ltd.".to_string(),
            impact: 15,
            category: "reusable",
        },
        Product {
            id: Uuid::new_v4(),
            name: "Solar Phone Charger".to_string(),
            brand: "SolarTech".to_string(),
            impact: 50,
            category: "eco_brands",
        },
    ]
}

fn filter_products(products: Vec<Product>, filters: &MarketplaceFilters) -> Vec<ProductSummary> {
    products
        .into_iter()
        .filter(|p| {
            filters
                .product_category
                .as_ref()
                .map_or(true, |c| p.category == c)
        })
        .map(ProductSummary::from)
        .collect()
}

/// GET /api/marketplace - List eco-products
pub async fn list_marketplace(
    _auth: AuthenticatedUser,
    Query(filters): Query<MarketplaceFilters>,
) -> Json<Vec<ProductSummary>> {
    Json(filter_products(mock_products(), &filters))
}

/// POST /api/issue-reports - Submit an environmental issue report
///
/// Media uploads are collaborator surface; `media_url` stays empty here.
pub async fn submit_report(
    _auth: AuthenticatedUser,
    Json(req): Json<SubmitReportRequest>,
) -> Result<(StatusCode, Json<IssueReport>), ApiError> {
    let (user_id, location, description) = match (req.user_id, req.location, req.description) {
        (Some(u), Some(l), Some(d)) => (u, l, d),
        _ => {
            return Err(ApiError::MissingFields(
                "user_id, location, and description are required".to_string(),
            ))
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(IssueReport {
            id: Uuid::new_v4(),
            user_id,
            location,
            description,
            media_url: String::new(),
            status: "pending".to_string(),
        }),
    ))
}

/// GET /api/issue-reports/:report_id - Fetch one issue report
pub async fn get_report(auth: AuthenticatedUser, Path(report_id): Path<Uuid>) -> Json<IssueReport> {
    Json(IssueReport {
        id: report_id,
        user_id: auth.user.id.to_string(),
        location: "Beach Park, Santa Monica".to_string(),
        description: "Large amount of plastic waste washed up on shore".to_string(),
        media_url: "https://picsum.photos/id/237/400/300".to_string(),
        status: "pending".to_string(),
    })
}

/// Impact score per reporting window.
fn impact_score_for(time_range: Option<&str>) -> i64 {
    match time_range {
        Some("today") => 15,
        Some("this_week") => 75,
        Some("this_month") => 150,
        _ => 500,
    }
}

/// GET /api/dashboard - Aggregated impact dashboard
pub async fn get_dashboard(
    _auth: AuthenticatedUser,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        impact_score: impact_score_for(query.time_range.as_deref()),
        achievements: vec![
            "Eco-Champion".to_string(),
            "Tree Planter".to_string(),
            "Waste Warrior".to_string(),
        ],
    })
}

/// GET /api/profile - Profile summary
pub async fn get_profile_summary(_auth: AuthenticatedUser) -> Json<ProfileSummary> {
    Json(ProfileSummary {
        eco_goals: vec![
            "Reduce plastic use by 30%".to_string(),
            "Plant 10 trees".to_string(),
            "Use public transport daily".to_string(),
        ],
        impact_score: 285,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_project_type_filter() {
        let filters = ChallengeFilters {
            location: None,
            project_type: Some("cleanup".to_string()),
        };
        let filtered = filter_challenges(mock_challenges(Uuid::new_v4()), &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Beach Cleanup Challenge");

        let filters = ChallengeFilters {
            location: None,
            project_type: Some("tree_planting".to_string()),
        };
        let filtered = filter_challenges(mock_challenges(Uuid::new_v4()), &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Tree Planting Initiative");
    }

    #[test]
    fn test_challenge_unknown_project_type_passes_everything() {
        let filters = ChallengeFilters {
            location: None,
            project_type: Some("mystery".to_string()),
        };
        let filtered = filter_challenges(mock_challenges(Uuid::new_v4()), &filters);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_challenge_location_matches_against_title() {
        let filters = ChallengeFilters {
            location: Some("beach".to_string()),
            project_type: None,
        };
        let filtered = filter_challenges(mock_challenges(Uuid::new_v4()), &filters);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_education_filters_strip_category_and_level() {
        let filters = EducationFilters {
            category: Some("climate".to_string()),
            level: None,
        };
        let filtered = filter_education(mock_education(), &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Understanding Climate Change");

        let json = serde_json::to_value(&filtered[0]).unwrap();
        assert!(json.get("category").is_none());
        assert!(json.get("level").is_none());
    }

    #[test]
    fn test_education_level_filter() {
        let filters = EducationFilters {
            category: None,
            level: Some("beginner".to_string()),
        };
        let filtered = filter_education(mock_education(), &filters);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_marketplace_category_filter() {
        let filters = MarketplaceFilters {
            product_category: Some("reusable".to_string()),
        };
        let filtered = filter_products(mock_products(), &filters);
        assert_eq!(filtered.len(), 2);

        let json = serde_json::to_value(&filtered[0]).unwrap();
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_dashboard_time_ranges() {
        assert_eq!(impact_score_for(Some("today")), 15);
        assert_eq!(impact_score_for(Some("this_week")), 75);
        assert_eq!(impact_score_for(Some("this_month")), 150);
        assert_eq!(impact_score_for(Some("all_time")), 500);
        assert_eq!(impact_score_for(None), 500);
    }
}
