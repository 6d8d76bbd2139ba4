use fwms_domain::{leaderboard, points_summary, OrganizationPoints, PointsSummary, Role, User};

use crate::identity::require_cafe_role;
use crate::{AppError, AppState};

/// Points earned by the caller's own organization.
pub async fn summary(state: &AppState, actor: &User) -> Result<PointsSummary, AppError> {
    let ledger = state.ledger.read().await;
    Ok(points_summary(&ledger, &actor.organization))
}

pub async fn standings(state: &AppState, actor: &User) -> Result<Vec<OrganizationPoints>, AppError> {
    require_cafe_role(actor, &[Role::Admin, Role::Staff])?;
    let ledger = state.ledger.read().await;
    Ok(leaderboard(&ledger))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fwms_domain::{ManualTransport, PointsTier, ScheduleTransportPayload, WasteCategory};

    use super::*;
    use crate::commands::transport_commands;
    use crate::testing;

    async fn manual_pickup(state: &AppState, destination: &str, kg: f64) {
        let admin = testing::caller(state, "admin-1").await;
        let record = transport_commands::schedule_transport(
            state,
            &admin,
            ScheduleTransportPayload {
                request_id: None,
                manual: Some(ManualTransport {
                    destination: destination.to_string(),
                    category: WasteCategory::Organic,
                    quantity_kg: kg,
                }),
                scheduled_date: NaiveDate::from_ymd_opt(2026, 11, 5),
                time_window: Some("08:00-09:00".to_string()),
                carrier: Some("GreenFleet".to_string()),
            },
        )
        .await
        .expect("schedule")
        .data;
        transport_commands::complete_transport(state, &admin, record.id)
            .await
            .expect("complete");
    }

    #[tokio::test]
    async fn farmer_summary_reflects_completed_pickups() {
        let state = testing::state();
        manual_pickup(&state, "Sunrise Farm", 40.0).await;
        manual_pickup(&state, "Sunrise Farm", 15.0).await;
        manual_pickup(&state, "City Food Bank", 5.0).await;

        let farmer = testing::caller(&state, "farmer-1").await;
        let summary = summary(&state, &farmer).await.expect("summary");
        assert_eq!(summary.total, 55.0);
        assert_eq!(summary.tier, PointsTier::Silver);
        assert_eq!(summary.history.len(), 2);
        assert_eq!(summary.points_to_next_tier, Some(45.0));
    }

    #[tokio::test]
    async fn leaderboard_is_for_cafe_side_roles() {
        let state = testing::state();
        manual_pickup(&state, "City Food Bank", 5.0).await;
        manual_pickup(&state, "Sunrise Farm", 12.0).await;

        let staff = testing::caller(&state, "staff-1").await;
        let board = standings(&state, &staff).await.expect("standings");
        assert_eq!(board[0].organization, "Sunrise Farm");
        assert_eq!(board[1].organization, "City Food Bank");

        let charity = testing::caller(&state, "charity-1").await;
        let err = standings(&state, &charity).await.expect_err("charity");
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
