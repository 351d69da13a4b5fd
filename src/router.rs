//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every admin endpoint is registered here with its utoipa annotations, and
//! the collected OpenAPI document is served through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all admin endpoints and
/// Swagger UI documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Trellis", description = "Trellis admin API"), tags(
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard and analytics routes"),
        (name = controller::member::MEMBER_TAG, description = "Member management routes"),
        (name = controller::investment::INVESTMENT_TAG, description = "Investment review routes"),
        (name = controller::matrix::MATRIX_TAG, description = "Matrix network routes"),
        (name = controller::commission::COMMISSION_TAG, description = "Referral commission routes"),
        (name = controller::profit::PROFIT_TAG, description = "Profit distribution routes"),
        (name = controller::points::POINTS_TAG, description = "Point ledger routes"),
        (name = controller::lgr::LGR_TAG, description = "Loyalty growth reward routes"),
        (name = controller::ticket::TICKET_TAG, description = "Support ticket routes"),
        (name = controller::venture::VENTURE_TAG, description = "Community venture routes"),
        (name = controller::listing::LISTING_TAG, description = "Marketplace moderation routes"),
        (name = controller::wedding_card::WEDDING_CARD_TAG, description = "Wedding card routes"),
        (name = controller::export::EXPORT_TAG, description = "CSV export routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::dashboard::get_dashboard))
        .routes(routes!(controller::dashboard::get_reward_report))
        .routes(routes!(
            controller::member::list_members,
            controller::member::create_member
        ))
        .routes(routes!(controller::member::get_member))
        .routes(routes!(controller::member::update_member_status))
        .routes(routes!(controller::investment::list_investments))
        .routes(routes!(controller::investment::approve_investment))
        .routes(routes!(controller::investment::reject_investment))
        .routes(routes!(controller::investment::bulk_reject_investments))
        .routes(routes!(controller::matrix::get_tree))
        .routes(routes!(controller::matrix::get_position))
        .routes(routes!(controller::matrix::place_member))
        .routes(routes!(controller::commission::list_commissions))
        .routes(routes!(controller::commission::settle_commission))
        .routes(routes!(controller::commission::void_commission))
        .routes(routes!(
            controller::profit::list_distributions,
            controller::profit::create_distribution
        ))
        .routes(routes!(controller::profit::get_distribution))
        .routes(routes!(controller::points::get_point_balances))
        .routes(routes!(controller::points::adjust_points))
        .routes(routes!(
            controller::lgr::list_lgr_awards,
            controller::lgr::grant_lgr
        ))
        .routes(routes!(controller::lgr::credit_lgr))
        .routes(routes!(controller::lgr::cancel_lgr))
        .routes(routes!(controller::ticket::list_tickets))
        .routes(routes!(
            controller::ticket::get_ticket,
            controller::ticket::update_ticket
        ))
        .routes(routes!(
            controller::venture::list_ventures,
            controller::venture::create_venture
        ))
        .routes(routes!(controller::venture::update_venture_status))
        .routes(routes!(controller::listing::list_listings))
        .routes(routes!(controller::listing::approve_listing))
        .routes(routes!(controller::listing::reject_listing))
        .routes(routes!(
            controller::wedding_card::list_wedding_cards,
            controller::wedding_card::create_wedding_card
        ))
        .routes(routes!(
            controller::wedding_card::get_wedding_card,
            controller::wedding_card::update_wedding_card
        ))
        .routes(routes!(controller::export::export_members))
        .routes(routes!(controller::export::export_investments))
        .routes(routes!(controller::export::export_commissions))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
