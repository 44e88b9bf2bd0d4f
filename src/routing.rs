//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    endpoints,
    logging::logging_middleware,
    member::{
        create_group_endpoint, create_member_endpoint, get_group_members_endpoint,
        get_member_endpoint, get_members_endpoint,
    },
    savings::{
        create_deposit_endpoint, create_withdrawal_endpoint, get_deposits_endpoint,
        get_member_total_endpoint, get_member_transactions_endpoint, get_savings_endpoint,
        get_withdrawals_endpoint,
    },
    savings_type::{
        create_savings_type_endpoint, delete_savings_type_endpoint, edit_savings_type_endpoint,
        get_savings_type_endpoint, get_savings_types_endpoint,
    },
    stores::sqlite::SQLAppState,
};

/// Return a router with all the app's routes.
pub fn build_router(state: SQLAppState) -> Router {
    Router::new()
        .route(endpoints::SAVINGS, get(get_savings_endpoint))
        .route(
            endpoints::DEPOSITS,
            post(create_deposit_endpoint).get(get_deposits_endpoint),
        )
        .route(
            endpoints::WITHDRAWALS,
            post(create_withdrawal_endpoint).get(get_withdrawals_endpoint),
        )
        .route(
            endpoints::MEMBER_SAVINGS_TOTAL,
            get(get_member_total_endpoint),
        )
        .route(
            endpoints::MEMBER_SAVINGS_TRANSACTIONS,
            get(get_member_transactions_endpoint),
        )
        .route(
            endpoints::SAVINGS_TYPES,
            post(create_savings_type_endpoint).get(get_savings_types_endpoint),
        )
        .route(
            endpoints::SAVINGS_TYPE,
            get(get_savings_type_endpoint)
                .put(edit_savings_type_endpoint)
                .delete(delete_savings_type_endpoint),
        )
        .route(
            endpoints::MEMBERS,
            post(create_member_endpoint).get(get_members_endpoint),
        )
        .route(endpoints::MEMBER, get(get_member_endpoint))
        .route(endpoints::GROUPS, post(create_group_endpoint))
        .route(endpoints::GROUP_MEMBERS, get(get_group_members_endpoint))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
