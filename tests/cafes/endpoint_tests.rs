use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use cafe_api::cafes::interfaces::rest::{
    controllers::cafe_rest_controller::{
        delete_cafe, find_cafe, get_all_cafes, get_random_cafe, post_new_cafe, update_price,
    },
    extractors::add_cafe_form_extractor::AddCafeFormPayload,
    resources::{
        cafe_query_params_resource::{
            ReportClosedQueryResource, SearchCafesQueryResource, UpdatePriceQueryResource,
        },
        cafe_resource::CafeResource,
        error_response_resource::ErrorResponseResource,
        message_response_resource::ResponseEnvelopeResource,
    },
};

use crate::support::{TEST_API_KEY, add_cafe_form, cafe_with_id, create_harness};

fn api_key(value: Option<&str>) -> Query<ReportClosedQueryResource> {
    Query(ReportClosedQueryResource {
        api_key: value.map(str::to_string),
    })
}

#[tokio::test]
async fn created_cafe_appears_exactly_once_in_listing() {
    let harness = create_harness(vec![]);

    let (status, Json(body)) = post_new_cafe(
        State(harness.state.clone()),
        AddCafeFormPayload(add_cafe_form("Science Gallery London", "London Bridge")),
    )
    .await
    .expect("create should succeed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        ResponseEnvelopeResource::success("Successfully added the new cafe.")
    );

    let Json(listing) = get_all_cafes(State(harness.state))
        .await
        .expect("listing should succeed");

    assert_eq!(
        listing.cafes,
        vec![CafeResource {
            id: 1,
            name: "Science Gallery London".to_string(),
            map_url: "https://g.page/science-gallery-london".to_string(),
            img_url: "https://example.com/science-gallery.jpg".to_string(),
            location: "London Bridge".to_string(),
            seats: "50+".to_string(),
            has_toilet: true,
            has_wifi: false,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: Some("£2.40".to_string()),
        }]
    );
}

#[tokio::test]
async fn duplicate_name_returns_conflict() {
    let harness = create_harness(vec![]);

    let _ = post_new_cafe(
        State(harness.state.clone()),
        AddCafeFormPayload(add_cafe_form("Ace Hotel", "Shoreditch")),
    )
    .await;
    let result = post_new_cafe(
        State(harness.state.clone()),
        AddCafeFormPayload(add_cafe_form("Ace Hotel", "Shoreditch")),
    )
    .await;

    let Err((status, Json(body))) = result else {
        panic!("duplicate create should fail");
    };
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        ErrorResponseResource::rejected("A cafe with this name already exists.")
    );
    assert_eq!(harness.repository.cafes().len(), 1);
}

#[tokio::test]
async fn overlong_name_is_rejected_before_reaching_the_store() {
    let harness = create_harness(vec![]);
    let mut form = add_cafe_form("placeholder", "Peckham");
    form.name = Some("x".repeat(251));

    let result = post_new_cafe(State(harness.state.clone()), AddCafeFormPayload(form)).await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
    assert_eq!(harness.repository.write_calls(), 0);
}

#[tokio::test]
async fn missing_required_field_is_a_bad_request() {
    let harness = create_harness(vec![]);
    let mut form = add_cafe_form("Forage Cafe", "Peckham");
    form.seats = None;

    let result = post_new_cafe(State(harness.state.clone()), AddCafeFormPayload(form)).await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
    assert!(harness.repository.cafes().is_empty());
}

#[tokio::test]
async fn random_on_empty_table_returns_not_found_body() {
    let harness = create_harness(vec![]);

    let result = get_random_cafe(State(harness.state)).await;

    let Err((status, Json(body))) = result else {
        panic!("random on empty table should fail");
    };
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        ErrorResponseResource::error("Not Found", "Sorry, there are no cafes in the database.")
    );
}

#[tokio::test]
async fn search_without_match_returns_exact_not_found_body() {
    let harness = create_harness(vec![cafe_with_id(1, "Forage Cafe", "Peckham")]);

    let result = find_cafe(
        State(harness.state),
        Query(SearchCafesQueryResource {
            loc: Some("zzz".to_string()),
        }),
    )
    .await;

    let Err((status, Json(body))) = result else {
        panic!("search should not match");
    };
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        serde_json::to_value(body).expect("serializable"),
        serde_json::json!({"error": {"Not Found": "Sorry, we don't have a cafe at that location."}})
    );
}

#[tokio::test]
async fn update_price_with_non_numeric_id_is_not_found() {
    let harness = create_harness(vec![cafe_with_id(1, "Forage Cafe", "Peckham")]);

    let result = update_price(
        State(harness.state),
        Path("abc".to_string()),
        Query(UpdatePriceQueryResource {
            new_price: Some("£3.00".to_string()),
        }),
    )
    .await;

    let Err((status, Json(body))) = result else {
        panic!("non-numeric id should not be found");
    };
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        ErrorResponseResource::error(
            "Not Found",
            "Sorry a cafe with that id was not found in the database"
        )
    );
    assert_eq!(harness.repository.write_calls(), 0);
}

#[tokio::test]
async fn delete_with_wrong_key_is_forbidden_and_keeps_row() {
    let harness = create_harness(vec![cafe_with_id(1, "Forage Cafe", "Peckham")]);

    let result = delete_cafe(
        State(harness.state.clone()),
        Path("1".to_string()),
        api_key(Some("WRONG")),
    )
    .await;

    let Err((status, Json(body))) = result else {
        panic!("wrong key should be rejected");
    };
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        ErrorResponseResource::error(
            "Forbidden",
            "Sorry, that's not allowed. Make sure you have the correct api_key."
        )
    );
    assert!(harness.repository.find(1).is_some());
    assert_eq!(harness.repository.write_calls(), 0);
}

#[tokio::test]
async fn delete_without_key_is_forbidden() {
    let harness = create_harness(vec![cafe_with_id(1, "Forage Cafe", "Peckham")]);

    let result = delete_cafe(State(harness.state.clone()), Path("1".to_string()), api_key(None)).await;

    assert!(matches!(result, Err((StatusCode::FORBIDDEN, _))));
    assert!(harness.repository.find(1).is_some());
}

#[tokio::test]
async fn delete_with_correct_key_removes_row_then_reports_not_found() {
    let harness = create_harness(vec![cafe_with_id(1, "Forage Cafe", "Peckham")]);

    let Json(body) = delete_cafe(
        State(harness.state.clone()),
        Path("1".to_string()),
        api_key(Some(TEST_API_KEY)),
    )
    .await
    .expect("delete should succeed");
    assert_eq!(
        body,
        ResponseEnvelopeResource::success("Successfully deleted the cafe from the database.")
    );
    assert!(harness.repository.find(1).is_none());

    let second = delete_cafe(
        State(harness.state.clone()),
        Path("1".to_string()),
        api_key(Some(TEST_API_KEY)),
    )
    .await;

    let Err((status, Json(body))) = second else {
        panic!("second delete should fail");
    };
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        ErrorResponseResource::error(
            "Not Found",
            "Sorry a cafe with that id was not found in the database."
        )
    );
}

#[tokio::test]
async fn store_failure_maps_to_internal_server_error() {
    let harness = create_harness(vec![]);
    harness.repository.set_fail_reads(true);

    let result = get_all_cafes(State(harness.state)).await;

    assert!(matches!(result, Err((StatusCode::INTERNAL_SERVER_ERROR, _))));
}
