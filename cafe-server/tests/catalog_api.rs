//! Catalog API: menu/category/product CRUD, link operations and the
//! set-null-on-delete relationship rules

mod common;

use common::{admin_token, request, send, test_app, user_token};
use http::StatusCode;
use serde_json::json;

async fn create_menu(app: &axum::Router, token: &str, title: &str) -> String {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/api/v1/menus",
            Some(token),
            Some(json!({ "title": title, "description": "", "imageUrl": "", "active": true })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["id"].as_str().expect("menu id").to_string()
}

async fn create_category(app: &axum::Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/api/v1/categories",
            Some(token),
            Some(json!({ "name": name, "order": 1, "imageUrl": "" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["id"].as_str().expect("category id").to_string()
}

async fn create_product(app: &axum::Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/api/v1/products",
            Some(token),
            Some(json!({
                "name": name,
                "description": "",
                "price": 12.5,
                "inStock": true,
                "imageUrl": ""
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["id"].as_str().expect("product id").to_string()
}

#[tokio::test]
async fn menu_crud_round_trip() {
    let (app, _state) = test_app().await;
    let token = admin_token(&app).await;

    let id = create_menu(&app, &token, "Kahvaltı").await;

    let (status, body) = send(&app, request("GET", &format!("/api/v1/menus/{id}"), None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Kahvaltı");
    assert_eq!(body["data"]["categories"], json!([]));

    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/menus/{id}"),
            Some(&token),
            Some(json!({ "title": "Brunch", "description": "d", "imageUrl": "u", "active": false })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Brunch");
    assert_eq!(body["data"]["active"], false);

    // active filter
    let (status, body) = send(&app, request("GET", "/api/v1/menus?active=true", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 0);

    let (status, body) = send(
        &app,
        request("DELETE", &format!("/api/v1/menus/{id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleted"], true);

    let (status, body) = send(&app, request("GET", &format!("/api/v1/menus/{id}"), None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Menu not found");
}

#[tokio::test]
async fn menu_mutations_require_token() {
    let (app, _state) = test_app().await;
    let (status, _) = send(
        &app,
        request("POST", "/api/v1/menus", None, Some(json!({ "title": "x" }))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn category_creation_is_admin_only() {
    let (app, _state) = test_app().await;
    let staff = user_token(&app).await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/v1/categories",
            Some(&staff),
            Some(json!({ "name": "İçecekler" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn deleting_menu_nulls_category_references() {
    let (app, _state) = test_app().await;
    let token = admin_token(&app).await;

    let menu_id = create_menu(&app, &token, "Ana Menü").await;
    let category_id = create_category(&app, &token, "Tatlılar").await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            &format!("/api/v1/menus/{menu_id}/category-links"),
            Some(&token),
            Some(json!({ "categoryId": category_id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        request("GET", &format!("/api/v1/categories/{category_id}"), None, None),
    )
    .await;
    assert_eq!(body["data"]["menuId"], menu_id);

    let (status, _) = send(
        &app,
        request("DELETE", &format!("/api/v1/menus/{menu_id}"), Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // category survives with a nulled menu reference
    let (status, body) = send(
        &app,
        request("GET", &format!("/api/v1/categories/{category_id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["menuId"], json!(null));
}

#[tokio::test]
async fn deleting_category_nulls_product_references() {
    let (app, _state) = test_app().await;
    let token = admin_token(&app).await;

    let category_id = create_category(&app, &token, "Kahveler").await;
    let product_id = create_product(&app, &token, "Filtre Kahve").await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            &format!("/api/v1/products/{product_id}/category-link"),
            Some(&token),
            Some(json!({ "categoryId": category_id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/v1/categories/{category_id}"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request("GET", &format!("/api/v1/products/{product_id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["categoryId"], json!(null));
}

#[tokio::test]
async fn unlinking_an_unlinked_category_is_a_no_op() {
    let (app, _state) = test_app().await;
    let token = admin_token(&app).await;

    let menu_id = create_menu(&app, &token, "Menü").await;
    let category_id = create_category(&app, &token, "Çaylar").await;

    // never linked: still 204
    let (status, _) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/v1/menus/{menu_id}/category-links/{category_id}"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // unknown category is still a 404
    let (status, _) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/v1/menus/{menu_id}/category-links/missing"),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn linking_requires_both_endpoints_to_exist() {
    let (app, _state) = test_app().await;
    let token = admin_token(&app).await;

    let category_id = create_category(&app, &token, "Sandviçler").await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/v1/menus/missing/category-links",
            Some(&token),
            Some(json!({ "categoryId": category_id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let menu_id = create_menu(&app, &token, "Menü").await;
    let (status, _) = send(
        &app,
        request(
            "POST",
            &format!("/api/v1/menus/{menu_id}/category-links"),
            Some(&token),
            Some(json!({ "categoryId": "missing" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // blank id is a validation error
    let (status, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/v1/menus/{menu_id}/category-links"),
            Some(&token),
            Some(json!({ "categoryId": "  " })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn menu_tree_nests_categories_and_products() {
    let (app, _state) = test_app().await;
    let token = admin_token(&app).await;

    let menu_id = create_menu(&app, &token, "Ana Menü").await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/v1/menus/{menu_id}/categories"),
            Some(&token),
            Some(json!({ "name": "Kahveler", "order": 1, "imageUrl": "" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let category_id = body["data"]["id"].as_str().expect("category id").to_string();

    let (status, _) = send(
        &app,
        request(
            "POST",
            &format!("/api/v1/categories/{category_id}/products"),
            Some(&token),
            Some(json!({
                "name": "Latte",
                "description": "",
                "price": 90.0,
                "discountedPrice": 75.0,
                "inStock": true,
                "imageUrl": ""
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request("GET", &format!("/api/v1/menus/{menu_id}"), None, None)).await;
    assert_eq!(status, StatusCode::OK);
    let categories = body["data"]["categories"].as_array().expect("categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["name"], "Kahveler");
    let products = categories[0]["products"].as_array().expect("products");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Latte");
    assert_eq!(products[0]["price"], 90.0);
    assert_eq!(products[0]["discountedPrice"], 75.0);
}

#[tokio::test]
async fn product_nutrition_round_trips_and_clears_when_omitted() {
    let (app, _state) = test_app().await;
    let token = admin_token(&app).await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/v1/products",
            Some(&token),
            Some(json!({
                "name": "Cheesecake",
                "description": "",
                "price": 150.0,
                "inStock": true,
                "imageUrl": "",
                "nutrition": {
                    "servingSize": "1 dilim",
                    "caloriesKcal": 420,
                    "macros": { "proteinG": 7.5, "carbsG": 38.0, "fatG": 27.0 },
                    "details": { "sugarG": 30.0, "energyKj": 1757 },
                    "allergens": ["süt", "gluten"]
                }
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().expect("product id").to_string();

    let (status, body) = send(&app, request("GET", &format!("/api/v1/products/{id}"), None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nutrition"]["servingSize"], "1 dilim");
    assert_eq!(body["data"]["nutrition"]["caloriesKcal"], 420);
    assert_eq!(body["data"]["nutrition"]["macros"]["proteinG"], 7.5);
    assert_eq!(body["data"]["nutrition"]["details"]["energyKj"], 1757);
    assert_eq!(body["data"]["nutrition"]["allergens"], json!(["süt", "gluten"]));

    // full-record update without nutrition clears it
    let (status, _) = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/products/{id}"),
            Some(&token),
            Some(json!({
                "name": "Cheesecake",
                "description": "",
                "price": 160.0,
                "inStock": true,
                "imageUrl": ""
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, request("GET", &format!("/api/v1/products/{id}"), None, None)).await;
    assert_eq!(body["data"]["nutrition"], json!(null));
    assert_eq!(body["data"]["price"], 160.0);
}

#[tokio::test]
async fn category_list_filters_by_menu_and_embeds_menu() {
    let (app, _state) = test_app().await;
    let token = admin_token(&app).await;

    let menu_id = create_menu(&app, &token, "Menü").await;
    let linked = create_category(&app, &token, "Bağlı").await;
    let _unlinked = create_category(&app, &token, "Bağsız").await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            &format!("/api/v1/categories/{linked}/menu-link"),
            Some(&token),
            Some(json!({ "menuId": menu_id })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request("GET", &format!("/api/v1/categories?menuId={menu_id}"), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 1);
    assert_eq!(body["data"][0]["id"], linked);
    assert_eq!(body["data"][0]["menu"]["id"], menu_id);

    let (status, body) = send(&app, request("GET", "/api/v1/categories", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["count"], 2);
}
