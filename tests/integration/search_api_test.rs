// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{add_video, login, send, spawn_app};

/// 模糊搜索测试
///
/// 标题包含查询词时直接得满分并排在前面
#[tokio::test]
async fn search_ranks_title_substring_first() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    add_video(&app, &token, "Math", "Linear Algebra Basics", "").await;
    add_video(&app, &token, "Art", "Color Theory", "").await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/search",
        Some(&token),
        Some(json!({ "query": "theory" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "theory");

    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["title"], "Color Theory");
    assert_eq!(results[0]["category"], "Art");
    assert!(results[0]["score"].as_f64().unwrap() >= 100.0);
}

/// 描述与分类低权重计入总分
#[tokio::test]
async fn search_weighs_description_and_category() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    add_video(&app, &token, "Math", "Derivatives", "introduction to calculus").await;
    add_video(&app, &token, "Math", "Set notation", "").await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/search",
        Some(&token),
        Some(json!({ "query": "calculus" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["title"], "Derivatives");
    // Description substring contributes half weight
    assert!(results[0]["score"].as_f64().unwrap() >= 50.0);
}

/// 空查询被校验拦截
#[tokio::test]
async fn search_rejects_empty_query() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/v1/search",
        Some(&token),
        Some(json!({ "query": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// limit 截断结果数量
#[tokio::test]
async fn search_truncates_to_limit() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    for i in 0..4 {
        add_video(&app, &token, "Math", &format!("Algebra lesson {i}"), "").await;
    }

    let (status, body) = send(
        &app,
        "POST",
        "/v1/search",
        Some(&token),
        Some(json!({ "query": "algebra", "limit": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
}

/// 空目录搜索返回空结果而非错误
#[tokio::test]
async fn search_empty_catalog_returns_empty_results() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/search",
        Some(&token),
        Some(json!({ "query": "anything" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["results"].as_array().unwrap().is_empty());
}
