// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{add_video, login, send, spawn_app};

/// 对不存在的视频记笔记返回404
#[tokio::test]
async fn create_note_requires_existing_video() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/v1/videos/00000000-0000-0000-0000-000000000000/notes",
        Some(&token),
        Some(json!({ "text": "orphan note" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// 笔记增删与排序测试
///
/// 列表按最新在前返回
#[tokio::test]
async fn notes_list_newest_first() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    let video = add_video(&app, &token, "Math", "Calculus", "").await;
    let id = video["id"].as_str().unwrap();

    let (status, first) = send(
        &app,
        "POST",
        &format!("/v1/videos/{id}/notes"),
        Some(&token),
        Some(json!({ "text": "watch from 12:30" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["text"], "watch from 12:30");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/v1/videos/{id}/notes"),
        Some(&token),
        Some(json!({ "text": "good chain rule example" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/v1/videos/{id}/notes"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let notes = body.as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["text"], "good chain rule example");
    assert_eq!(notes[1]["text"], "watch from 12:30");
}

/// 空笔记内容被拒绝
#[tokio::test]
async fn create_note_rejects_empty_text() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    let video = add_video(&app, &token, "Math", "Calculus", "").await;
    let id = video["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "POST",
        &format!("/v1/videos/{id}/notes"),
        Some(&token),
        Some(json!({ "text": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// 删除单条笔记
#[tokio::test]
async fn delete_note_then_missing() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    let video = add_video(&app, &token, "Math", "Calculus", "").await;
    let id = video["id"].as_str().unwrap();

    let (_, note) = send(
        &app,
        "POST",
        &format!("/v1/videos/{id}/notes"),
        Some(&token),
        Some(json!({ "text": "rewatch later" })),
    )
    .await;
    let note_id = note["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/v1/videos/{id}/notes/{note_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/v1/videos/{id}/notes/{note_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// 删除视频时其笔记一并清理
#[tokio::test]
async fn deleting_video_removes_its_notes() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    let video = add_video(&app, &token, "Math", "Calculus", "").await;
    let id = video["id"].as_str().unwrap();

    send(
        &app,
        "POST",
        &format!("/v1/videos/{id}/notes"),
        Some(&token),
        Some(json!({ "text": "rewatch later" })),
    )
    .await;

    let (_, stats) = send(&app, "GET", "/v1/stats", Some(&token), None).await;
    assert_eq!(stats["total_notes"], 1);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/v1/videos/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, stats) = send(&app, "GET", "/v1/stats", Some(&token), None).await;
    assert_eq!(stats["total_notes"], 0);
}
