// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// YouTube视频ID的合法字符集
static VIDEO_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{6,16}$").expect("video id regex is valid"));

/// 从视频链接中提取平台视频ID
///
/// 支持的链接形式：
/// - `https://youtu.be/<id>`
/// - `https://www.youtube.com/watch?v=<id>`
/// - `https://www.youtube.com/embed/<id>` 与 `/shorts/<id>`
///
/// 无法识别的链接返回 `None`
pub fn extract_video_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?.trim_start_matches("www.");

    let candidate = match host {
        "youtu.be" => parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_string),
        "youtube.com" | "m.youtube.com" => {
            if parsed.path() == "/watch" {
                parsed
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned())
            } else {
                let mut segments = parsed.path_segments()?;
                match segments.next() {
                    Some("embed") | Some("shorts") => segments.next().map(str::to_string),
                    _ => None,
                }
            }
        }
        _ => None,
    };

    candidate.filter(|id| VIDEO_ID_RE.is_match(id))
}
