// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::models::search_result::SearchResult;
use crate::domain::models::video::Catalog;

/// 结果过滤阈值：总分严格大于该值才会进入结果集
pub const SCORE_THRESHOLD: f64 = 20.0;

/// 默认返回结果数量
pub const DEFAULT_LIMIT: usize = 20;

/// 对目录执行模糊搜索
///
/// 排序器是两个输入的纯函数：对目录中每个视频计算
/// `score(q, 标题) + 0.5 * score(q, 描述) + 0.3 * score(q, 分类名)`，
/// 过滤掉总分不高于 [`SCORE_THRESHOLD`] 的视频，按总分降序排序后
/// 截取前 `limit` 条。同分视频保持目录迭代顺序（稳定排序）。
///
/// 空目录或没有视频超过阈值时返回空列表，不视为错误。
/// 分数不做跨视频归一化，也不含任何 TF/IDF 统计权重。
pub fn rank(query: &str, catalog: &Catalog, limit: usize) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::new();

    for (category, video) in catalog.iter() {
        let title_score = field_score(query, &video.title);
        let desc_score = field_score(query, video.description.as_deref().unwrap_or("")) * 0.5;
        let category_score = field_score(query, category) * 0.3;

        let total_score = title_score + desc_score + category_score;

        if total_score > SCORE_THRESHOLD {
            results.push(SearchResult {
                video: video.clone(),
                category: category.to_string(),
                score: total_score,
            });
        }
    }

    // Stable sort keeps catalog iteration order for equal scores
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results.truncate(limit);
    results
}

/// 单字段相似度评分，范围 [0, 100]
///
/// 1. 两侧字符串统一小写折叠
/// 2. 查询是文本子串时直接返回 100（精确命中短路，优先级最高）
/// 3. 否则取序列相似度与词重叠度两个独立信号的较大值
pub fn field_score(query: &str, text: &str) -> f64 {
    let query = query.to_lowercase();
    let text = text.to_lowercase();

    // Exact substring match
    if text.contains(query.as_str()) {
        return 100.0;
    }

    let ratio = sequence_ratio(&query, &text) * 100.0;

    // Word-based matching: fraction of query words found verbatim in the text
    let text_words: Vec<&str> = text.split_whitespace().collect();
    let query_words: Vec<&str> = query.split_whitespace().collect();
    let word_score = if query_words.is_empty() {
        0.0
    } else {
        let matches = query_words
            .iter()
            .filter(|word| text_words.contains(word))
            .count();
        matches as f64 / query_words.len() as f64 * 100.0
    };

    ratio.max(word_score)
}

/// 序列相似度（最长匹配块比率），范围 [0, 1]
///
/// Ratcliff/Obershelp：递归找出最长公共块，比率为
/// `2 * M / (len_a + len_b)`，其中 M 为全部匹配块长度之和。
/// 两个空串的比率定义为 1。
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let length = a.len() + b.len();
    if length == 0 {
        return 1.0;
    }
    let matched = matched_len(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matched as f64 / length as f64
}

/// 递归累计匹配块长度：取最长公共块后对其左右两侧继续匹配
fn matched_len(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }
    size + matched_len(a, b, alo, i, blo, j) + matched_len(a, b, i + size, ahi, j + size, bhi)
}

/// 在 a[alo..ahi] 与 b[blo..bhi] 中找最长公共连续块
///
/// 多个同长块时取 a 中最靠前、再取 b 中最靠前的一个
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0usize);
    // j2len[j] = length of the common run ending at a[i-1] / b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut row: HashMap<usize, usize> = HashMap::new();
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = if j == 0 {
                    1
                } else {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                row.insert(j, k);
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        j2len = row;
    }

    best
}
