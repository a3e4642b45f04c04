// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 行归一化（line_normalizer）：把一行原始文本转换为候选域名
/// - 源抓取（source_fetcher）：读取一个源并收集其中的合法域名
/// - 聚合（aggregator）：并发抓取所有源并按分组合并去重
pub mod aggregator;
pub mod line_normalizer;
pub mod source_fetcher;
