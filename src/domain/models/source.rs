// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use url::Url;

/// 源定义
///
/// 一个远程拦截列表及其要并入的分组。每次运行加载一次，之后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    /// 列表地址
    pub url: Url,
    /// 该列表要并入的分组名称（按配置顺序，非空）
    pub groups: Vec<String>,
}

impl SourceSpec {
    pub fn new(url: Url, groups: Vec<String>) -> Self {
        Self { url, groups }
    }

    /// 去重后的分组名称
    ///
    /// 同一源重复声明同一分组时只贡献一次
    pub fn distinct_groups(&self) -> BTreeSet<&str> {
        self.groups.iter().map(String::as_str).collect()
    }
}

/// 单个源的抓取结果
///
/// 由对应的抓取任务独占创建，汇合前不与其他任务共享
#[derive(Debug, Clone)]
pub struct SourceResult {
    pub spec: SourceSpec,
    /// 通过校验的域名
    pub domains: HashSet<String>,
    /// 未通过校验的候选项（按出现顺序）
    pub rejected: Vec<String>,
}

impl SourceResult {
    pub fn new(spec: SourceSpec) -> Self {
        Self {
            spec,
            domains: HashSet::new(),
            rejected: Vec::new(),
        }
    }
}

/// 分组结果
///
/// 所有声明了该分组的源的域名并集
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResult {
    pub name: String,
    pub domains: BTreeSet<String>,
    /// 贡献了域名的源地址
    pub sources: Vec<String>,
}

impl GroupResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domains: BTreeSet::new(),
            sources: Vec::new(),
        }
    }

    /// 渲染为输出文件内容：每行一个域名，按字典序排列
    pub fn render(&self) -> String {
        let mut output = String::new();
        for domain in &self.domains {
            output.push_str(domain);
            output.push('\n');
        }
        output
    }
}

/// 聚合结果
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// 分组名称 -> 分组结果
    pub groups: BTreeMap<String, GroupResult>,
    /// 源地址 -> 被拒绝的候选项
    pub rejected: BTreeMap<String, Vec<String>>,
    /// 参与聚合的源数量
    pub source_count: usize,
}

impl Aggregation {
    pub fn group(&self, name: &str) -> Option<&GroupResult> {
        self.groups.get(name)
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.values().map(Vec::len).sum()
    }
}
