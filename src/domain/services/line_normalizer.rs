// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::validators;

/// 以这些字符开头的行是注释、过滤语法或其他非域名内容
const ILLEGAL_START_CHARACTERS: &[char] = &[
    '#', '!', '$', '&', '>', '<', ']', '[', '|', '@', '/', '.', ':', '-', ',', '?', '_', '%',
];

/// 部分列表在正文中夹带的署名横幅
const ILLEGAL_START_PHRASES: &[&str] = &[
    "coded by",
    "Malvertising list by Disconnect",
    "Blocklist of hostnames",
];

/// 文本替换规则
#[derive(Debug, Clone, Copy)]
pub enum Rewrite {
    /// 替换所有出现的片段
    Replace(&'static str, &'static str),
    /// 从第一次出现处截断
    TruncateAt(char),
}

impl Rewrite {
    fn apply(&self, line: String) -> String {
        match *self {
            Rewrite::Replace(from, to) => {
                if line.contains(from) {
                    line.replace(from, to)
                } else {
                    line
                }
            }
            Rewrite::TruncateAt(marker) => match line.find(marker) {
                Some(pos) => line[..pos].to_string(),
                None => line,
            },
        }
    }
}

/// 按顺序应用的替换表
///
/// hosts 文件格式的回环、广播和组播前缀被去掉，行内注释被截断
pub const REWRITES: &[Rewrite] = &[
    Rewrite::Replace("\t", " "),
    Rewrite::Replace("0.0.0.0 ", ""),
    Rewrite::Replace("127.0.0.1 ", ""),
    Rewrite::Replace("255.255.255.255 ", ""),
    Rewrite::Replace("::1 ", ""),
    Rewrite::Replace("fe80::1%lo0 ", ""),
    Rewrite::Replace("ff00::0 ", ""),
    Rewrite::Replace("ff02::1 ", ""),
    Rewrite::Replace("ff02::2 ", ""),
    Rewrite::Replace("ff02::3 ", ""),
    Rewrite::Replace(":: ", ""),
    Rewrite::TruncateAt('#'),
];

/// 单行归一化后得到的候选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// 合法域名（已转为小写）
    Domain(String),
    /// 未通过校验的原始片段
    Rejected(String),
}

impl Candidate {
    pub fn into_domain(self) -> Option<String> {
        match self {
            Candidate::Domain(domain) => Some(domain),
            Candidate::Rejected(_) => None,
        }
    }
}

/// 去掉首尾空白、控制字符和字节序标记
fn trim(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ' || c.is_whitespace() || c == '\u{feff}')
}

/// 判断一行是否在替换之前就应被整体丢弃
fn is_rejected_line(line: &str) -> bool {
    match line.chars().next() {
        None => true,
        Some(first) if ILLEGAL_START_CHARACTERS.contains(&first) => true,
        Some(_) => ILLEGAL_START_PHRASES
            .iter()
            .any(|phrase| line.starts_with(phrase)),
    }
}

/// 将一行原始文本拆分为候选片段
///
/// 返回值尚未经过域名校验
fn split_pieces(raw: &str) -> Vec<String> {
    let line = trim(raw);
    if is_rejected_line(line) {
        return Vec::new();
    }

    let rewritten = REWRITES
        .iter()
        .fold(line.to_string(), |acc, rewrite| rewrite.apply(acc));

    // e.g. "medicalxpress.com,techxplore.com" or "ublock.org www.ublock.org demo.ublock.org"
    trim(&rewritten)
        .split(',')
        .flat_map(|piece| piece.split(' '))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// 归一化一行原始文本
///
/// 返回一次性消费的候选项序列；每个片段在被迭代到时才进行校验
pub fn normalize_line(raw: &str) -> impl Iterator<Item = Candidate> {
    split_pieces(raw)
        .into_iter()
        .map(|piece| match validators::canonical_host(&piece) {
            Some(host) => Candidate::Domain(host),
            None => Candidate::Rejected(piece),
        })
}

/// 只返回通过校验的域名
pub fn domains(raw: &str) -> impl Iterator<Item = String> {
    normalize_line(raw).filter_map(Candidate::into_domain)
}
