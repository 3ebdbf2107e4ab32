//! Protected medical vocabulary
//!
//! Terms in this set survive redaction even when a name rule matches them.

/// Built-in protected terms: diagnoses and symptoms, drug names, role nouns
pub const BUILTIN_PROTECTED_TERMS: &[&str] = &[
    // Diagnoses and symptoms
    "統合失調症",
    "双極性障害",
    "うつ病",
    "不安障害",
    "適応障害",
    "認知症",
    "てんかん",
    "パーキンソン病",
    "糖尿病",
    "高血圧",
    "脂質異常症",
    "気管支喘息",
    "慢性閉塞性肺疾患",
    "心不全",
    "狭心症",
    "心筋梗塞",
    "脳梗塞",
    "脳出血",
    "くも膜下出血",
    "頭痛",
    "発熱",
    "咳嗽",
    "呼吸困難",
    "胸痛",
    "腹痛",
    "幻聴",
    "妄想",
    "幻覚",
    "被害念慮",
    "抑うつ",
    "不安",
    // Drugs
    "リスペリドン",
    "オランザピン",
    "クエチアピン",
    "アリピプラゾール",
    "パリペリドン",
    "ハロペリドール",
    "レボメプロマジン",
    "リチウム",
    "バルプロ酸",
    "カルバマゼピン",
    "ラモトリギン",
    "フルボキサミン",
    "パロキセチン",
    "セルトラリン",
    "エスシタロプラム",
    "デュロキセチン",
    "ミルタザピン",
    "ボルチオキセチン",
    "ロラゼパム",
    "クロナゼパム",
    "ジアゼパム",
    "エチゾラム",
    // Roles
    "医師",
    "看護師",
    "薬剤師",
    "患者",
    "家族",
    "母",
    "父",
];

/// Immutable set of terms that must never be masked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedTermSet {
    terms: Vec<String>,
}

impl ProtectedTermSet {
    /// The built-in vocabulary only
    pub fn builtin() -> Self {
        Self {
            terms: BUILTIN_PROTECTED_TERMS
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
        }
    }

    /// The built-in vocabulary plus deployment-specific terms
    ///
    /// Blank entries and duplicates of existing terms are skipped.
    pub fn with_additional<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::builtin();
        for term in terms {
            let term = term.as_ref().trim();
            if term.is_empty() || set.terms.iter().any(|t| t == term) {
                continue;
            }
            set.terms.push(term.to_string());
        }
        set
    }

    /// True iff `candidate` contains any protected term as a substring
    pub fn is_protected(&self, candidate: &str) -> bool {
        self.terms.iter().any(|term| candidate.contains(term.as_str()))
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the set holds no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the terms
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl Default for ProtectedTermSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_containment() {
        let set = ProtectedTermSet::builtin();
        assert!(set.is_protected("統合失調症"));
        assert!(set.is_protected("慢性統合失調症疑い"));
        assert!(set.is_protected("リスペリドン錠"));
        assert!(!set.is_protected("田中太郎"));
        assert!(!set.is_protected(""));
    }

    #[test]
    fn test_role_nouns_are_protected() {
        let set = ProtectedTermSet::builtin();
        assert!(set.is_protected("担当医師"));
        assert!(set.is_protected("父親"));
    }

    #[test]
    fn test_with_additional() {
        let set = ProtectedTermSet::with_additional(["ブロナンセリン", "  ", "母"]);
        assert_eq!(set.len(), BUILTIN_PROTECTED_TERMS.len() + 1);
        assert!(set.is_protected("ブロナンセリン8mg"));
    }
}
