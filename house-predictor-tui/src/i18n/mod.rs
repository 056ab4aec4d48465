//! 国际化（i18n）模块
//!
//! 提供多语言支持（英语 / 印地语）。
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod hi_in;
pub mod keys;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 印地语（印度）
    HiIn,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::HiIn]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::HiIn => "हिन्दी",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::HiIn => "hi-IN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "hi-IN" | "hi" => Some(Language::HiIn),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(&self) -> Language {
        match self {
            Language::EnUs => Language::HiIn,
            Language::HiIn => Language::EnUs,
        }
    }

    /// 获取上一个语言（用于循环切换）
    #[must_use]
    pub fn prev(&self) -> Language {
        match self {
            Language::EnUs => Language::HiIn,
            Language::HiIn => Language::EnUs,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
///
/// # Example
///
/// ```ignore
/// let text = t().form.submit; // "Predict Price" 或 "मूल्य का अनुमान लगाएँ"
/// ```
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &hi_in::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::HiIn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

// ==================== language tests ====================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_roundtrip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn test_language_from_short_code() {
        assert_eq!(Language::from_code("en"), Some(Language::EnUs));
        assert_eq!(Language::from_code("hi"), Some(Language::HiIn));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_language_cycle_covers_all() {
        let mut lang = Language::default();
        for _ in 0..Language::all().len() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::default());
    }

    #[test]
    fn test_fixed_error_texts_match_service_contract() {
        assert_eq!(en_us::TRANSLATIONS.messages.server_error, "Server error");
        assert_eq!(
            en_us::TRANSLATIONS.messages.backend_unreachable,
            "Failed to fetch data. Check if backend is running."
        );
    }
}
