//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, FormTexts, HelpTexts, HintTexts, KeyNames, MessageTexts,
    SettingsTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Indian House Price Predictor",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            navigate: "Tab/↑↓",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            enter: "Enter",
            esc: "Esc",
            ctrl_c: "Ctrl+C",
            alt_h: "Alt+H",
            alt_s: "Alt+S",
            alt_b: "Alt+B",
        },
        actions: ActionTexts {
            navigate: "Navigate",
            change_option: "Change option",
            submit: "Predict",
            quit: "Quit",
            close: "Close",
            help: "Help",
            settings: "Settings",
            check_backend: "Check backend",
            select_item: "Select",
            change_value: "Change value",
        },
    },

    // ========================================================================
    // 预测表单
    // ========================================================================
    form: FormTexts {
        title: "Indian House Price Predictor",
        area: "Area (sqft)",
        bedrooms: "Bedrooms",
        bathrooms: "Bathrooms",
        floor: "Floor",
        city: "City",
        furnishing: "Furnishing",
        numeric_placeholder: "Enter a number",
        city_placeholder: "Select city",
        furnishing_placeholder: "Select furnishing",
        submit: "Predict Price",
    },

    // ========================================================================
    // 结果与错误消息
    // ========================================================================
    messages: MessageTexts {
        predicted_price: "Predicted Price:",
        predicting: "Predicting...",
        server_error: "Server error",
        backend_unreachable: "Failed to fetch data. Check if backend is running.",
    },

    // ========================================================================
    // 设置弹窗
    // ========================================================================
    settings: SettingsTexts {
        title: "Settings",
        theme: "Theme",
        theme_dark: "Dark",
        theme_light: "Light",
        language: "Language",
    },

    // ========================================================================
    // 帮助弹窗
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        section_form: "Form",
        section_global: "Global",
        navigate: "Move between fields",
        change_option: "Cycle city / furnishing",
        input_digits: "Type digits into the focused field",
        submit: "Submit the form",
        help: "Show this help",
        settings: "Open settings",
        check_backend: "Check backend availability",
        quit: "Quit",
        force_quit: "Force quit (works everywhere)",
        close_hint: "Press Esc to close the help",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        checking_backend: "Checking backend...",
        backend_unreachable: "Backend unreachable",
        queue_full: "Too many requests in flight",
    },
};
