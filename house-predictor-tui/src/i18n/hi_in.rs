//! 印地语翻译 (hi-IN)
//!
//! 城市与装修程度的选项名不翻译：它们是提交给后端的原始取值。

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "भारतीय मकान मूल्य अनुमानक",
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
            navigate: "फ़ील्ड बदलें",
            change_option: "विकल्प बदलें",
            submit: "अनुमान",
            quit: "बाहर निकलें",
            close: "बंद करें",
            help: "सहायता",
            settings: "सेटिंग्स",
            check_backend: "बैकएंड जाँचें",
            select_item: "चुनें",
            change_value: "मान बदलें",
        },
    },

    // ========================================================================
    // 预测表单
    // ========================================================================
    form: FormTexts {
        title: "भारतीय मकान मूल्य अनुमानक",
        area: "क्षेत्रफल (वर्ग फुट)",
        bedrooms: "बेडरूम",
        bathrooms: "बाथरूम",
        floor: "मंज़िल",
        city: "शहर",
        furnishing: "फर्निशिंग",
        numeric_placeholder: "संख्या दर्ज करें",
        city_placeholder: "शहर चुनें",
        furnishing_placeholder: "फर्निशिंग चुनें",
        submit: "मूल्य का अनुमान लगाएँ",
    },

    // ========================================================================
    // 结果与错误消息
    // ========================================================================
    messages: MessageTexts {
        predicted_price: "अनुमानित मूल्य:",
        predicting: "अनुमान लगाया जा रहा है...",
        server_error: "सर्वर त्रुटि",
        backend_unreachable: "डेटा प्राप्त नहीं हो सका। जाँचें कि बैकएंड चल रहा है।",
    },

    // ========================================================================
    // 设置弹窗
    // ========================================================================
    settings: SettingsTexts {
        title: "सेटिंग्स",
        theme: "थीम",
        theme_dark: "डार्क",
        theme_light: "लाइट",
        language: "भाषा",
    },

    // ========================================================================
    // 帮助弹窗
    // ========================================================================
    help: HelpTexts {
        title: "सहायता",
        section_form: "फ़ॉर्म",
        section_global: "ग्लोबल",
        navigate: "फ़ील्ड के बीच जाएँ",
        change_option: "शहर / फर्निशिंग बदलें",
        input_digits: "चयनित फ़ील्ड में अंक लिखें",
        submit: "फ़ॉर्म सबमिट करें",
        help: "यह सहायता दिखाएँ",
        settings: "सेटिंग्स खोलें",
        check_backend: "बैकएंड की उपलब्धता जाँचें",
        quit: "बाहर निकलें",
        force_quit: "ज़बरदस्ती बंद करें (हर जगह काम करता है)",
        close_hint: "सहायता बंद करने के लिए Esc दबाएँ",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        checking_backend: "बैकएंड जाँची जा रही है...",
        backend_unreachable: "बैकएंड उपलब्ध नहीं है",
        queue_full: "बहुत सारे अनुरोध प्रतीक्षा में हैं",
    },
};
