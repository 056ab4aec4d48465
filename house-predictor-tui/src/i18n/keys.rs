//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `settings.*` / `help.*`**：两个弹窗各占一个分组
//! 3. **表单内容归 `form.*`**：单页表单的标签、占位符和按钮
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和动作词

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 预测表单文本
    pub form: FormTexts,
    /// 结果与错误消息文本
    pub messages: MessageTexts,
    /// 设置弹窗文本
    pub settings: SettingsTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

/// 通用文本
pub struct CommonTexts {
    /// 应用名称
    pub app_name: &'static str,
}

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称（两种语言下通常一致）
    pub keys: KeyNames,
    /// 动作词
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    /// 字段导航组合键
    pub navigate: &'static str,
    /// 左右方向键
    pub arrows_lr: &'static str,
    /// 上下方向键
    pub arrows_ud: &'static str,
    /// Enter 键
    pub enter: &'static str,
    /// Esc 键
    pub esc: &'static str,
    /// Ctrl+C 组合键
    pub ctrl_c: &'static str,
    /// Alt+H 组合键
    pub alt_h: &'static str,
    /// Alt+S 组合键
    pub alt_s: &'static str,
    /// Alt+B 组合键
    pub alt_b: &'static str,
}

/// 动作词（与按键名称拼成 "键: 动作" 提示）
pub struct ActionTexts {
    /// 在字段间移动焦点
    pub navigate: &'static str,
    /// 切换选择器选项
    pub change_option: &'static str,
    /// 提交表单
    pub submit: &'static str,
    /// 退出应用
    pub quit: &'static str,
    /// 关闭弹窗
    pub close: &'static str,
    /// 打开帮助
    pub help: &'static str,
    /// 打开设置
    pub settings: &'static str,
    /// 检查后端连通性
    pub check_backend: &'static str,
    /// 选择设置项
    pub select_item: &'static str,
    /// 切换设置值
    pub change_value: &'static str,
}

/// 预测表单文本
pub struct FormTexts {
    /// 表单标题
    pub title: &'static str,
    /// 面积字段标签
    pub area: &'static str,
    /// 卧室数字段标签
    pub bedrooms: &'static str,
    /// 浴室数字段标签
    pub bathrooms: &'static str,
    /// 楼层字段标签
    pub floor: &'static str,
    /// 城市选择器标签
    pub city: &'static str,
    /// 装修程度选择器标签
    pub furnishing: &'static str,
    /// 数字输入框为空时的占位文本
    pub numeric_placeholder: &'static str,
    /// 城市未选择时的占位文本
    pub city_placeholder: &'static str,
    /// 装修程度未选择时的占位文本
    pub furnishing_placeholder: &'static str,
    /// 提交按钮文本
    pub submit: &'static str,
}

/// 结果与错误消息文本
///
/// `server_error` 与 `backend_unreachable` 是两条固定文案，
/// 在请求得到结果的那一刻被写入状态；之后切换语言不会改写已显示的文案。
pub struct MessageTexts {
    /// 预测结果前缀
    pub predicted_price: &'static str,
    /// 请求在途时的提示
    pub predicting: &'static str,
    /// 服务器返回非 2xx 时的固定文案
    pub server_error: &'static str,
    /// 网络不可达或响应不可解析时的固定文案
    pub backend_unreachable: &'static str,
}

/// 设置弹窗文本
pub struct SettingsTexts {
    /// 弹窗标题
    pub title: &'static str,
    /// 主题设置项
    pub theme: &'static str,
    /// 暗色主题
    pub theme_dark: &'static str,
    /// 亮色主题
    pub theme_light: &'static str,
    /// 语言设置项
    pub language: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    /// 弹窗标题
    pub title: &'static str,
    /// 表单操作区标题
    pub section_form: &'static str,
    /// 全局操作区标题
    pub section_global: &'static str,
    /// 字段导航说明
    pub navigate: &'static str,
    /// 选项切换说明
    pub change_option: &'static str,
    /// 数字输入说明
    pub input_digits: &'static str,
    /// 提交说明
    pub submit: &'static str,
    /// 帮助说明
    pub help: &'static str,
    /// 设置说明
    pub settings: &'static str,
    /// 后端检查说明
    pub check_backend: &'static str,
    /// 退出说明
    pub quit: &'static str,
    /// 强制退出说明
    pub force_quit: &'static str,
    /// 底部关闭提示
    pub close_hint: &'static str,
}

/// 状态栏文本
pub struct StatusBarTexts {
    /// 正在检查后端
    pub checking_backend: &'static str,
    /// 后端不可达
    pub backend_unreachable: &'static str,
    /// 待发送请求过多
    pub queue_full: &'static str,
}
