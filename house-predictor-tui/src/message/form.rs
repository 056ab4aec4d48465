//! 预测表单消息类型

/// 预测表单相关消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 焦点移到下一个位置
    NextField,

    /// 焦点移到上一个位置
    PrevField,

    /// 当前选择器切换到上一个选项（左）
    PrevOption,

    /// 当前选择器切换到下一个选项（右）
    NextOption,

    /// 在当前数字输入框中输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 清空当前输入框（Delete）
    Clear,

    /// 提交表单
    Submit,
}
