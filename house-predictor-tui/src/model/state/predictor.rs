//! 预测表单页面状态

use house_predictor_client::{City, FeatureForm, Furnishing, Prediction};

/// 焦点位置索引：0..=3 为数字输入框
pub const AREA_FOCUS: usize = 0;
pub const BEDROOMS_FOCUS: usize = 1;
pub const BATHROOMS_FOCUS: usize = 2;
pub const FLOOR_FOCUS: usize = 3;
/// 城市选择器的焦点索引
pub const CITY_FOCUS: usize = 4;
/// 装修程度选择器的焦点索引
pub const FURNISHING_FOCUS: usize = 5;
/// 提交按钮的焦点索引
pub const SUBMIT_FOCUS: usize = 6;
/// 焦点位置总数（4 个输入框 + 2 个选择器 + 提交按钮）
pub const FOCUS_POSITIONS: usize = 7;

/// 预测表单页面状态
///
/// 四个数字字段保持用户输入的原始字符串，提交时原样发送；
/// 两个选择器在用户从未触碰时为 `None`，提交为 ""。
#[derive(Debug)]
pub struct PredictorState {
    /// 面积（平方英尺）
    pub area: String,
    /// 卧室数
    pub bedrooms: String,
    /// 浴室数
    pub bathrooms: String,
    /// 楼层
    pub floor: String,
    /// 城市选择器当前下标（未选择为 None）
    pub city_index: Option<usize>,
    /// 装修程度选择器当前下标（未选择为 None）
    pub furnishing_index: Option<usize>,
    /// 当前焦点位置
    pub focus: usize,
    /// 最近一次成功的预测结果
    pub result: Option<Prediction>,
    /// 最近一次失败的错误文案
    pub error: Option<String>,
    /// 在途请求数（>0 即展示提交中提示）
    pub in_flight: usize,
}

impl PredictorState {
    /// 创建初始表单状态（所有字段为空）
    pub fn new() -> Self {
        Self {
            area: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            floor: String::new(),
            city_index: None,
            furnishing_index: None,
            focus: 0,
            result: None,
            error: None,
            in_flight: 0,
        }
    }

    /// 焦点移到下一个位置（到底后回绕）
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FOCUS_POSITIONS;
    }

    /// 焦点移到上一个位置（到顶后回绕）
    pub fn focus_prev(&mut self) {
        if self.focus == 0 {
            self.focus = FOCUS_POSITIONS - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// 焦点是否位于某个数字输入框
    pub fn focus_on_text_field(&self) -> bool {
        self.focus <= FLOOR_FOCUS
    }

    /// 焦点是否位于某个选择器
    pub fn focus_on_selector(&self) -> bool {
        self.focus == CITY_FOCUS || self.focus == FURNISHING_FOCUS
    }

    /// 当前聚焦的数字输入框（焦点不在输入框上时为 None）
    pub fn focused_text_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            AREA_FOCUS => Some(&mut self.area),
            BEDROOMS_FOCUS => Some(&mut self.bedrooms),
            BATHROOMS_FOCUS => Some(&mut self.bathrooms),
            FLOOR_FOCUS => Some(&mut self.floor),
            _ => None,
        }
    }

    /// 当前选中的城市
    pub fn city(&self) -> Option<City> {
        self.city_index.map(|index| City::all()[index])
    }

    /// 当前选中的装修程度
    pub fn furnishing(&self) -> Option<Furnishing> {
        self.furnishing_index.map(|index| Furnishing::all()[index])
    }

    /// 城市选择器切换到下一个选项
    pub fn cycle_city_next(&mut self) {
        let count = City::all().len();
        self.city_index = Some(match self.city_index {
            None => 0,
            Some(index) => (index + 1) % count,
        });
    }

    /// 城市选择器切换到上一个选项
    pub fn cycle_city_prev(&mut self) {
        let count = City::all().len();
        self.city_index = Some(match self.city_index {
            None | Some(0) => count - 1,
            Some(index) => index - 1,
        });
    }

    /// 装修程度选择器切换到下一个选项
    pub fn cycle_furnishing_next(&mut self) {
        let count = Furnishing::all().len();
        self.furnishing_index = Some(match self.furnishing_index {
            None => 0,
            Some(index) => (index + 1) % count,
        });
    }

    /// 装修程度选择器切换到上一个选项
    pub fn cycle_furnishing_prev(&mut self) {
        let count = Furnishing::all().len();
        self.furnishing_index = Some(match self.furnishing_index {
            None | Some(0) => count - 1,
            Some(index) => index - 1,
        });
    }

    /// 是否有请求在途
    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    /// 清除上一次的结果与错误（每次提交前调用）
    pub fn clear_outcome(&mut self) {
        self.result = None;
        self.error = None;
    }

    /// 按当前表单内容组装一次请求负载
    ///
    /// 数字字段不做任何解析或校验，原始字符串直接进入负载；
    /// 未触碰的选择器产生空字符串。
    pub fn form(&self) -> FeatureForm {
        FeatureForm {
            area: self.area.clone(),
            bedrooms: self.bedrooms.clone(),
            bathrooms: self.bathrooms.clone(),
            floor: self.floor.clone(),
            city: self
                .city()
                .map(|city| city.name().to_string())
                .unwrap_or_default(),
            furnishing: self
                .furnishing()
                .map(|furnishing| furnishing.name().to_string())
                .unwrap_or_default(),
        }
    }
}

impl Default for PredictorState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== predictor state tests ====================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = PredictorState::new();
        let form = state.form();
        assert_eq!(form, FeatureForm::default());
        assert_eq!(state.focus, AREA_FOCUS);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut state = PredictorState::new();
        for _ in 0..FOCUS_POSITIONS {
            state.focus_next();
        }
        assert_eq!(state.focus, AREA_FOCUS);

        state.focus_prev();
        assert_eq!(state.focus, SUBMIT_FOCUS);
    }

    #[test]
    fn test_focused_text_field_tracks_focus() {
        let mut state = PredictorState::new();
        state.focus = BEDROOMS_FOCUS;
        state.focused_text_field_mut().unwrap().push('3');
        assert_eq!(state.bedrooms, "3");
        assert_eq!(state.area, "");

        state.focus = CITY_FOCUS;
        assert!(state.focused_text_field_mut().is_none());
    }

    #[test]
    fn test_untouched_selectors_submit_empty_strings() {
        let mut state = PredictorState::new();
        state.area = "1200".to_string();
        let form = state.form();
        assert_eq!(form.city, "");
        assert_eq!(form.furnishing, "");
    }

    #[test]
    fn test_city_cycle_wraps() {
        let mut state = PredictorState::new();
        state.cycle_city_prev();
        assert_eq!(state.city(), Some(City::Kolkata));

        state.cycle_city_next();
        assert_eq!(state.city(), Some(City::Delhi));

        let count = City::all().len();
        for _ in 0..count {
            state.cycle_city_next();
        }
        assert_eq!(state.city(), Some(City::Delhi));
    }

    #[test]
    fn test_furnishing_cycle_starts_at_first_option() {
        let mut state = PredictorState::new();
        state.cycle_furnishing_next();
        assert_eq!(state.furnishing(), Some(Furnishing::Furnished));

        state.cycle_furnishing_prev();
        state.cycle_furnishing_prev();
        assert_eq!(state.furnishing(), Some(Furnishing::SemiFurnished));
    }

    #[test]
    fn test_form_preserves_raw_numeric_strings() {
        let mut state = PredictorState::new();
        state.area = "12.5".to_string();
        state.floor = "0004".to_string();
        let form = state.form();
        assert_eq!(form.area, "12.5");
        assert_eq!(form.floor, "0004");
    }
}
