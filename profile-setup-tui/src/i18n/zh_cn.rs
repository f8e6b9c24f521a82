//! 中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, DetailsTexts, HintTexts, KeyNames, SetupTexts, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "资料设置",
        quit: "退出",
        back: "返回",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab_arrows: "Tab/↑↓",
        },
        actions: ActionTexts {
            next_field: "下一项",
            submit: "提交",
            done: "完成",
            edit: "编辑",
            verify: "认证",
            continue_: "继续",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    setup: SetupTexts {
        title: "资料设置",
        subtitle: "完善资料后即可继续",
        progress_label: "资料完成度",
        name_label: "姓名",
        name_placeholder: "请输入姓名",
        age_label: "年龄",
        age_placeholder: "请输入年龄",
        verification_title: "认证状态",
        verified: "已认证用户",
        not_verified: "未认证",
        verify_button: "认证",
        revoke_button: "撤销",
        continue_button: "继续",
    },

    details: DetailsTexts {
        title: "详情",
        heading: "资料详情",
        name_prefix: "姓名：",
        age_prefix: "年龄：",
        age_not_provided: "未提供年龄",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        not_eligible: "资料完成度不足，请继续完善后再继续",
        already_navigated: "资料已提交",
    },
};
