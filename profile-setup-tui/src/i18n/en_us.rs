//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, DetailsTexts, HintTexts, KeyNames, SetupTexts, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Profile Setup",
        quit: "Quit",
        back: "Back",
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
            next_field: "Next field",
            submit: "Submit",
            done: "Done",
            edit: "Edit",
            verify: "Verify",
            continue_: "Continue",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    setup: SetupTexts {
        title: "Profile Setup",
        subtitle: "Complete your profile to continue",
        progress_label: "Profile Completion",
        name_label: "Name",
        name_placeholder: "Enter your name",
        age_label: "Age",
        age_placeholder: "Enter your age",
        verification_title: "Verification Status",
        verified: "Verified user",
        not_verified: "Not verified",
        verify_button: "Verify",
        revoke_button: "Revoke",
        continue_button: "Continue",
    },

    details: DetailsTexts {
        title: "Details",
        heading: "Profile Details",
        name_prefix: "Name: ",
        age_prefix: "Age: ",
        age_not_provided: "Age not provided",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        not_eligible: "Complete more of your profile to continue",
        already_navigated: "Profile already submitted",
    },
};
