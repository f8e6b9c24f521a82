//! 终端反馈实现
//!
//! 终端没有触觉反馈，冲击事件写入日志，可选地在 Continue 时响铃。

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use profile_setup_core::{FeedbackSink, HapticStyle};

/// BEL 控制字符
const BELL: &[u8] = b"\x07";

/// 基于终端的反馈实现
#[derive(Debug)]
pub struct TerminalFeedback<W: Write = Stdout> {
    bell: bool,
    out: RefCell<W>,
}

impl TerminalFeedback {
    /// 响铃写到标准输出
    pub fn new(bell: bool) -> Self {
        Self::with_writer(bell, io::stdout())
    }
}

impl<W: Write> TerminalFeedback<W> {
    /// 使用指定的输出
    pub fn with_writer(bell: bool, out: W) -> Self {
        Self {
            bell,
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> FeedbackSink for TerminalFeedback<W> {
    fn impact(&self, style: HapticStyle) {
        log::debug!("impact feedback: {style:?}");

        // 只有 Continue（中等冲击）响铃
        if self.bell && style == HapticStyle::Medium {
            let mut out = self.out.borrow_mut();
            if let Err(e) = out.write_all(BELL).and_then(|()| out.flush()) {
                log::warn!("Failed to ring terminal bell: {e}");
            }
        }
    }
}
