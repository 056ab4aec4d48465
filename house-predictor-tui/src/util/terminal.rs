//! 终端初始化和清理

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端：原始模式 + 备用屏幕，并隐藏光标
///
/// 表单的"光标"由 view 层自己画（`▎`），终端光标一直藏着。
pub fn init_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// 恢复终端到启动前的状态
///
/// 退出路径上必须调用，否则 shell 会留在原始模式里。
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    Ok(())
}
