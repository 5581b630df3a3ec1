//! REPL 입력 처리기.
//! 명령 이름을 입력하는 동안 실시간으로 추천과 사용법 힌트를 표시한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

struct Suggestion {
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    /// 명령 이름 뒤에 따라와야 하는 최소 토큰 수.
    required_args: usize,
}

const SUGGESTIONS: [Suggestion; 7] = [
    Suggestion {
        name: "add_classroom",
        description: "create a classroom",
        usage: "add_classroom <className>",
        required_args: 1,
    },
    Suggestion {
        name: "add_student",
        description: "enroll a student in a classroom",
        usage: "add_student <studentId> <className>",
        required_args: 2,
    },
    Suggestion {
        name: "schedule_assignment",
        description: "schedule an assignment",
        usage: "schedule_assignment <className> <details...>",
        required_args: 2,
    },
    Suggestion {
        name: "submit_assignment",
        description: "record a student submission",
        usage: "submit_assignment <studentId> <className> <details...>",
        required_args: 3,
    },
    Suggestion {
        name: "config",
        description: "show effective merged config",
        usage: "config [edit]",
        required_args: 0,
    },
    Suggestion {
        name: "help",
        description: "list commands",
        usage: "help",
        required_args: 0,
    },
    Suggestion {
        name: "exit",
        description: "leave the shell",
        usage: "exit",
        required_args: 0,
    },
];

// 입력 영역 기본 높이: 상단 구분선 + 입력줄 + 하단 구분선
const PANEL_BASE_HEIGHT: usize = 3;
const PANEL_BOTTOM_PADDING: usize = 0;

/// REPL 한 줄 입력을 읽는다.
/// - TTY + 지원 터미널: 실시간 추천 + 방향키 선택
/// - non-TTY/미지원 터미널: 일반 라인 입력 (파이프 입력이 이 경로를 탄다)
pub fn read_repl_input(prompt: &str) -> Result<Option<String>> {
    if !supports_interactive_input() {
        return read_line_fallback(prompt);
    }

    match read_line_interactive(prompt) {
        Ok(v) => Ok(v),
        Err(_) => read_line_fallback(prompt),
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(prompt: &str) -> Result<Option<String>> {
    if io::stdout().is_terminal() {
        print!("{prompt}");
        io::stdout().flush()?;
    }

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(trim_newline(line)))
}

fn read_line_interactive(prompt: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let mut input = String::new();
    let mut cursor_chars = 0usize;
    let mut selected_idx = 0usize;

    loop {
        let suggestions = match_suggestions(&input);
        if suggestions.is_empty() {
            selected_idx = 0;
        } else if selected_idx >= suggestions.len() {
            selected_idx = suggestions.len() - 1;
        }

        render_frame(
            &mut stdout,
            prompt,
            &input,
            cursor_chars,
            &suggestions,
            selected_idx,
        )?;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars() {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        // 인자가 필요한 명령은 즉시 제출하지 않고 인자 입력 상태로 확장한다.
                        if let Some(expanded) = expand_input(&input, &suggestions, selected_idx) {
                            input = expanded;
                            cursor_chars = input.chars().count();
                            continue;
                        }
                        let final_input = finalize_input(&input, &suggestions, selected_idx);
                        clear_panel_for_output(&mut stdout)?;
                        return Ok(Some(final_input));
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Up => {
                        if !suggestions.is_empty() {
                            selected_idx = selected_idx.saturating_sub(1);
                        }
                    }
                    KeyCode::Down => {
                        if !suggestions.is_empty() {
                            selected_idx = (selected_idx + 1).min(suggestions.len() - 1);
                        }
                    }
                    KeyCode::Tab => {
                        if !suggestions.is_empty() && !input.contains(' ') {
                            input = suggestions[selected_idx].name.to_string();
                            cursor_chars = input.chars().count();
                        } else if let Some(completed) = complete_subcommand(&input) {
                            input = completed;
                            cursor_chars = input.chars().count();
                        }
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        clear_panel_for_output(&mut stdout)?;
                        return Ok(None);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        clear_panel_for_output(&mut stdout)?;
                        return Ok(Some("exit".to_string()));
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn match_suggestions(input: &str) -> Vec<&'static Suggestion> {
    if input.is_empty() || input.contains(char::is_whitespace) {
        return Vec::new();
    }

    let q = input.to_ascii_lowercase();
    SUGGESTIONS.iter().filter(|s| s.name.starts_with(&q)).collect()
}

fn finalize_input(input: &str, suggestions: &[&Suggestion], selected_idx: usize) -> String {
    if !input.contains(' ') && !suggestions.is_empty() {
        return suggestions[selected_idx].name.to_string();
    }
    input.to_string()
}

/// 인자가 필요한 명령을 단독 입력 시 공백을 추가해 확장한다.
fn expand_input(input: &str, suggestions: &[&Suggestion], selected_idx: usize) -> Option<String> {
    if input.contains(' ') {
        return None;
    }

    if let Some(entry) = SUGGESTIONS.iter().find(|s| s.name == input)
        && entry.required_args > 0
    {
        return Some(format!("{input} "));
    }

    if !input.is_empty()
        && !suggestions.is_empty()
        && suggestions[selected_idx].required_args > 0
    {
        return Some(format!("{} ", suggestions[selected_idx].name));
    }

    None
}

/// `config` 서브커맨드 탭 완성을 시도한다.
fn complete_subcommand(input: &str) -> Option<String> {
    let after = input.trim_start().strip_prefix("config")?;
    if !after.starts_with(' ') {
        return None;
    }

    let rest = after.trim();
    if "edit".starts_with(rest) && rest != "edit" {
        return Some("config edit".to_string());
    }

    None
}

/// 입력 중인 명령의 사용법/준비 상태 힌트를 반환한다.
fn realtime_hint(input: &str) -> Option<(Color, String)> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return None;
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest),
        None => (trimmed, ""),
    };

    let Some(entry) = SUGGESTIONS.iter().find(|s| s.name == head) else {
        // 첫 토큰이 확정된 뒤에만 오류로 표시한다.
        if trimmed.contains(char::is_whitespace) {
            return Some((Color::Red, format!("error: unknown command `{head}`")));
        }
        return None;
    };

    if entry.required_args == 0 {
        return config_realtime_hint(head, rest);
    }

    let provided = rest.split_whitespace().count();
    if provided >= entry.required_args {
        Some((Color::Green, "ready: press Enter to run".to_string()))
    } else {
        Some((Color::Yellow, format!("hint: {}", entry.usage)))
    }
}

fn config_realtime_hint(head: &str, rest: &str) -> Option<(Color, String)> {
    if head != "config" {
        return None;
    }

    let rest = rest.trim();
    if rest.is_empty() || ("edit".starts_with(rest) && rest != "edit") {
        return Some((Color::Yellow, "hint: config [edit]".to_string()));
    }
    if rest == "edit" {
        return Some((Color::Green, "ready: press Enter to open $EDITOR".to_string()));
    }

    Some((Color::Red, format!("error: unknown subcommand `{rest}`")))
}

fn render_frame(
    stdout: &mut io::Stdout,
    prompt: &str,
    input: &str,
    cursor_chars: usize,
    suggestions: &[&Suggestion],
    selected_idx: usize,
) -> Result<()> {
    let (w, h) = terminal::size().unwrap_or((120, 40));
    // 패널 배경의 우측 끊김을 막기 위해 터미널 전체 폭을 사용한다.
    let width = (w as usize).max(20);
    let total_rows = h as usize;

    let hint = realtime_hint(input);
    let hint_rows = usize::from(hint.is_some());
    let suggestion_rows = suggestions.len();
    let panel_height = PANEL_BASE_HEIGHT + hint_rows + suggestion_rows;
    let panel_top = total_rows.saturating_sub(panel_height + PANEL_BOTTOM_PADDING);

    let input_header_row = panel_top;
    let input_row = panel_top + 1;
    let panel_divider_row = panel_top + 2;
    let extra_start = panel_divider_row + 1;

    // 이전 프레임 잔상을 지우기 위해 가능한 최대 영역을 클리어한다.
    let max_panel_height = PANEL_BASE_HEIGHT + 1 + SUGGESTIONS.len();
    let clear_top = total_rows.saturating_sub(max_panel_height + PANEL_BOTTOM_PADDING);
    for row in clear_top..total_rows {
        clear_line_at(stdout, row as u16)?;
    }

    let divider = "─".repeat(width);
    draw_panel_line_at(stdout, input_header_row as u16, &divider, width)?;

    if input.is_empty() {
        let placeholder =
            render_prompt_line(prompt, "type a command · ↑↓ select · Tab autocomplete", width);
        draw_panel_line_at_with_fg(stdout, input_row as u16, &placeholder, width, Color::Grey)?;
    } else {
        draw_panel_line_at(
            stdout,
            input_row as u16,
            &render_prompt_line(prompt, input, width),
            width,
        )?;
    }

    draw_panel_line_at(stdout, panel_divider_row as u16, &divider, width)?;

    // 하단 구분선 아래: 배경 없이 힌트와 추천을 표시한다.
    let mut next_row = extra_start;

    if let Some((color, line)) = hint {
        draw_line_at_with_fg(
            stdout,
            next_row as u16,
            &clip_line_display(&line, width),
            width,
            color,
        )?;
        next_row += 1;
    }

    for (idx, item) in suggestions.iter().enumerate() {
        let marker = if idx == selected_idx { ">" } else { " " };
        draw_line_at_with_fg(
            stdout,
            next_row as u16,
            &clip_line_display(
                &format!(
                    "{marker} {:<20} - {} | usage: {}",
                    item.name, item.description, item.usage
                ),
                width,
            ),
            width,
            Color::White,
        )?;
        next_row += 1;
    }

    let prompt_cursor_col = prompt_cursor_col(prompt, input, cursor_chars, width) as u16;
    execute!(
        stdout,
        cursor::MoveTo(prompt_cursor_col, input_row as u16),
        cursor::Show
    )?;
    stdout.flush()?;
    Ok(())
}

fn render_prompt_line(prompt: &str, input: &str, width: usize) -> String {
    let prefix_width = display_width(prompt);
    let available = width.saturating_sub(prefix_width);
    let shown = tail_with_ellipsis_display(input, available);
    clip_line_display(&format!("{prompt}{shown}"), width)
}

fn prompt_cursor_col(prompt: &str, input: &str, cursor_chars: usize, width: usize) -> usize {
    let prefix_width = display_width(prompt);
    let input_width = display_width(input);
    let before_cursor: String = input.chars().take(cursor_chars).collect();
    let before_cursor_width = display_width(&before_cursor);
    let available = width.saturating_sub(prefix_width);

    if input_width <= available {
        return (prefix_width + before_cursor_width).min(width.saturating_sub(1));
    }

    // 오버플로우 상태에서는 tail 표시 정책상 커서를 입력 끝쪽으로 정렬한다.
    (prefix_width + display_width(&tail_with_ellipsis_display(input, available)))
        .min(width.saturating_sub(1))
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = display_width(text);
    if text_width <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

fn clip_line_display(line: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let width = display_width(line);
    if width <= max_width {
        return line.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0usize;
    let cap = max_width - 3;

    for ch in line.chars() {
        let cw = char_display_width(ch);
        if used + cw > cap {
            break;
        }
        out.push(ch);
        used += cw;
    }

    out.push_str("...");
    out
}

fn pad_line_display(line: &str, width: usize) -> String {
    let mut out = line.to_string();
    let used = display_width(line);
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

// 라인을 기본 배경으로 클리어만 한다.
fn clear_line_at(stdout: &mut io::Stdout, row: u16) -> Result<()> {
    execute!(
        stdout,
        cursor::MoveTo(0, row),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    Ok(())
}

// 배경색이 있는 패널 라인 (입력 영역용).
fn draw_panel_line_at(stdout: &mut io::Stdout, row: u16, text: &str, width: usize) -> Result<()> {
    draw_panel_line_at_with_fg(stdout, row, text, width, Color::White)
}

fn draw_panel_line_at_with_fg(
    stdout: &mut io::Stdout,
    row: u16,
    text: &str,
    width: usize,
    fg: Color,
) -> Result<()> {
    execute!(
        stdout,
        cursor::MoveTo(0, row),
        SetBackgroundColor(Color::DarkGrey),
        SetForegroundColor(fg),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    write!(
        stdout,
        "{}",
        pad_line_display(&clip_line_display(text, width), width)
    )?;
    execute!(stdout, ResetColor)?;
    Ok(())
}

// 배경색 없는 일반 라인 (힌트/추천 영역용).
fn draw_line_at_with_fg(
    stdout: &mut io::Stdout,
    row: u16,
    text: &str,
    width: usize,
    fg: Color,
) -> Result<()> {
    execute!(
        stdout,
        cursor::MoveTo(0, row),
        terminal::Clear(ClearType::CurrentLine),
        SetForegroundColor(fg)
    )?;
    write!(
        stdout,
        "{}",
        pad_line_display(&clip_line_display(text, width), width)
    )?;
    execute!(stdout, ResetColor)?;
    Ok(())
}

fn clear_panel_for_output(stdout: &mut io::Stdout) -> Result<()> {
    // 명령 상태 라인은 항상 상단에서 시작하도록 화면을 정리한다.
    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(ClearType::All),
        ResetColor,
        cursor::Show
    )?;
    stdout.flush()?;
    Ok(())
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        enter_input_session(stdout)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = leave_input_session(&mut stdout);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

// 브래킷 페이스트를 켜야 터미널이 Paste 이벤트를 전달한다.
fn enter_input_session(out: &mut impl io::Write) -> Result<()> {
    execute!(out, event::EnableBracketedPaste, cursor::Show)?;
    Ok(())
}

fn leave_input_session(out: &mut impl io::Write) -> Result<()> {
    execute!(out, event::DisableBracketedPaste, cursor::Show, ResetColor)?;
    Ok(())
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_filter_by_prefix() {
        let matched = match_suggestions("add_");
        let names: Vec<&str> = matched.iter().map(|s| s.name).collect();
        assert_eq!(names, ["add_classroom", "add_student"]);
    }

    #[test]
    fn no_suggestions_once_arguments_begin() {
        assert!(match_suggestions("add_classroom Math").is_empty());
        assert!(match_suggestions("").is_empty());
    }

    #[test]
    fn expand_adds_trailing_space_for_commands_with_args() {
        let suggestions = match_suggestions("add_classroom");
        assert_eq!(
            expand_input("add_classroom", &suggestions, 0),
            Some("add_classroom ".to_string())
        );

        let suggestions = match_suggestions("exit");
        assert_eq!(expand_input("exit", &suggestions, 0), None);
    }

    #[test]
    fn hint_turns_ready_when_required_tokens_present() {
        let (color, _) = realtime_hint("add_student S1").unwrap();
        assert_eq!(color, Color::Yellow);

        let (color, _) = realtime_hint("add_student S1 Math").unwrap();
        assert_eq!(color, Color::Green);
    }

    #[test]
    fn hint_flags_unknown_commands_after_first_token() {
        assert!(realtime_hint("add_cl").is_none());

        let (color, text) = realtime_hint("drop_classroom Math").unwrap();
        assert_eq!(color, Color::Red);
        assert!(text.contains("drop_classroom"));
    }

    #[test]
    fn input_session_toggles_bracketed_paste() {
        let mut enter_buf: Vec<u8> = Vec::new();
        enter_input_session(&mut enter_buf).unwrap();
        assert!(String::from_utf8(enter_buf).unwrap().contains("\x1b[?2004h"));

        let mut leave_buf: Vec<u8> = Vec::new();
        leave_input_session(&mut leave_buf).unwrap();
        assert!(String::from_utf8(leave_buf).unwrap().contains("\x1b[?2004l"));
    }

    #[test]
    fn configured_prompt_prefixes_interactive_input_line() {
        let line = render_prompt_line("classpilot> ", "add_classroom Math", 80);
        assert!(line.starts_with("classpilot> add_classroom Math"));
    }

    #[test]
    fn cursor_column_accounts_for_prompt_width() {
        let col = prompt_cursor_col("classpilot> ", "abc", 3, 80);
        assert_eq!(col, display_width("classpilot> ") + 3);
    }

    #[test]
    fn config_edit_tab_completion() {
        assert_eq!(
            complete_subcommand("config e"),
            Some("config edit".to_string())
        );
        assert_eq!(complete_subcommand("config edit"), None);
        assert_eq!(complete_subcommand("configx"), None);
    }
}
