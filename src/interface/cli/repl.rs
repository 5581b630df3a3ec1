//! `classpilot` 대화형 쉘(REPL) 인터페이스.
//! 라인 단위 명령을 파싱해 유스케이스로 위임하고 상태 라인을 출력한다.

use std::io::{self, IsTerminal, Write};
use std::process::Command as ProcessCommand;

use anyhow::{Context, Result};

use crate::domain::command::{Command, SyntaxError};
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl_input::read_repl_input;

/// 라인 처리 후 루프 진행 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// 대화형 입력으로 명령을 처리한다. 입력 스트림이 끝나면 종료한다.
pub fn run_repl(composition: &AppComposition) -> Result<()> {
    let config = composition.load_config().unwrap_or_default();
    if config.banner_enabled() {
        print_welcome();
    }
    io::stdout().flush()?;

    loop {
        let Some(raw_input) = read_repl_input(config.prompt())? else {
            println!();
            break;
        };

        if repl_turn(composition, &raw_input) == LineOutcome::Exit {
            break;
        }
    }

    Ok(())
}

/// REPL 한 턴을 처리한다.
/// 실행 오류는 쉘을 끝내지 않고 stderr로 보고한 뒤 다음 입력을 기다린다.
pub fn repl_turn(composition: &AppComposition, raw_input: &str) -> LineOutcome {
    match apply_line(composition, raw_input) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err:#}");
            LineOutcome::Continue
        }
    }
}

/// 한 줄짜리 명령을 파싱/실행한다. REPL과 스크립트 실행기가 공유한다.
/// 구문 오류와 도메인 조건은 상태 라인으로 보고되며 Err가 되지 않는다.
pub fn apply_line(composition: &AppComposition, raw_input: &str) -> Result<LineOutcome> {
    let input = raw_input.trim();
    if input.is_empty() {
        return Ok(LineOutcome::Continue);
    }

    let reporter = composition.reporter();

    match parse_line(input) {
        Ok(LineCommand::Exit) => return Ok(LineOutcome::Exit),
        Ok(LineCommand::Registry(command)) => execute_command(composition, command)?,
        Ok(LineCommand::InspectConfig) => {
            let json = composition.inspect_config_usecase().execute()?;
            reporter.line(&json);
        }
        Ok(LineCommand::EditConfig) => edit_config(composition)?,
        Ok(LineCommand::Help) => print_help(),
        Ok(LineCommand::Usage(usage)) => reporter.notice(&format!("usage: {usage}")),
        Ok(LineCommand::Unknown(name)) => reporter.line(&format!("Unknown command: {name}")),
        Err(err) => reporter.line(&format!("Error: {err}")),
    }

    Ok(LineOutcome::Continue)
}

/// 파싱이 끝난 REPL 라인.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineCommand {
    Registry(Command),
    InspectConfig,
    EditConfig,
    Help,
    Exit,
    Usage(&'static str),
    Unknown(String),
}

/// 라인을 명령으로 파싱한다.
/// 첫 토큰이 명령 이름, 나머지는 명령별 형태를 따른다.
/// 필수 토큰이 빠지면 `SyntaxError`를 돌려준다.
fn parse_line(input: &str) -> Result<LineCommand, SyntaxError> {
    let Some((head, rest)) = split_token(input) else {
        return Ok(LineCommand::Unknown(String::new()));
    };

    match head {
        "add_classroom" => {
            let (class_name, _) = split_token(rest).ok_or(SyntaxError::ClassNameRequired)?;
            Ok(LineCommand::Registry(Command::AddClassroom {
                class_name: class_name.to_string(),
            }))
        }
        "add_student" => {
            let (student_id, rest) =
                split_token(rest).ok_or(SyntaxError::StudentAndClassRequired)?;
            let (class_name, _) = split_token(rest).ok_or(SyntaxError::StudentAndClassRequired)?;
            Ok(LineCommand::Registry(Command::AddStudent {
                student_id: student_id.to_string(),
                class_name: class_name.to_string(),
            }))
        }
        "schedule_assignment" => {
            let (class_name, details) =
                split_token(rest).ok_or(SyntaxError::ClassAndDetailsRequired)?;
            if details.is_empty() {
                return Err(SyntaxError::ClassAndDetailsRequired);
            }
            Ok(LineCommand::Registry(Command::ScheduleAssignment {
                class_name: class_name.to_string(),
                details: details.to_string(),
            }))
        }
        "submit_assignment" => {
            let (student_id, rest) = split_token(rest).ok_or(SyntaxError::SubmitFieldsRequired)?;
            let (class_name, details) =
                split_token(rest).ok_or(SyntaxError::SubmitFieldsRequired)?;
            if details.is_empty() {
                return Err(SyntaxError::SubmitFieldsRequired);
            }
            Ok(LineCommand::Registry(Command::SubmitAssignment {
                student_id: student_id.to_string(),
                class_name: class_name.to_string(),
                details: details.to_string(),
            }))
        }
        "config" => match rest.trim() {
            "" => Ok(LineCommand::InspectConfig),
            "edit" => Ok(LineCommand::EditConfig),
            _ => Ok(LineCommand::Usage("config [edit]")),
        },
        "help" => Ok(LineCommand::Help),
        "exit" | "quit" => Ok(LineCommand::Exit),
        other => Ok(LineCommand::Unknown(other.to_string())),
    }
}

/// 선두 공백을 무시하고 (첫 토큰, 남은 라인)을 분리한다.
/// 남은 라인도 선두 공백이 제거된 상태로 반환된다.
fn split_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    match input.find(char::is_whitespace) {
        Some(idx) => Some((&input[..idx], input[idx..].trim_start())),
        None => Some((input, "")),
    }
}

fn execute_command(composition: &AppComposition, command: Command) -> Result<()> {
    match command {
        Command::AddClassroom { class_name } => {
            composition.add_classroom_usecase().execute(&class_name)
        }
        Command::AddStudent {
            student_id,
            class_name,
        } => composition
            .enroll_student_usecase()
            .execute(&student_id, &class_name),
        Command::ScheduleAssignment {
            class_name,
            details,
        } => composition
            .schedule_assignment_usecase()
            .execute(&class_name, &details),
        Command::SubmitAssignment {
            student_id,
            class_name,
            details,
        } => composition
            .submit_assignment_usecase()
            .execute(&student_id, &class_name, &details),
    }
}

fn edit_config(composition: &AppComposition) -> Result<()> {
    let path = composition.edit_config_usecase().execute()?;
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    // 에디터가 정상 동작하도록 raw mode를 해제한다.
    let _ = crossterm::terminal::disable_raw_mode();
    let status = ProcessCommand::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("failed to launch editor: {editor}"))?;

    if status.success() {
        println!("config saved: {}", path.display());
    } else {
        eprintln!("editor exited with: {status}");
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  add_classroom <className>");
    println!("  add_student <studentId> <className>");
    println!("  schedule_assignment <className> <assignmentDetails...>");
    println!("  submit_assignment <studentId> <className> <assignmentDetails...>");
    println!("  config [edit]");
    println!("  help");
    println!("  exit");
}

fn print_welcome() {
    let interactive = io::stdout().is_terminal();
    if !interactive {
        return;
    }

    let title = paint("classpilot interactive shell", "1;36");
    let subtitle = paint("virtual classroom registry", "2;37");
    let cmd_classroom = paint("add_classroom <className>", "1;32");
    let cmd_student = paint("add_student <studentId> <className>", "1;32");
    let cmd_schedule = paint("schedule_assignment <className> <details...>", "1;35");
    let cmd_submit = paint("submit_assignment <studentId> <className> <details...>", "1;35");
    let cmd_exit = paint("exit", "1;31");

    println!("+------------------------------------------------------------+");
    println!("| {:<58} |", title);
    println!("| {:<58} |", subtitle);
    println!("+------------------------------------------------------------+");
    println!("| Quick start                                                 |");
    println!("|  1) {:<54} |", cmd_classroom);
    println!("|  2) {:<54} |", cmd_student);
    println!("|  3) {:<54} |", cmd_schedule);
    println!("|  4) {:<54} |", cmd_submit);
    println!("|  5) {:<54} |", cmd_exit);
    println!("+------------------------------------------------------------+");
    println!();
}

fn paint(text: &str, ansi: &str) -> String {
    format!("\x1b[{ansi}m{text}\x1b[0m")
}
