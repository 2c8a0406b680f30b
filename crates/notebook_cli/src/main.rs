//! Interactive terminal shell for the notebook.
//!
//! # Responsibility
//! - Translate prompt commands into `notebook_core` service calls.
//! - Keep list/selection state shell-local and re-render after mutations.
//!
//! # Invariants
//! - Input is validated before service calls; the store re-validates.
//! - The shell never touches the backing file or repository internals.

use log::error;
use notebook_core::{
    core_version, default_log_level, init_logging, FileNotebookRepository, NotebookService,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const NOTES_FILE_NAME: &str = "notebook.json";
const LOG_DIR_NAME: &str = "notebook-logs";

/// Shell-local UI state: the title listing as last rendered.
///
/// `view`/`delete` indices resolve against this snapshot, never against
/// store internals.
#[derive(Debug, Default)]
struct ShellState {
    titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Add,
    View(usize),
    Delete(usize),
    Help,
    Quit,
    Unknown,
}

fn main() -> ExitCode {
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("notebook: cannot determine working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    // A broken log setup should not block note taking.
    let log_dir = cwd.join(LOG_DIR_NAME);
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("notebook: logging disabled: {err}");
    }

    let notes_path = cwd.join(NOTES_FILE_NAME);
    let repo = match FileNotebookRepository::open(&notes_path) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("notebook: cannot open {}: {err}", notes_path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut service = NotebookService::new(repo);
    let mut state = ShellState::default();

    println!("notebook {} ({})", core_version(), notes_path.display());
    println!("type `help` for commands");
    render_list(&mut state, &service);

    loop {
        let Some(line) = read_line("> ") else {
            break;
        };

        match parse_command(&line) {
            Command::List => render_list(&mut state, &service),
            Command::Add => handle_add(&mut state, &mut service),
            Command::View(index) => handle_view(&state, &service, index),
            Command::Delete(index) => handle_delete(&mut state, &mut service, index),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown => {
                if !line.trim().is_empty() {
                    println!("unknown command; type `help` for commands");
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let Some(word) = parts.next() else {
        return Command::Unknown;
    };

    match (word, parts.next(), parts.next()) {
        ("list", None, _) => Command::List,
        ("add", None, _) => Command::Add,
        ("view", Some(arg), None) => parse_index(arg).map_or(Command::Unknown, Command::View),
        ("delete", Some(arg), None) => parse_index(arg).map_or(Command::Unknown, Command::Delete),
        ("help", None, _) => Command::Help,
        ("quit" | "exit", None, _) => Command::Quit,
        _ => Command::Unknown,
    }
}

fn parse_index(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok().filter(|index| *index > 0)
}

fn print_help() {
    println!("commands:");
    println!("  list        show all notes");
    println!("  add         add a note (prompts for title and content)");
    println!("  view <n>    show note <n> from the last listing");
    println!("  delete <n>  delete note <n> from the last listing");
    println!("  quit        exit");
}

fn render_list(state: &mut ShellState, service: &NotebookService<FileNotebookRepository>) {
    match service.list_notes() {
        Ok(listing) => {
            state.titles = listing
                .items
                .iter()
                .map(|item| item.title.clone())
                .collect();
            if listing.items.is_empty() {
                println!("no notes yet; `add` creates one");
                return;
            }
            for (position, item) in listing.items.iter().enumerate() {
                println!("{:>3}) {} | {}", position + 1, item.title, item.preview);
            }
        }
        Err(err) => {
            error!("event=shell_command module=shell status=error command=list error={err}");
            println!("error: {err}");
        }
    }
}

fn handle_add(state: &mut ShellState, service: &mut NotebookService<FileNotebookRepository>) {
    let Some(title) = read_line("title: ") else {
        return;
    };
    if title.trim().is_empty() {
        println!("error: note title cannot be empty");
        return;
    }

    println!("content (finish with an empty line):");
    let mut lines = Vec::new();
    loop {
        match read_line("") {
            Some(line) if !line.trim().is_empty() => lines.push(line),
            _ => break,
        }
    }
    let content = lines.join("\n");
    if content.is_empty() {
        println!("error: note content cannot be empty");
        return;
    }

    match service.add_note(title, content) {
        Ok(record) => {
            println!("note added: {}", record.title);
            render_list(state, service);
        }
        Err(err) => {
            error!("event=shell_command module=shell status=error command=add error={err}");
            println!("error: {err}");
        }
    }
}

fn handle_view(
    state: &ShellState,
    service: &NotebookService<FileNotebookRepository>,
    index: usize,
) {
    let Some(title) = resolve_index(state, index) else {
        println!("no such entry; run `list` first");
        return;
    };

    match service.get_note(title) {
        Ok(Some(record)) => {
            println!("# {}", record.title);
            println!();
            println!("{}", record.content);
        }
        Ok(None) => println!("note not found: {title}"),
        Err(err) => {
            error!("event=shell_command module=shell status=error command=view error={err}");
            println!("error: {err}");
        }
    }
}

fn handle_delete(
    state: &mut ShellState,
    service: &mut NotebookService<FileNotebookRepository>,
    index: usize,
) {
    let Some(title) = resolve_index(state, index).map(String::from) else {
        println!("no such entry; run `list` first");
        return;
    };

    let Some(answer) = read_line(&format!("delete \"{title}\"? [y/N] ")) else {
        return;
    };
    if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        println!("kept");
        return;
    }

    match service.delete_note(&title) {
        Ok(true) => {
            println!("note deleted: {title}");
            render_list(state, service);
        }
        Ok(false) => println!("note not found: {title}"),
        Err(err) => {
            error!("event=shell_command module=shell status=error command=delete error={err}");
            println!("error: {err}");
        }
    }
}

fn resolve_index(state: &ShellState, index: usize) -> Option<&str> {
    state.titles.get(index - 1).map(String::as_str)
}

/// Prompts and reads one line. Returns `None` on EOF.
fn read_line(prompt: &str) -> Option<String> {
    if !prompt.is_empty() {
        print!("{prompt}");
        let _ = io::stdout().flush();
    }

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
    }
}
