// src/process/loader.rs

//! Process-definition file loader.
//!
//! Format (one header line per process, followed by its instructions):
//!
//! ```text
//! # pid pc ax bx cx quantum [status] [@instruction-file]
//! 1 0 2 3 1 3 Ready
//! ADD AX, BX
//! INC AX
//! 2 0 0 0 0 2 Ready @programs/p2.asm
//! ```
//!
//! - A line whose first character is an ASCII digit starts a new process.
//!   Indented lines never do, even when they begin with a digit after the
//!   leading whitespace; they are read as instructions.
//! - Numeric header fields after `pid` are optional and positional; missing
//!   registers and `pc` default to 0, a missing quantum to the configured
//!   default. A negative `pc` is rejected.
//! - Duplicate pids are rejected among the processes that are kept; records
//!   past `max_processes` are dropped before that check.
//! - `@path` names an instruction file, resolved relative to the directory
//!   of the definition file. Its lines come before any inline instructions.
//! - Blank lines and `#` comments are ignored everywhere.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::model::LoaderSection;
use crate::errors::{PlannerError, Result};
use crate::fs::FileSystem;
use crate::process::record::{DEFAULT_QUANTUM, Process};
use crate::types::ProcessStatus;

/// Limits and defaults applied while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    pub max_processes: usize,
    pub max_instructions: usize,
    pub default_quantum: i64,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_processes: 10,
            max_instructions: 20,
            default_quantum: DEFAULT_QUANTUM,
        }
    }
}

impl From<&LoaderSection> for LoaderOptions {
    fn from(section: &LoaderSection) -> Self {
        Self {
            max_processes: section.max_processes,
            max_instructions: section.max_instructions,
            default_quantum: section.default_quantum,
        }
    }
}

/// Read and parse a process-definition file.
pub fn load_processes(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    options: &LoaderOptions,
) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let processes = parse_processes(fs, &contents, base_dir, options)?;
    debug!(path = ?path, count = processes.len(), "loaded process definitions");
    Ok(processes)
}

/// Parse process definitions from already-read text.
///
/// `base_dir` is used to resolve `@path` instruction-file references.
pub fn parse_processes(
    fs: &dyn FileSystem,
    contents: &str,
    base_dir: &Path,
    options: &LoaderOptions,
) -> Result<Vec<Process>> {
    let mut processes = Vec::new();
    let mut seen_pids = HashSet::new();
    let mut current: Option<PendingProcess> = None;
    // Set once `max_processes` is reached; later records are dropped.
    let mut dropping = false;

    for (idx, raw) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if raw.starts_with(|c: char| c.is_ascii_digit()) {
            let header = parse_header(line, line_no, options.default_quantum)?;

            if let Some(pending) = current.take() {
                processes.push(pending.finish(options));
            }

            if processes.len() >= options.max_processes {
                warn!(
                    pid = header.pid,
                    line = line_no,
                    max_processes = options.max_processes,
                    "process limit reached; dropping process definition"
                );
                dropping = true;
                continue;
            }

            if !seen_pids.insert(header.pid) {
                return Err(PlannerError::DuplicatePid {
                    pid: header.pid,
                    line: line_no,
                });
            }

            dropping = false;
            let mut pending = PendingProcess::new(header);
            if let Some(source) = pending.header.source.clone() {
                pending.instructions = read_instruction_file(fs, &base_dir.join(source));
            }
            current = Some(pending);
            continue;
        }

        match current.as_mut() {
            Some(pending) => pending.instructions.push(line.to_string()),
            None if dropping => {}
            None => warn!(line = line_no, text = %line, "instruction before any process header; ignoring"),
        }
    }

    if let Some(pending) = current.take() {
        processes.push(pending.finish(options));
    }

    Ok(processes)
}

/// Parsed header line.
#[derive(Debug, Clone)]
struct Header {
    pid: u32,
    pc: i64,
    ax: i64,
    bx: i64,
    cx: i64,
    quantum: i64,
    source: Option<PathBuf>,
}

const NUMERIC_FIELDS: [&str; 5] = ["pc", "ax", "bx", "cx", "quantum"];

fn parse_header(line: &str, line_no: usize, default_quantum: i64) -> Result<Header> {
    let mut tokens = line.split_whitespace().peekable();

    let pid_token = tokens.next().unwrap_or_default();
    let pid = pid_token.parse::<u32>().map_err(|_| PlannerError::ParseError {
        line: line_no,
        message: format!("invalid pid {pid_token:?}"),
    })?;

    // pc, ax, bx, cx, quantum
    let mut values = [0, 0, 0, 0, default_quantum];
    for (slot, field) in values.iter_mut().zip(NUMERIC_FIELDS) {
        let Some(token) = tokens.next_if(|t| looks_numeric(t)) else {
            break;
        };
        let invalid = || PlannerError::ParseError {
            line: line_no,
            message: format!("invalid value {token:?} for {field}"),
        };
        *slot = token.parse::<i64>().map_err(|_| invalid())?;
        if field == "pc" && *slot < 0 {
            return Err(invalid());
        }
    }

    let mut source = None;
    for token in tokens {
        if let Some(path) = token.strip_prefix('@') {
            if path.is_empty() {
                return Err(PlannerError::ParseError {
                    line: line_no,
                    message: "empty instruction file reference".to_string(),
                });
            }
            source = Some(PathBuf::from(path));
            continue;
        }

        let status = ProcessStatus::from_str(token).map_err(|message| PlannerError::ParseError {
            line: line_no,
            message,
        })?;
        if status != ProcessStatus::Ready {
            warn!(pid, line = line_no, %status, "initial status ignored; process loaded as Ready");
        }
    }

    let [pc, ax, bx, cx, quantum] = values;
    Ok(Header {
        pid,
        pc,
        ax,
        bx,
        cx,
        quantum,
        source,
    })
}

fn looks_numeric(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+')
}

/// Read an instruction file. A missing or unreadable file yields no
/// instructions; the process is still loaded.
fn read_instruction_file(fs: &dyn FileSystem, path: &Path) -> Vec<String> {
    if !fs.is_file(path) {
        warn!(path = ?path, "instruction file not found; process has no instructions");
        return Vec::new();
    }

    match fs.read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect(),
        Err(err) => {
            warn!(path = ?path, error = %err, "failed to read instruction file; process has no instructions");
            Vec::new()
        }
    }
}

#[derive(Debug)]
struct PendingProcess {
    header: Header,
    instructions: Vec<String>,
}

impl PendingProcess {
    fn new(header: Header) -> Self {
        Self {
            header,
            instructions: Vec::new(),
        }
    }

    fn finish(mut self, options: &LoaderOptions) -> Process {
        if self.instructions.len() > options.max_instructions {
            warn!(
                pid = self.header.pid,
                count = self.instructions.len(),
                max_instructions = options.max_instructions,
                "too many instructions; truncating"
            );
            self.instructions.truncate(options.max_instructions);
        }

        let header = self.header;
        let mut process = Process::new(header.pid, self.instructions);
        process.pc = header.pc;
        process.ax = header.ax;
        process.bx = header.bx;
        process.cx = header.cx;
        process.quantum = header.quantum;
        process
    }
}
