// src/report.rs

//! Plain-text output written to stdout: the dry-run listing and the final
//! state table.

use crate::process::Process;
use crate::scheduler::{Visit, VisitOutcome};

/// Render the loaded processes without running anything.
pub fn render_dry_run(processes: &[Process]) -> String {
    let mut lines = vec![
        "procplanner dry-run".to_string(),
        format!("processes ({}):", processes.len()),
    ];

    for p in processes {
        lines.push(format!(
            "  - pid {}: pc={} ax={} bx={} cx={} quantum={}",
            p.pid, p.pc, p.ax, p.bx, p.cx, p.quantum
        ));
        for (idx, (text, decoded)) in p.instructions().iter().zip(p.program()).enumerate() {
            lines.push(match decoded {
                Ok(_) => format!("      [{idx}] {text}"),
                Err(err) => format!("      [{idx}] {text}    ! {err}"),
            });
        }
    }

    join_lines(lines)
}

/// Render the final per-process state after a run.
pub fn render_summary(processes: &[Process], visits: &[Visit]) -> String {
    let mut lines = vec![format!(
        "{:>5} {:>9} {:>5} {:>8} {:>8} {:>8} {:>6} {:>6}  {}",
        "pid", "status", "pc", "ax", "bx", "cx", "steps", "visits", "note"
    )];

    for p in processes {
        let own: Vec<&Visit> = visits.iter().filter(|v| v.pid == p.pid).collect();
        let note = match own.last().map(|v| v.outcome) {
            Some(VisitOutcome::ForcedTermination(reason)) => format!("terminated: {reason}"),
            Some(VisitOutcome::NoProgress) => "no progress (quantum <= 0)".to_string(),
            _ => String::new(),
        };

        lines.push(format!(
            "{:>5} {:>9} {:>5} {:>8} {:>8} {:>8} {:>6} {:>6}  {}",
            p.pid,
            p.status.as_str(),
            p.pc,
            p.ax,
            p.bx,
            p.cx,
            p.steps_executed,
            own.len(),
            note
        ));
    }

    join_lines(lines)
}

/// One line per entry, each newline-terminated.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
