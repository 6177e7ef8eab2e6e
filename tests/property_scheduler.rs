// tests/property_scheduler.rs

use proptest::prelude::*;

use procplanner::process::Process;
use procplanner::scheduler::{Scheduler, SchedulerPolicy, VisitOutcome};
use procplanner::sink::NullSink;

fn instruction_strategy(len: usize) -> impl Strategy<Value = String> {
    prop_oneof![
        Just("NOP".to_string()),
        prop::sample::select(vec!["AX", "BX", "CX"]).prop_map(|r| format!("INC {r}")),
        (
            prop::sample::select(vec!["ADD", "SUB", "MUL"]),
            prop::sample::select(vec!["AX", "BX", "CX"]),
            -5i64..5,
        )
            .prop_map(|(op, r, v)| format!("{op} {r}, {v}")),
        // Occasionally out of range, to exercise the jump error path.
        (0..len as i64 + 2).prop_map(|t| format!("JMP {t}")),
        Just("BOGUS".to_string()),
    ]
}

fn process_strategy(pid: u32) -> impl Strategy<Value = Process> {
    (0usize..6).prop_flat_map(move |len| {
        (
            proptest::collection::vec(instruction_strategy(len.max(1)), len),
            -1i64..4,
        )
            .prop_map(move |(instructions, quantum)| {
                let mut p = Process::new(pid, instructions);
                p.quantum = quantum;
                p
            })
    })
}

fn table_strategy() -> impl Strategy<Value = Vec<Process>> {
    (1u32..5).prop_flat_map(|n| {
        (0..n)
            .map(process_strategy)
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn every_process_finishes_and_visits_respect_quantum(
        table in table_strategy(),
    ) {
        let policy = SchedulerPolicy { repeated_jump_threshold: 2, step_limit: Some(200) };
        let mut sched = Scheduler::new(table.clone(), policy);
        let visits = sched.run_with_visits(&mut NullSink);

        prop_assert!(sched.all_finished());
        prop_assert_eq!(sched.executing_count(), 0);

        for visit in &visits {
            let quantum = table.iter().find(|p| p.pid == visit.pid).unwrap().quantum;
            prop_assert!(visit.executed as i64 <= quantum.max(0));
        }

        // Each pid's last visit is terminal, and only its last.
        for p in &table {
            let own: Vec<_> = visits.iter().filter(|v| v.pid == p.pid).collect();
            prop_assert!(!own.is_empty());
            let (last, rest) = own.split_last().unwrap();
            prop_assert!(last.outcome.is_terminal());
            prop_assert!(rest.iter().all(|v| v.outcome == VisitOutcome::Preempted));
        }

        // Within a pass, visits follow load order.
        for pair in visits.windows(2) {
            if pair[0].pass == pair[1].pass {
                prop_assert!(pair[0].pid < pair[1].pid);
            }
        }
    }
}
