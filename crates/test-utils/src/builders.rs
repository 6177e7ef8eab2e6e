#![allow(dead_code)]

use procplanner::config::{ConfigFile, RawConfigFile};
use procplanner::process::Process;

/// Builder for `Process` to simplify test setup.
pub struct ProcessBuilder {
    pid: u32,
    pc: i64,
    ax: i64,
    bx: i64,
    cx: i64,
    quantum: i64,
    instructions: Vec<String>,
}

impl ProcessBuilder {
    pub fn new(pid: u32) -> Self {
        Self {
            pid,
            pc: 0,
            ax: 0,
            bx: 0,
            cx: 0,
            quantum: 3,
            instructions: Vec::new(),
        }
    }

    pub fn ax(mut self, value: i64) -> Self {
        self.ax = value;
        self
    }

    pub fn bx(mut self, value: i64) -> Self {
        self.bx = value;
        self
    }

    pub fn cx(mut self, value: i64) -> Self {
        self.cx = value;
        self
    }

    pub fn pc(mut self, value: i64) -> Self {
        self.pc = value;
        self
    }

    pub fn quantum(mut self, value: i64) -> Self {
        self.quantum = value;
        self
    }

    pub fn instr(mut self, text: &str) -> Self {
        self.instructions.push(text.to_string());
        self
    }

    pub fn instrs(mut self, texts: &[&str]) -> Self {
        self.instructions.extend(texts.iter().map(|t| t.to_string()));
        self
    }

    pub fn build(self) -> Process {
        let mut process = Process::new(self.pid, self.instructions);
        process.pc = self.pc;
        process.ax = self.ax;
        process.bx = self.bx;
        process.cx = self.cx;
        process.quantum = self.quantum;
        process
    }
}

/// Builder for `ConfigFile`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn repeated_jump_threshold(mut self, value: u32) -> Self {
        self.config.simulation.repeated_jump_threshold = value;
        self
    }

    pub fn step_limit(mut self, value: u64) -> Self {
        self.config.simulation.step_limit = Some(value);
        self
    }

    pub fn max_processes(mut self, value: usize) -> Self {
        self.config.loader.max_processes = value;
        self
    }

    pub fn max_instructions(mut self, value: usize) -> Self {
        self.config.loader.max_instructions = value;
        self
    }

    pub fn default_quantum(mut self, value: i64) -> Self {
        self.config.loader.default_quantum = value;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
