use std::fmt;
use std::str::FromStr;

/// Name of one of the three simulated registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Ax,
    Bx,
    Cx,
}

impl Register {
    pub fn as_str(&self) -> &'static str {
        match self {
            Register::Ax => "AX",
            Register::Bx => "BX",
            Register::Cx => "CX",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Register names are case-sensitive: only `AX`, `BX` and `CX` are accepted.
impl FromStr for Register {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AX" => Ok(Register::Ax),
            "BX" => Ok(Register::Bx),
            "CX" => Ok(Register::Cx),
            other => Err(format!("unknown register: {other}")),
        }
    }
}

/// Lifecycle status of a simulated process.
///
/// - `Ready`: waiting for its next scheduling visit.
/// - `Executing`: currently being stepped by the scheduler. At most one
///   process is in this state at any time.
/// - `Finished`: terminal; never visited again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessStatus {
    #[default]
    Ready,
    Executing,
    Finished,
}

impl ProcessStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, ProcessStatus::Finished)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Ready => "Ready",
            ProcessStatus::Executing => "Executing",
            ProcessStatus::Finished => "Finished",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Ready" => Ok(ProcessStatus::Ready),
            "Executing" => Ok(ProcessStatus::Executing),
            "Finished" => Ok(ProcessStatus::Finished),
            other => Err(format!(
                "invalid status: {other} (expected \"Ready\", \"Executing\" or \"Finished\")"
            )),
        }
    }
}
