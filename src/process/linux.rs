/*!
 * Host Process Table
 * Resolves ids against a procfs mount (`/proc/<pid>/stat`)
 */

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

use super::traits::ProcessTable;
use super::types::{PidHandle, PidKind, TaskRecord};
use crate::core::limits::{task_state, DEFAULT_PROC_ROOT};
use crate::core::types::{HostPid, QueryPid, StateCode};

/// Fields of `/proc/<pid>/stat` the inspector needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcStat {
    pub pid: HostPid,
    pub comm: String,
    pub state: char,
    pub pgrp: HostPid,
    pub session: HostPid,
}

/// Parse the leading fields of a `/proc/<pid>/stat` line
///
/// The command name may itself contain spaces and parentheses, so it spans
/// from the first `(` to the last `)`.
pub fn parse_proc_stat(content: &str) -> Option<ProcStat> {
    let open = content.find('(')?;
    let close = content.rfind(')')?;
    if close < open {
        return None;
    }

    let pid = content[..open].trim().parse().ok()?;
    let comm = content[open + 1..close].to_string();

    let mut rest = content[close + 1..].split_whitespace();
    let mut state_field = rest.next()?.chars();
    let state = state_field.next()?;
    if state_field.next().is_some() {
        return None;
    }
    let _ppid: HostPid = rest.next()?.parse().ok()?;
    let pgrp = rest.next()?.parse().ok()?;
    let session = rest.next()?.parse().ok()?;

    Some(ProcStat {
        pid,
        comm,
        state,
        pgrp,
        session,
    })
}

/// Map a procfs state letter to the host's run-state bits
pub fn state_code(letter: char) -> Option<StateCode> {
    let code = match letter {
        'R' => task_state::TASK_RUNNING,
        'S' => task_state::TASK_INTERRUPTIBLE,
        'D' => task_state::TASK_UNINTERRUPTIBLE,
        'T' => task_state::TASK_STOPPED,
        't' => task_state::TASK_TRACED,
        'Z' | 'X' | 'x' => task_state::TASK_DEAD,
        'P' => task_state::TASK_PARKED,
        'I' => task_state::TASK_IDLE,
        _ => return None,
    };
    Some(code)
}

/// Process table backed by a procfs directory
#[derive(Debug, Clone)]
pub struct LinuxProcTable {
    root: PathBuf,
}

impl LinuxProcTable {
    /// Table over the host's `/proc`
    pub fn new() -> Self {
        Self::with_root(DEFAULT_PROC_ROOT)
    }

    /// Table over an arbitrary procfs-shaped directory
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_stat(&self, nr: HostPid) -> Option<ProcStat> {
        let path = self.root.join(nr.to_string()).join("stat");
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                // Task exited between resolve and read
                trace!(path = %path.display(), error = %e, "stat unavailable");
                return None;
            }
        };
        let stat = parse_proc_stat(&content);
        if stat.is_none() {
            warn!(path = %path.display(), "Malformed stat line");
        }
        stat
    }
}

impl Default for LinuxProcTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable for LinuxProcTable {
    fn resolve(&self, nr: QueryPid) -> Option<PidHandle> {
        let nr = HostPid::try_from(nr).ok()?;
        self.root
            .join(nr.to_string())
            .is_dir()
            .then(|| PidHandle::new(nr))
    }

    fn task_of(&self, handle: &PidHandle, kind: PidKind) -> Option<TaskRecord> {
        let stat = self.read_stat(handle.nr())?;
        let leads = match kind {
            PidKind::Pid | PidKind::Tgid => stat.pid == handle.nr(),
            PidKind::Pgid => stat.pgrp == handle.nr(),
            PidKind::Sid => stat.session == handle.nr(),
        };
        if !leads {
            return None;
        }

        let state = match state_code(stat.state) {
            Some(code) => code,
            None => {
                warn!(pid = stat.pid, state = %stat.state, "Unknown task state letter");
                return None;
            }
        };
        Some(TaskRecord::new(stat.comm.as_str(), stat.pid, state))
    }

    fn name(&self) -> &str {
        "procfs"
    }
}
