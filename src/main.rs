/*!
 * Proc PID Inspector - Main Entry Point
 *
 * Registers the pid file against the host's /proc, writes a target PID
 * through it and prints the report read back.
 *
 * Usage: procpid [PID] [--json]
 */

use anyhow::{bail, Context};
use std::io::{Read, Seek, SeekFrom, Write};
use std::sync::Arc;
use tracing::info;

use procpid_kernel::{
    init_tracing, Credentials, LinuxProcTable, ModuleConfig, OpenFlags, PidModule, ProcRegistry,
};

fn main() -> anyhow::Result<()> {
    let config = ModuleConfig::from_env();
    init_tracing(config.trace_json);

    let mut target: Option<String> = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ if target.is_none() => target = Some(arg),
            _ => bail!("unexpected argument: {}", arg),
        }
    }

    let caller = Credentials::current();
    let target = target.unwrap_or_else(|| caller.pid.to_string());

    let registry = ProcRegistry::new();
    let table = Arc::new(LinuxProcTable::new());
    let module = PidModule::init(&registry, &config, table)?;
    info!(uid = caller.uid, pid = caller.pid, "Pid module loaded");

    let mut file = registry
        .open(&config.node_name, OpenFlags::read_write(), caller)
        .with_context(|| format!("opening /proc/{}", config.node_name))?;

    file.write_all(format!("{}\n", target).as_bytes())
        .with_context(|| format!("writing target {:?}", target))?;

    if json {
        let report = module.file().read(&caller)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        file.seek(SeekFrom::Start(0))?;
        let mut report = String::new();
        file.read_to_string(&mut report)?;
        print!("{}", report);
    }

    drop(file);
    module.exit()?;
    Ok(())
}
