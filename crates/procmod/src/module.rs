use crate::factory::{NativeAdapter, PlatformAdapterFactory};
use crate::value::HostValue;
use procmod_core::{
    AdapterFactory, FacadeError, HostRealm, LaunchRequest, ModuleConfig, PlatformAdapter,
    ProcessFacade, ProcessId,
};
use tracing::{debug, info};

/// Name of the global namespace table the function table is registered
/// under on the host's global scope.
pub const PROCESS_NAMESPACE: &str = "Process";

/// Host-visible operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    Terminate,
    IsRunning,
    FindPids,
    IsHostChild,
    HostPid,
    TrackedPids,
    BringToFront,
    BringToBack,
}

/// Script-facing function table, names exactly as embedded scripts call
/// them.
pub const FUNCTION_TABLE: &[(&str, Operation)] = &[
    ("Start", Operation::Start),
    ("Terminate", Operation::Terminate),
    ("IsRunning", Operation::IsRunning),
    ("FindPIDs", Operation::FindPids),
    ("IsFromGmod", Operation::IsHostChild),
    ("GetGmodPID", Operation::HostPid),
    ("GetRunningPIDs", Operation::TrackedPids),
    ("BringToFront", Operation::BringToFront),
    ("BringToBack", Operation::BringToBack),
];

/// The loaded module: the facade plus the configuration it was opened with.
///
/// Lifecycle mirrors the host's hooks: [`open`](Self::open) at module load,
/// [`close`](Self::close) at unload.
#[derive(Debug)]
pub struct ProcessModule<A: PlatformAdapter> {
    facade: ProcessFacade<A>,
}

impl ProcessModule<NativeAdapter> {
    /// Module init hook. The sole fatal error is a structural precondition
    /// violation: loading into a host realm the configuration does not
    /// permit. Everything else the module ever reports is a sentinel value.
    pub fn open(config: ModuleConfig, realm: HostRealm) -> Result<Self, FacadeError> {
        config.validate().map_err(FacadeError::Other)?;
        if !config.permits(realm) {
            return Err(FacadeError::UnsupportedHostContext(realm));
        }

        info!(
            platform = PlatformAdapterFactory::platform_name(),
            %realm,
            "opening process module"
        );
        let adapter = PlatformAdapterFactory::create_adapter();
        Ok(Self::with_adapter(adapter, config))
    }
}

impl<A: PlatformAdapter> ProcessModule<A> {
    /// Assemble a module around a specific adapter, bypassing platform
    /// selection. This is the seam test fakes plug into.
    pub fn with_adapter(adapter: A, config: ModuleConfig) -> Self {
        Self {
            facade: ProcessFacade::new(adapter, config),
        }
    }

    pub fn facade(&self) -> &ProcessFacade<A> {
        &self.facade
    }

    /// Module teardown hook: terminate everything the facade launched.
    pub fn close(self) {
        self.facade.teardown();
    }

    /// Dispatch one host call by its script-facing name. `None` for a name
    /// outside the function table.
    pub fn dispatch_named(&self, name: &str, args: &[HostValue]) -> Option<Vec<HostValue>> {
        let (_, operation) = FUNCTION_TABLE.iter().find(|(entry, _)| *entry == name)?;
        Some(self.dispatch(*operation, args))
    }

    /// Synchronous dispatch of one host call; the returned values are what
    /// the host pushes back to the script. Expected failures (bad pid, bad
    /// path, missing process, unsupported platform) become the designated
    /// sentinel results, never a host-level error.
    pub fn dispatch(&self, operation: Operation, args: &[HostValue]) -> Vec<HostValue> {
        match operation {
            Operation::Start => self.dispatch_start(args),
            Operation::Terminate => vec![self.dispatch_terminate(args).into()],
            Operation::IsRunning => {
                let running = arg_pid(args, 0)
                    .map(|pid| self.facade.is_running(pid))
                    .unwrap_or(false);
                vec![running.into()]
            }
            Operation::FindPids => vec![self.dispatch_find_pids(args)],
            Operation::IsHostChild => {
                let from_host = arg_pid(args, 0)
                    .map(|pid| self.facade.is_host_child(pid))
                    .unwrap_or(false);
                vec![from_host.into()]
            }
            Operation::HostPid => vec![self.facade.host_pid().0.into()],
            Operation::TrackedPids => vec![self.dispatch_tracked()],
            Operation::BringToFront => {
                let raised = arg_pid(args, 0)
                    .map(|pid| self.facade.bring_to_front(pid))
                    .unwrap_or(false);
                vec![raised.into()]
            }
            Operation::BringToBack => {
                let lowered = arg_pid(args, 0)
                    .map(|pid| self.facade.bring_to_back(pid))
                    .unwrap_or(false);
                vec![lowered.into()]
            }
        }
    }

    // Start(path, args?, workingDirectory?) -> success, pid
    fn dispatch_start(&self, args: &[HostValue]) -> Vec<HostValue> {
        let Some(path) = args.first().and_then(HostValue::as_str) else {
            return vec![false.into(), 0u32.into()];
        };

        let mut request = LaunchRequest {
            path: path.to_string(),
            args: String::new(),
            working_directory: None,
        };
        if let Some(params) = args.get(1).and_then(HostValue::as_str) {
            request.args = params.to_string();
        }
        if let Some(dir) = args.get(2).and_then(HostValue::as_str) {
            request.working_directory = Some(dir.into());
        }

        match self.facade.start(&request) {
            Ok(pid) => vec![true.into(), pid.0.into()],
            Err(err) => {
                // A failed launch is a common, expected outcome for scripts
                // (missing file, unassociated extension), not an error.
                debug!(path = %request.path, error = %err, "launch failed");
                vec![
                    false.into(),
                    HostValue::Number(f64::from(err.os_code().unwrap_or(0))),
                ]
            }
        }
    }

    // Terminate(pid, exitCode?) -> success
    fn dispatch_terminate(&self, args: &[HostValue]) -> bool {
        let Some(pid) = arg_pid(args, 0) else {
            return false;
        };
        let exit_code = args
            .get(1)
            .and_then(HostValue::as_number)
            .map(|code| code as u32);
        self.facade.terminate(pid, exit_code)
    }

    // FindPIDs(name) -> 1-based sequence table of pids
    fn dispatch_find_pids(&self, args: &[HostValue]) -> HostValue {
        let Some(name) = args.first().and_then(HostValue::as_str) else {
            return HostValue::Table(Vec::new());
        };

        HostValue::Table(
            self.facade
                .find_pids(name)
                .into_iter()
                .enumerate()
                .map(|(i, pid)| (((i + 1) as u32).into(), pid.0.into()))
                .collect(),
        )
    }

    // GetRunningPIDs() -> table of executable name -> pid, tracked only
    fn dispatch_tracked(&self) -> HostValue {
        HostValue::Table(
            self.facade
                .tracked_running()
                .into_iter()
                .map(|(name, pid)| (name.into(), pid.0.into()))
                .collect(),
        )
    }
}

fn arg_pid(args: &[HostValue], index: usize) -> Option<ProcessId> {
    args.get(index)
        .and_then(HostValue::as_number)
        .map(|raw| ProcessId(raw as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_table_is_complete_and_unique() {
        let expected = [
            "Start",
            "Terminate",
            "IsRunning",
            "FindPIDs",
            "IsFromGmod",
            "GetGmodPID",
            "GetRunningPIDs",
            "BringToFront",
            "BringToBack",
        ];
        assert_eq!(FUNCTION_TABLE.len(), expected.len());
        for name in expected {
            assert_eq!(
                FUNCTION_TABLE.iter().filter(|(entry, _)| *entry == name).count(),
                1,
                "missing or duplicated table entry: {name}"
            );
        }
        assert_eq!(PROCESS_NAMESPACE, "Process");
    }

    #[test]
    fn arg_pid_coercion() {
        let args = vec![HostValue::Number(1234.0), HostValue::Str("x".into())];
        assert_eq!(arg_pid(&args, 0), Some(ProcessId(1234)));
        assert_eq!(arg_pid(&args, 1), None);
        assert_eq!(arg_pid(&args, 2), None);
    }
}
