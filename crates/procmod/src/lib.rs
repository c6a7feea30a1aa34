//! Native process-management module for an embedded scripting host.
//!
//! Exposes a small synchronous function table (spawn, terminate, enumerate,
//! find, focus/unfocus window, liveness check) to embedded scripts. Each
//! operation is a thin wrapper over one OS call; the only cross-call state
//! is the set of pids the module itself launched, which is terminated when
//! the module is unloaded.

mod factory;
mod module;
mod value;

pub use factory::{NativeAdapter, PlatformAdapterFactory};
pub use module::{Operation, ProcessModule, FUNCTION_TABLE, PROCESS_NAMESPACE};
pub use value::HostValue;

// Re-export core types
pub use procmod_core::{
    AdapterFactory, FacadeError, HostRealm, LaunchRequest, ModuleConfig, PlatformAdapter,
    ProcessFacade, ProcessId, StackPlacement, TrackedProcesses, WindowHandle,
};
