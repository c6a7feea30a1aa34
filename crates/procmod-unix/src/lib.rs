//! Inert process adapter for platforms without native process-management
//! support.

mod inert_adapter;

pub use inert_adapter::InertAdapter;

use procmod_core::AdapterFactory;

/// Factory for the inert adapter.
pub struct InertAdapterFactory;

impl AdapterFactory for InertAdapterFactory {
    type Adapter = InertAdapter;

    fn create_adapter() -> InertAdapter {
        InertAdapter::new()
    }

    fn platform_name() -> &'static str {
        "unsupported"
    }
}
