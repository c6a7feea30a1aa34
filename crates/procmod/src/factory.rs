use procmod_core::AdapterFactory;

/// Platform-independent factory that selects the appropriate adapter at
/// compile time: the Win32-backed adapter on Windows, the inert adapter
/// everywhere else.
pub struct PlatformAdapterFactory;

impl AdapterFactory for PlatformAdapterFactory {
    #[cfg(windows)]
    type Adapter = procmod_windows::WindowsAdapter;

    #[cfg(not(windows))]
    type Adapter = procmod_unix::InertAdapter;

    fn create_adapter() -> Self::Adapter {
        #[cfg(windows)]
        return procmod_windows::WindowsAdapterFactory::create_adapter();

        #[cfg(not(windows))]
        return procmod_unix::InertAdapterFactory::create_adapter();
    }

    fn platform_name() -> &'static str {
        #[cfg(windows)]
        return procmod_windows::WindowsAdapterFactory::platform_name();

        #[cfg(not(windows))]
        return procmod_unix::InertAdapterFactory::platform_name();
    }
}

/// Adapter type compiled into this build.
pub type NativeAdapter = <PlatformAdapterFactory as AdapterFactory>::Adapter;
