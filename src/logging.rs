//! Logging abstraction.
//!
//! Crate-internal macros that work across targets:
//! - `defmt` feature: forwards to defmt
//! - Host unit tests: prints to stdout
//! - Otherwise: no-op (arguments are still type-checked)
//!
//! Arguments must implement both `core::fmt::Display` and `defmt::Format`,
//! and format strings stick to plain `{}` placeholders.

macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "defmt"), feature = "std", test))]
        ::std::println!("[INFO] {}", ::std::format!($($arg)*));

        #[cfg(not(any(feature = "defmt", all(feature = "std", test))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "defmt"), feature = "std", test))]
        ::std::println!("[WARN] {}", ::std::format!($($arg)*));

        #[cfg(not(any(feature = "defmt", all(feature = "std", test))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "defmt"), feature = "std", test))]
        ::std::eprintln!("[ERROR] {}", ::std::format!($($arg)*));

        #[cfg(not(any(feature = "defmt", all(feature = "std", test))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "defmt"), feature = "std", test))]
        ::std::println!("[DEBUG] {}", ::std::format!($($arg)*));

        #[cfg(not(any(feature = "defmt", all(feature = "std", test))))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}
