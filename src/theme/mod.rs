//! Theme for the storefront desktop shell.

mod styles;

pub use styles::GLOBAL_STYLES;
