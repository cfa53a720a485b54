//! Corkboard events calendar - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `corkboard::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    // Re-export core and service modules at the component level
    pub use corkboard_core::*;
    pub use corkboard_service::*;

    // Re-export the store crate with the app's depot handler alongside
    pub mod store {
        pub use corkboard_app::store_handler::StoreHandler;
        pub use corkboard_store::*;
    }

    pub mod feed {
        pub use corkboard_feed::*;
    }

    // Re-export config from both core and app
    pub mod config {
        pub use corkboard_app::config::ConfigHandler;
        pub use corkboard_core::config::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use corkboard_app::*;

    pub mod api {
        pub use corkboard_app::app::api::*;
    }
}
